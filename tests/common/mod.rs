//! Shared fixtures: a mock server that answers the metadata endpoints

#![allow(dead_code)]

use serde_json::{Value as JsonValue, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn about() -> JsonValue {
    json!({
        "__meta": {"schema_type": "AboutV3"},
        "entries": [
            {"name": "Build project version", "value": "3.46.0.1"},
            {"name": "Cloud name", "value": "test-cloud"}
        ]
    })
}

pub fn endpoints() -> JsonValue {
    json!({
        "__meta": {"schema_type": "MetadataV3"},
        "routes": [
            {"url_pattern": "/3/Frames", "http_method": "GET", "handler_method": "list",
             "summary": "Return all Frames in the H2O distributed K/V store."},
            {"url_pattern": "/3/Frames/{frame_id}", "http_method": "GET", "handler_method": "fetch",
             "summary": "Return the specified Frame."},
            {"url_pattern": "/99/Rapids", "http_method": "POST", "handler_method": "exec",
             "summary": "Execute an Rapids AstRoot."}
        ]
    })
}

pub fn schemas() -> JsonValue {
    json!({
        "__meta": {"schema_type": "MetadataV3"},
        "schemas": [
            {
                "name": "FrameV3",
                "superclass": "Schema",
                "fields": [
                    {"name": "frame_id", "type": "Key<Frame>", "schema_name": "FrameKeyV3",
                     "help": "Frame ID"},
                    {"name": "rows", "type": "long", "schema_name": null, "help": "Number of rows"},
                    {"name": "column_names", "type": "string[]", "schema_name": null}
                ]
            },
            {
                "name": "ModelSchemaV3",
                "superclass": "Schema",
                "fields": [
                    {"name": "model_category", "type": "enum", "schema_name": "ModelCategory",
                     "values": ["Binomial", "Regression", "Unknown"]},
                    {"name": "output", "type": "Map<string,double>", "schema_name": null},
                    {"name": "lambda", "type": "double[][]", "schema_name": null}
                ]
            },
            {
                "name": "FrameKeyV3",
                "superclass": "KeyV3",
                "fields": [{"name": "name", "type": "string", "schema_name": null}]
            }
        ]
    })
}

pub fn model_builders() -> JsonValue {
    json!({
        "__meta": {"schema_type": "ModelBuildersV3"},
        "model_builders": {"gbm": {"algo": "gbm"}, "kmeans": {"algo": "kmeans"}}
    })
}

/// Answer every metadata endpoint exactly once
pub async fn mount_metadata(server: &MockServer) {
    for (route, body) in [
        ("/LATEST/About", about()),
        ("/LATEST/Metadata/endpoints", endpoints()),
        ("/LATEST/Metadata/schemas", schemas()),
        ("/LATEST/ModelBuilders", model_builders()),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }
}
