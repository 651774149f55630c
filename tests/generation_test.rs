//! End-to-end generation runs against a mock metadata server

mod common;

use std::fs;
use std::sync::Arc;

use metabind::{
    BackendRegistry, Error, FileSystemOutputService, GenerationDriver, GeneratorConfig,
    HttpMetadataClient, Language,
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn driver(config: GeneratorConfig) -> GenerationDriver {
    let source = Arc::new(HttpMetadataClient::new(&config).unwrap());
    let output = Arc::new(FileSystemOutputService::new(config.dest_dir.clone()));
    GenerationDriver::new(config, source, output)
}

#[tokio::test]
async fn test_python_bindings_end_to_end() {
    let server = MockServer::start().await;
    common::mount_metadata(&server).await;
    let dest = TempDir::new().unwrap();

    let config = GeneratorConfig::new(&server.uri(), dest.path()).unwrap();
    let backend = BackendRegistry::new().get(Language::Python).unwrap();
    let summary = driver(config).run(backend.as_ref()).await.unwrap();

    assert_eq!(summary.language, Language::Python);
    assert_eq!(summary.server_status.len(), 2);
    assert!(summary.translation_table.is_none());
    // Three schemas, one enum, one route table
    assert_eq!(summary.files_written.len(), 5);

    let frame = fs::read_to_string(dest.path().join("schemas/frame_v3.py")).unwrap();
    assert!(frame.contains("class FrameV3:"));
    assert!(frame.contains("    frame_id: \"Optional[FrameKeyV3]\" = None"));
    assert!(frame.contains("    rows: \"Optional[int]\" = None"));
    assert!(frame.contains("    column_names: \"Optional[List[str]]\" = None"));
    assert!(frame.ends_with('\n'));

    let model = fs::read_to_string(dest.path().join("schemas/model_schema_v3.py")).unwrap();
    assert!(model.contains("    lambda_: \"Optional[List[List[float]]]\" = None"));
    assert!(model.contains("    output: \"Optional[Dict[str, float]]\" = None"));

    let category = fs::read_to_string(dest.path().join("enums/model_category.py")).unwrap();
    assert!(category.contains("    Binomial = \"Binomial\""));

    let endpoints = fs::read_to_string(dest.path().join("endpoints.py")).unwrap();
    assert!(endpoints.contains("    \"Rapids\": {"));
    assert!(endpoints.contains("    \"kmeans\","));
}

#[tokio::test]
async fn test_verbose_run_reports_translations() {
    let server = MockServer::start().await;
    common::mount_metadata(&server).await;
    let dest = TempDir::new().unwrap();

    let config = GeneratorConfig::new(&server.uri(), dest.path())
        .unwrap()
        .with_verbose(true);
    let backend = BackendRegistry::new().get(Language::TypeScript).unwrap();
    let summary = driver(config).run(backend.as_ref()).await.unwrap();

    let table = summary.translation_table.expect("verbose runs keep a table");
    assert!(table.contains("Type conversions done:"));
    assert!(table.contains("(Key<Frame>, FrameKeyV3)  =>  FrameKeyV3\n"));
    assert!(table.contains("(Map<string,double>, None)  =>  Record<string, number>\n"));
    assert!(table.contains("(enum, ModelCategory)  =>  ModelCategory\n"));
    assert!(table.find("(Key<Frame>").unwrap() < table.find("(long, None)").unwrap());
}

#[tokio::test]
async fn test_destination_is_cleared_unless_disabled() {
    let dest = TempDir::new().unwrap();
    let stale = dest.path().join("stale/Old.java");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "class Old {}").unwrap();

    let server = MockServer::start().await;
    common::mount_metadata(&server).await;
    let config = GeneratorConfig::new(&server.uri(), dest.path())
        .unwrap()
        .with_clear_dir(false);
    let backend = BackendRegistry::new().get(Language::Java).unwrap();
    driver(config).run(backend.as_ref()).await.unwrap();
    assert!(stale.exists());
    assert!(dest.path().join("water/bindings/schemas/FrameV3.java").exists());

    let server = MockServer::start().await;
    common::mount_metadata(&server).await;
    let config = GeneratorConfig::new(&server.uri(), dest.path()).unwrap();
    driver(config).run(backend.as_ref()).await.unwrap();
    assert!(!dest.path().join("stale").exists());
    assert!(dest.path().exists());
    assert!(dest.path().join("water/bindings/Endpoints.java").exists());
}

#[tokio::test]
async fn test_server_error_aborts_with_its_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/LATEST/About"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::about()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/LATEST/Metadata/schemas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "__meta": {"schema_type": "H2OError"},
            "msg": "Cloud is locked"
        })))
        .mount(&server)
        .await;
    let dest = TempDir::new().unwrap();

    let config = GeneratorConfig::new(&server.uri(), dest.path()).unwrap();
    let backend = BackendRegistry::new().get(Language::CSharp).unwrap();
    let err: Error = driver(config).run(backend.as_ref()).await.unwrap_err();

    assert_eq!(err.exit_code(), 7);
    assert!(err.to_string().contains("Cloud is locked"));
    assert!(fs::read_dir(dest.path()).unwrap().next().is_none());
}

#[tokio::test]
async fn test_malformed_descriptor_aborts_generation() {
    let server = MockServer::start().await;
    let mut schemas = common::schemas();
    schemas["schemas"][0]["fields"][1]["type"] = json!("Map<string,int,long>");
    for (route, body) in [
        ("/LATEST/About", common::about()),
        ("/LATEST/Metadata/endpoints", common::endpoints()),
        ("/LATEST/Metadata/schemas", schemas),
        ("/LATEST/ModelBuilders", common::model_builders()),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
    }
    let dest = TempDir::new().unwrap();

    let config = GeneratorConfig::new(&server.uri(), dest.path()).unwrap();
    let backend = BackendRegistry::new().get(Language::Java).unwrap();
    let err = driver(config).run(backend.as_ref()).await.unwrap_err();
    assert_eq!(err.exit_code(), 12);
}
