//! reqwest-backed metadata provider

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::{debug, error};
use url::Url;

use crate::core::GeneratorConfig;
use crate::generation::MetadataSource;
use crate::infrastructure::metadata::{
    ERROR_SCHEMA_TYPE, META_KEY, Meta, MetadataError, ResponseCache,
};

/// Fetches metadata from a running server, memoizing each endpoint
pub struct HttpMetadataClient {
    client: Client,
    base_url: Url,
    cache: ResponseCache,
}

impl HttpMetadataClient {
    pub fn new(config: &GeneratorConfig) -> Result<Self, MetadataError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| MetadataError::Connection {
                base_url: config.base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            cache: ResponseCache::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    fn classify(&self, err: reqwest::Error, url: &Url) -> MetadataError {
        if err.is_timeout() {
            MetadataError::Timeout {
                url: url.to_string(),
            }
        } else if err.is_builder() {
            MetadataError::InvalidUrl {
                base_url: self.base_url.to_string(),
            }
        } else {
            MetadataError::Connection {
                base_url: self.base_url.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl MetadataSource for HttpMetadataClient {
    async fn request(&self, endpoint: &str) -> Result<Arc<JsonValue>, MetadataError> {
        let endpoint = endpoint.strip_prefix('/').unwrap_or(endpoint);
        if let Some(cached) = self.cache.get(endpoint) {
            debug!(endpoint, "Metadata served from cache");
            return Ok(cached);
        }

        let url = self
            .base_url
            .join(endpoint)
            .map_err(|_| MetadataError::InvalidUrl {
                base_url: self.base_url.to_string(),
            })?;
        debug!(url = %url, "Fetching metadata");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| self.classify(e, &url))?;
        let json: JsonValue = match serde_json::from_str(&body) {
            Ok(json) => json,
            Err(e) => {
                error!(url = %url, error = %e, "Response body is not JSON:\n{}", body);
                return Err(MetadataError::InvalidJson {
                    url: url.to_string(),
                    body,
                });
            }
        };

        validate_payload(url.as_str(), &json)?;
        Ok(self.cache.insert(endpoint, json))
    }
}

/// Check for the metadata marker and reject server-side error payloads
pub fn validate_payload(url: &str, json: &JsonValue) -> Result<Meta, MetadataError> {
    let Some(meta) = json
        .get(META_KEY)
        .and_then(|meta| Meta::deserialize(meta).ok())
    else {
        error!(
            url,
            "Unexpected JSON:\n{}",
            serde_json::to_string_pretty(json).unwrap_or_default()
        );
        return Err(MetadataError::unexpected(
            url,
            format!("missing {META_KEY}.schema_type"),
        ));
    };

    if meta.schema_type == ERROR_SCHEMA_TYPE {
        let message = json
            .get("msg")
            .and_then(JsonValue::as_str)
            .unwrap_or("no message")
            .to_string();
        error!(
            url,
            "Server error payload:\n{}",
            serde_json::to_string_pretty(json).unwrap_or_default()
        );
        return Err(MetadataError::Server {
            url: url.to_string(),
            message,
        });
    }
    debug!(url, schema_type = %meta.schema_type, "Payload validated");
    Ok(meta)
}
