//! Port interfaces for the generation domain

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::generation::{Artifact, FileContent, GenerationError, Language, MetadataSnapshot};
use crate::infrastructure::metadata::{
    AboutEntry, EnumMap, MetadataError, Route, SchemaMetadata, collect_enums,
};
use crate::infrastructure::output::OutputError;
use crate::translation::{TypeRenderer, TypeTranslator};

pub const ABOUT_ENDPOINT: &str = "LATEST/About";
pub const ENDPOINTS_ENDPOINT: &str = "LATEST/Metadata/endpoints";
pub const SCHEMAS_ENDPOINT: &str = "LATEST/Metadata/schemas";
pub const MODEL_BUILDERS_ENDPOINT: &str = "LATEST/ModelBuilders";

/// Source of server metadata.
///
/// Implementors provide [`MetadataSource::request`], which must return
/// validated JSON and answer repeated requests for the same endpoint without
/// refetching. Every accessor is built on top of it.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Raw JSON for `endpoint`, relative to the server base URL
    async fn request(&self, endpoint: &str) -> Result<Arc<JsonValue>, MetadataError>;

    /// Server status rows
    async fn about(&self) -> Result<Vec<AboutEntry>, MetadataError> {
        let json = self.request(ABOUT_ENDPOINT).await?;
        extract(&json, "entries", ABOUT_ENDPOINT)
    }

    /// Every REST route the server exposes
    async fn endpoints(&self) -> Result<Vec<Route>, MetadataError> {
        let json = self.request(ENDPOINTS_ENDPOINT).await?;
        extract(&json, "routes", ENDPOINTS_ENDPOINT)
    }

    /// Routes grouped by the class name in their URL pattern
    async fn endpoint_groups(&self) -> Result<BTreeMap<String, Vec<Route>>, MetadataError> {
        let mut groups: BTreeMap<String, Vec<Route>> = BTreeMap::new();
        for route in self.endpoints().await? {
            let class_name = route
                .class_name()
                .ok_or_else(|| {
                    MetadataError::unexpected(
                        ENDPOINTS_ENDPOINT,
                        format!("cannot determine class name in URL {}", route.url_pattern),
                    )
                })?
                .to_string();
            groups.entry(class_name).or_default().push(route);
        }
        Ok(groups)
    }

    async fn schemas(&self) -> Result<Vec<SchemaMetadata>, MetadataError> {
        let json = self.request(SCHEMAS_ENDPOINT).await?;
        extract(&json, "schemas", SCHEMAS_ENDPOINT)
    }

    /// Schemas indexed by name
    async fn schemas_map(&self) -> Result<HashMap<String, SchemaMetadata>, MetadataError> {
        Ok(self
            .schemas()
            .await?
            .into_iter()
            .map(|s| (s.name.clone(), s))
            .collect())
    }

    /// Model builders and their parameters, left opaque
    async fn model_builders(&self) -> Result<JsonValue, MetadataError> {
        let json = self.request(MODEL_BUILDERS_ENDPOINT).await?;
        json.get("model_builders").cloned().ok_or_else(|| {
            MetadataError::unexpected(MODEL_BUILDERS_ENDPOINT, "missing 'model_builders'")
        })
    }

    /// Enumerations gathered from the `enum` fields of every schema
    async fn enums(&self) -> Result<EnumMap, MetadataError> {
        Ok(collect_enums(&self.schemas().await?))
    }

    /// Everything a backend needs, in one snapshot
    async fn snapshot(&self) -> Result<MetadataSnapshot, MetadataError> {
        let schemas = self.schemas().await?;
        Ok(MetadataSnapshot {
            enums: collect_enums(&schemas),
            schemas,
            endpoint_groups: self.endpoint_groups().await?,
            model_builders: self.model_builders().await?,
        })
    }
}

fn extract<T: for<'de> Deserialize<'de>>(
    json: &JsonValue,
    key: &str,
    endpoint: &str,
) -> Result<T, MetadataError> {
    let value = json
        .get(key)
        .ok_or_else(|| MetadataError::unexpected(endpoint, format!("missing '{key}'")))?;
    T::deserialize(value)
        .map_err(|e| MetadataError::unexpected(endpoint, format!("malformed '{key}': {e}")))
}

/// Persists generated text under the destination root
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Create the destination root, removing its prior contents when `clear`
    async fn prepare(&self, clear: bool) -> Result<(), OutputError>;

    /// Write `content` at `relative` and return the absolute path written
    async fn write(&self, relative: &Path, content: &FileContent)
    -> Result<PathBuf, OutputError>;
}

/// A target-language backend
pub trait Backend: Send + Sync {
    fn language(&self) -> Language;

    /// Rendering hooks handed to the run's [`TypeTranslator`]
    fn renderer(&self) -> Arc<dyn TypeRenderer>;

    /// Produce every file for `metadata`, translating types with `translator`
    fn generate(
        &self,
        metadata: &MetadataSnapshot,
        translator: &TypeTranslator,
    ) -> Result<Vec<Artifact>, GenerationError>;
}
