//! Metadata payloads returned by the server

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Key every response carries to identify its schema
pub const META_KEY: &str = "__meta";

/// `schema_type` of a server-side error payload
pub const ERROR_SCHEMA_TYPE: &str = "H2OError";

static CLASS_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(?:\d+|LATEST)/(\w+)").expect("class name pattern is valid"));

/// Contents of `__meta`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub schema_type: String,
    #[serde(default)]
    pub schema_name: Option<String>,
    #[serde(default)]
    pub schema_version: Option<i64>,
}

/// One `{name, value}` row of the About endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutEntry {
    pub name: String,
    pub value: String,
}

/// A REST route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub url_pattern: String,
    #[serde(default)]
    pub http_method: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default)]
    pub handler_class: String,
    #[serde(default)]
    pub handler_method: String,
    #[serde(default)]
    pub input_schema: String,
    #[serde(default)]
    pub output_schema: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path_params: Vec<String>,
    #[serde(flatten)]
    pub extra: JsonMap<String, JsonValue>,
}

impl Route {
    /// Class name from a pattern of the form `/{version|LATEST}/{ClassName}/...`
    pub fn class_name(&self) -> Option<&str> {
        CLASS_NAME_PATTERN
            .captures(&self.url_pattern)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

/// A field of a schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub name: String,
    /// Type descriptor in the server grammar
    #[serde(rename = "type")]
    pub type_descriptor: String,
    #[serde(default)]
    pub schema_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub help: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub is_schema: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub direction: String,
    #[serde(default)]
    pub value: JsonValue,
    #[serde(flatten)]
    pub extra: JsonMap<String, JsonValue>,
}

impl FieldMetadata {
    pub fn is_enum(&self) -> bool {
        self.type_descriptor == "enum"
    }
}

/// A named schema with its fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaMetadata {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub superclass: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<FieldMetadata>,
    #[serde(flatten)]
    pub extra: JsonMap<String, JsonValue>,
}

/// Enumerations keyed by name, each with its sorted set of values
pub type EnumMap = BTreeMap<String, BTreeSet<String>>;

/// Union the values of every `enum` field, keyed by the field's schema name
pub fn collect_enums<'a>(schemas: impl IntoIterator<Item = &'a SchemaMetadata>) -> EnumMap {
    let mut enums = EnumMap::new();
    for schema in schemas {
        for field in schema.fields.iter().filter(|f| f.is_enum()) {
            let Some(name) = &field.schema_name else {
                tracing::warn!(
                    schema = %schema.name,
                    field = %field.name,
                    "Enum field without a schema name"
                );
                continue;
            };
            enums
                .entry(name.clone())
                .or_default()
                .extend(field.values.iter().cloned());
        }
    }
    enums
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
