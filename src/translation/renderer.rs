//! Customization contract for target-language backends
//!
//! A backend implements [`TypeRenderer`], overriding only the hooks whose
//! default rendering does not suit its language. Every hook receives
//! sub-expressions that have already been translated, so a renderer never
//! recurses on its own.

use std::collections::HashMap;
use std::collections::hash_map;

/// Server scalar names that every scalar table is expected to cover
pub const SCALAR_NAMES: [&str; 10] = [
    "byte",
    "short",
    "int",
    "long",
    "float",
    "double",
    "string",
    "boolean",
    "Polymorphic",
    "Object",
];

/// Mapping from server scalar names to target-language type names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarTypeTable {
    entries: HashMap<String, String>,
}

impl ScalarTypeTable {
    /// Table with no entries; every scalar passes through unchanged
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, scalar: impl Into<String>, target: impl Into<String>) -> Self {
        self.insert(scalar, target);
        self
    }

    pub fn insert(&mut self, scalar: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(scalar.into(), target.into());
    }

    pub fn get(&self, scalar: &str) -> Option<&str> {
        self.entries.get(scalar).map(String::as_str)
    }

    pub fn contains(&self, scalar: &str) -> bool {
        self.entries.contains_key(scalar)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.entries.iter()
    }
}

impl Default for ScalarTypeTable {
    /// Identity for the primitives, `Object` for the polymorphic types
    fn default() -> Self {
        SCALAR_NAMES
            .iter()
            .map(|&name| match name {
                "Polymorphic" | "Object" => (name, "Object"),
                _ => (name, name),
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ScalarTypeTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Rendering hooks used by the type translator.
///
/// The defaults append `[]`/`[][]` for arrays, produce `Map<K,V>` for maps and
/// reference every key, enum and object by its schema name.
pub trait TypeRenderer: Send + Sync {
    /// Scalar table, read once when a translator is built
    fn scalar_types(&self) -> ScalarTypeTable {
        ScalarTypeTable::default()
    }

    fn array(&self, item: String) -> String {
        format!("{item}[]")
    }

    fn array2(&self, item: String) -> String {
        format!("{item}[][]")
    }

    fn map(&self, key: String, value: String) -> String {
        format!("Map<{key},{value}>")
    }

    /// A key is referenced by the name of the entity it points at, so the
    /// translated inner type is dropped by default.
    fn key(&self, _inner: String, schema: &str) -> String {
        schema.to_string()
    }

    fn enumeration(&self, schema: &str) -> String {
        schema.to_string()
    }

    fn object(&self, _descriptor: &str, schema: &str) -> String {
        schema.to_string()
    }
}

/// Renderer that keeps every default
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

impl TypeRenderer for DefaultRenderer {}
