//! Recursive translation of type descriptors into target-language types

use std::fmt::Write as _;
use std::sync::Arc;

use crate::translation::{
    DefaultRenderer, DescriptorForm, ScalarTypeTable, TranslationError, TranslationRecord,
    TypeRenderer,
};

/// One row of the post-run translation table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub descriptor: String,
    pub schema: Option<String>,
    pub translation: Result<String, TranslationError>,
}

/// Translates server type descriptors using a backend's rendering hooks.
///
/// Built once per generation run and reused for every field. Apart from the
/// optional diagnostics record it holds no mutable state, so translating the
/// same pair twice always yields the same expression.
pub struct TypeTranslator {
    renderer: Arc<dyn TypeRenderer>,
    scalars: ScalarTypeTable,
    record: Option<TranslationRecord>,
}

impl TypeTranslator {
    pub fn new(renderer: Arc<dyn TypeRenderer>) -> Self {
        let scalars = renderer.scalar_types();
        Self {
            renderer,
            scalars,
            record: None,
        }
    }

    /// Translator using [`DefaultRenderer`]
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(DefaultRenderer))
    }

    /// Record every translated pair for [`Self::translation_table`]
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.record = enabled.then(TranslationRecord::new);
        self
    }

    pub fn diagnostics_enabled(&self) -> bool {
        self.record.is_some()
    }

    pub fn scalar_types(&self) -> &ScalarTypeTable {
        &self.scalars
    }

    /// Translate `descriptor`, with `schema` naming the entity for key, enum
    /// and object forms.
    pub fn translate(
        &self,
        descriptor: &str,
        schema: Option<&str>,
    ) -> Result<String, TranslationError> {
        let translated = self.resolve(descriptor, schema, true)?;
        tracing::trace!(descriptor, schema, translated = %translated, "Translated type");
        Ok(translated)
    }

    fn resolve(
        &self,
        descriptor: &str,
        schema: Option<&str>,
        trace: bool,
    ) -> Result<String, TranslationError> {
        if trace {
            if let Some(record) = &self.record {
                record.record(descriptor, schema);
            }
        }

        let rendered = match DescriptorForm::parse(descriptor)? {
            DescriptorForm::Array2(inner) => self
                .renderer
                .array2(self.resolve(inner, schema, trace)?),
            DescriptorForm::Array(inner) => {
                self.renderer.array(self.resolve(inner, schema, trace)?)
            }
            DescriptorForm::Map { key, value } => {
                let key = self.resolve(key, schema, trace)?;
                let value = self.resolve(value, schema, trace)?;
                self.renderer.map(key, value)
            }
            DescriptorForm::Key(inner) => {
                let schema = require_schema(descriptor, schema)?;
                let inner = self.resolve(inner, Some(schema), trace)?;
                self.renderer.key(inner, schema)
            }
            DescriptorForm::Enum => self
                .renderer
                .enumeration(require_schema(descriptor, schema)?),
            DescriptorForm::Named(name) => match schema {
                None => self.scalars.get(name).unwrap_or(name).to_string(),
                Some(schema) => self.renderer.object(name, schema),
            },
        };
        Ok(rendered)
    }

    /// Every recorded pair, sorted, next to its current translation.
    ///
    /// Empty unless diagnostics are enabled. Building the table does not add
    /// to the record.
    pub fn translation_table(&self) -> Vec<TranslationEntry> {
        let Some(record) = &self.record else {
            return Vec::new();
        };
        record
            .entries()
            .into_iter()
            .map(|(descriptor, schema)| {
                let translation = self.resolve(&descriptor, schema.as_deref(), false);
                TranslationEntry {
                    descriptor,
                    schema,
                    translation,
                }
            })
            .collect()
    }

    /// Human-readable dump of [`Self::translation_table`]
    pub fn render_translation_table(&self) -> String {
        let rule = "-".repeat(80);
        let mut out = format!("\n{rule}\nType conversions done:\n{rule}\n");
        for entry in self.translation_table() {
            let schema = entry.schema.as_deref().unwrap_or("None");
            let translated = match &entry.translation {
                Ok(t) => t.clone(),
                Err(e) => format!("<{e}>"),
            };
            let _ = writeln!(out, "({}, {})  =>  {}", entry.descriptor, schema, translated);
        }
        out
    }
}

impl Default for TypeTranslator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn require_schema<'a>(
    descriptor: &str,
    schema: Option<&'a str>,
) -> Result<&'a str, TranslationError> {
    schema.ok_or_else(|| TranslationError::MissingSchema {
        descriptor: descriptor.to_string(),
    })
}
