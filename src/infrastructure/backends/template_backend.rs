//! Tera-driven backend shared by the bundled languages

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use tera::Tera;
use tracing::debug;

use crate::core::utils::{to_camel_case, to_proper_case, to_snake_case};
use crate::generation::sanitizers::{enum_constant, sanitize_doc};
use crate::generation::{
    Artifact, Backend, GenerationError, Language, MetadataSnapshot, RenderContext,
};
use crate::infrastructure::metadata::{FieldMetadata, Route, SchemaMetadata};
use crate::translation::{TypeRenderer, TypeTranslator};

const SCHEMA_TEMPLATE: &str = "schema";
const ENUM_TEMPLATE: &str = "enum";
const ENDPOINTS_TEMPLATE: &str = "endpoints";

/// Everything that distinguishes one bundled language from another
#[derive(Clone)]
pub struct LanguageProfile {
    pub language: Language,
    pub schema_template: &'static str,
    pub enum_template: &'static str,
    pub endpoints_template: &'static str,
    /// Relative path of the file for a schema, without extension
    pub schema_path: fn(&str) -> String,
    /// Relative path of the file for an enumeration, without extension
    pub enum_path: fn(&str) -> String,
    pub endpoints_path: &'static str,
    /// Field identifier for a server field name
    pub field_name: fn(&str) -> String,
    /// Doc comment lines for sanitized help text
    pub doc: fn(&str) -> String,
    /// Words that cannot be used as field or constant identifiers
    pub reserved: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct FieldContext {
    name: String,
    json_name: String,
    json_literal: String,
    #[serde(rename = "type")]
    type_expr: String,
    descriptor: String,
    doc: String,
    required: bool,
}

#[derive(Debug, Serialize)]
struct Reference {
    name: String,
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct EnumConstant {
    ident: String,
    value: String,
    literal: String,
}

#[derive(Debug, Serialize)]
struct RouteContext {
    name: String,
    method_name: String,
    constant: String,
    method: String,
    url_pattern: String,
    url_literal: String,
    summary: String,
}

#[derive(Debug, Serialize)]
struct GroupContext {
    name: String,
    routes: Vec<RouteContext>,
}

/// A backend whose files are rendered from embedded templates
pub struct TemplateBackend {
    profile: LanguageProfile,
    renderer: Arc<dyn TypeRenderer>,
}

impl TemplateBackend {
    pub fn new(profile: LanguageProfile, renderer: Arc<dyn TypeRenderer>) -> Self {
        Self { profile, renderer }
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn tera(&self) -> Result<Tera, GenerationError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (SCHEMA_TEMPLATE, self.profile.schema_template),
            (ENUM_TEMPLATE, self.profile.enum_template),
            (ENDPOINTS_TEMPLATE, self.profile.endpoints_template),
        ])?;
        Ok(tera)
    }

    fn escape_reserved(&self, ident: String) -> String {
        if self.profile.reserved.contains(&ident.as_str()) {
            format!("{ident}_")
        } else {
            ident
        }
    }

    fn field_identifier(&self, name: &str) -> String {
        self.escape_reserved((self.profile.field_name)(name))
    }

    /// `stem` plus the language's file extension
    fn artifact_path(&self, stem: String) -> String {
        format!("{stem}.{}", self.profile.language.file_extension())
    }

    fn field_context(
        &self,
        field: &FieldMetadata,
        translator: &TypeTranslator,
    ) -> Result<FieldContext, GenerationError> {
        let type_expr =
            translator.translate(&field.type_descriptor, field.schema_name.as_deref())?;
        let help = sanitize_doc(&field.help);
        Ok(FieldContext {
            name: self.field_identifier(&field.name),
            json_name: field.name.clone(),
            json_literal: string_literal(&field.name),
            type_expr,
            descriptor: field.type_descriptor.clone(),
            doc: if help.is_empty() {
                String::new()
            } else {
                (self.profile.doc)(&help)
            },
            required: field.required,
        })
    }

    fn render_schema(
        &self,
        tera: &Tera,
        schema: &SchemaMetadata,
        metadata: &MetadataSnapshot,
        schema_names: &HashSet<&str>,
        translator: &TypeTranslator,
    ) -> Result<Artifact, GenerationError> {
        let fields = schema
            .fields
            .iter()
            .map(|f| self.field_context(f, translator))
            .collect::<Result<Vec<_>, _>>()?;

        let parent = schema_names
            .contains(schema.superclass.as_str())
            .then(|| schema.superclass.clone());

        let mut context = RenderContext::new();
        context.add_variable("name", json!(schema.name));
        context.add_variable("parent", json!(parent));
        context.add_serialized("fields", &fields)?;
        context.add_serialized(
            "references",
            &references(schema, metadata, schema_names),
        )?;

        let content = tera.render(SCHEMA_TEMPLATE, &context.to_tera_context())?;
        Ok(Artifact::new(
            self.artifact_path((self.profile.schema_path)(&schema.name)),
            content.trim_end().to_string(),
        ))
    }

    fn render_enum(
        &self,
        tera: &Tera,
        name: &str,
        values: &BTreeSet<String>,
    ) -> Result<Artifact, GenerationError> {
        let mut names = UniqueNames::default();
        let constants: Vec<EnumConstant> = values
            .iter()
            .map(|value| EnumConstant {
                ident: names.claim(self.escape_reserved(enum_constant(value))),
                value: value.clone(),
                literal: string_literal(value),
            })
            .collect();

        let mut context = RenderContext::new();
        context.add_variable("name", json!(name));
        context.add_serialized("constants", &constants)?;

        let content = tera.render(ENUM_TEMPLATE, &context.to_tera_context())?;
        Ok(Artifact::new(
            self.artifact_path((self.profile.enum_path)(name)),
            content.trim_end().to_string(),
        ))
    }

    fn render_endpoints(
        &self,
        tera: &Tera,
        metadata: &MetadataSnapshot,
    ) -> Result<Artifact, GenerationError> {
        let groups: Vec<GroupContext> = metadata
            .endpoint_groups
            .iter()
            .map(|(name, routes)| GroupContext {
                name: name.clone(),
                routes: route_contexts(routes),
            })
            .collect();

        let mut context = RenderContext::new();
        context.add_serialized("groups", &groups)?;
        context.add_serialized("algorithms", &metadata.algorithms())?;

        let content = tera.render(ENDPOINTS_TEMPLATE, &context.to_tera_context())?;
        Ok(Artifact::new(
            self.artifact_path(self.profile.endpoints_path.to_string()),
            content.trim_end().to_string(),
        ))
    }
}

impl Backend for TemplateBackend {
    fn language(&self) -> Language {
        self.profile.language
    }

    fn renderer(&self) -> Arc<dyn TypeRenderer> {
        Arc::clone(&self.renderer)
    }

    fn generate(
        &self,
        metadata: &MetadataSnapshot,
        translator: &TypeTranslator,
    ) -> Result<Vec<Artifact>, GenerationError> {
        let tera = self.tera()?;
        let schema_names: HashSet<&str> =
            metadata.schemas.iter().map(|s| s.name.as_str()).collect();

        let mut artifacts = Vec::new();
        for schema in &metadata.schemas {
            artifacts.push(self.render_schema(&tera, schema, metadata, &schema_names, translator)?);
        }
        for (name, values) in &metadata.enums {
            artifacts.push(self.render_enum(&tera, name, values)?);
        }
        artifacts.push(self.render_endpoints(&tera, metadata)?);

        debug!(
            language = %self.profile.language,
            artifacts = artifacts.len(),
            "Rendered bindings"
        );
        Ok(artifacts)
    }
}

/// Named types a schema's fields refer to, excluding the schema itself
fn references(
    schema: &SchemaMetadata,
    metadata: &MetadataSnapshot,
    schema_names: &HashSet<&str>,
) -> Vec<Reference> {
    let mut seen = BTreeSet::new();
    if schema_names.contains(schema.superclass.as_str()) {
        seen.insert((schema.superclass.as_str(), "schema"));
    }
    for field in &schema.fields {
        let Some(name) = field.schema_name.as_deref() else {
            continue;
        };
        if name == schema.name {
            continue;
        }
        if metadata.enums.contains_key(name) {
            seen.insert((name, "enum"));
        } else if schema_names.contains(name) {
            seen.insert((name, "schema"));
        }
    }
    seen.into_iter()
        .map(|(name, kind)| Reference {
            name: name.to_string(),
            kind,
        })
        .collect()
}

/// Hands out identifiers, suffixing repeats with their occurrence count
#[derive(Default)]
struct UniqueNames(HashMap<String, usize>);

impl UniqueNames {
    fn claim(&mut self, name: String) -> String {
        let count = self.0.entry(name.clone()).or_insert(0);
        *count += 1;
        if *count > 1 {
            format!("{name}_{count}")
        } else {
            name
        }
    }
}

/// Route contexts with identifiers unique inside their group
fn route_contexts(routes: &[Route]) -> Vec<RouteContext> {
    let mut names = UniqueNames::default();
    routes
        .iter()
        .map(|route| {
            let base = if route.handler_method.is_empty() {
                format!("{}_{}", route.http_method, route.class_name().unwrap_or("route"))
            } else {
                route.handler_method.clone()
            };
            let name = names.claim(to_snake_case(&base));
            RouteContext {
                constant: name.to_uppercase(),
                method: route.http_method.clone(),
                url_pattern: route.url_pattern.clone(),
                url_literal: string_literal(&route.url_pattern),
                summary: sanitize_doc(&route.summary),
                method_name: to_camel_case(&name),
                name: to_proper_case(&name),
            }
        })
        .collect()
}

/// Double-quoted literal valid in every bundled language
fn string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{value}\""))
}
