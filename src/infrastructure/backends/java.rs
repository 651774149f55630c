//! Java bindings: POJOs for every schema, enums, and a route table

use std::sync::Arc;

use super::template_backend::{LanguageProfile, TemplateBackend};
use crate::core::utils::wrap;
use crate::generation::Language;
use crate::translation::{ScalarTypeTable, TypeRenderer};

const RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while",
];

/// Java flavour of the type hooks: boxed generics, `String` and `Object`
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaRenderer;

/// Generic arguments must be reference types
fn boxed(ty: String) -> String {
    match ty.as_str() {
        "byte" => "Byte".into(),
        "short" => "Short".into(),
        "int" => "Integer".into(),
        "long" => "Long".into(),
        "float" => "Float".into(),
        "double" => "Double".into(),
        "boolean" => "Boolean".into(),
        _ => ty,
    }
}

impl TypeRenderer for JavaRenderer {
    fn scalar_types(&self) -> ScalarTypeTable {
        ScalarTypeTable::default().with("string", "String")
    }

    fn map(&self, key: String, value: String) -> String {
        format!("Map<{},{}>", boxed(key), boxed(value))
    }
}

pub fn profile() -> LanguageProfile {
    LanguageProfile {
        language: Language::Java,
        schema_template: include_str!("templates/java/schema.java.tera"),
        enum_template: include_str!("templates/java/enum.java.tera"),
        endpoints_template: include_str!("templates/java/endpoints.java.tera"),
        schema_path: |name| format!("water/bindings/schemas/{name}"),
        enum_path: |name| format!("water/bindings/enums/{name}"),
        endpoints_path: "water/bindings/Endpoints",
        field_name: |name| name.to_string(),
        doc: |help| wrap(help, "     * ", true),
        reserved: RESERVED,
    }
}

pub fn backend() -> TemplateBackend {
    TemplateBackend::new(profile(), Arc::new(JavaRenderer))
}
