//! C# bindings: property classes, enums, and a route table

use std::sync::Arc;

use super::template_backend::{LanguageProfile, TemplateBackend};
use crate::core::utils::{to_proper_case, wrap};
use crate::generation::Language;
use crate::translation::{ScalarTypeTable, TypeRenderer};

#[derive(Debug, Default, Clone, Copy)]
pub struct CSharpRenderer;

impl TypeRenderer for CSharpRenderer {
    fn scalar_types(&self) -> ScalarTypeTable {
        [
            ("byte", "sbyte"),
            ("short", "short"),
            ("int", "int"),
            ("long", "long"),
            ("float", "float"),
            ("double", "double"),
            ("string", "string"),
            ("boolean", "bool"),
            ("Polymorphic", "object"),
            ("Object", "object"),
        ]
        .into_iter()
        .collect()
    }

    fn array2(&self, item: String) -> String {
        format!("{item}[,]")
    }

    fn map(&self, key: String, value: String) -> String {
        format!("IDictionary<{key}, {value}>")
    }
}

/// Help text is embedded in XML doc comments
fn xml_doc(help: &str) -> String {
    let escaped = help
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    wrap(&escaped, "        /// ", true)
}

pub fn profile() -> LanguageProfile {
    LanguageProfile {
        language: Language::CSharp,
        schema_template: include_str!("templates/csharp/schema.cs.tera"),
        enum_template: include_str!("templates/csharp/enum.cs.tera"),
        endpoints_template: include_str!("templates/csharp/endpoints.cs.tera"),
        schema_path: |name| format!("Schemas/{name}"),
        enum_path: |name| format!("Enums/{name}"),
        endpoints_path: "Endpoints",
        field_name: to_proper_case,
        doc: xml_doc,
        reserved: &[],
    }
}

pub fn backend() -> TemplateBackend {
    TemplateBackend::new(profile(), Arc::new(CSharpRenderer))
}
