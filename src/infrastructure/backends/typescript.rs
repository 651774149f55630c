//! TypeScript bindings: interfaces, string-literal unions, and a route table

use std::sync::Arc;

use super::template_backend::{LanguageProfile, TemplateBackend};
use crate::core::utils::wrap;
use crate::generation::Language;
use crate::translation::{ScalarTypeTable, TypeRenderer};

#[derive(Debug, Default, Clone, Copy)]
pub struct TypeScriptRenderer;

impl TypeRenderer for TypeScriptRenderer {
    fn scalar_types(&self) -> ScalarTypeTable {
        [
            ("byte", "number"),
            ("short", "number"),
            ("int", "number"),
            ("long", "number"),
            ("float", "number"),
            ("double", "number"),
            ("string", "string"),
            ("boolean", "boolean"),
            ("Polymorphic", "any"),
            ("Object", "any"),
        ]
        .into_iter()
        .collect()
    }

    fn map(&self, key: String, value: String) -> String {
        format!("Record<{key}, {value}>")
    }
}

pub fn profile() -> LanguageProfile {
    LanguageProfile {
        language: Language::TypeScript,
        schema_template: include_str!("templates/typescript/schema.ts.tera"),
        enum_template: include_str!("templates/typescript/enum.ts.tera"),
        endpoints_template: include_str!("templates/typescript/endpoints.ts.tera"),
        schema_path: |name| format!("schemas/{name}"),
        enum_path: |name| format!("enums/{name}"),
        endpoints_path: "endpoints",
        // Server field names are valid property names as they are
        field_name: |name| name.to_string(),
        doc: |help| wrap(help, "   * ", true),
        reserved: &[],
    }
}

pub fn backend() -> TemplateBackend {
    TemplateBackend::new(profile(), Arc::new(TypeScriptRenderer))
}

#[cfg(test)]
mod tests {
    use super::super::template_backend::test_support::{file, generate};
    use super::*;
    use crate::translation::TypeTranslator;

    #[test]
    fn test_typescript_types() {
        let translator = TypeTranslator::new(Arc::new(TypeScriptRenderer));
        let t = |d: &str| translator.translate(d, None).unwrap();
        assert_eq!(t("long[]"), "number[]");
        assert_eq!(t("Polymorphic[][]"), "any[][]");
        assert_eq!(t("Map<string,boolean>"), "Record<string, boolean>");
    }

    #[test]
    fn test_typescript_files() {
        let files = generate(&backend());
        let gbm = file(&files, "schemas/GBMParametersV3.ts");
        assert!(gbm.contains(
            "import type { GenmodelDistributionFamily } from \"../enums/GenmodelDistributionFamily\";"
        ));
        assert!(gbm.contains(
            "import type { ModelParametersSchemaV3 } from \"./ModelParametersSchemaV3\";"
        ));
        assert!(gbm.contains("export interface GBMParametersV3 extends ModelParametersSchemaV3 {"));
        assert!(gbm.contains("  ntrees?: number;"));
        assert!(gbm.contains("  custom_metric_func?: Record<string, number[][]>;"));

        let params = file(&files, "schemas/ModelParametersSchemaV3.ts");
        assert!(params.contains("  training_frame: FrameKeyV3;"));
        assert!(params.contains("   * Id of the training data frame."));

        let family = file(&files, "enums/GenmodelDistributionFamily.ts");
        assert!(family.contains("export type GenmodelDistributionFamily =\n  | \"AUTO\"\n  | \"bernoulli\"\n  | \"gaussian\";"));

        let endpoints = file(&files, "endpoints.ts");
        assert!(endpoints.contains(
            "    train: { method: \"POST\", url: \"/3/ModelBuilders/gbm\", summary: \"Train a GBM model.\" },"
        ));
    }
}
