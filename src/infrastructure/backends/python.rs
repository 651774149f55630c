//! Python bindings: annotated classes, `str` enums, and a route table

use std::sync::Arc;

use super::template_backend::{LanguageProfile, TemplateBackend};
use crate::core::utils::{to_snake_case, wrap};
use crate::generation::Language;
use crate::translation::{ScalarTypeTable, TypeRenderer};

const RESERVED: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Renders `typing` generics
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonRenderer;

impl TypeRenderer for PythonRenderer {
    fn scalar_types(&self) -> ScalarTypeTable {
        [
            ("byte", "int"),
            ("short", "int"),
            ("int", "int"),
            ("long", "int"),
            ("float", "float"),
            ("double", "float"),
            ("string", "str"),
            ("boolean", "bool"),
            ("Polymorphic", "Any"),
            ("Object", "Any"),
        ]
        .into_iter()
        .collect()
    }

    fn array(&self, item: String) -> String {
        format!("List[{item}]")
    }

    fn array2(&self, item: String) -> String {
        format!("List[List[{item}]]")
    }

    fn map(&self, key: String, value: String) -> String {
        format!("Dict[{key}, {value}]")
    }
}

pub fn profile() -> LanguageProfile {
    LanguageProfile {
        language: Language::Python,
        schema_template: include_str!("templates/python/schema.py.tera"),
        enum_template: include_str!("templates/python/enum.py.tera"),
        endpoints_template: include_str!("templates/python/endpoints.py.tera"),
        schema_path: |name| format!("schemas/{}", to_snake_case(name)),
        enum_path: |name| format!("enums/{}", to_snake_case(name)),
        endpoints_path: "endpoints",
        field_name: to_snake_case,
        doc: |help| wrap(help, "    #: ", true),
        reserved: RESERVED,
    }
}

pub fn backend() -> TemplateBackend {
    TemplateBackend::new(profile(), Arc::new(PythonRenderer))
}

#[cfg(test)]
mod tests {
    use super::super::template_backend::test_support::{file, generate};
    use super::*;
    use crate::generation::{Backend, MetadataSnapshot};
    use crate::translation::TypeTranslator;

    #[test]
    fn test_python_types() {
        let translator = TypeTranslator::new(Arc::new(PythonRenderer));
        let t = |d: &str| translator.translate(d, None).unwrap();
        assert_eq!(t("long"), "int");
        assert_eq!(t("string[]"), "List[str]");
        assert_eq!(t("double[][]"), "List[List[float]]");
        assert_eq!(t("Map<string,Polymorphic>"), "Dict[str, Any]");
    }

    #[test]
    fn test_python_files() {
        let files = generate(&backend());
        let gbm = file(&files, "schemas/gbmparameters_v3.py");
        assert!(gbm.contains("class GBMParametersV3:"));
        assert!(gbm.contains("    #: Number of trees.\n    ntrees: \"Optional[int]\" = None"));
        assert!(gbm.contains("    custom_metric_func: \"Optional[Dict[str, List[List[float]]]]\" = None"));
        assert!(gbm.contains("    default: \"Optional[bool]\" = None"));

        let family = file(&files, "enums/genmodel_distribution_family.py");
        assert!(family.contains("class GenmodelDistributionFamily(str, Enum):"));
        assert!(family.contains("    bernoulli = \"bernoulli\""));

        let endpoints = file(&files, "endpoints.py");
        assert!(endpoints.contains("        \"Fetch\": (\"GET\", \"/3/Frames/{frame_id}\"),"));
        assert!(endpoints.contains("ALGORITHMS = [\n    \"gbm\",\n    \"glm\",\n]"));
    }

    #[test]
    fn test_enum_values_become_valid_python_names() {
        let mut metadata = MetadataSnapshot::default();
        metadata.enums.insert(
            "Regularizer".to_string(),
            ["None", "L1", "per-class", "per_class"]
                .into_iter()
                .map(String::from)
                .collect(),
        );
        let backend = backend();
        let translator = TypeTranslator::new(backend.renderer());
        let artifacts = backend.generate(&metadata, &translator).unwrap();
        let regularizer = artifacts
            .iter()
            .find(|a| a.path.to_string_lossy() == "enums/regularizer.py")
            .unwrap()
            .content
            .render();

        assert!(regularizer.contains("    None_ = \"None\"\n"));
        assert!(!regularizer.contains("    None = "));
        assert!(regularizer.contains("    per_class = \"per-class\"\n"));
        assert!(regularizer.contains("    per_class_2 = \"per_class\"\n"));
    }
}
