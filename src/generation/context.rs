//! Render context handed to backend templates

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::generation::GenerationError;

/// Variables available to a template
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub variables: HashMap<String, JsonValue>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_variable(&mut self, key: &str, value: JsonValue) {
        self.variables.insert(key.to_string(), value);
    }

    /// Serialize `value` and add it under `key`
    pub fn add_serialized<T: Serialize>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), GenerationError> {
        let value = serde_json::to_value(value)
            .map_err(|e| GenerationError::Render(format!("cannot serialize '{key}': {e}")))?;
        self.add_variable(key, value);
        Ok(())
    }

    pub fn to_tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.variables {
            context.insert(key.as_str(), value);
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_and_convert() {
        let mut context = RenderContext::new();
        context.add_variable("name", json!("FrameV3"));
        context.add_serialized("values", &vec!["a", "b"]).unwrap();

        let tera_context = context.to_tera_context();
        assert_eq!(tera_context.get("name"), Some(&json!("FrameV3")));
        assert_eq!(tera_context.get("values"), Some(&json!(["a", "b"])));
    }
}
