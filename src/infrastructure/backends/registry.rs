//! Registry of language backends

use std::collections::HashMap;
use std::sync::Arc;

use crate::generation::{Backend, GenerationError, Language};

/// Maps each target language to the backend that generates it
pub struct BackendRegistry {
    backends: HashMap<Language, Arc<dyn Backend>>,
}

impl BackendRegistry {
    /// Create a registry holding the bundled backends
    pub fn new() -> Self {
        let mut backends = HashMap::new();

        backends.insert(
            Language::Java,
            Arc::new(super::java::backend()) as Arc<dyn Backend>,
        );
        backends.insert(
            Language::CSharp,
            Arc::new(super::csharp::backend()) as Arc<dyn Backend>,
        );
        backends.insert(
            Language::Python,
            Arc::new(super::python::backend()) as Arc<dyn Backend>,
        );
        backends.insert(
            Language::TypeScript,
            Arc::new(super::typescript::backend()) as Arc<dyn Backend>,
        );

        Self { backends }
    }

    /// Register a custom backend, replacing any existing one for its language
    pub fn register(&mut self, backend: Arc<dyn Backend>) {
        self.backends.insert(backend.language(), backend);
    }

    pub fn get(&self, language: Language) -> Result<Arc<dyn Backend>, GenerationError> {
        self.backends
            .get(&language)
            .cloned()
            .ok_or_else(|| GenerationError::UnsupportedLanguage(language.to_string()))
    }

    pub fn has_backend(&self, language: Language) -> bool {
        self.backends.contains_key(&language)
    }

    /// Supported languages, in declaration order
    pub fn supported_languages(&self) -> Vec<Language> {
        Language::all()
            .into_iter()
            .filter(|l| self.has_backend(*l))
            .collect()
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}
