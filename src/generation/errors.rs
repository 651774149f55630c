//! Error types for the generation domain

use thiserror::Error;

use crate::translation::TranslationError;

/// Errors that can occur while a backend generates artifacts
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Type translation failed: {0}")]
    Translation(#[from] TranslationError),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

impl From<tera::Error> for GenerationError {
    fn from(e: tera::Error) -> Self {
        // tera keeps the useful detail in the source chain
        let mut message = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        GenerationError::Render(message)
    }
}
