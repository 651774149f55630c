//! Error types for the translation domain

use thiserror::Error;

/// Errors raised while translating a type descriptor.
///
/// Descriptors come from a versioned server contract, so none of these are
/// recovered from: they surface as a fatal run error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Malformed type descriptor '{descriptor}': {reason}")]
    MalformedDescriptor {
        descriptor: String,
        reason: &'static str,
    },

    #[error("Type descriptor '{descriptor}' requires a schema name")]
    MissingSchema { descriptor: String },
}

impl TranslationError {
    pub(crate) fn malformed(descriptor: &str, reason: &'static str) -> Self {
        Self::MalformedDescriptor {
            descriptor: descriptor.to_string(),
            reason,
        }
    }
}
