//! Top-level error handling for a generation run.
//!
//! Every layer has its own `thiserror` enum; they all convert into [`Error`],
//! which knows the process exit status of each failure class so calling build
//! scripts can branch on the category of failure.
//!
//! | Failure                                        | Exit |
//! |------------------------------------------------|------|
//! | Non-success HTTP status                        | 1    |
//! | Invalid server URL                             | 2    |
//! | Connection failure                             | 3    |
//! | Request timeout                                | 4    |
//! | Response body is not JSON                      | 5    |
//! | Metadata marker or payload key missing         | 6    |
//! | Server reported an application error           | 7    |
//! | Configuration missing                          | 8    |
//! | Destination directory could not be cleared     | 9    |
//! | Directory could not be created                 | 10   |
//! | File could not be written                      | 11   |
//! | Malformed type descriptor                      | 12   |
//! | Template rendering failed                      | 13   |

use thiserror::Error;

use crate::generation::GenerationError;
use crate::infrastructure::metadata::MetadataError;
use crate::infrastructure::output::OutputError;
use crate::translation::TranslationError;

/// Result type for generation runs
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid url address of a server: {address} ({reason})")]
    InvalidUrl { address: String, reason: String },

    #[error("Configuration not present: missing {0}")]
    Missing(String),
}

/// Main error type for a generation run
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl Error {
    /// Process exit status for this failure class
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(ConfigError::InvalidUrl { .. }) => 2,
            Error::Config(ConfigError::Missing(_)) => 8,
            Error::Metadata(e) => match e {
                MetadataError::HttpStatus { .. } => 1,
                MetadataError::InvalidUrl { .. } => 2,
                MetadataError::Connection { .. } => 3,
                MetadataError::Timeout { .. } => 4,
                MetadataError::InvalidJson { .. } => 5,
                MetadataError::UnexpectedPayload { .. } => 6,
                MetadataError::Server { .. } => 7,
            },
            Error::Output(e) => match e {
                OutputError::ClearDirectory { .. } => 9,
                OutputError::CreateDirectory { .. } => 10,
                OutputError::WriteFile { .. } => 11,
            },
            Error::Translation(_) => 12,
            Error::Generation(e) => match e {
                GenerationError::Translation(_) => 12,
                GenerationError::Render(_) => 13,
                GenerationError::UnsupportedLanguage(_) => 8,
            },
        }
    }
}
