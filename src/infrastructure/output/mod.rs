//! Output service implementations

pub mod filesystem_output;

pub use filesystem_output::*;

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem failures while persisting generated files
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Unable to remove {path}: {source}")]
    ClearDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
