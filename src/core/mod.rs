//! Core building blocks shared by every layer: run configuration, the
//! top-level error type and identifier helpers.

pub mod config;
pub mod error;
pub mod utils;

pub use config::GeneratorConfig;
pub use error::{ConfigError, Error, Result};
