//! metabind - generate client bindings from a running server's REST metadata.
//!
//! The server describes its schemas, enumerations and routes through a small
//! set of metadata endpoints. metabind fetches them once, translates every
//! field type descriptor into the target language through a pluggable
//! [`translation::TypeRenderer`], and renders one source file per schema and
//! enumeration plus a route table.
#![deny(unsafe_code)]

pub mod core;
pub mod generation;
pub mod infrastructure;
pub mod translation;

pub use crate::core::{ConfigError, Error, GeneratorConfig, Result};
pub use generation::{Backend, GenerationDriver, GenerationSummary, Language};
pub use infrastructure::backends::BackendRegistry;
pub use infrastructure::metadata::HttpMetadataClient;
pub use infrastructure::output::FileSystemOutputService;
pub use translation::{TypeRenderer, TypeTranslator};
