//! Generation domain - drives a backend from fetched metadata to files
//!
//! A run pulls a [`MetadataSnapshot`] from a [`MetadataSource`], hands it to
//! a [`Backend`] together with a [`crate::translation::TypeTranslator`] built
//! from the backend's renderer, and writes the resulting [`Artifact`]s
//! through an [`OutputService`].

pub mod context;
pub mod driver;
pub mod errors;
pub mod sanitizers;
pub mod traits;
pub mod types;

pub use context::*;
pub use driver::*;
pub use errors::*;
pub use traits::*;
pub use types::*;
