//! Type translation domain
//!
//! Maps descriptors written in the server's type grammar onto type
//! expressions of a target language. [`TypeTranslator`] owns the recursion;
//! backends customize the output through [`TypeRenderer`].

pub mod descriptor;
pub mod errors;
pub mod record;
pub mod renderer;
pub mod translator;

pub use descriptor::*;
pub use errors::*;
pub use record::*;
pub use renderer::*;
pub use translator::*;
