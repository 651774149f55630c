//! Bundled target-language backends

pub mod csharp;
pub mod java;
pub mod python;
pub mod registry;
pub mod template_backend;
pub mod typescript;

pub use csharp::CSharpRenderer;
pub use java::JavaRenderer;
pub use python::PythonRenderer;
pub use registry::BackendRegistry;
pub use template_backend::{LanguageProfile, TemplateBackend};
pub use typescript::TypeScriptRenderer;
