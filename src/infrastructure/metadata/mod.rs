//! Server metadata retrieval over HTTP

pub mod cache;
pub mod errors;
pub mod http_client;
pub mod types;

pub use cache::*;
pub use errors::*;
pub use http_client::*;
pub use types::*;
