//! Infrastructure layer - concrete implementations of domain ports

pub mod backends;
pub mod metadata;
pub mod output;
