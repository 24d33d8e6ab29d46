//! Docsift Core — shared error type and server configuration.

pub mod config;
pub mod error;

pub use config::DocsiftConfig;
pub use error::{Error, Result};
