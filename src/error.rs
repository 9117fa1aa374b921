//! Error types for tracegen

use thiserror::Error;

/// Core error type
///
/// The only error category in this crate is configuration: span emission is
/// treated as infallible at this layer, and transport failures belong to
/// the external exporter.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or incomplete configuration, detected before any task starts
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a configuration error for a missing builder field
    pub fn missing_config(field: &str) -> Self {
        Error::Config(format!("missing required field: {field}"))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
