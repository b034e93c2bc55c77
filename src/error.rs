//! Error types for the Glint library.
//!
//! All fallible operations return [`GlintError`] through the crate-wide
//! [`Result`] alias. Highlighting itself never fails; errors only come from
//! building a highlighter (bad configuration or query) and from the CLI's I/O.
//!
//! # Examples
//!
//! ```
//! use glint::error::{GlintError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GlintError::invalid_config("max_length must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Glint operations.
#[derive(Error, Debug)]
pub enum GlintError {
    /// I/O errors (reading inputs or configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid highlighter configuration, e.g. a bad ignore marker pattern
    #[error("Configuration error: {0}")]
    Config(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),
}

/// Result type alias for operations that may fail with GlintError.
pub type Result<T> = std::result::Result<T, GlintError>;

impl GlintError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        GlintError::Config(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        GlintError::Query(msg.into())
    }
}
