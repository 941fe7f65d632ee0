//! Error types for the Tango library.
//!
//! All errors are represented by the [`TangoError`] enum. Every pipeline stage
//! surfaces its own error immediately to the caller; nothing is retried or
//! replaced with an empty result.
//!
//! # Examples
//!
//! ```
//! use tango::error::{Result, TangoError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TangoError::empty_corpus("no documents"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Tango operations.
#[derive(Error, Debug)]
pub enum TangoError {
    /// A noise pattern is not a valid regular expression.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// The segmentation model could not be loaded or could not process the input.
    #[error("Tokenization error: {0}")]
    Tokenization(String),

    /// The stopword list could not be fetched or decoded.
    #[error("Stopword source error: {0}")]
    StopwordSource(String),

    /// Weighting was attempted on zero documents or on documents without terms.
    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (reading configuration files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TangoError.
pub type Result<T> = std::result::Result<T, TangoError>;

impl TangoError {
    /// Create a new invalid pattern error.
    pub fn invalid_pattern<S: Into<String>>(msg: S) -> Self {
        TangoError::InvalidPattern(msg.into())
    }

    /// Create a new tokenization error.
    pub fn tokenization<S: Into<String>>(msg: S) -> Self {
        TangoError::Tokenization(msg.into())
    }

    /// Create a new stopword source error.
    pub fn stopword_source<S: Into<String>>(msg: S) -> Self {
        TangoError::StopwordSource(msg.into())
    }

    /// Create a new empty corpus error.
    pub fn empty_corpus<S: Into<String>>(msg: S) -> Self {
        TangoError::EmptyCorpus(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TangoError::Config(msg.into())
    }
}
