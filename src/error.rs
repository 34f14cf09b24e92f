//! Error types for export operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use thiserror::Error;

/// Result type alias for owlcsv operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Comprehensive error type for all export operations.
///
/// Errors are designed to fail fast and provide clear context about what went
/// wrong. A resolution miss (an entity/property pair with no matching axiom)
/// is deliberately NOT an error: it renders as an empty cell and the export
/// continues.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Invalid exporter configuration, rejected before any resolution work.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// A string that could not be parsed as an IRI.
    #[error("Invalid IRI: {value}")]
    InvalidIri {
        /// The rejected input
        value: String,
    },

    /// Output sink error (file creation, write, flush).
    #[error("Sink error: {message}")]
    Sink {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ExportError {
    /// Create a configuration error from a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a sink error from a message and optional source.
    pub fn sink<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Sink {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
