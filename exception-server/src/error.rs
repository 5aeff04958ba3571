//! Unified error types for the exception server.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error type for the exception server application.
///
/// These are failures of the server itself. The error chains served by the
/// scenario endpoints are ordinary response payloads and never show up here.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be resolved, read, written, or parsed.
    #[error("config: {message}")]
    Config {
        /// What went wrong, including the offending path when there is one.
        message: String,
        /// Underlying I/O or parse failure.
        #[source]
        source: Option<BoxError>,
    },

    /// A scenario table was assembled with an invalid entry.
    #[error("scenario: {0}")]
    Scenario(String),

    /// Server bind or runtime error.
    #[error("server: {0}")]
    Server(#[from] std::io::Error),
}

impl Error {
    /// Creates a [`Error::Config`] without an underlying cause.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a [`Error::Config`] that records `source` as its cause.
    pub fn config_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
