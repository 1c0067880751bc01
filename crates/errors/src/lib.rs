#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for fastformer builders
//!
//! This crate provides fine-grained error types organized by domain.
//! All error types implement Clone for easier handling.

use std::borrow::Cow;

use thiserror::Error;

pub mod builder;
pub mod config;
pub mod value;

// Re-export all error types at the root
pub use builder::BuilderError;
pub use config::ConfigError;
pub use value::ValueError;

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    #[error("builder error: {0}")]
    Builder(#[from] BuilderError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error on {path}: {message}")]
    Io { message: String, path: String },
}

impl Error {
    /// Create an Io error with an associated path
    #[must_use]
    pub fn io_with_path(err: &std::io::Error, path: &std::path::Path) -> Self {
        Self::Io {
            message: err.to_string(),
            path: path.display().to_string(),
        }
    }

    /// The builder error behind this error, if any
    #[must_use]
    pub fn as_builder(&self) -> Option<&BuilderError> {
        match self {
            Self::Builder(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(ConfigError::ParseError {
            message: format!("JSON error: {err}"),
        })
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(ConfigError::ParseError {
            message: format!("TOML error: {err}"),
        })
    }
}

/// Result type alias for fastformer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Minimal interface for rendering user-facing error information without
/// requiring heavyweight envelopes.
pub trait UserFacingError {
    /// Short message suitable for CLI output.
    fn user_message(&self) -> Cow<'_, str>;

    /// Optional remediation hint.
    fn user_hint(&self) -> Option<&'static str> {
        None
    }

    /// Whether retrying the same operation is likely to succeed.
    fn is_retryable(&self) -> bool {
        false
    }

    /// Stable error code for analytics / structured reporting.
    fn user_code(&self) -> Option<&'static str> {
        None
    }
}

impl UserFacingError for Error {
    fn user_message(&self) -> Cow<'_, str> {
        match self {
            Error::Builder(err) => err.user_message(),
            Error::Config(err) => err.user_message(),
            Error::Io { .. } => Cow::Owned(self.to_string()),
        }
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Error::Builder(err) => err.user_hint(),
            Error::Config(err) => err.user_hint(),
            Error::Io { .. } => Some("Check that the path is readable."),
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Error::Io { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Error::Builder(err) => err.user_code(),
            Error::Config(err) => err.user_code(),
            Error::Io { .. } => Some("error.io"),
        }
    }
}
