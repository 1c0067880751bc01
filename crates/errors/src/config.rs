//! Configuration source error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("parse error: {message}")]
    ParseError { message: String },

    #[error("unsupported config format: {path}")]
    UnsupportedFormat { path: String },

    #[error("missing config section: {section}")]
    MissingSection { section: String },

    #[error("config section is not a table: {section}")]
    InvalidSection { section: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => Some("Check the path passed with --config."),
            Self::ParseError { .. } => Some("Fix the configuration syntax and retry."),
            Self::UnsupportedFormat { .. } => {
                Some("Use a `.toml` or `.json` file for builder parameters.")
            }
            Self::MissingSection { .. } | Self::InvalidSection { .. } => {
                Some("Add a table with that name holding the builder parameters.")
            }
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::NotFound { .. } => "config.not_found",
            Self::ParseError { .. } => "config.parse_error",
            Self::UnsupportedFormat { .. } => "config.unsupported_format",
            Self::MissingSection { .. } => "config.missing_section",
            Self::InvalidSection { .. } => "config.invalid_section",
        };
        Some(code)
    }
}
