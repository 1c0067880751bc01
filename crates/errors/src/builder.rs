//! Builder binding and construction error types

use std::borrow::Cow;

use crate::{UserFacingError, ValueError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum BuilderError {
    #[error("builder `{builder}` has no parameter `{name}`")]
    UnknownParameter { builder: String, name: String },

    #[error("builder `{builder}` does not implement get()")]
    NotImplemented { builder: String },

    #[error("invalid value for parameter `{name}` of builder `{builder}`: {source}")]
    InvalidValue {
        builder: String,
        name: String,
        #[source]
        source: ValueError,
    },

    #[error("reserved key `strict` must be a boolean, found {found}")]
    InvalidStrictFlag { found: String },

    #[error("namespace cannot be read as named fields: {message}")]
    InvalidNamespace { message: String },

    #[error("builder `{builder}` cannot construct its target: {message}")]
    Construction { builder: String, message: String },
}

impl BuilderError {
    /// Create an unknown-parameter error for the given builder
    pub fn unknown_parameter(builder: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownParameter {
            builder: builder.into(),
            name: name.into(),
        }
    }

    /// Create a construction error for the given builder
    pub fn construction(builder: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Construction {
            builder: builder.into(),
            message: message.into(),
        }
    }
}

impl UserFacingError for BuilderError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnknownParameter { .. } => Some(
                "Check the parameter name, or bind leniently to ignore keys the builder does not declare.",
            ),
            Self::NotImplemented { .. } => {
                Some("Use a concrete builder; the abstract base cannot construct anything.")
            }
            Self::InvalidValue { .. } => Some("Pass a value of the type the parameter declares."),
            Self::InvalidStrictFlag { .. } => Some("Set `strict` to true or false."),
            Self::InvalidNamespace { .. } => {
                Some("Pass a struct or map whose fields are the parameter names.")
            }
            Self::Construction { .. } => Some("Adjust the builder parameters and retry."),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::UnknownParameter { .. } => "builder.unknown_parameter",
            Self::NotImplemented { .. } => "builder.not_implemented",
            Self::InvalidValue { .. } => "builder.invalid_value",
            Self::InvalidStrictFlag { .. } => "builder.invalid_strict_flag",
            Self::InvalidNamespace { .. } => "builder.invalid_namespace",
            Self::Construction { .. } => "builder.construction",
        };
        Some(code)
    }
}
