//! Parameter value conversion errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueError {
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("value {value} does not fit in {expected}")]
    OutOfRange { expected: String, value: String },
}

impl ValueError {
    pub fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn out_of_range(expected: impl Into<String>, value: impl ToString) -> Self {
        Self::OutOfRange {
            expected: expected.into(),
            value: value.to_string(),
        }
    }
}
