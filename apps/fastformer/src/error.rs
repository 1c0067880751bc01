//! CLI error handling

use std::fmt;

use fastformer_errors::UserFacingError;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Binding or construction error
    Builder(fastformer_errors::Error),
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Builder(e) => {
                let message = e.user_message();
                write!(f, "{message}")?;
                if let Some(code) = e.user_code() {
                    write!(f, "\n  Code: {code}")?;
                }
                if let Some(hint) = e.user_hint() {
                    write!(f, "\n  Hint: {hint}")?;
                }
                Ok(())
            }
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Builder(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<fastformer_errors::Error> for CliError {
    fn from(e: fastformer_errors::Error) -> Self {
        CliError::Builder(e)
    }
}

impl From<fastformer_errors::BuilderError> for CliError {
    fn from(e: fastformer_errors::BuilderError) -> Self {
        CliError::Builder(e.into())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
