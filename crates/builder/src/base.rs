//! The abstract base builder

use crate::{builder_parameters, ConfigurableBuilder, Parameterized};
use fastformer_errors::{BuilderError, Result};

builder_parameters! {
    /// A builder that declares no parameters and constructs nothing
    ///
    /// Every binding entry point works on it (strict binds of a non-empty
    /// dictionary fail, lenient ones ignore everything) but
    /// [`ConfigurableBuilder::get`] always fails with `NotImplemented`.
    #[derive(PartialEq, Eq)]
    pub struct AbstractBuilder {}
}

impl ConfigurableBuilder for AbstractBuilder {
    type Target = ();

    fn get(&self) -> Result<()> {
        not_implemented::<Self, _>()
    }
}

/// The `NotImplemented` failure for a builder without construction logic
///
/// # Errors
///
/// Always returns [`BuilderError::NotImplemented`] naming `B`.
pub fn not_implemented<B: Parameterized, T>() -> Result<T> {
    Err(BuilderError::NotImplemented {
        builder: B::NAME.to_string(),
    }
    .into())
}
