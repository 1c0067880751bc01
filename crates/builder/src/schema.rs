//! Parameter schema registered per builder type

use fastformer_errors::BuilderError;
use fastformer_types::{Dictionary, ParamValue};

/// A builder's declared parameters
///
/// This is the static stand-in for "the builder already has an attribute with
/// this name": a key is a parameter exactly when it appears in
/// [`Parameterized::parameter_names`]. Implementations are normally generated
/// by [`crate::builder_parameters!`].
pub trait Parameterized: Default + Clone {
    /// Builder name used in diagnostics
    const NAME: &'static str;

    /// Declared parameter names, in declaration order
    fn parameter_names() -> &'static [&'static str];

    fn has_parameter(name: &str) -> bool {
        Self::parameter_names().contains(&name)
    }

    /// Assign one parameter
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::UnknownParameter`] if `name` is not declared and
    /// [`BuilderError::InvalidValue`] if the value does not fit the field.
    fn set_parameter(&mut self, name: &str, value: ParamValue) -> Result<(), BuilderError>;

    /// Current value of one parameter
    fn parameter(&self, name: &str) -> Option<ParamValue>;

    /// Snapshot of every parameter, in declaration order
    fn parameters(&self) -> Dictionary {
        Self::parameter_names()
            .iter()
            .filter_map(|name| self.parameter(name).map(|value| (*name, value)))
            .collect()
    }
}
