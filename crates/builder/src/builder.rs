//! The configurable builder contract

use crate::bind::{bind_dictionary, BindReport, NAMESPACE_STRICT_DEFAULT};
use crate::file::load_dictionary;
use crate::namespace::namespace_fields;
use crate::Parameterized;
use fastformer_errors::Result;
use fastformer_types::{Dictionary, Kwargs};
use serde::Serialize;
use std::path::Path;

/// A builder that produces a target object from its current parameters
///
/// Only [`ConfigurableBuilder::get`] is required. Every other method is a way
/// of populating the builder, and all of them end in
/// [`ConfigurableBuilder::bind`].
pub trait ConfigurableBuilder: Parameterized {
    /// The object this builder constructs
    type Target;

    /// Construct the target from the current parameters
    ///
    /// Each call is an independent construction; the builder stays usable and
    /// a later call reflects any parameters changed in between.
    ///
    /// # Errors
    ///
    /// Returns an error if the builder cannot construct its target from the
    /// current parameters.
    fn get(&self) -> Result<Self::Target>;

    /// Bind a dictionary onto this builder
    ///
    /// Later binds overwrite overlapping keys and keep the rest. With
    /// `strict`, the first key (in dictionary order) that is not a parameter
    /// fails the bind; without it such keys are skipped and listed in the
    /// returned report. A failed bind leaves the builder unchanged.
    ///
    /// # Errors
    ///
    /// Returns `UnknownParameter` for an undeclared key in strict mode and
    /// `InvalidValue` for a value that does not fit its field.
    fn bind(&mut self, dictionary: Dictionary, strict: bool) -> Result<BindReport> {
        Ok(bind_dictionary(self, dictionary, strict)?)
    }

    /// Construct a builder and set every parameter in the dictionary
    ///
    /// `from_dictionary({"foo": "bar"}, strict)` is equivalent to taking
    /// `Self::default()` and setting `foo` to `"bar"`.
    /// [`crate::DICTIONARY_STRICT_DEFAULT`] is the usual choice for `strict`.
    ///
    /// # Errors
    ///
    /// See [`ConfigurableBuilder::bind`].
    fn from_dictionary(dictionary: Dictionary, strict: bool) -> Result<Self> {
        let mut builder = Self::default();
        builder.bind(dictionary, strict)?;
        Ok(builder)
    }

    /// Construct a builder from keyword arguments
    ///
    /// The reserved `strict` keyword selects the validation mode (default
    /// `true`) and is never bound as a parameter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStrictFlag` for a non-boolean `strict`, otherwise see
    /// [`ConfigurableBuilder::bind`].
    fn from_kwargs(kwargs: Kwargs) -> Result<Self> {
        let (dictionary, strict) = kwargs.into_parts()?;
        Self::from_dictionary(dictionary, strict)
    }

    /// Construct a builder from a parsed argument namespace
    ///
    /// Every serialized field of `namespace` becomes a dictionary entry; see
    /// [`crate::namespace_fields`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidNamespace` if `namespace` does not serialize to named
    /// fields, otherwise see [`ConfigurableBuilder::bind`].
    fn from_namespace<N: Serialize + ?Sized>(namespace: &N, strict: bool) -> Result<Self> {
        Self::from_dictionary(namespace_fields(namespace)?, strict)
    }

    /// [`ConfigurableBuilder::from_namespace`] with unknown fields ignored
    ///
    /// # Errors
    ///
    /// See [`ConfigurableBuilder::from_namespace`].
    fn from_args<N: Serialize + ?Sized>(namespace: &N) -> Result<Self> {
        Self::from_namespace(namespace, NAMESPACE_STRICT_DEFAULT)
    }

    /// Construct a builder from a TOML or JSON parameter file
    ///
    /// # Errors
    ///
    /// Returns a config error if the file cannot be read or parsed, otherwise
    /// see [`ConfigurableBuilder::bind`].
    fn from_file(path: &Path, strict: bool) -> Result<Self> {
        Self::from_dictionary(load_dictionary(path, None)?, strict)
    }

    /// Construct a builder from one table of a TOML or JSON parameter file
    ///
    /// # Errors
    ///
    /// Returns a config error if the file cannot be read or parsed or lacks
    /// the table, otherwise see [`ConfigurableBuilder::bind`].
    fn from_file_section(path: &Path, section: &str, strict: bool) -> Result<Self> {
        Self::from_dictionary(load_dictionary(path, Some(section))?, strict)
    }
}
