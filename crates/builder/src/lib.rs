#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configurable builders for fastformer
//!
//! A builder is a bag of named parameters with defaults plus a `get()` that
//! constructs the target object from them. This crate provides the contract
//! every builder implements and the single binding routine behind the three
//! ways of populating one:
//!
//! - [`ConfigurableBuilder::from_dictionary`] from a [`Dictionary`]
//! - [`ConfigurableBuilder::from_kwargs`] from a [`Kwargs`] keyword set
//! - [`ConfigurableBuilder::from_namespace`] from parsed command-line arguments
//!
//! Parameters are declared with [`builder_parameters!`], which registers the
//! schema used to decide whether a key names a parameter.

mod base;
mod bind;
mod builder;
mod file;
mod macros;
mod namespace;
mod schema;

pub use base::{not_implemented, AbstractBuilder};
pub use bind::{BindReport, DICTIONARY_STRICT_DEFAULT, NAMESPACE_STRICT_DEFAULT};
pub use builder::ConfigurableBuilder;
pub use file::{load_dictionary, ConfigFormat};
pub use namespace::namespace_fields;
pub use schema::Parameterized;

// Re-export the configuration shapes and errors builders deal in
pub use fastformer_errors::{BuilderError, Error, Result, UserFacingError, ValueError};
pub use fastformer_types::{kwargs, Dictionary, FromParam, Kwargs, ParamValue, ToParam, STRICT_KEY};

#[doc(hidden)]
pub use paste;
