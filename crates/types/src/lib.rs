#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for fastformer builders
//!
//! This crate provides the untyped configuration shapes a builder can be
//! bound from: opaque parameter values, ordered dictionaries and keyword sets,
//! plus the conversions between them and typed builder fields.

pub mod convert;
pub mod dictionary;
pub mod kwargs;
pub mod value;

// Re-export commonly used types
pub use convert::{FromParam, ToParam};
pub use dictionary::Dictionary;
pub use kwargs::{Kwargs, STRICT_KEY};
pub use value::ParamValue;
