//! Keyword sets with a reserved `strict` control key

use crate::{Dictionary, ParamValue, ToParam};
use fastformer_errors::BuilderError;

/// Key removed from a keyword set before binding; it selects the validation mode
pub const STRICT_KEY: &str = "strict";

/// Keyword arguments for a builder
///
/// A keyword set is a [`Dictionary`] that may also carry the reserved
/// [`STRICT_KEY`]. The key is never bound as a parameter, even when a builder
/// declares a field with that name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kwargs {
    entries: Dictionary,
}

impl Kwargs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyword argument
    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, value: impl ToParam) -> Self {
        self.set(key, value);
        self
    }

    /// Set the reserved `strict` key
    #[must_use]
    pub fn strict(self, strict: bool) -> Self {
        self.arg(STRICT_KEY, strict)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl ToParam) {
        self.entries.insert(key, value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Split off the `strict` flag, defaulting to `true` when absent
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidStrictFlag`] if `strict` is present but
    /// not a boolean.
    pub fn into_parts(mut self) -> Result<(Dictionary, bool), BuilderError> {
        let strict = match self.entries.remove(STRICT_KEY) {
            None => true,
            Some(ParamValue::Bool(strict)) => strict,
            Some(other) => {
                return Err(BuilderError::InvalidStrictFlag {
                    found: other.kind().to_string(),
                })
            }
        };
        Ok((self.entries, strict))
    }
}

impl From<Dictionary> for Kwargs {
    fn from(entries: Dictionary) -> Self {
        Self { entries }
    }
}

/// Build a [`Kwargs`] from `name = value` pairs
///
/// ```
/// use fastformer_types::kwargs;
///
/// let kw = kwargs! { n_layers = 6, activation = "gelu", strict = false };
/// let (params, strict) = kw.into_parts().unwrap();
/// assert!(!strict);
/// assert_eq!(params.len(), 2);
/// ```
#[macro_export]
macro_rules! kwargs {
    () => {
        $crate::Kwargs::new()
    };
    ($($key:ident = $value:expr),+ $(,)?) => {{
        let mut kwargs = $crate::Kwargs::new();
        $( kwargs.set(stringify!($key), $value); )+
        kwargs
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_defaults_to_true() {
        let (params, strict) = Kwargs::new().arg("depth", 6).into_parts().unwrap();
        assert!(strict);
        assert_eq!(params.get("depth"), Some(&ParamValue::Int(6)));
    }

    #[test]
    fn test_strict_is_removed() {
        let (params, strict) = crate::kwargs! { unknown_key = 1, strict = false }
            .into_parts()
            .unwrap();
        assert!(!strict);
        assert!(!params.contains_key(STRICT_KEY));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["unknown_key"]);
    }

    #[test]
    fn test_non_bool_strict_rejected() {
        let err = Kwargs::new().arg("strict", "yes").into_parts().unwrap_err();
        assert_eq!(
            err,
            BuilderError::InvalidStrictFlag {
                found: "string".into()
            }
        );
    }

    #[test]
    fn test_empty_macro() {
        assert!(crate::kwargs!().is_empty());
    }
}
