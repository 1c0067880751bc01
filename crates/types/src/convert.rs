//! Conversion between typed builder fields and [`ParamValue`]
//!
//! Conversions are shape-preserving: a string is never parsed into a number
//! and a bool is never read from an integer. The only widening allowed is an
//! integer into a float field, since TOML and JSON write `0` and `0.0`
//! interchangeably for float-valued settings. Unsigned values above
//! `i64::MAX` travel as [`ParamValue::UInt`] so they convert back losslessly.

use crate::ParamValue;
use fastformer_errors::ValueError;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Read a typed field value out of a [`ParamValue`]
pub trait FromParam: Sized {
    /// Convert the value, or describe why its shape does not fit
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] if the value has the wrong shape or is out of
    /// range for the target type.
    fn from_param(value: ParamValue) -> Result<Self, ValueError>;
}

/// Render a typed field value as a [`ParamValue`]
pub trait ToParam {
    fn to_param(&self) -> ParamValue;
}

impl FromParam for ParamValue {
    fn from_param(value: ParamValue) -> Result<Self, ValueError> {
        Ok(value)
    }
}

impl ToParam for ParamValue {
    fn to_param(&self) -> ParamValue {
        self.clone()
    }
}

impl<T: ToParam + ?Sized> ToParam for &T {
    fn to_param(&self) -> ParamValue {
        (**self).to_param()
    }
}

impl FromParam for bool {
    fn from_param(value: ParamValue) -> Result<Self, ValueError> {
        match value {
            ParamValue::Bool(b) => Ok(b),
            other => Err(ValueError::mismatch("bool", other.kind())),
        }
    }
}

impl ToParam for bool {
    fn to_param(&self) -> ParamValue {
        ParamValue::Bool(*self)
    }
}

macro_rules! integer_param {
    ($($ty:ty),* $(,)?) => {$(
        impl FromParam for $ty {
            #[allow(clippy::useless_conversion)]
            fn from_param(value: ParamValue) -> Result<Self, ValueError> {
                match value {
                    ParamValue::Int(v) => <$ty>::try_from(v)
                        .map_err(|_| ValueError::out_of_range(stringify!($ty), v)),
                    ParamValue::UInt(v) => <$ty>::try_from(v)
                        .map_err(|_| ValueError::out_of_range(stringify!($ty), v)),
                    other => Err(ValueError::mismatch(stringify!($ty), other.kind())),
                }
            }
        }

        impl ToParam for $ty {
            #[allow(clippy::useless_conversion)]
            fn to_param(&self) -> ParamValue {
                // only unsigned values above i64::MAX miss the first conversion
                i64::try_from(*self).map_or_else(
                    |_| u64::try_from(*self).map_or(ParamValue::Null, ParamValue::UInt),
                    ParamValue::Int,
                )
            }
        }
    )*};
}

integer_param!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromParam for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_param(value: ParamValue) -> Result<Self, ValueError> {
        match value {
            ParamValue::Float(x) => Ok(x),
            ParamValue::Int(i) => Ok(i as f64),
            ParamValue::UInt(u) => Ok(u as f64),
            other => Err(ValueError::mismatch("f64", other.kind())),
        }
    }
}

impl ToParam for f64 {
    fn to_param(&self) -> ParamValue {
        ParamValue::Float(*self)
    }
}

impl FromParam for f32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn from_param(value: ParamValue) -> Result<Self, ValueError> {
        match value {
            ParamValue::Float(x) => Ok(x as f32),
            ParamValue::Int(i) => Ok(i as f32),
            ParamValue::UInt(u) => Ok(u as f32),
            other => Err(ValueError::mismatch("f32", other.kind())),
        }
    }
}

impl ToParam for f32 {
    fn to_param(&self) -> ParamValue {
        ParamValue::Float(f64::from(*self))
    }
}

impl FromParam for String {
    fn from_param(value: ParamValue) -> Result<Self, ValueError> {
        match value {
            ParamValue::Str(s) => Ok(s),
            other => Err(ValueError::mismatch("string", other.kind())),
        }
    }
}

impl ToParam for String {
    fn to_param(&self) -> ParamValue {
        ParamValue::Str(self.clone())
    }
}

impl ToParam for str {
    fn to_param(&self) -> ParamValue {
        ParamValue::Str(self.to_owned())
    }
}

impl FromParam for PathBuf {
    fn from_param(value: ParamValue) -> Result<Self, ValueError> {
        match value {
            ParamValue::Str(s) => Ok(PathBuf::from(s)),
            other => Err(ValueError::mismatch("path", other.kind())),
        }
    }
}

impl ToParam for PathBuf {
    fn to_param(&self) -> ParamValue {
        ParamValue::Str(self.display().to_string())
    }
}

impl<T: FromParam> FromParam for Option<T> {
    fn from_param(value: ParamValue) -> Result<Self, ValueError> {
        match value {
            ParamValue::Null => Ok(None),
            other => T::from_param(other).map(Some),
        }
    }
}

impl<T: ToParam> ToParam for Option<T> {
    fn to_param(&self) -> ParamValue {
        self.as_ref().map_or(ParamValue::Null, ToParam::to_param)
    }
}

impl<T: FromParam> FromParam for Vec<T> {
    fn from_param(value: ParamValue) -> Result<Self, ValueError> {
        match value {
            ParamValue::List(items) => items.into_iter().map(T::from_param).collect(),
            other => Err(ValueError::mismatch("list", other.kind())),
        }
    }
}

impl<T: ToParam> ToParam for Vec<T> {
    fn to_param(&self) -> ParamValue {
        ParamValue::List(self.iter().map(ToParam::to_param).collect())
    }
}

impl<T: FromParam> FromParam for BTreeMap<String, T> {
    fn from_param(value: ParamValue) -> Result<Self, ValueError> {
        match value {
            ParamValue::Map(map) => map
                .into_iter()
                .map(|(key, value)| T::from_param(value).map(|v| (key, v)))
                .collect(),
            other => Err(ValueError::mismatch("map", other.kind())),
        }
    }
}

impl<T: ToParam> ToParam for BTreeMap<String, T> {
    fn to_param(&self) -> ParamValue {
        ParamValue::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_param()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_range_checked() {
        assert_eq!(u8::from_param(ParamValue::Int(200)), Ok(200));
        assert_eq!(
            u8::from_param(ParamValue::Int(300)),
            Err(ValueError::out_of_range("u8", 300))
        );
        assert_eq!(
            usize::from_param(ParamValue::Int(-1)),
            Err(ValueError::out_of_range("usize", -1))
        );
    }

    #[test]
    fn test_large_unsigned_survives_conversion() {
        let big = u64::MAX - 1;
        assert_eq!(u64::from_param(big.to_param()), Ok(big));
        assert_eq!(
            i64::from_param(ParamValue::UInt(big)),
            Err(ValueError::out_of_range("i64", big))
        );
        assert_eq!(
            u8::from_param(ParamValue::UInt(big)),
            Err(ValueError::out_of_range("u8", big))
        );
    }

    #[test]
    fn test_no_string_coercion() {
        assert_eq!(
            usize::from_param(ParamValue::Str("6".into())),
            Err(ValueError::mismatch("usize", "string"))
        );
        assert_eq!(
            bool::from_param(ParamValue::Int(1)),
            Err(ValueError::mismatch("bool", "integer"))
        );
    }

    #[test]
    fn test_integer_widens_to_float() {
        assert_eq!(f64::from_param(ParamValue::Int(0)), Ok(0.0));
        assert_eq!(f32::from_param(ParamValue::Float(0.5)), Ok(0.5));
    }

    #[test]
    fn test_option_and_list() {
        assert_eq!(Option::<String>::from_param(ParamValue::Null), Ok(None));
        assert_eq!(
            Option::<String>::from_param(ParamValue::Str("full".into())),
            Ok(Some("full".to_string()))
        );
        assert_eq!(
            Vec::<u32>::from_param(ParamValue::List(vec![
                ParamValue::Int(1),
                ParamValue::Int(2)
            ])),
            Ok(vec![1, 2])
        );
        assert!(Vec::<u32>::from_param(ParamValue::List(vec![ParamValue::Bool(true)])).is_err());
    }

    #[test]
    fn test_to_param() {
        assert_eq!(6usize.to_param(), ParamValue::Int(6));
        assert_eq!(i64::MIN.to_param(), ParamValue::Int(i64::MIN));
        assert_eq!(u64::MAX.to_param(), ParamValue::UInt(u64::MAX));
        assert_eq!(usize::MAX.to_param(), ParamValue::UInt(usize::MAX as u64));
        assert_eq!("relu".to_param(), ParamValue::Str("relu".into()));
        assert_eq!(None::<u32>.to_param(), ParamValue::Null);
        assert_eq!(
            PathBuf::from("/tmp/x").to_param(),
            ParamValue::Str("/tmp/x".into())
        );
    }
}
