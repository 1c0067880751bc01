//! Opaque parameter values
//!
//! A [`ParamValue`] is whatever a configuration source can hold for a single
//! parameter. Builders never see it directly: the typed field conversion in
//! [`crate::convert`] turns it into the field's declared type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single configuration value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum ParamValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned integers above `i64::MAX`; smaller values are always `Int`
    UInt(u64),
    Float(f64),
    Str(String),
    List(Vec<ParamValue>),
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    /// Name of the value's shape, used in diagnostics
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) | Self::UInt(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInt(u)
                } else {
                    n.as_f64().map_or(Self::Null, Self::Float)
                }
            }
            Value::String(s) => Self::Str(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_json() {
        let value: ParamValue = serde_json::from_str(r#"[1, 2.5, "relu", true, null]"#).unwrap();
        assert_eq!(
            value,
            ParamValue::List(vec![
                ParamValue::Int(1),
                ParamValue::Float(2.5),
                ParamValue::Str("relu".into()),
                ParamValue::Bool(true),
                ParamValue::Null,
            ])
        );
    }

    #[test]
    fn test_from_json_value() {
        let json = serde_json::json!({"depth": 6, "activation": "gelu", "big": u64::MAX});
        let ParamValue::Map(map) = ParamValue::from(json) else {
            panic!("expected a map");
        };
        assert_eq!(map["depth"], ParamValue::Int(6));
        assert_eq!(map["activation"], ParamValue::Str("gelu".into()));
        assert_eq!(map["big"], ParamValue::UInt(u64::MAX));
    }

    #[test]
    fn test_untagged_prefers_signed_integers() {
        let value: ParamValue = serde_json::from_str("[7, 18446744073709551615]").unwrap();
        assert_eq!(
            value,
            ParamValue::List(vec![ParamValue::Int(7), ParamValue::UInt(u64::MAX)])
        );
        assert_eq!(serde_json::to_string(&value).unwrap(), "[7,18446744073709551615]");
    }

    #[test]
    fn test_display() {
        let value = ParamValue::List(vec![ParamValue::Int(1), ParamValue::Str("a".into())]);
        assert_eq!(value.to_string(), "[1, a]");
        assert_eq!(ParamValue::Null.to_string(), "null");
    }
}
