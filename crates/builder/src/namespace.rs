//! Field extraction from parsed argument namespaces

use fastformer_errors::BuilderError;
use fastformer_types::{Dictionary, ParamValue};
use serde::Serialize;
use serde_json::Value;

/// Read the public fields of a namespace-like value into a dictionary
///
/// Any value that serializes to a map with string keys works: a `clap` argument
/// struct that also derives `Serialize`, a `HashMap<String, _>`, and so on.
/// Fields serde skips (for example `skip_serializing_if = "Option::is_none"`
/// on flags the user did not pass) are absent from the result. Entries come
/// out sorted by field name.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidNamespace`] if the value fails to serialize
/// or is not a map.
pub fn namespace_fields<N: Serialize + ?Sized>(namespace: &N) -> Result<Dictionary, BuilderError> {
    let value = serde_json::to_value(namespace).map_err(|e| BuilderError::InvalidNamespace {
        message: e.to_string(),
    })?;

    match value {
        Value::Object(fields) => Ok(fields
            .into_iter()
            .map(|(name, value)| (name, ParamValue::from(value)))
            .collect()),
        other => Err(BuilderError::InvalidNamespace {
            message: format!(
                "expected named fields, found {}",
                ParamValue::from(other).kind()
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct Args {
        n_layers: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        activation: Option<String>,
        seed: u64,
    }

    #[test]
    fn test_struct_fields() {
        let args = Args {
            n_layers: 6,
            activation: None,
            seed: 42,
        };
        let fields = namespace_fields(&args).unwrap();
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["n_layers", "seed"]);
        assert_eq!(fields.get("n_layers"), Some(&ParamValue::Int(6)));
    }

    #[test]
    fn test_map_namespace() {
        let map = HashMap::from([("depth".to_string(), 3)]);
        let fields = namespace_fields(&map).unwrap();
        assert_eq!(fields.get("depth"), Some(&ParamValue::Int(3)));
    }

    #[test]
    fn test_non_map_rejected() {
        let err = namespace_fields(&vec![1, 2]).unwrap_err();
        assert!(matches!(err, BuilderError::InvalidNamespace { .. }));
        assert!(err.to_string().contains("list"));
    }
}
