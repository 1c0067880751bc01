//! Ordered name → value mapping consumed by the binding routine

use crate::{ParamValue, ToParam};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Mapping from parameter name to value
///
/// Entries keep the order they were first inserted in; inserting an existing
/// key replaces its value without moving it. Deserialization keeps document
/// order, so the first unknown key reported by a strict bind is the first one
/// the user wrote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, ParamValue)>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToParam) -> Option<ParamValue> {
        let key = key.into();
        let value = value.to_param();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToParam) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove a key, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Interpret a map value as a dictionary
    #[must_use]
    pub fn from_value(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Map(map) => Some(map.into_iter().collect()),
            _ => None,
        }
    }
}

impl<K: Into<String>, V: ToParam> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<K: Into<String>, V: ToParam> Extend<(K, V)> for Dictionary {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Dictionary {
    type Item = (String, ParamValue);
    type IntoIter = std::vec::IntoIter<(String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<BTreeMap<String, ParamValue>> for Dictionary {
    fn from(map: BTreeMap<String, ParamValue>) -> Self {
        map.into_iter().collect()
    }
}

impl From<HashMap<String, ParamValue>> for Dictionary {
    fn from(map: HashMap<String, ParamValue>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Dictionary> for ParamValue {
    fn from(dictionary: Dictionary) -> Self {
        ParamValue::Map(dictionary.entries.into_iter().collect())
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Dictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DictionaryVisitor;

        impl<'de> Visitor<'de> for DictionaryVisitor {
            type Value = Dictionary;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of parameter names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Dictionary, A::Error> {
                let mut dictionary = Dictionary::new();
                while let Some((key, value)) = access.next_entry::<String, ParamValue>()? {
                    dictionary.insert(key, value);
                }
                Ok(dictionary)
            }
        }

        deserializer.deserialize_map(DictionaryVisitor)
    }
}
