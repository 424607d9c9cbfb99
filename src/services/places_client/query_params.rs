use serde::Serialize;
use serde_json::Value;
use urlencoding::encode;

use super::types::places_service_error::{PlacesError, Result};

/// Flat, ordered key/value parameter set for one outbound request.
///
/// Setting a key that is already present replaces its value in place, so
/// later layers win while the first layer decides the key order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a parameter set from any struct that serializes to a flat
    /// JSON object. `null` fields are dropped.
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => {
                let mut params = Self::new();
                for (key, value) in map {
                    if let Some(value) = param_value(value) {
                        params.set(key, value);
                    }
                }
                Ok(params)
            }
            Value::Null => Ok(Self::new()),
            other => Err(PlacesError::invalid_argument(format!(
                "query must serialize to an object, got {}",
                other
            ))),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Overlays `other` on top of `self`.
    pub fn extend(&mut self, other: QueryParams) -> &mut Self {
        for (key, value) in other.pairs {
            self.set(key, value);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `key=value&key2=value2` with reserved characters percent-escaped.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

fn param_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Applies each layer left to right; later layers overwrite earlier keys.
pub fn merge<I>(layers: I) -> QueryParams
where
    I: IntoIterator<Item = QueryParams>,
{
    let mut merged = QueryParams::new();
    for layer in layers {
        merged.extend(layer);
    }
    merged
}
