use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// Caller overrides for an autocomplete request. Any field left as `None`
/// keeps the operation's default (or is omitted entirely).
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct AutocompleteQuery {
    /// Groups autocomplete requests with a final details request for billing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessiontoken: Option<String>,
    /// Position of the last input character the service matches on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// `"latitude,longitude"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Meters.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_radius"
    )]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    /// e.g. `country:us|country:pr`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strictbounds: Option<bool>,
    /// Keys the typed fields don't cover. Sent as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl AutocompleteQuery {
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Renders through `Display` so `1000.0` goes out as `1000`.
fn serialize_radius<S>(radius: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match radius {
        Some(radius) => serializer.collect_str(radius),
        None => serializer.serialize_none(),
    }
}
