use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct PlaceDetailsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// ccTLD two-character region code. Biases, doesn't restrict.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessiontoken: Option<String>,
    /// Comma separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl PlaceDetailsQuery {
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
