use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MatchedSubstring {
    pub length: u32,
    pub offset: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StructuredFormatting {
    /// Usually the name of the place.
    #[serde(default)]
    pub main_text: Option<String>,
    #[serde(default)]
    pub main_text_matched_substrings: Vec<MatchedSubstring>,
    /// Usually the location of the place.
    #[serde(default)]
    pub secondary_text: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Term {
    pub offset: u32,
    pub value: String,
}

/// Typed view of one autocomplete prediction.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AutocompleteResult {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub structured_formatting: Option<StructuredFormatting>,
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default)]
    pub matched_substrings: Vec<MatchedSubstring>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// One prediction exactly as the autocomplete endpoint returned it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct Prediction(Value);

impl Prediction {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn place_id(&self) -> Option<&str> {
        self.0.get("place_id").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(Value::as_str)
    }

    pub fn types(&self) -> Vec<&str> {
        self.0
            .get("types")
            .and_then(Value::as_array)
            .map(|types| types.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Fails if a known field has an unexpected type.
    pub fn to_typed(&self) -> Result<AutocompleteResult, serde_json::Error> {
        AutocompleteResult::deserialize(&self.0)
    }
}
