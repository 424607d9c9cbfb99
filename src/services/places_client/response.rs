use serde_json::Value;
use tracing::warn;

use super::types::{
    autocomplete_result::Prediction,
    place_details_result::PlaceDetails,
    places_service_error::{PlacesError, Result},
};

/// Which endpoint a payload came from, and so which shape it must have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResponseKind {
    Autocomplete,
    Details,
}

impl ResponseKind {
    fn field(&self) -> &'static str {
        match self {
            ResponseKind::Autocomplete => "predictions",
            ResponseKind::Details => "result",
        }
    }
}

/// Requires a top-level `predictions` array and hands it back verbatim.
pub fn validate_autocomplete(payload: Value) -> Result<Vec<Prediction>> {
    match take_field(payload, ResponseKind::Autocomplete) {
        Some(Value::Array(predictions)) => {
            Ok(predictions.into_iter().map(Prediction::new).collect())
        }
        other => Err(shape_error(ResponseKind::Autocomplete, other)),
    }
}

/// Requires a top-level `result` object and hands it back verbatim.
pub fn validate_details(payload: Value) -> Result<PlaceDetails> {
    match take_field(payload, ResponseKind::Details) {
        Some(Value::Object(result)) => Ok(PlaceDetails::new(result)),
        other => Err(shape_error(ResponseKind::Details, other)),
    }
}

fn take_field(payload: Value, kind: ResponseKind) -> Option<Value> {
    match payload {
        Value::Object(mut map) => map.remove(kind.field()),
        _ => None,
    }
}

fn shape_error(kind: ResponseKind, found: Option<Value>) -> PlacesError {
    let found = match found {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(_)) => "a number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "an array",
        Some(Value::Object(_)) => "an object",
    };
    warn!(field = kind.field(), found, "unexpected places response shape");

    PlacesError::invalid_response(format!("`{}` was {}", kind.field(), found))
}
