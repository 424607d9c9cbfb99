use thiserror::Error;

use crate::services::geolocation::location_provider::LocationError;

pub type Result<T> = std::result::Result<T, PlacesError>;

#[derive(Debug, Error)]
pub enum PlacesError {
    /// A required argument was empty or malformed. Raised before any I/O.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body parsed as JSON but lacked the expected top-level field.
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

impl PlacesError {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse(message.into())
    }
}

impl From<LocationError> for PlacesError {
    fn from(e: LocationError) -> Self {
        PlacesError::LocationUnavailable(e.to_string())
    }
}
