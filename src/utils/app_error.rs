use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::services::places_client::types::places_service_error::PlacesError;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

impl From<PlacesError> for AppError {
    fn from(e: PlacesError) -> Self {
        let code = match e {
            PlacesError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            PlacesError::LocationUnavailable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PlacesError::Transport(_)
            | PlacesError::Decode(_)
            | PlacesError::InvalidResponse(_) => {
                error!("Places request failed: {}", e);
                StatusCode::BAD_GATEWAY
            }
        };
        AppError::new(code, e.to_string().as_str())
    }
}

#[derive(Serialize)]
struct ResponseJson {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}
