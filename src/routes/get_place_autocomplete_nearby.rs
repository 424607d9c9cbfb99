use std::sync::Arc;

use crate::{
    services::{
        geolocation::location_provider::StaticLocationProvider,
        places_client::types::{
            autocomplete_query::AutocompleteQuery, autocomplete_result::Prediction,
        },
    },
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetPlaceAutocompleteNearbyPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub input: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Must be a valid latitude"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Must be a valid longitude"))]
    pub lng: f64,

    pub radius: Option<f64>,
    pub language: Option<String>,
    pub types: Option<String>,
    pub components: Option<String>,
    pub sessiontoken: Option<String>,
    pub offset: Option<u32>,
    pub strictbounds: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlaceAutocompleteNearbyResponse {
    pub data: Vec<Prediction>,
}

/// The proxy has no position of its own, so the caller's coordinates stand
/// in for the device location.
pub async fn get_place_autocomplete_nearby(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetPlaceAutocompleteNearbyPayload>,
) -> Result<Response, AppError> {
    let query = AutocompleteQuery {
        language: payload.language,
        types: payload.types,
        components: payload.components,
        sessiontoken: payload.sessiontoken,
        offset: payload.offset,
        strictbounds: payload.strictbounds,
        ..Default::default()
    };

    let predictions = state
        .places_service
        .with_location_provider(Arc::new(StaticLocationProvider::new(
            payload.lat,
            payload.lng,
        )))
        .search_nearby(&payload.input, payload.radius, Some(&query))
        .await?;

    Ok(Json(GetPlaceAutocompleteNearbyResponse { data: predictions }).into_response())
}
