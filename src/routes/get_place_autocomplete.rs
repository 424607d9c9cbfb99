use crate::{
    services::places_client::types::{
        autocomplete_query::AutocompleteQuery, autocomplete_result::Prediction,
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
pub struct GetPlaceAutocompletePayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub input: String,
    pub language: Option<String>,
    pub types: Option<String>,
    pub components: Option<String>,
    pub sessiontoken: Option<String>,
    pub offset: Option<u32>,
    pub strictbounds: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlaceAutocompleteResponse {
    pub data: Vec<Prediction>,
}

pub async fn get_place_autocomplete(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetPlaceAutocompletePayload>,
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
        .search(&payload.input, Some(&query))
        .await?;

    Ok(Json(GetPlaceAutocompleteResponse { data: predictions }).into_response())
}
