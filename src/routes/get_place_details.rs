use crate::{
    services::places_client::types::{
        place_details_query::PlaceDetailsQuery, place_details_result::PlaceDetails,
    },
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetPlaceDetailsPayload {
    pub language: Option<String>,
    #[validate(length(equal = 2, message = "Must be a two character region code"))]
    pub region: Option<String>,
    pub sessiontoken: Option<String>,
    pub fields: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlaceDetailsResponse {
    pub data: PlaceDetails,
}

pub async fn get_place_details(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
    ValidatedQuery(payload): ValidatedQuery<GetPlaceDetailsPayload>,
) -> Result<Response, AppError> {
    let query = PlaceDetailsQuery {
        language: payload.language,
        region: payload.region,
        sessiontoken: payload.sessiontoken,
        fields: payload.fields,
        ..Default::default()
    };

    let details = state
        .places_service
        .get_place_details(&place_id, Some(&query))
        .await?;

    Ok(Json(GetPlaceDetailsResponse { data: details }).into_response())
}
