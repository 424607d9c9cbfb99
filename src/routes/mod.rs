use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_place_autocomplete;
mod get_place_autocomplete_nearby;
mod get_place_details;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/place-autocomplete",
        get(get_place_autocomplete::get_place_autocomplete),
    )
    .route(
        "/place-autocomplete/nearby",
        get(get_place_autocomplete_nearby::get_place_autocomplete_nearby),
    )
    .route(
        "/place-details/:place_id",
        get(get_place_details::get_place_details),
    )
}
