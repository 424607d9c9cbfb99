use crate::{
    middlewares::auth::auth_middleware, routes::apply_routes,
    services::places_client::places_service::PlacesService, types::app_state::AppState,
};
use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn gen_app(places_service: PlacesService, auth_key: Option<String>) -> Router {
    let cors_middleware = CorsLayer::new();
    let state = AppState {
        places_service,
        auth_key,
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

// basic handler that responds with a static string
async fn root() -> &'static str {
    "Hello, World!"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub google_server: mockito::ServerGuard,
}

/// App wired to a local mock of the places endpoints.
#[cfg(test)]
pub async fn gen_mock_app(auth_key: Option<String>) -> MockApp {
    use crate::services::places_client::places_service::Options;

    let google_server = mockito::Server::new_async().await;
    let places_service =
        PlacesService::new(Options::new("test-key")).with_host(google_server.url());

    MockApp {
        app: gen_app(places_service, auth_key),
        google_server,
    }
}
