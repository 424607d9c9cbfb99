//! Typed client for the place autocomplete and place details endpoints,
//! plus the pieces of a small HTTP proxy that exposes it.
//!
//! ```no_run
//! use gplaces::{Options, PlacesService};
//!
//! # async fn run() -> gplaces::Result<()> {
//! let places = PlacesService::new(Options::new("my-api-key"));
//! let predictions = places.search("coffee", None).await?;
//! if let Some(first) = predictions.first().and_then(|p| p.place_id()) {
//!     let details = places.get_place_details(first, None).await?;
//!     println!("{:?}", details.location());
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
mod middlewares;
mod routes;
pub mod services;
pub mod types;
pub mod utils;

pub use services::geolocation::{
    location_provider::{
        Coordinates, LocationError, LocationProvider, Position, PositionOptions,
        StaticLocationProvider,
    },
    platform::Platform,
};
pub use services::places_client::{
    places_service::{Options, PlacesService},
    query_params::{merge, QueryParams},
    types::{
        autocomplete_query::AutocompleteQuery,
        autocomplete_result::{AutocompleteResult, Prediction},
        place_details_query::PlaceDetailsQuery,
        place_details_result::{PlaceDetails, PlaceDetailsResult},
        places_service_error::{PlacesError, Result},
    },
};
