use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::{
    query_params::{merge, QueryParams},
    request::fetch_json,
    response::{validate_autocomplete, validate_details},
    types::{
        autocomplete_query::AutocompleteQuery,
        autocomplete_result::Prediction,
        place_details_query::PlaceDetailsQuery,
        place_details_result::PlaceDetails,
        places_service_error::{PlacesError, Result},
    },
};
use crate::services::geolocation::{
    location_provider::{
        LocationError, LocationProvider, PositionOptions, UnavailableLocationProvider,
    },
    platform::Platform,
};

pub const DEFAULT_HOST: &str = "https://maps.googleapis.com";
pub const AUTOCOMPLETE_PATH: &str = "/maps/api/place/autocomplete/json";
pub const DETAILS_PATH: &str = "/maps/api/place/details/json";

/// Meters searched around the current position when no radius is given.
pub const DEFAULT_RADIUS: f64 = 1000.0;

#[derive(Clone, Debug)]
pub struct Options {
    /// Sent verbatim as `key=<value>` on every request.
    pub key: String,
    /// Applied to every autocomplete request, beneath per-call overrides.
    pub query: Option<AutocompleteQuery>,
}

impl Options {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            query: None,
        }
    }

    pub fn with_query(mut self, query: AutocompleteQuery) -> Self {
        self.query = Some(query);
        self
    }
}

/// Client for the place autocomplete and place details endpoints.
///
/// Every call is a single pass: merge parameters, fetch, check the shape,
/// return the payload untouched. Nothing is cached between calls, so a
/// service can be cloned and used from many tasks at once.
#[derive(Clone)]
pub struct PlacesService {
    options: Options,
    host: String,
    platform: Platform,
    location_provider: Arc<dyn LocationProvider>,
    client: reqwest::Client,
}

impl PlacesService {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            host: DEFAULT_HOST.to_string(),
            platform: Platform::current(),
            location_provider: Arc::new(UnavailableLocationProvider),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_location_provider(mut self, provider: Arc<dyn LocationProvider>) -> Self {
        self.location_provider = provider;
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Autocomplete search for `input`.
    pub async fn search(
        &self,
        input: &str,
        query: Option<&AutocompleteQuery>,
    ) -> Result<Vec<Prediction>> {
        let input = require_non_empty(input, "Invalid input string given.")?;

        let defaults: QueryParams = [("language", "en"), ("types", "establishment")]
            .into_iter()
            .collect();
        let mut computed = QueryParams::new();
        computed.set("key", &self.options.key).set("input", input);

        let params = merge([
            defaults,
            computed,
            QueryParams::from_serializable(&self.options.query)?,
            QueryParams::from_serializable(&query)?,
        ]);

        self.autocomplete(params).await
    }

    /// Autocomplete search restricted to `radius` meters around the current
    /// position reported by the location provider.
    pub async fn search_nearby(
        &self,
        input: &str,
        radius: Option<f64>,
        query: Option<&AutocompleteQuery>,
    ) -> Result<Vec<Prediction>> {
        let input = require_non_empty(input, "Invalid input string given.")?;
        let radius = match radius {
            None => DEFAULT_RADIUS,
            Some(r) if r.is_finite() && r > 0.0 => r,
            Some(r) => {
                return Err(PlacesError::invalid_argument(format!(
                    "Invalid radius given: {}",
                    r
                )))
            }
        };

        let position_options = PositionOptions::for_platform(self.platform);
        let position = tokio::time::timeout(
            position_options.timeout,
            self.location_provider.current_position(&position_options),
        )
        .await
        .map_err(|_| LocationError::Timeout)??;

        if !position.coords.is_usable() {
            return Err(PlacesError::LocationUnavailable(
                "No latitude/longitude for current location found.".to_string(),
            ));
        }

        let mut defaults: QueryParams = [("language", "en"), ("types", "establishment")]
            .into_iter()
            .collect();
        defaults.set("strictbounds", true);
        let mut computed = QueryParams::new();
        computed
            .set("key", &self.options.key)
            .set("input", input)
            .set("radius", radius)
            .set("location", position.coords.to_location_param());

        let params = merge([
            defaults,
            computed,
            QueryParams::from_serializable(&self.options.query)?,
            QueryParams::from_serializable(&query)?,
        ]);

        self.autocomplete(params).await
    }

    /// Full details for a single place id.
    pub async fn get_place_details(
        &self,
        placeid: &str,
        query: Option<&PlaceDetailsQuery>,
    ) -> Result<PlaceDetails> {
        let placeid = require_non_empty(placeid, "Invalid place id given.")?;

        let defaults: QueryParams = [("language", "en"), ("fields", "geometry")]
            .into_iter()
            .collect();
        let mut computed = QueryParams::new();
        computed.set("key", &self.options.key).set("placeid", placeid);

        let params = merge([defaults, computed, QueryParams::from_serializable(&query)?]);

        let payload = self.get(DETAILS_PATH, &params).await?;
        validate_details(payload)
    }

    async fn autocomplete(&self, params: QueryParams) -> Result<Vec<Prediction>> {
        let payload = self.get(AUTOCOMPLETE_PATH, &params).await?;
        validate_autocomplete(payload)
    }

    async fn get(&self, path: &str, params: &QueryParams) -> Result<Value> {
        debug!(endpoint = path, params = params.len(), "requesting places endpoint");

        let url = format!("{}{}?{}", self.host, path, params.to_query_string());
        fetch_json(&self.client, &url).await
    }
}

fn require_non_empty<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(PlacesError::invalid_argument(message));
    }
    Ok(value)
}
