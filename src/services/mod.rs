pub mod geolocation;
pub mod places_client;
