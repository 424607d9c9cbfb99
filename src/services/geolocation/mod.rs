pub mod location_provider;
pub mod platform;
