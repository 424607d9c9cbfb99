pub mod places_service;
pub mod query_params;
pub mod request;
pub mod response;
pub mod types;
