pub mod autocomplete_query;
pub mod autocomplete_result;
pub mod place_details_query;
pub mod place_details_result;
pub mod places_service_error;
