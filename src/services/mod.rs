pub mod api_client;
pub mod geo_service;

pub use api_client::{check_status, parse_routes, ApiClient};
pub use geo_service::GeoService;
