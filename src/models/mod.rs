pub mod route;
pub mod location;

pub use route::{RouteItem, RoutesResponse};
pub use location::{GeoLookupResponse, Location};
