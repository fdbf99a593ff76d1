pub mod use_routes;
pub mod use_locations;
pub mod use_my_location;

pub use use_routes::{use_routes, UseRoutesHandle};
pub use use_locations::{locatable_items, use_locations};
pub use use_my_location::use_my_location;
