pub mod app;
pub mod header;
pub mod route_list;
pub mod routes;

pub use app::App;
pub use header::Header;
pub use route_list::RouteList;
pub use routes::{RefreshButton, Routes, RoutesContext};
