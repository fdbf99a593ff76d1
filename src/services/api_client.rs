// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================

use gloo_net::http::Request;
use crate::config::{join_url, CONFIG};
use crate::error::ApiError;
use crate::models::{RouteItem, RoutesResponse};

/// Cliente del backend de rutas
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    routes_path: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
            routes_path: CONFIG.routes_path.clone(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            routes_path: CONFIG.routes_path.clone(),
        }
    }

    pub fn routes_url(&self) -> String {
        join_url(&self.base_url, &self.routes_path)
    }

    /// GET /routes
    pub async fn fetch_routes(&self) -> Result<Vec<RouteItem>, ApiError> {
        let url = self.routes_url();
        log::info!("🛣️ Obteniendo rutas: {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(ApiError::network)?;

        check_status(response.status(), &response.status_text())?;

        let body = response.text().await.map_err(ApiError::network)?;
        let routes = parse_routes(&body)?;
        log::info!("✅ Rutas obtenidas: {}", routes.len());
        Ok(routes)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Cualquier estado fuera de 2xx es `ApiError::Http`
pub fn check_status(status: u16, status_text: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Http { status, status_text: status_text.to_string() })
    }
}

/// Decodifica el sobre `{ "data": [...] }`
pub fn parse_routes(body: &str) -> Result<Vec<RouteItem>, ApiError> {
    serde_json::from_str::<RoutesResponse>(body)
        .map(|response| response.data)
        .map_err(ApiError::parse)
}
