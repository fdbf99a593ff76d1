// ============================================================================
// ROUTE MAP - FRONTEND YEW (WASM)
// ============================================================================
// - Components: Header + Routes (lista de rutas del backend)
// - Hooks: estado de la lista y geolocalización
// - Services: SOLO comunicación HTTP
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;

use crate::components::App;
use crate::config::CONFIG;

/// Id del contenedor en index.html
pub const ROOT_ELEMENT_ID: &str = "root";

/// Arranca la aplicación: panic hook, logging y render en `#root`
pub fn run() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 {} starting (backend: {})", CONFIG.app_title, CONFIG.backend_url);

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ROOT_ELEMENT_ID));

    match root {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            log::warn!("⚠️ No #{} element found, rendering into <body>", ROOT_ELEMENT_ID);
            yew::Renderer::<App>::new().render();
        }
    }
}
