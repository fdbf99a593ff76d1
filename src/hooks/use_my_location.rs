use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::Location;
use crate::services::GeoService;

/// Ubicación pública del navegador, pedida una vez al montar
#[hook]
pub fn use_my_location() -> UseStateHandle<Option<Location>> {
    let location = use_state(|| None::<Location>);

    {
        let location = location.clone();
        use_effect_with((), move |_| {
            if CONFIG.enable_geolocation {
                wasm_bindgen_futures::spawn_local(async move {
                    match GeoService::new().my_location().await {
                        Ok(found) => {
                            log::info!("🧭 Origen: {} ({})", found.city, found.ip);
                            location.set(Some(found));
                        }
                        Err(e) => log::warn!("⚠️ No se pudo obtener la ubicación propia: {}", e),
                    }
                });
            }
            || ()
        });
    }

    location
}
