use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::{Location, RouteItem};
use crate::services::geo_service::{is_public, GeoService};

/// Items de la lista que son IPs públicas, sin duplicados y en orden
pub fn locatable_items(routes: &[RouteItem]) -> Vec<String> {
    let mut ips: Vec<String> = Vec::new();
    for route in routes {
        if let Some(addr) = route.as_ip() {
            let ip = route.item.trim().to_string();
            if is_public(&addr) && !ips.contains(&ip) {
                ips.push(ip);
            }
        }
    }
    ips
}

/// Indexa por la IP pedida (= texto del item recortado), no por la que normaliza el servicio
pub fn locations_by_item(found: Vec<Location>) -> HashMap<String, Location> {
    found
        .into_iter()
        .map(|location| (location.ip.clone(), location))
        .collect()
}

/// Marca compartida entre el efecto y su tarea; el destructor del efecto la activa
#[derive(Clone, Default)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Ubicaciones indexadas por el texto del item; se recalcula cuando cambia la lista
#[hook]
pub fn use_locations(routes: Vec<RouteItem>) -> UseStateHandle<HashMap<String, Location>> {
    let locations = use_state(HashMap::<String, Location>::new);

    {
        let locations = locations.clone();
        use_effect_with(routes, move |routes| {
            let cancelled = CancelFlag::default();
            let ips = locatable_items(routes);

            if CONFIG.enable_geolocation && !ips.is_empty() {
                let cancelled = cancelled.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let found = GeoService::new().locate_all(&ips).await;
                    if cancelled.is_cancelled() {
                        log::debug!("⏭️ Ubicaciones de una lista anterior descartadas");
                        return;
                    }
                    locations.set(locations_by_item(found));
                });
            } else {
                locations.set(HashMap::new());
            }

            move || cancelled.cancel()
        });
    }

    locations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoLookupResponse;

    #[test]
    fn only_public_ips_are_located() {
        let routes = vec![
            RouteItem::new("192.168.1.1"),
            RouteItem::new("8.8.8.8"),
            RouteItem::new("core-router"),
            RouteItem::new(" 8.8.8.8"),
            RouteItem::new("1.1.1.1"),
        ];
        assert_eq!(locatable_items(&routes), vec!["8.8.8.8".to_string(), "1.1.1.1".to_string()]);
    }

    #[test]
    fn map_keys_match_item_text_when_service_normalises_ip() {
        let routes = vec![RouteItem::new("2001:4860:4860:0:0:0:0:8888")];
        let ips = locatable_items(&routes);
        let reply: GeoLookupResponse = serde_json::from_str(
            r#"{"ipAddress":"2001:4860:4860::8888","longitude":-122.08,"latitude":37.38,"cityName":"Mountain View"}"#,
        )
        .unwrap();

        let location = Location::from_lookup(Some(&ips[0]), reply).unwrap();
        let map = locations_by_item(vec![location]);

        assert!(map.contains_key(routes[0].item.trim()));
    }

    #[test]
    fn cancel_flag_is_shared_between_clones() {
        let flag = CancelFlag::default();
        let task_side = flag.clone();
        assert!(!task_side.is_cancelled());
        flag.cancel();
        assert!(task_side.is_cancelled());
    }
}
