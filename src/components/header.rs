use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::Location;

fn default_title() -> AttrValue {
    AttrValue::from(CONFIG.app_title.clone())
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_else(default_title)]
    pub title: AttrValue,
    #[prop_or_default]
    pub origin: Option<Location>, // IP pública del navegador, si se pudo ubicar
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="app-header">
            <h1>{ props.title.clone() }</h1>
            if let Some(origin) = &props.origin {
                <p class="app-origin">
                    { format!("Origin: {} · {}", origin.ip, origin.label()) }
                </p>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_title() {
        let html = yew::ServerRenderer::<Header>::with_props(|| HeaderProps {
            title: "Route Map".into(),
            origin: None,
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("<h1>Route Map</h1>"));
        assert!(!html.contains("app-origin"));
    }

    #[tokio::test]
    async fn renders_origin_when_known() {
        let html = yew::ServerRenderer::<Header>::with_props(|| HeaderProps {
            title: "Route Map".into(),
            origin: Some(Location {
                ip: "203.0.113.7".to_string(),
                longitude: 2.3522,
                latitude: 48.8566,
                city: "Paris".to_string(),
            }),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("Origin: 203.0.113.7 · Paris (2.3522, 48.8566)"));
    }
}
