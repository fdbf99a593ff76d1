use std::collections::HashMap;
use yew::prelude::*;
use crate::models::{Location, RouteItem};

#[derive(Properties, PartialEq, Clone)]
pub struct RouteListProps {
    pub routes: Vec<RouteItem>,
    #[prop_or_default]
    pub locations: HashMap<String, Location>, // clave: texto del item
}

/// Una línea en negrita por ruta, en el orden del servidor
#[function_component(RouteList)]
pub fn route_list(props: &RouteListProps) -> Html {
    html! {
        <div class="routes-stack">
            { for props.routes.iter().enumerate().map(|(idx, route)| {
                let location = props.locations.get(route.item.trim());
                html! {
                    <div class="route-row" key={idx}>
                        <b>{ route.item.clone() }</b>
                        if let Some(location) = location {
                            <span class="route-location">{ location.label() }</span>
                        }
                    </div>
                }
            }) }
        </div>
    }
}
