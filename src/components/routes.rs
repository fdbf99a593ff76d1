use yew::prelude::*;
use crate::hooks::{use_locations, use_routes};
use crate::models::RouteItem;
use super::RouteList;

/// Contexto compartido con los descendientes de `Routes`
#[derive(Clone, PartialEq)]
pub struct RoutesContext {
    pub routes: Vec<RouteItem>,
    pub fetch_routes: Callback<()>,
}

#[function_component(Routes)]
pub fn routes() -> Html {
    let handle = use_routes();
    let locations = use_locations((*handle.routes).clone());

    let context = RoutesContext {
        routes: (*handle.routes).clone(),
        fetch_routes: handle.refresh.clone(),
    };

    html! {
        <ContextProvider<RoutesContext> context={context}>
            <section class="routes">
                <div class="routes-toolbar">
                    <RefreshButton loading={*handle.loading} />
                    if let Some(updated) = *handle.last_updated {
                        <span class="routes-updated">
                            { format!("Updated {}", updated.format("%H:%M:%S UTC")) }
                        </span>
                    }
                </div>
                if let Some(error) = (*handle.error).clone() {
                    <p class="routes-error">{ error }</p>
                }
                <RouteList routes={(*handle.routes).clone()} locations={(*locations).clone()} />
            </section>
        </ContextProvider<RoutesContext>>
    }
}

#[derive(Properties, PartialEq, Default)]
pub struct RefreshButtonProps {
    #[prop_or_default]
    pub loading: bool,
}

/// Vuelve a pedir la lista usando `fetch_routes` del contexto
#[function_component(RefreshButton)]
pub fn refresh_button(props: &RefreshButtonProps) -> Html {
    let context = use_context::<RoutesContext>();

    let onclick = {
        let fetch_routes = context.as_ref().map(|ctx| ctx.fetch_routes.clone());
        Callback::from(move |_: MouseEvent| {
            if let Some(fetch_routes) = &fetch_routes {
                log::info!("🔄 Refrescando rutas...");
                fetch_routes.emit(());
            }
        })
    };

    html! {
        <button
            class="btn-refresh"
            onclick={onclick}
            disabled={props.loading || context.is_none()}
        >
            { if props.loading { "Loading..." } else { "Refresh" } }
        </button>
    }
}
