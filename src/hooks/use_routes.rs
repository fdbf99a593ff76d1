use yew::prelude::*;
use chrono::{DateTime, Utc};
use crate::error::ApiError;
use crate::models::RouteItem;
use crate::services::ApiClient;

#[derive(Clone, PartialEq)]
pub struct UseRoutesHandle {
    pub routes: UseStateHandle<Vec<RouteItem>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub last_updated: UseStateHandle<Option<DateTime<Utc>>>,

    // Callbacks
    pub refresh: Callback<()>,
}

/// Numera los fetch; solo el último puede tocar el estado
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// Cambios de estado tras un fetch. `routes: None` => se conserva la lista actual.
#[derive(Debug, PartialEq)]
pub struct FetchOutcome {
    pub routes: Option<Vec<RouteItem>>,
    pub error: Option<String>,
}

pub fn apply_fetch_result(result: Result<Vec<RouteItem>, ApiError>) -> FetchOutcome {
    match result {
        Ok(fetched) => FetchOutcome { routes: Some(fetched), error: None },
        Err(e) => FetchOutcome { routes: None, error: Some(e.to_string()) },
    }
}

/// Estado de la lista de rutas: vacía al montar, se reemplaza entera en cada fetch correcto
#[hook]
pub fn use_routes() -> UseRoutesHandle {
    let routes = use_state(Vec::<RouteItem>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let last_updated = use_state(|| None::<DateTime<Utc>>);
    let seq = use_mut_ref(RequestSeq::default);

    let refresh = {
        let routes = routes.clone();
        let loading = loading.clone();
        let error = error.clone();
        let last_updated = last_updated.clone();

        Callback::from(move |_: ()| {
            let routes = routes.clone();
            let loading = loading.clone();
            let error = error.clone();
            let last_updated = last_updated.clone();
            let seq = seq.clone();
            let ticket = seq.borrow_mut().begin();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                let result = ApiClient::new().fetch_routes().await;

                if !seq.borrow().is_latest(ticket) {
                    log::debug!("⏭️ Respuesta #{} descartada, hay un fetch más reciente", ticket);
                    return;
                }

                let outcome = apply_fetch_result(result);
                match outcome.routes {
                    Some(fetched) => {
                        routes.set(fetched);
                        last_updated.set(Some(Utc::now()));
                    }
                    None => log::error!("❌ Error obteniendo rutas: {}", outcome.error.as_deref().unwrap_or_default()),
                }
                error.set(outcome.error);
                loading.set(false);
            });
        })
    };

    // Un único fetch al montar
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    UseRoutesHandle {
        routes,
        loading,
        error,
        last_updated,
        refresh,
    }
}
