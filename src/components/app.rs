use yew::prelude::*;
use crate::hooks::use_my_location;
use super::{Header, Routes};

#[function_component(App)]
pub fn app() -> Html {
    let origin = use_my_location();

    html! {
        <main class="app">
            <Header origin={(*origin).clone()} />
            <Routes />
        </main>
    }
}
