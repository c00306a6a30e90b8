use dioxus::prelude::*;

use crate::{
    domain::CalculatorState,
    ui::{components::toast::{Toast, ToastMessage}, pages::CalculatorPage, shell::Shell},
    util::{assets, config},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| {
        let principal = config::active().default_principal;
        tracing::info!(principal, "starting calculator session");
        CalculatorState::with_principal(principal)
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}
