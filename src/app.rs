use dioxus::prelude::*;
use tracing::debug;

use crate::{
    domain::{privacy::PRIVACY_STORAGE_KEY, AppState, PrivacySettings, Session},
    infra::LocalStorage,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{DashboardPage, EvaluatePage, MatchingPage, PrivacyPage, ResultsPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/evaluate")]
    Evaluate {},
    #[route("/results/:id")]
    Results { id: String },
    #[route("/matching")]
    Matching {},
    #[route("/privacy")]
    Privacy {},
}

/// Root component. Expects the restored [`Session`], the `ApiClient` and the
/// [`LocalStorage`] handle as launch contexts.
#[component]
pub fn App() -> Element {
    let session = use_context::<Session>();
    let storage = use_context::<LocalStorage>();

    let state = use_signal(move || {
        let privacy = storage
            .get_json::<PrivacySettings>(PRIVACY_STORAGE_KEY)
            .unwrap_or_default();
        debug!(authenticated = session.is_authenticated(), "initialising app state");
        AppState {
            session,
            privacy,
            ..AppState::default()
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::logo_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Evaluate() -> Element {
    rsx! { Shell { EvaluatePage {} } }
}

#[component]
pub fn Results(id: String) -> Element {
    rsx! { Shell { ResultsPage { id } } }
}

#[component]
pub fn Matching() -> Element {
    rsx! { Shell { MatchingPage {} } }
}

#[component]
pub fn Privacy() -> Element {
    rsx! { Shell { PrivacyPage {} } }
}
