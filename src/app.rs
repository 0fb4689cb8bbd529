use dioxus::{prelude::*, signals::Signal};
use tracing::{info, warn};

use crate::{
    domain::{expire_outdated, AppState},
    infra::mock_data::SeedData,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{
            ContractsPage, DashboardPage, RatesPage, RegistriesPage, SettingsPage, TasksPage,
        },
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_preferences, save_preferences},
        today,
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/rates")]
    Rates {},
    #[route("/contracts")]
    Contracts {},
    #[route("/registries")]
    Registries {},
    #[route("/tasks")]
    Tasks {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let state = use_signal(|| initial_state(toasts));
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Preferences from disk plus the bundled seed records.
fn initial_state(toasts: Signal<Vec<ToastMessage>>) -> AppState {
    let mut state = AppState {
        api_latency_ms: crate::domain::app_state::DEFAULT_API_LATENCY_MS,
        ..AppState::default()
    };
    if let Some(saved) = load_preferences() {
        state.apply_persisted(saved);
    }

    match SeedData::load() {
        Ok(seed) => seed.apply_to(&mut state),
        Err(err) => {
            warn!(%err, "starting without seed data");
            push_toast(toasts, ToastKind::Error, format!("Failed to load sample data: {err}"));
        }
    }

    let expired = expire_outdated(&mut state.rates, today());
    if expired > 0 {
        info!(expired, "expired outdated rates");
        push_toast(
            toasts,
            ToastKind::Info,
            format!("{expired} rate(s) passed their validity date and were expired."),
        );
    }
    state
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_preferences(&snapshot) {
        warn!(%err, "failed to persist preferences");
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Rates() -> Element {
    rsx! { Shell { RatesPage {} } }
}

#[component]
pub fn Contracts() -> Element {
    rsx! { Shell { ContractsPage {} } }
}

#[component]
pub fn Registries() -> Element {
    rsx! { Shell { RegistriesPage {} } }
}

#[component]
pub fn Tasks() -> Element {
    rsx! { Shell { TasksPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
