use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    domain::{
        add_entry, search_entries, toggle_active, AppState, Currency, PackageUnit, RegistryError,
        RegistryKind, Terminal, Workspace,
    },
    ui::{
        components::{
            registry_table::{RegistryRow, RegistryTable},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::generate_id,
};

#[component]
pub fn RegistriesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut kind = use_signal(RegistryKind::default);
    let mut query = use_signal(String::new);

    let workspace = state.with(|st| st.workspace);
    let current = kind();
    let rows = state.with(|st| registry_rows(st, current, &query()));
    let detail_label = match current {
        RegistryKind::Terminals => "Location",
        RegistryKind::Currencies => "Symbol",
        RegistryKind::PackageUnits => "Volume",
    };

    let tabs = RegistryKind::ALL
        .into_iter()
        .map(|option| {
            let class = if option == current {
                theme::btn_small_active(workspace)
            } else {
                theme::btn_small_inactive(workspace)
            };
            (option, class)
        })
        .collect::<Vec<_>>();

    let on_toggle = move |id: String| {
        let mut state = state;
        let result = state.with_mut(|st| match current {
            RegistryKind::Terminals => toggle_active(&mut st.terminals, &id),
            RegistryKind::Currencies => toggle_active(&mut st.currencies, &id),
            RegistryKind::PackageUnits => toggle_active(&mut st.package_units, &id),
        });
        match result {
            Ok(active) => info!(%id, active, registry = current.label(), "registry entry toggled"),
            Err(err) => {
                warn!(%err, "toggle failed");
                push_toast(toasts, ToastKind::Error, err.to_string());
            }
        }
    };

    rsx! {
        div { class: "space-y-6",
            header { class: "flex flex-wrap items-end justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-semibold text-slate-100", "Registries" }
                    p { class: "text-sm {theme::text_secondary(workspace)}",
                        "Master data shared by rates, contracts and tasks."
                    }
                }
                div { class: "flex gap-1",
                    for (option, class) in tabs {
                        button {
                            class,
                            onclick: move |_| {
                                kind.set(option);
                                query.set(String::new());
                            },
                            "{option.label()}"
                        }
                    }
                }
            }

            input {
                class: "{theme::input_class(workspace)}",
                placeholder: "Search by code or name",
                value: query(),
                oninput: move |evt| query.set(evt.value()),
            }

            RegistryTable { rows, detail_label, workspace, on_toggle }

            AddEntryForm { key: "{current.label()}", kind: current, workspace }
        }
    }
}

fn registry_rows(state: &AppState, kind: RegistryKind, query: &str) -> Vec<RegistryRow> {
    match kind {
        RegistryKind::Terminals => search_entries(&state.terminals, query)
            .into_iter()
            .map(RegistryRow::from_entry)
            .collect(),
        RegistryKind::Currencies => search_entries(&state.currencies, query)
            .into_iter()
            .map(RegistryRow::from_entry)
            .collect(),
        RegistryKind::PackageUnits => search_entries(&state.package_units, query)
            .into_iter()
            .map(RegistryRow::from_entry)
            .collect(),
    }
}

/// Form fields for a new entry. `extra` is the kind-specific column:
/// "city, country" for terminals, the symbol for currencies, the volume for units.
#[derive(Clone, Debug, Default, PartialEq)]
struct EntryInput {
    code: String,
    name: String,
    extra: String,
}

fn insert_entry(
    state: &mut AppState,
    kind: RegistryKind,
    input: &EntryInput,
) -> Result<(), RegistryError> {
    let code = input.code.trim().to_uppercase();
    let name = input.name.trim().to_string();
    let extra = input.extra.trim();
    match kind {
        RegistryKind::Terminals => {
            let (city, country) = extra
                .split_once(',')
                .map(|(city, country)| (city.trim(), country.trim()))
                .unwrap_or((extra, ""));
            add_entry(
                &mut state.terminals,
                Terminal {
                    id: generate_id("ter"),
                    code,
                    name,
                    city: city.to_string(),
                    country: country.to_uppercase(),
                    active: true,
                },
            )
        }
        RegistryKind::Currencies => {
            if extra.is_empty() {
                return Err(RegistryError::MissingField("symbol"));
            }
            add_entry(
                &mut state.currencies,
                Currency {
                    id: generate_id("cur"),
                    code,
                    name,
                    symbol: extra.to_string(),
                    active: true,
                },
            )
        }
        RegistryKind::PackageUnits => add_entry(
            &mut state.package_units,
            PackageUnit {
                id: generate_id("pku"),
                code,
                name,
                volume_cbm: extra.replace(',', ".").parse().ok(),
                active: true,
            },
        ),
    }
}

#[component]
fn AddEntryForm(kind: RegistryKind, workspace: Workspace) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut input = use_signal(EntryInput::default);

    let extra_label = match kind {
        RegistryKind::Terminals => "City, country",
        RegistryKind::Currencies => "Symbol",
        RegistryKind::PackageUnits => "Volume m³ (optional)",
    };

    let on_add = move |_| {
        let mut state = state;
        let entry = input();
        match state.with_mut(|st| insert_entry(st, kind, &entry)) {
            Ok(()) => {
                info!(code = %entry.code, registry = kind.label(), "registry entry added");
                push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("Added {} to {}.", entry.code.trim().to_uppercase(), kind.label()),
                );
                input.set(EntryInput::default());
            }
            Err(err) => push_toast(toasts, ToastKind::Warning, err.to_string()),
        }
    };

    rsx! {
        section {
            class: "{theme::panel_border(workspace)} p-4",
            h2 { class: "{theme::label_class(workspace)}", "Add to {kind.label()}" }
            div { class: "mt-3 grid gap-3 sm:grid-cols-[8rem_1fr_1fr_auto] sm:items-end",
                div {
                    label { class: "{theme::label_class(workspace)}", "Code" }
                    input {
                        class: "{theme::input_class(workspace)}",
                        value: input().code,
                        oninput: move |evt| input.with_mut(|form| form.code = evt.value()),
                    }
                }
                div {
                    label { class: "{theme::label_class(workspace)}", "Name" }
                    input {
                        class: "{theme::input_class(workspace)}",
                        value: input().name,
                        oninput: move |evt| input.with_mut(|form| form.name = evt.value()),
                    }
                }
                div {
                    label { class: "{theme::label_class(workspace)}", "{extra_label}" }
                    input {
                        class: "{theme::input_class(workspace)}",
                        value: input().extra,
                        oninput: move |evt| input.with_mut(|form| form.extra = evt.value()),
                    }
                }
                button { class: "{theme::btn_primary(workspace)}", onclick: on_add, "Add" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(code: &str, name: &str, extra: &str) -> EntryInput {
        EntryInput {
            code: code.into(),
            name: name.into(),
            extra: extra.into(),
        }
    }

    #[test]
    fn terminal_location_is_split_on_comma() {
        let mut state = AppState::default();
        let entry = input("deham", "Hamburg CTA", "Hamburg, de");
        insert_entry(&mut state, RegistryKind::Terminals, &entry).unwrap();
        let terminal = &state.terminals[0];
        assert_eq!(terminal.code, "DEHAM");
        assert_eq!(terminal.city, "Hamburg");
        assert_eq!(terminal.country, "DE");
    }

    #[test]
    fn currency_needs_a_symbol() {
        let mut state = AppState::default();
        let entry = input("SEK", "Swedish krona", " ");
        let err = insert_entry(&mut state, RegistryKind::Currencies, &entry).unwrap_err();
        assert_eq!(err, RegistryError::MissingField("symbol"));
        assert!(state.currencies.is_empty());
    }

    #[test]
    fn package_unit_volume_accepts_decimal_comma() {
        let mut state = AppState::default();
        let entry = input("IBC", "Bulk container", "1,2");
        insert_entry(&mut state, RegistryKind::PackageUnits, &entry).unwrap();
        assert_eq!(state.package_units[0].volume_cbm, Some(1.2));
        insert_entry(&mut state, RegistryKind::PackageUnits, &input("BAG", "Bag", "")).unwrap();
        assert_eq!(state.package_units[1].volume_cbm, None);
    }

    #[test]
    fn duplicate_codes_are_rejected_across_case() {
        let mut state = AppState::default();
        insert_entry(&mut state, RegistryKind::PackageUnits, &input("PAL", "Pallet", "")).unwrap();
        let entry = input("pal", "Euro pallet", "");
        let err = insert_entry(&mut state, RegistryKind::PackageUnits, &entry).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateCode("PAL".into()));
    }
}
