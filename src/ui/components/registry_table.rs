use dioxus::prelude::*;

use super::status_badge::{active_badge, StatusBadge};
use crate::domain::{RegistryEntry, Workspace};
use crate::ui::theme;

/// Flattened registry entry; the three registries share one table.
#[derive(Clone, PartialEq)]
pub struct RegistryRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub detail: String,
    pub active: bool,
}

impl RegistryRow {
    pub fn from_entry<T: RegistryEntry>(entry: &T) -> Self {
        Self {
            id: entry.id().to_string(),
            code: entry.code().to_string(),
            name: entry.name().to_string(),
            detail: entry.detail(),
            active: entry.is_active(),
        }
    }
}

#[component]
pub fn RegistryTable(
    rows: Vec<RegistryRow>,
    detail_label: &'static str,
    workspace: Workspace,
    on_toggle: EventHandler<String>,
) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "{theme::table_container(workspace)}",
            table {
                class: "min-w-full {theme::table_divider(workspace)} text-sm",
                thead {
                    class: "{theme::table_header(workspace)} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Code" }
                        th { class: "px-4 py-3 font-medium", "Name" }
                        th { class: "px-4 py-3 font-medium", "{detail_label}" }
                        th { class: "px-4 py-3 font-medium", "Status" }
                        th { class: "px-4 py-3" }
                    }
                }
                tbody {
                    class: "{theme::table_divider(workspace)}",
                    for row in rows {
                        RegistryRowView { key: "{row.id}", row, workspace, on_toggle }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm {theme::text_muted(workspace)}",
                                colspan: "5",
                                "Nothing registered under this search."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RegistryRowView(
    row: RegistryRow,
    workspace: Workspace,
    on_toggle: EventHandler<String>,
) -> Element {
    let (label, tone) = active_badge(row.active);
    let toggle_id = row.id.clone();
    let action = if row.active { "Deactivate" } else { "Activate" };
    rsx! {
        tr {
            class: "transition-colors hover:bg-slate-800/40",
            td { class: "px-4 py-3 font-mono text-xs {theme::accent_text(workspace)}", "{row.code}" }
            td { class: "px-4 py-3 font-medium {theme::text_secondary(workspace)}", "{row.name}" }
            td { class: "px-4 py-3 {theme::text_muted(workspace)}", "{row.detail}" }
            td { class: "px-4 py-3", StatusBadge { label, tone } }
            td {
                class: "px-4 py-3 text-right",
                button {
                    class: "{theme::btn_small_inactive(workspace)}",
                    onclick: move |_| on_toggle.call(toggle_id.clone()),
                    "{action}"
                }
            }
        }
    }
}
