use dioxus::prelude::*;

use super::status_badge::{BadgeTone, StatusBadge};
use crate::domain::{format_date, FreightRate, RateStatus, Workspace};
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct RateRow {
    pub id: String,
    pub lane: String,
    pub mode: &'static str,
    pub price: String,
    pub unit: String,
    pub valid_until: String,
    pub status: RateStatus,
}

impl From<&FreightRate> for RateRow {
    fn from(rate: &FreightRate) -> Self {
        Self {
            id: rate.id.clone(),
            lane: rate.lane(),
            mode: rate.mode.label(),
            price: format!("{:.2} {}", rate.amount, rate.currency),
            unit: rate.package_unit.clone(),
            valid_until: format_date(rate.valid_until),
            status: rate.status,
        }
    }
}

#[component]
pub fn RateTable(
    rows: Vec<RateRow>,
    workspace: Workspace,
    on_publish: EventHandler<String>,
    on_retire: EventHandler<String>,
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
                        th { class: "px-4 py-3 font-medium", "Lane" }
                        th { class: "px-4 py-3 font-medium", "Mode" }
                        th { class: "px-4 py-3 font-medium text-right", "Rate" }
                        th { class: "px-4 py-3 font-medium", "Unit" }
                        th { class: "px-4 py-3 font-medium", "Valid until" }
                        th { class: "px-4 py-3 font-medium", "Status" }
                        th { class: "px-4 py-3" }
                    }
                }
                tbody {
                    class: "{theme::table_divider(workspace)}",
                    for row in rows {
                        RateRowView { key: "{row.id}", row, workspace, on_publish, on_retire }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm {theme::text_muted(workspace)}",
                                colspan: "7",
                                "No rates match the current filter."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RateRowView(
    row: RateRow,
    workspace: Workspace,
    on_publish: EventHandler<String>,
    on_retire: EventHandler<String>,
) -> Element {
    let (label, tone) = row.status.badge();
    let publish_id = row.id.clone();
    let retire_id = row.id.clone();
    rsx! {
        tr {
            class: "transition-colors hover:bg-slate-800/40",
            td { class: "px-4 py-3 font-medium {theme::text_secondary(workspace)}", "{row.lane}" }
            td { class: "px-4 py-3 {theme::text_muted(workspace)}", "{row.mode}" }
            td { class: "px-4 py-3 text-right tabular-nums {theme::text_secondary(workspace)}", "{row.price}" }
            td { class: "px-4 py-3 {theme::text_muted(workspace)}", "{row.unit}" }
            td { class: "px-4 py-3 {theme::text_muted(workspace)}", "{row.valid_until}" }
            td { class: "px-4 py-3", StatusBadge { label, tone } }
            td {
                class: "px-4 py-3 text-right",
                match row.status {
                    RateStatus::Draft => rsx! {
                        button {
                            class: "{theme::btn_small_active(workspace)}",
                            onclick: move |_| on_publish.call(publish_id.clone()),
                            "Publish"
                        }
                    },
                    RateStatus::Active => rsx! {
                        button {
                            class: "{theme::btn_small_inactive(workspace)}",
                            onclick: move |_| on_retire.call(retire_id.clone()),
                            "Retire"
                        }
                    },
                    RateStatus::Expired => rsx! { Fragment {} },
                }
            }
        }
    }
}
