use dioxus::prelude::*;

use crate::{
    domain::{AppState, DashboardSummary, SegmentStyle, TextSegment, Workspace},
    ui::{
        components::{kpi_card::KpiCard, typed_text::TypedSegments},
        theme,
    },
    util::today,
};

fn greeting(workspace: Workspace) -> Vec<TextSegment> {
    vec![
        TextSegment::plain("Good to see you, "),
        TextSegment::new(workspace.name(), SegmentStyle::Accent),
        TextSegment::plain(" desk. Here is where things stand."),
    ]
}

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut revealed = use_signal(|| false);

    let workspace = state.with(|st| st.workspace);
    let summary = state.with(|st| DashboardSummary::from_state(st, today()));

    rsx! {
        div { class: "space-y-8",
            h2 {
                class: "text-2xl font-semibold min-h-[2rem]",
                TypedSegments {
                    key: "{workspace.name()}",
                    parts: greeting(workspace),
                    on_complete: move |_| revealed.set(true),
                }
            }

            if revealed() {
                DashboardCards { summary, workspace }
            } else {
                p { class: "text-sm {theme::text_muted(workspace)}", "Gathering figures…" }
            }
        }
    }
}

#[component]
fn DashboardCards(summary: DashboardSummary, workspace: Workspace) -> Element {
    let averages = summary
        .average_by_mode
        .iter()
        .map(|(mode, average)| (*mode, format!("{average:.2}")))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
            KpiCard {
                title: "Active rates".to_string(),
                value: summary.active_rates.to_string(),
                description: Some(format!("{} drafts awaiting review", summary.draft_rates)),
                workspace,
            }
            KpiCard {
                title: "Open tasks".to_string(),
                value: summary.open_tasks.to_string(),
                description: Some(format!("{} overdue", summary.overdue_tasks)),
                workspace,
                alert: summary.overdue_tasks > 0,
            }
            KpiCard {
                title: "Running contracts".to_string(),
                value: summary.running_contracts.to_string(),
                description: Some(format!("{} pending approval", summary.pending_contracts)),
                workspace,
            }
            KpiCard {
                title: "Active terminals".to_string(),
                value: summary.active_terminals.to_string(),
                workspace,
            }
        }

        section {
            class: "{theme::panel_border(workspace)} p-6",
            h3 { class: "{theme::label_class(workspace)}", "Average active rate per mode" }
            if averages.is_empty() {
                p { class: "mt-3 text-sm {theme::text_muted(workspace)}", "No active rates yet." }
            } else {
                ul { class: "mt-3 grid gap-2 sm:grid-cols-4",
                    for (mode, average) in averages {
                        li { class: "rounded-lg border border-slate-800 bg-slate-900/60 px-3 py-2",
                            span { class: "block text-xs {theme::text_muted(workspace)}", "{mode}" }
                            span { class: "text-lg font-semibold {theme::accent_text(workspace)}", "{average}" }
                        }
                    }
                }
            }
            p { class: "mt-3 text-xs {theme::text_muted(workspace)}", "Amounts are shown in their quoted currency without conversion." }
        }
    }
}
