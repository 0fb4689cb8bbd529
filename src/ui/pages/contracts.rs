use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    domain::{
        format_date, AppState, Contract, ContractDraft, SegmentStyle, TextSegment, TransportMode,
        Workspace,
    },
    infra::mock_api::MockApi,
    ui::{
        components::{
            status_badge::{BadgeTone, StatusBadge},
            toast::{push_toast, ToastKind, ToastMessage},
            typed_text::TypedSegments,
        },
        theme,
    },
    util::{generate_id, today},
};

#[component]
pub fn ContractsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut draft = use_signal(ContractDraft::default);
    let mut submitting = use_signal(|| false);
    let mut last_accepted = use_signal(|| None::<String>);

    let workspace = state.with(|st| st.workspace);
    let contracts = state.with(|st| {
        let mut list = st.contracts.clone();
        list.sort_by(|a, b| b.start.cmp(&a.start));
        list
    });

    let on_submit = move |_| {
        if submitting() {
            return;
        }
        let contract = match draft().validate(generate_id("con")) {
            Ok(contract) => contract,
            Err(err) => {
                push_toast(toasts, ToastKind::Warning, capitalize(&err.to_string()));
                return;
            }
        };
        let (api, existing) =
            state.with(|st| (MockApi::new(st.api_latency()), st.contracts.clone()));
        submitting.set(true);
        spawn(async move {
            let mut state = state;
            match api.submit_contract(contract, &existing).await {
                Ok(accepted) => {
                    info!(reference = %accepted.reference, "contract submitted");
                    last_accepted.set(Some(accepted.reference.clone()));
                    state.with_mut(|st| st.contracts.push(accepted));
                    draft.set(ContractDraft::default());
                }
                Err(err) => {
                    warn!(%err, "contract submission failed");
                    push_toast(toasts, ToastKind::Error, err.to_string());
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "Contracts" }
                p { class: "text-sm {theme::text_secondary(workspace)}",
                    "New contracts start as pending until operations confirms capacity."
                }
            }

            if let Some(reference) = last_accepted() {
                div {
                    class: "rounded-lg border border-emerald-500/30 bg-emerald-500/10 px-4 py-3 text-sm",
                    TypedSegments {
                        key: "{reference}",
                        parts: vec![
                            TextSegment::plain("Contract "),
                            TextSegment::new(reference.clone(), SegmentStyle::Highlight),
                            TextSegment::plain(" received and queued for approval."),
                        ],
                    }
                }
            }

            section {
                class: "{theme::panel_border(workspace)} p-4",
                h2 { class: "{theme::label_class(workspace)}", "New contract" }
                div { class: "mt-3 grid gap-3 sm:grid-cols-3",
                    DraftField {
                        label: "Reference",
                        value: draft().reference,
                        workspace,
                        oninput: move |value| draft.with_mut(|d| d.reference = value),
                    }
                    DraftField {
                        label: "Customer",
                        value: draft().customer,
                        workspace,
                        oninput: move |value| draft.with_mut(|d| d.customer = value),
                    }
                    div {
                        label { class: "{theme::label_class(workspace)}", "Mode" }
                        select {
                            class: "{theme::input_class(workspace)}",
                            onchange: move |evt| draft.with_mut(|d| d.mode = evt.value()),
                            for mode in TransportMode::ALL {
                                option {
                                    value: mode.label(),
                                    selected: draft().mode == mode.label(),
                                    "{mode.label()}"
                                }
                            }
                        }
                    }
                    DraftField {
                        label: "Start",
                        value: draft().start,
                        input_type: "date",
                        workspace,
                        oninput: move |value| draft.with_mut(|d| d.start = value),
                    }
                    DraftField {
                        label: "End",
                        value: draft().end,
                        input_type: "date",
                        workspace,
                        oninput: move |value| draft.with_mut(|d| d.end = value),
                    }
                    DraftField {
                        label: "Monthly volume (TEU)",
                        value: draft().monthly_volume_teu,
                        workspace,
                        oninput: move |value| draft.with_mut(|d| d.monthly_volume_teu = value),
                    }
                    div { class: "sm:col-span-2",
                        DraftField {
                            label: "Customer portal URL (optional)",
                            value: draft().portal_url,
                            workspace,
                            oninput: move |value| draft.with_mut(|d| d.portal_url = value),
                        }
                    }
                    div { class: "flex items-end",
                        button {
                            class: "w-full {theme::btn_primary(workspace)}",
                            disabled: submitting(),
                            onclick: on_submit,
                            if submitting() { "Submitting…" } else { "Submit contract" }
                        }
                    }
                }
            }

            ContractList { contracts, workspace }
        }
    }
}

#[component]
fn DraftField(
    label: &'static str,
    value: String,
    #[props(default = "text")] input_type: &'static str,
    workspace: Workspace,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label { class: "{theme::label_class(workspace)}", "{label}" }
            input {
                class: "{theme::input_class(workspace)}",
                r#type: input_type,
                value,
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
fn ContractList(contracts: Vec<Contract>, workspace: Workspace) -> Element {
    if contracts.is_empty() {
        return rsx! {
            p { class: "text-sm {theme::text_muted(workspace)}", "No contracts on file." }
        };
    }
    let now = today();
    let rows = contracts
        .into_iter()
        .map(|contract| {
            let (label, tone) = contract.status.badge();
            let period = format!(
                "{} – {}",
                format_date(contract.start),
                format_date(contract.end)
            );
            let running = contract.is_running(now);
            (contract, label, tone, period, running)
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "{theme::table_container(workspace)}",
            table {
                class: "min-w-full {theme::table_divider(workspace)} text-sm",
                thead {
                    class: "{theme::table_header(workspace)} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Reference" }
                        th { class: "px-4 py-3 font-medium", "Customer" }
                        th { class: "px-4 py-3 font-medium", "Mode" }
                        th { class: "px-4 py-3 font-medium", "Period" }
                        th { class: "px-4 py-3 font-medium text-right", "TEU / month" }
                        th { class: "px-4 py-3 font-medium", "Status" }
                    }
                }
                tbody {
                    class: "{theme::table_divider(workspace)}",
                    for (contract, label, tone, period, running) in rows {
                        tr { key: "{contract.id}",
                            td { class: "px-4 py-3 font-mono text-xs {theme::accent_text(workspace)}",
                                if let Some(url) = contract.portal_url.clone() {
                                    a { href: url, target: "_blank", rel: "noreferrer", class: "underline", "{contract.reference}" }
                                } else {
                                    "{contract.reference}"
                                }
                            }
                            td { class: "px-4 py-3 {theme::text_secondary(workspace)}", "{contract.customer}" }
                            td { class: "px-4 py-3 {theme::text_muted(workspace)}", "{contract.mode.label()}" }
                            td { class: "px-4 py-3 {theme::text_muted(workspace)}",
                                "{period}"
                                if running {
                                    span { class: "ml-2 text-xs text-emerald-300", "running" }
                                }
                            }
                            td { class: "px-4 py-3 text-right tabular-nums {theme::text_secondary(workspace)}", "{contract.monthly_volume_teu}" }
                            td { class: "px-4 py-3", StatusBadge { label, tone } }
                        }
                    }
                }
            }
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validation_messages_start_upper_case() {
        assert_eq!(capitalize("reference is required"), "Reference is required");
        assert_eq!(capitalize(""), "");
    }
}
