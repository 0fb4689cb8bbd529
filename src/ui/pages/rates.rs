use dioxus::prelude::*;
use tracing::info;

use crate::{
    domain::{
        filter_rates, sort_rates, AppState, RateFilter, RateSort, RateStatus, TransportMode,
    },
    ui::{
        components::{
            rate_table::{RateRow, RateTable},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

const SORTS: [RateSort; 3] = [RateSort::ValidUntil, RateSort::AmountAsc, RateSort::AmountDesc];

#[component]
pub fn RatesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut query = use_signal(String::new);
    let mut mode = use_signal(|| None::<TransportMode>);
    let mut status = use_signal(|| None::<RateStatus>);
    let mut sort = use_signal(RateSort::default);

    let workspace = state.with(|st| st.workspace);
    let filter = RateFilter {
        query: query(),
        mode: mode(),
        status: status(),
    };
    let rows = state.with(|st| {
        let mut visible = filter_rates(&st.rates, &filter);
        sort_rates(&mut visible, sort());
        visible.iter().map(RateRow::from).collect::<Vec<_>>()
    });
    let total = state.with(|st| st.rates.len());
    let shown = rows.len();

    let sort_buttons = SORTS
        .into_iter()
        .map(|option| {
            let class = if sort() == option {
                theme::btn_small_active(workspace)
            } else {
                theme::btn_small_inactive(workspace)
            };
            (option, class)
        })
        .collect::<Vec<_>>();

    let on_publish = move |id: String| {
        set_status(state, toasts, &id, RateStatus::Active, "published");
    };
    let on_retire = move |id: String| {
        set_status(state, toasts, &id, RateStatus::Expired, "retired");
    };

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "Freight rates" }
                p { class: "text-sm {theme::text_secondary(workspace)}",
                    "Showing {shown} of {total} lane rates."
                }
            }

            section {
                class: "{theme::panel_border(workspace)} grid gap-4 p-4 sm:grid-cols-4",
                div {
                    label { class: "{theme::label_class(workspace)}", "Search" }
                    input {
                        class: "{theme::input_class(workspace)}",
                        placeholder: "Port, city or currency",
                        value: query(),
                        oninput: move |evt| query.set(evt.value()),
                    }
                }
                div {
                    label { class: "{theme::label_class(workspace)}", "Mode" }
                    select {
                        class: "{theme::input_class(workspace)}",
                        onchange: move |evt| mode.set(TransportMode::from_label(&evt.value())),
                        option { value: "", selected: mode().is_none(), "All modes" }
                        for option_mode in TransportMode::ALL {
                            option {
                                value: option_mode.label(),
                                selected: mode() == Some(option_mode),
                                "{option_mode.label()}"
                            }
                        }
                    }
                }
                div {
                    label { class: "{theme::label_class(workspace)}", "Status" }
                    select {
                        class: "{theme::input_class(workspace)}",
                        onchange: move |evt| status.set(RateStatus::from_label(&evt.value())),
                        option { value: "", selected: status().is_none(), "Any status" }
                        for option_status in RateStatus::ALL {
                            option {
                                value: option_status.label(),
                                selected: status() == Some(option_status),
                                "{option_status.label()}"
                            }
                        }
                    }
                }
                div {
                    label { class: "{theme::label_class(workspace)}", "Sort by" }
                    div { class: "mt-1 flex gap-1",
                        for (option_sort, class) in sort_buttons {
                            button {
                                class,
                                onclick: move |_| sort.set(option_sort),
                                "{option_sort.label()}"
                            }
                        }
                    }
                }
            }

            RateTable { rows, workspace, on_publish, on_retire }
        }
    }
}

fn set_status(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    id: &str,
    status: RateStatus,
    verb: &str,
) {
    let lane = state.with_mut(|st| {
        st.rates.iter_mut().find(|rate| rate.id == id).map(|rate| {
            rate.status = status;
            rate.lane()
        })
    });
    match lane {
        Some(lane) => {
            info!(%id, status = status.label(), "rate status changed");
            push_toast(toasts, ToastKind::Success, format!("Rate {lane} {verb}."));
        }
        None => push_toast(toasts, ToastKind::Error, format!("Rate {id} no longer exists.")),
    }
}
