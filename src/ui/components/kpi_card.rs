use dioxus::prelude::*;

use crate::domain::Workspace;
use crate::ui::theme;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    workspace: Workspace,
    #[props(default)] alert: bool,
) -> Element {
    let value_class = if alert {
        "text-rose-300"
    } else {
        theme::text_secondary(workspace)
    };
    rsx! {
        div {
            class: "{theme::panel_border(workspace)} p-4 shadow-sm",
            h3 { class: "{theme::label_class(workspace)}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold {value_class}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::text_muted(workspace)}", "{desc}" }
            }
        }
    }
}
