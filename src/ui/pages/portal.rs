use dioxus::prelude::*;

use crate::app::persist_user_state;
use crate::domain::{AppState, SegmentStyle, TextSegment, Workspace};
use crate::ui::components::typed_text::{TypedSegments, TypedText};

fn headline() -> Vec<TextSegment> {
    vec![
        TextSegment::plain("Move freight "),
        TextSegment::new("faster", SegmentStyle::Accent),
        TextSegment::plain(", price lanes "),
        TextSegment::new("smarter", SegmentStyle::Highlight),
        TextSegment::plain("."),
    ]
}

#[component]
pub fn PortalPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let select = move |workspace: Workspace| {
        let mut state = state;
        state.with_mut(|s| s.workspace = workspace);
        persist_user_state(&state);
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center p-8",
            div {
                class: "max-w-4xl w-full",
                div { class: "text-center mb-12",
                    h1 {
                        class: "text-4xl font-bold text-slate-100 mb-3 min-h-[3rem]",
                        TypedSegments { parts: headline(), looping: true }
                    }
                    p {
                        class: "text-xl text-slate-400",
                        TypedText {
                            text: "Which desk are you working from today?".to_string(),
                            class: "typed-muted".to_string(),
                        }
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                    WorkspaceCard {
                        workspace: Workspace::Operations,
                        description: "Dispatch, terminals and the daily task queue.",
                        features: vec![
                            "Task board with overdue alerts",
                            "Terminal & package-unit registries",
                            "Lane rate lookup",
                        ],
                        on_select: move |_| select(Workspace::Operations),
                    }
                    WorkspaceCard {
                        workspace: Workspace::Sales,
                        description: "Quote lanes and close contracts.",
                        features: vec!["Rate table with drafts", "Contract intake form", "Follow-up tasks"],
                        on_select: move |_| select(Workspace::Sales),
                    }
                    WorkspaceCard {
                        workspace: Workspace::Finance,
                        description: "Keep contracts and currencies in order.",
                        features: vec!["Contract overview", "Currency registry", "Average rates per mode"],
                        on_select: move |_| select(Workspace::Finance),
                    }
                }

                div { class: "text-center mt-12",
                    p { class: "text-sm text-slate-600",
                        "You can switch desks any time from the header."
                    }
                }
            }
        }
    }
}

#[component]
fn WorkspaceCard(
    workspace: Workspace,
    description: &'static str,
    features: Vec<&'static str>,
    on_select: EventHandler<()>,
) -> Element {
    let border_color = match workspace {
        Workspace::Operations => "border-sky-500/30 hover:border-sky-500/60 hover:bg-sky-500/5",
        Workspace::Sales => "border-emerald-500/30 hover:border-emerald-500/60 hover:bg-emerald-500/5",
        Workspace::Finance => "border-amber-500/30 hover:border-amber-500/60 hover:bg-amber-500/5",
        Workspace::None => "border-slate-700",
    };
    let accent_color = crate::ui::theme::accent_text(workspace);

    rsx! {
        div {
            class: "group relative rounded-2xl border-2 p-6 cursor-pointer transition-all duration-200 {border_color} bg-slate-900/60",
            onclick: move |_| on_select.call(()),
            div {
                class: "text-5xl mb-4 transition-transform group-hover:scale-110",
                "{workspace.emoji()}"
            }
            h2 {
                class: "text-2xl font-bold {accent_color} mb-2",
                "{workspace.name()}"
            }
            p {
                class: "text-sm text-slate-400 mb-4",
                "{description}"
            }
            ul { class: "space-y-1",
                for feature in features {
                    li {
                        class: "text-xs text-slate-500 flex items-center gap-2",
                        span { class: "text-slate-600", "›" }
                        "{feature}"
                    }
                }
            }
            div {
                class: "mt-6 text-center opacity-0 group-hover:opacity-100 transition-opacity",
                span {
                    class: "text-xs font-semibold {accent_color} uppercase tracking-wide",
                    "Open desk →"
                }
            }
        }
    }
}
