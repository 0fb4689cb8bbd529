use dioxus::prelude::*;

use crate::app::{persist_user_state, Route};
use crate::domain::{AppState, Workspace};
use crate::ui::{pages::PortalPage, theme};
use crate::util::version::version_label;

const SWITCHABLE: [Workspace; 3] = [Workspace::Operations, Workspace::Sales, Workspace::Finance];

/// Navigation entries per desk, in display order.
fn nav_entries(workspace: Workspace) -> Vec<(Route, &'static str)> {
    match workspace {
        Workspace::Operations => vec![
            (Route::Dashboard {}, "📊 Overview"),
            (Route::Tasks {}, "✅ Tasks"),
            (Route::Registries {}, "🗂️ Registries"),
            (Route::Rates {}, "💲 Rates"),
        ],
        Workspace::Sales => vec![
            (Route::Dashboard {}, "📊 Overview"),
            (Route::Rates {}, "💲 Rates"),
            (Route::Contracts {}, "📝 Contracts"),
            (Route::Tasks {}, "✅ Tasks"),
        ],
        Workspace::Finance | Workspace::None => vec![
            (Route::Dashboard {}, "📊 Overview"),
            (Route::Contracts {}, "📝 Contracts"),
            (Route::Rates {}, "💲 Rates"),
            (Route::Registries {}, "🗂️ Registries"),
        ],
    }
}

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let workspace = state.with(|s| s.workspace);
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    if !workspace.is_selected() {
        return rsx! {
            div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
                PortalPage {}
            }
        };
    }

    let links = nav_entries(workspace)
        .into_iter()
        .map(|(route, label)| {
            let active = route == current_route;
            (route, label, active)
        })
        .collect::<Vec<_>>();
    let settings_active = matches!(current_route, Route::Settings {});

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/90 backdrop-blur px-6 py-4",
                div { class: "mx-auto grid max-w-6xl grid-cols-[1fr_auto_1fr] items-center gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "{workspace.emoji()}" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight {theme::accent_text(workspace)}", "{workspace.name()}" }
                            p { class: "text-xs text-slate-500 italic", "{workspace.tagline()}" }
                        }
                    }

                    div { class: "flex gap-1 justify-center",
                        for option in SWITCHABLE {
                            WorkspaceButton {
                                active: option == workspace,
                                workspace: option,
                                onclick: move |_| {
                                    let mut state = state;
                                    state.with_mut(|s| s.workspace = option);
                                    persist_user_state(&state);
                                },
                            }
                        }
                    }

                    nav { class: "flex gap-2 text-sm justify-end",
                        for (route, label, active) in links {
                            button {
                                class: theme::nav_button(workspace, active),
                                onclick: move |_| { nav.push(route.clone()); },
                                "{label}"
                            }
                        }
                        button {
                            class: theme::nav_button(workspace, settings_active),
                            title: "Settings",
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            "⚙️"
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "pb-6 text-center text-xs text-slate-700", "Freight Console {version_label()}" }
        }
    }
}

#[component]
fn WorkspaceButton(active: bool, workspace: Workspace, onclick: EventHandler<()>) -> Element {
    let class = if active {
        theme::btn_small_active(workspace)
    } else {
        theme::btn_small_inactive(workspace)
    };
    rsx! {
        button {
            class: "min-w-[6rem] {class}",
            onclick: move |_| onclick.call(()),
            "{workspace.emoji()} {workspace.name()}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_desk_starts_at_the_overview() {
        for workspace in SWITCHABLE {
            let entries = nav_entries(workspace);
            assert!(matches!(entries[0].0, Route::Dashboard {}));
            assert!(!entries.iter().any(|(route, _)| matches!(route, Route::Settings {})));
        }
    }
}
