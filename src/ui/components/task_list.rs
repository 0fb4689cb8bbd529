use dioxus::prelude::*;

use super::status_badge::{BadgeTone, StatusBadge};
use crate::domain::{format_date, Task, TaskPriority, TaskStatus, Workspace};
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub assignee: String,
    pub due: String,
    pub overdue: bool,
    pub priority: TaskPriority,
    pub status: TaskStatus,
}

impl TaskRow {
    pub fn new(task: &Task, overdue: bool) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            assignee: task.assignee.clone(),
            due: format_date(task.due),
            overdue,
            priority: task.priority,
            status: task.status,
        }
    }
}

#[component]
pub fn TaskList(
    rows: Vec<TaskRow>,
    workspace: Workspace,
    on_advance: EventHandler<String>,
) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "rounded-xl border border-dashed border-slate-800 px-4 py-6 text-center text-sm {theme::text_muted(workspace)}",
                "No tasks here. Enjoy the quiet."
            }
        };
    }

    rsx! {
        ul { class: "space-y-2",
            for row in rows {
                TaskItem { key: "{row.id}", row, workspace, on_advance }
            }
        }
    }
}

#[component]
fn TaskItem(row: TaskRow, workspace: Workspace, on_advance: EventHandler<String>) -> Element {
    let (status_label, status_tone) = row.status.badge();
    let (priority_label, priority_tone) = row.priority.badge();
    let due_class = if row.overdue {
        "text-rose-300"
    } else {
        theme::text_muted(workspace)
    };
    let title_class = if row.status == TaskStatus::Done {
        "line-through text-slate-500"
    } else {
        theme::text_secondary(workspace)
    };
    let advance_label = match row.status.next() {
        TaskStatus::Open => "Reopen",
        TaskStatus::InProgress => "Start",
        TaskStatus::Done => "Complete",
    };
    let advance_id = row.id.clone();

    rsx! {
        li {
            class: "{theme::panel_border(workspace)} flex items-center justify-between gap-4 px-4 py-3",
            div {
                p { class: "text-sm font-medium {title_class}", "{row.title}" }
                p { class: "mt-1 text-xs {theme::text_muted(workspace)}",
                    "{row.assignee} · "
                    span { class: due_class, "due {row.due}" }
                }
            }
            div { class: "flex items-center gap-2",
                StatusBadge { label: priority_label, tone: priority_tone }
                StatusBadge { label: status_label, tone: status_tone }
                button {
                    class: "{theme::btn_small_inactive(workspace)}",
                    onclick: move |_| on_advance.call(advance_id.clone()),
                    "{advance_label}"
                }
            }
        }
    }
}
