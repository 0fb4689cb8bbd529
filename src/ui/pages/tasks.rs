use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    domain::{
        advance_status, filter_tasks, is_overdue, parse_iso_date, tasks::count_by_status,
        AppState, Task, TaskFilter, TaskPriority, TaskStatus,
    },
    infra::mock_api::MockApi,
    ui::{
        components::{
            task_list::{TaskList, TaskRow},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::{generate_id, today},
};

#[derive(Clone, Debug, PartialEq)]
struct TaskForm {
    title: String,
    assignee: String,
    due: String,
    priority: TaskPriority,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            assignee: String::new(),
            due: String::new(),
            priority: TaskPriority::Normal,
        }
    }
}

impl TaskForm {
    fn build(&self, id: String) -> Result<Task, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Give the task a title.".to_string());
        }
        let due = parse_iso_date(&self.due)
            .ok_or_else(|| "Due date must be a valid date (YYYY-MM-DD).".to_string())?;
        let assignee = match self.assignee.trim() {
            "" => "Unassigned",
            name => name,
        };
        Ok(Task {
            id,
            title: title.to_string(),
            assignee: assignee.to_string(),
            due,
            priority: self.priority,
            status: TaskStatus::Open,
        })
    }
}

#[component]
pub fn TasksPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut filter = use_signal(TaskFilter::default);
    let mut form = use_signal(TaskForm::default);
    let mut saving = use_signal(|| false);

    let workspace = state.with(|st| st.workspace);
    let now = today();
    let current_filter = filter();
    let rows = state.with(|st| {
        filter_tasks(&st.tasks, &current_filter, now)
            .iter()
            .map(|task| TaskRow::new(task, is_overdue(task, now)))
            .collect::<Vec<_>>()
    });
    let counts = state.with(|st| {
        TaskStatus::ALL
            .into_iter()
            .map(|status| (status, count_by_status(&st.tasks, status)))
            .collect::<Vec<_>>()
    });
    let overdue_class = if current_filter.only_overdue {
        theme::btn_small_active(workspace)
    } else {
        theme::btn_small_inactive(workspace)
    };

    let on_advance = move |id: String| {
        let mut state = state;
        match state.with_mut(|st| advance_status(&mut st.tasks, &id)) {
            Some(status) => info!(%id, status = status.label(), "task advanced"),
            None => push_toast(toasts, ToastKind::Error, format!("Task {id} no longer exists.")),
        }
    };

    let on_create = move |_| {
        if saving() {
            return;
        }
        let task = match form().build(generate_id("task")) {
            Ok(task) => task,
            Err(message) => {
                push_toast(toasts, ToastKind::Warning, message);
                return;
            }
        };
        let api = MockApi::new(state.peek().api_latency());
        saving.set(true);
        spawn(async move {
            let mut state = state;
            match api.save_task(task).await {
                Ok(task) => {
                    info!(id = %task.id, "task created");
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        format!("Task \"{}\" created.", task.title),
                    );
                    state.with_mut(|st| st.tasks.push(task));
                    form.set(TaskForm::default());
                }
                Err(err) => {
                    warn!(%err, "saving task failed");
                    push_toast(toasts, ToastKind::Error, err.to_string());
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "Tasks" }
                p { class: "text-sm {theme::text_secondary(workspace)}",
                    for (status, count) in counts {
                        span { class: "mr-4", "{status.label()}: {count}" }
                    }
                }
            }

            section {
                class: "{theme::panel_border(workspace)} grid gap-4 p-4 sm:grid-cols-[1fr_12rem_auto] sm:items-end",
                div {
                    label { class: "{theme::label_class(workspace)}", "Search" }
                    input {
                        class: "{theme::input_class(workspace)}",
                        placeholder: "Title or assignee",
                        value: current_filter.query.clone(),
                        oninput: move |evt| filter.with_mut(|f| f.query = evt.value()),
                    }
                }
                div {
                    label { class: "{theme::label_class(workspace)}", "Status" }
                    select {
                        class: "{theme::input_class(workspace)}",
                        onchange: move |evt| {
                            let status = TaskStatus::from_label(&evt.value());
                            filter.with_mut(|f| f.status = status);
                        },
                        option { value: "", selected: current_filter.status.is_none(), "All" }
                        for status in TaskStatus::ALL {
                            option {
                                value: status.label(),
                                selected: current_filter.status == Some(status),
                                "{status.label()}"
                            }
                        }
                    }
                }
                button {
                    class: overdue_class,
                    onclick: move |_| filter.with_mut(|f| f.only_overdue = !f.only_overdue),
                    "Overdue only"
                }
            }

            TaskList { rows, workspace, on_advance }

            section {
                class: "{theme::panel_border(workspace)} p-4",
                h2 { class: "{theme::label_class(workspace)}", "New task" }
                div { class: "mt-3 grid gap-3 sm:grid-cols-[1fr_10rem_10rem_8rem_auto] sm:items-end",
                    div {
                        label { class: "{theme::label_class(workspace)}", "Title" }
                        input {
                            class: "{theme::input_class(workspace)}",
                            value: form().title,
                            oninput: move |evt| form.with_mut(|f| f.title = evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::label_class(workspace)}", "Assignee" }
                        input {
                            class: "{theme::input_class(workspace)}",
                            value: form().assignee,
                            oninput: move |evt| form.with_mut(|f| f.assignee = evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::label_class(workspace)}", "Due" }
                        input {
                            class: "{theme::input_class(workspace)}",
                            r#type: "date",
                            value: form().due,
                            oninput: move |evt| form.with_mut(|f| f.due = evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::label_class(workspace)}", "Priority" }
                        select {
                            class: "{theme::input_class(workspace)}",
                            onchange: move |evt| {
                                if let Some(priority) = TaskPriority::from_label(&evt.value()) {
                                    form.with_mut(|f| f.priority = priority);
                                }
                            },
                            for priority in TaskPriority::ALL {
                                option {
                                    value: priority.label(),
                                    selected: form().priority == priority,
                                    "{priority.label()}"
                                }
                            }
                        }
                    }
                    button {
                        class: "{theme::btn_primary(workspace)}",
                        disabled: saving(),
                        onclick: on_create,
                        if saving() { "Saving…" } else { "Create" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use time::macros::date;

    #[test]
    fn form_builds_an_open_task() {
        let form = TaskForm {
            title: "  Book reefer slot ".into(),
            assignee: String::new(),
            due: "2026-03-01".into(),
            priority: TaskPriority::High,
        };
        let task = form.build("task-1".into()).unwrap();
        assert_eq!(task.title, "Book reefer slot");
        assert_eq!(task.assignee, "Unassigned");
        assert_eq!(task.due, date!(2026 - 03 - 01));
        assert_eq!(task.status, TaskStatus::Open);
    }

    #[test]
    fn form_rejects_missing_title_and_bad_dates() {
        let mut form = TaskForm {
            due: "2026-03-01".into(),
            ..TaskForm::default()
        };
        assert!(form.build("t".into()).is_err());
        form.title = "Call carrier".into();
        form.due = "03/01/2026".into();
        assert!(form.build("t".into()).unwrap_err().contains("Due date"));
    }
}
