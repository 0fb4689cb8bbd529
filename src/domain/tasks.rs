use time::Date;

use super::entities::{Task, TaskStatus};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskFilter {
    pub query: String,
    pub status: Option<TaskStatus>,
    pub only_overdue: bool,
}

pub fn is_overdue(task: &Task, today: Date) -> bool {
    task.status != TaskStatus::Done && task.due < today
}

/// Matching tasks, most urgent first, then by due date.
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter, today: Date) -> Vec<Task> {
    let query = filter.query.trim().to_lowercase();
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| {
            query.is_empty()
                || task.title.to_lowercase().contains(&query)
                || task.assignee.to_lowercase().contains(&query)
        })
        .filter(|task| filter.status.map_or(true, |status| task.status == status))
        .filter(|task| !filter.only_overdue || is_overdue(task, today))
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.due.cmp(&b.due)));
    visible
}

/// Moves the task to its next status. Returns the new status if found.
pub fn advance_status(tasks: &mut [Task], id: &str) -> Option<TaskStatus> {
    let task = tasks.iter_mut().find(|task| task.id == id)?;
    task.status = task.status.next();
    Some(task.status)
}

pub fn count_by_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|task| task.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TaskPriority;
    use pretty_assertions::assert_eq;
    use time::macros::date;

    fn task(
        id: &str,
        assignee: &str,
        due: Date,
        priority: TaskPriority,
        status: TaskStatus,
    ) -> Task {
        Task {
            id: id.into(),
            title: format!("Task {id}"),
            assignee: assignee.into(),
            due,
            priority,
            status,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("1", "Mara", date!(2026 - 10 - 01), TaskPriority::Normal, TaskStatus::Open),
            task("2", "Jonas", date!(2026 - 10 - 20), TaskPriority::Urgent, TaskStatus::InProgress),
            task("3", "Mara", date!(2026 - 09 - 01), TaskPriority::High, TaskStatus::Done),
            task("4", "Ilse", date!(2026 - 10 - 10), TaskPriority::Normal, TaskStatus::Open),
        ]
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn orders_by_priority_then_due() {
        let today = date!(2026 - 10 - 16);
        let all = filter_tasks(&sample(), &TaskFilter::default(), today);
        assert_eq!(ids(&all), vec!["2", "3", "1", "4"]);
    }

    #[test]
    fn overdue_ignores_done_tasks() {
        let today = date!(2026 - 10 - 16);
        let filter = TaskFilter {
            only_overdue: true,
            ..TaskFilter::default()
        };
        assert_eq!(ids(&filter_tasks(&sample(), &filter, today)), vec!["1", "4"]);
    }

    #[test]
    fn query_matches_assignee() {
        let filter = TaskFilter {
            query: "mara".into(),
            status: Some(TaskStatus::Open),
            only_overdue: false,
        };
        assert_eq!(ids(&filter_tasks(&sample(), &filter, date!(2026 - 10 - 16))), vec!["1"]);
    }

    #[test]
    fn advance_cycles_status() {
        let mut tasks = sample();
        assert_eq!(advance_status(&mut tasks, "3"), Some(TaskStatus::Open));
        assert_eq!(advance_status(&mut tasks, "nope"), None);
        assert_eq!(count_by_status(&tasks, TaskStatus::Open), 3);
    }
}
