use time::Date;

use super::{
    app_state::AppState,
    entities::{ContractStatus, RateStatus, TaskStatus},
    rates::average_by_mode,
    registry::active_count,
    tasks::{count_by_status, is_overdue},
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    pub active_rates: usize,
    pub draft_rates: usize,
    /// (mode label, mean amount) for active rates.
    pub average_by_mode: Vec<(&'static str, f64)>,
    pub open_tasks: usize,
    pub overdue_tasks: usize,
    pub running_contracts: usize,
    pub pending_contracts: usize,
    pub active_terminals: usize,
}

impl DashboardSummary {
    pub fn from_state(state: &AppState, today: Date) -> Self {
        let rate_count =
            |status: RateStatus| state.rates.iter().filter(|rate| rate.status == status).count();
        Self {
            active_rates: rate_count(RateStatus::Active),
            draft_rates: rate_count(RateStatus::Draft),
            average_by_mode: average_by_mode(&state.rates).into_iter().collect(),
            open_tasks: count_by_status(&state.tasks, TaskStatus::Open)
                + count_by_status(&state.tasks, TaskStatus::InProgress),
            overdue_tasks: state
                .tasks
                .iter()
                .filter(|task| is_overdue(task, today))
                .count(),
            running_contracts: state
                .contracts
                .iter()
                .filter(|contract| contract.is_running(today))
                .count(),
            pending_contracts: state
                .contracts
                .iter()
                .filter(|contract| contract.status == ContractStatus::Pending)
                .count(),
            active_terminals: active_count(&state.terminals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Task, TaskPriority};
    use time::macros::date;

    #[test]
    fn empty_state_is_all_zero() {
        let summary = DashboardSummary::from_state(&AppState::default(), date!(2026 - 10 - 16));
        assert_eq!(summary, DashboardSummary::default());
    }

    #[test]
    fn counts_open_and_overdue_tasks() {
        let mut state = AppState::default();
        state.tasks = vec![
            Task {
                id: "1".into(),
                title: "Customs docs".into(),
                assignee: "Mara".into(),
                due: date!(2026 - 10 - 01),
                priority: TaskPriority::High,
                status: TaskStatus::InProgress,
            },
            Task {
                id: "2".into(),
                title: "Invoice audit".into(),
                assignee: "Jonas".into(),
                due: date!(2026 - 10 - 30),
                priority: TaskPriority::Low,
                status: TaskStatus::Open,
            },
        ];
        let summary = DashboardSummary::from_state(&state, date!(2026 - 10 - 16));
        assert_eq!(summary.open_tasks, 2);
        assert_eq!(summary.overdue_tasks, 1);
    }
}
