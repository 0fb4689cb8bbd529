//! Simulated backend calls: wait a configurable latency, then answer.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Contract, ContractStatus, Task};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request rejected: {0}")]
    Rejected(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockApi {
    latency: Duration,
}

impl MockApi {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Accepts a new contract unless its reference is already on file.
    pub async fn submit_contract(
        &self,
        contract: Contract,
        existing: &[Contract],
    ) -> Result<Contract, ApiError> {
        debug!(reference = %contract.reference, "submitting contract");
        self.wait().await;
        if existing
            .iter()
            .any(|known| known.reference.eq_ignore_ascii_case(&contract.reference))
        {
            return Err(ApiError::Rejected(format!(
                "contract {} already exists",
                contract.reference
            )));
        }
        info!(reference = %contract.reference, "contract accepted");
        Ok(Contract {
            status: ContractStatus::Pending,
            ..contract
        })
    }

    pub async fn save_task(&self, task: Task) -> Result<Task, ApiError> {
        debug!(id = %task.id, "saving task");
        self.wait().await;
        if task.title.trim().is_empty() {
            return Err(ApiError::Rejected("task title is empty".to_string()));
        }
        Ok(task)
    }

    async fn wait(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskPriority, TaskStatus, TransportMode};
    use time::macros::date;
    use tokio::time::Instant;

    fn contract(reference: &str) -> Contract {
        Contract {
            id: "c-new".into(),
            reference: reference.into(),
            customer: "Alpenfracht AG".into(),
            mode: TransportMode::Road,
            start: date!(2026 - 11 - 01),
            end: date!(2027 - 10 - 31),
            monthly_volume_teu: 4,
            portal_url: None,
            status: ContractStatus::Active,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn contract_submission_waits_for_latency() {
        let api = MockApi::new(Duration::from_millis(800));
        let started = Instant::now();
        let accepted = api.submit_contract(contract("FC-1"), &[]).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(800));
        assert_eq!(accepted.status, ContractStatus::Pending);
    }

    #[tokio::test(start_paused = true)]
    async fn duplicate_reference_is_rejected() {
        let api = MockApi::new(Duration::from_millis(100));
        let existing = vec![contract("FC-1")];
        let err = api
            .submit_contract(contract("fc-1"), &existing)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected("contract fc-1 already exists".into()));
    }

    #[tokio::test(start_paused = true)]
    async fn blank_task_title_is_rejected() {
        let api = MockApi::new(Duration::ZERO);
        let task = Task {
            id: "t".into(),
            title: "  ".into(),
            assignee: "Mara".into(),
            due: date!(2026 - 10 - 20),
            priority: TaskPriority::Low,
            status: TaskStatus::Open,
        };
        assert!(api.save_task(task).await.is_err());
    }
}
