use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    Sea,
    Air,
    Road,
    Rail,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Sea,
        TransportMode::Air,
        TransportMode::Road,
        TransportMode::Rail,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Sea => "Sea",
            TransportMode::Air => "Air",
            TransportMode::Road => "Road",
            TransportMode::Rail => "Rail",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(label))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateStatus {
    Active,
    Draft,
    Expired,
}

impl RateStatus {
    pub const ALL: [RateStatus; 3] = [RateStatus::Active, RateStatus::Draft, RateStatus::Expired];

    pub fn label(&self) -> &'static str {
        match self {
            RateStatus::Active => "Active",
            RateStatus::Draft => "Draft",
            RateStatus::Expired => "Expired",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(label))
    }
}

/// One lane of the rate table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FreightRate {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub mode: TransportMode,
    /// ISO currency code, matches a [`Currency::code`].
    pub currency: String,
    pub amount: f64,
    /// Matches a [`PackageUnit::code`].
    pub package_unit: String,
    #[serde(with = "iso_date")]
    pub valid_until: Date,
    pub status: RateStatus,
}

impl FreightRate {
    pub fn lane(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Terminal {
    pub id: String,
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub id: String,
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackageUnit {
    pub id: String,
    pub code: String,
    pub name: String,
    /// Volume in cubic metres, when the unit has a fixed size.
    #[serde(default)]
    pub volume_cbm: Option<f64>,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Open,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Open, TaskStatus::InProgress, TaskStatus::Done];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Open => "Open",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Open → InProgress → Done → Open.
    pub fn next(self) -> Self {
        match self {
            TaskStatus::Open => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Open,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(label))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    Normal,
    High,
    Urgent,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Normal,
        TaskPriority::High,
        TaskPriority::Urgent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Normal => "Normal",
            TaskPriority::High => "High",
            TaskPriority::Urgent => "Urgent",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.label().eq_ignore_ascii_case(label))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub assignee: String,
    #[serde(with = "iso_date")]
    pub due: Date,
    pub priority: TaskPriority,
    pub status: TaskStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    Pending,
    Active,
    Terminated,
}

impl ContractStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ContractStatus::Pending => "Pending",
            ContractStatus::Active => "Active",
            ContractStatus::Terminated => "Terminated",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub reference: String,
    pub customer: String,
    pub mode: TransportMode,
    #[serde(with = "iso_date")]
    pub start: Date,
    #[serde(with = "iso_date")]
    pub end: Date,
    pub monthly_volume_teu: u32,
    #[serde(default)]
    pub portal_url: Option<String>,
    pub status: ContractStatus,
}

impl Contract {
    pub fn is_running(&self, today: Date) -> bool {
        self.status == ContractStatus::Active && self.start <= today && today <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn rate_round_trips_iso_dates() {
        let json = r#"{
            "id": "r-1", "origin": "Hamburg", "destination": "Rotterdam",
            "mode": "Road", "currency": "EUR", "amount": 640.0,
            "package_unit": "PAL", "valid_until": "2026-12-31", "status": "Active"
        }"#;
        let rate: FreightRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.valid_until, date!(2026 - 12 - 31));
        assert_eq!(rate.lane(), "Hamburg → Rotterdam");

        let encoded = serde_json::to_string(&rate).unwrap();
        assert!(encoded.contains("\"valid_until\":\"2026-12-31\""));
    }

    #[test]
    fn task_status_cycles() {
        assert_eq!(TaskStatus::Open.next(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.next(), TaskStatus::Open);
    }

    #[test]
    fn contract_running_window_is_inclusive() {
        let contract = Contract {
            id: "c-1".into(),
            reference: "FC-1".into(),
            customer: "Nordlicht GmbH".into(),
            mode: TransportMode::Sea,
            start: date!(2026 - 01 - 01),
            end: date!(2026 - 06 - 30),
            monthly_volume_teu: 12,
            portal_url: None,
            status: ContractStatus::Active,
        };
        assert!(contract.is_running(date!(2026 - 06 - 30)));
        assert!(!contract.is_running(date!(2026 - 07 - 01)));
    }
}
