use dioxus::prelude::*;

use crate::domain::{ContractStatus, RateStatus, TaskPriority, TaskStatus};

const GREEN: &str = "bg-emerald-500/10 text-emerald-300 border-emerald-500/40";
const AMBER: &str = "bg-amber-500/10 text-amber-300 border-amber-500/40";
const ROSE: &str = "bg-rose-500/10 text-rose-300 border-rose-500/40";
const SKY: &str = "bg-sky-500/10 text-sky-300 border-sky-500/40";
const SLATE: &str = "bg-slate-700/40 text-slate-300 border-slate-600/60";

/// Anything that renders as a coloured pill.
pub trait BadgeTone {
    fn badge(&self) -> (&'static str, &'static str);
}

impl BadgeTone for RateStatus {
    fn badge(&self) -> (&'static str, &'static str) {
        let tone = match self {
            RateStatus::Active => GREEN,
            RateStatus::Draft => SKY,
            RateStatus::Expired => SLATE,
        };
        (self.label(), tone)
    }
}

impl BadgeTone for TaskStatus {
    fn badge(&self) -> (&'static str, &'static str) {
        let tone = match self {
            TaskStatus::Open => SKY,
            TaskStatus::InProgress => AMBER,
            TaskStatus::Done => GREEN,
        };
        (self.label(), tone)
    }
}

impl BadgeTone for TaskPriority {
    fn badge(&self) -> (&'static str, &'static str) {
        let tone = match self {
            TaskPriority::Low => SLATE,
            TaskPriority::Normal => SKY,
            TaskPriority::High => AMBER,
            TaskPriority::Urgent => ROSE,
        };
        (self.label(), tone)
    }
}

impl BadgeTone for ContractStatus {
    fn badge(&self) -> (&'static str, &'static str) {
        let tone = match self {
            ContractStatus::Pending => AMBER,
            ContractStatus::Active => GREEN,
            ContractStatus::Terminated => SLATE,
        };
        (self.label(), tone)
    }
}

/// Active/inactive flag of registry entries.
pub fn active_badge(active: bool) -> (&'static str, &'static str) {
    if active {
        ("Active", GREEN)
    } else {
        ("Inactive", SLATE)
    }
}

#[component]
pub fn StatusBadge(label: &'static str, tone: &'static str) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {tone}",
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_expected_tones() {
        assert_eq!(RateStatus::Active.badge(), ("Active", GREEN));
        assert_eq!(TaskPriority::Urgent.badge().1, ROSE);
        assert_eq!(ContractStatus::Terminated.badge().1, SLATE);
        assert_eq!(active_badge(false), ("Inactive", SLATE));
    }
}
