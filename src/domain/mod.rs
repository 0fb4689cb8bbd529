//! Domain logic for the freight console lives here.

pub mod app_state;
pub mod contract;
pub mod dashboard;
pub mod entities;
pub mod rates;
pub mod registry;
pub mod segments;
pub mod tasks;
pub mod typing;

#[allow(unused_imports)]
pub use app_state::{AnimationSettings, AppState, Preferences, Workspace};
#[allow(unused_imports)]
pub use contract::{format_date, parse_iso_date, ContractDraft, ContractError};
#[allow(unused_imports)]
pub use dashboard::DashboardSummary;
#[allow(unused_imports)]
pub use entities::{
    Contract, ContractStatus, Currency, FreightRate, PackageUnit, RateStatus, Task, TaskPriority,
    TaskStatus, Terminal, TransportMode,
};
#[allow(unused_imports)]
pub use rates::{expire_outdated, filter_rates, sort_rates, RateFilter, RateSort};
#[allow(unused_imports)]
pub use registry::{
    add_entry, search_entries, toggle_active, RegistryEntry, RegistryError, RegistryKind,
};
#[allow(unused_imports)]
pub use segments::{SegmentStyle, TextSegment, TypingSource};
#[allow(unused_imports)]
pub use tasks::{advance_status, filter_tasks, is_overdue, TaskFilter};
#[allow(unused_imports)]
pub use typing::{Step, TypingConfig, TypingEffect, TypingFrame, TypingPhase};
