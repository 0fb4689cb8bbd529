pub mod contracts;
pub mod dashboard;
pub mod portal;
pub mod rates;
pub mod registries;
pub mod settings;
pub mod tasks;

pub use contracts::ContractsPage;
pub use dashboard::DashboardPage;
pub use portal::PortalPage;
pub use rates::RatesPage;
pub use registries::RegistriesPage;
pub use settings::SettingsPage;
pub use tasks::TasksPage;
