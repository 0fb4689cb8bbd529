pub mod kpi_card;
pub mod rate_table;
pub mod registry_table;
pub mod status_badge;
pub mod task_list;
pub mod toast;
pub mod typed_text;
