use time::{Date, OffsetDateTime};
use uuid::Uuid;

pub mod assets;
pub mod persistence;
pub mod version;

/// Fresh identifier for records created in the UI, e.g. `task-3f2a…`.
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Calendar date used for validity and due-date checks.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
