pub const APP_NAME: &str = "Freight Console";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Release tag when built from a tagged checkout, crate version otherwise.
pub fn version_label() -> String {
    label_for(GIT_TAG, APP_VERSION)
}

fn label_for(tag: Option<&str>, version: &str) -> String {
    match tag.map(str::trim).filter(|tag| !tag.is_empty()) {
        Some(tag) if tag.starts_with(['v', 'V']) => tag.to_string(),
        Some(tag) => format!("v{tag}"),
        None => format!("v{version}"),
    }
}
