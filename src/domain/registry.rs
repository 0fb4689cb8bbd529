//! Shared list logic for the terminal, currency and package-unit registries.

use thiserror::Error;

use super::entities::{Currency, PackageUnit, Terminal};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    #[default]
    Terminals,
    Currencies,
    PackageUnits,
}

impl RegistryKind {
    pub const ALL: [RegistryKind; 3] = [
        RegistryKind::Terminals,
        RegistryKind::Currencies,
        RegistryKind::PackageUnits,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RegistryKind::Terminals => "Terminals",
            RegistryKind::Currencies => "Currencies",
            RegistryKind::PackageUnits => "Package units",
        }
    }
}

pub trait RegistryEntry {
    fn id(&self) -> &str;
    fn code(&self) -> &str;
    fn name(&self) -> &str;
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);

    /// Extra column shown next to the name.
    fn detail(&self) -> String {
        String::new()
    }

    fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.code().to_lowercase().contains(&query)
            || self.name().to_lowercase().contains(&query)
            || self.detail().to_lowercase().contains(&query)
    }
}

impl RegistryEntry for Terminal {
    fn id(&self) -> &str {
        &self.id
    }
    fn code(&self) -> &str {
        &self.code
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn is_active(&self) -> bool {
        self.active
    }
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
    fn detail(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

impl RegistryEntry for Currency {
    fn id(&self) -> &str {
        &self.id
    }
    fn code(&self) -> &str {
        &self.code
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn is_active(&self) -> bool {
        self.active
    }
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
    fn detail(&self) -> String {
        self.symbol.clone()
    }
}

impl RegistryEntry for PackageUnit {
    fn id(&self) -> &str {
        &self.id
    }
    fn code(&self) -> &str {
        &self.code
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn is_active(&self) -> bool {
        self.active
    }
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
    fn detail(&self) -> String {
        self.volume_cbm
            .map(|volume| format!("{volume:.1} m³"))
            .unwrap_or_default()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("code {0} is already registered")]
    DuplicateCode(String),
    #[error("no entry with id {0}")]
    NotFound(String),
}

pub fn search_entries<'a, T: RegistryEntry>(entries: &'a [T], query: &str) -> Vec<&'a T> {
    entries.iter().filter(|entry| entry.matches(query)).collect()
}

/// Flips the active flag and returns the new value.
pub fn toggle_active<T: RegistryEntry>(entries: &mut [T], id: &str) -> Result<bool, RegistryError> {
    let entry = entries
        .iter_mut()
        .find(|entry| entry.id() == id)
        .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
    let active = !entry.is_active();
    entry.set_active(active);
    Ok(active)
}

/// Appends `entry` unless its code is blank or already taken (case-insensitive).
pub fn add_entry<T: RegistryEntry>(entries: &mut Vec<T>, entry: T) -> Result<(), RegistryError> {
    if entry.code().trim().is_empty() {
        return Err(RegistryError::MissingField("code"));
    }
    if entry.name().trim().is_empty() {
        return Err(RegistryError::MissingField("name"));
    }
    if entries
        .iter()
        .any(|existing| existing.code().eq_ignore_ascii_case(entry.code().trim()))
    {
        return Err(RegistryError::DuplicateCode(entry.code().trim().to_uppercase()));
    }
    entries.push(entry);
    Ok(())
}

pub fn active_count<T: RegistryEntry>(entries: &[T]) -> usize {
    entries.iter().filter(|entry| entry.is_active()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn currency(id: &str, code: &str, name: &str) -> Currency {
        Currency {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            symbol: "¤".into(),
            active: true,
        }
    }

    #[test]
    fn search_matches_code_name_and_detail() {
        let terminals = vec![Terminal {
            id: "t-1".into(),
            code: "DEHAM".into(),
            name: "Container Terminal Altenwerder".into(),
            city: "Hamburg".into(),
            country: "DE".into(),
            active: true,
        }];
        assert_eq!(search_entries(&terminals, "deham").len(), 1);
        assert_eq!(search_entries(&terminals, "altenwerder").len(), 1);
        assert_eq!(search_entries(&terminals, "hamburg").len(), 1);
        assert_eq!(search_entries(&terminals, "rotterdam").len(), 0);
        assert_eq!(search_entries(&terminals, "  ").len(), 1);
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut currencies = vec![currency("c-1", "EUR", "Euro")];
        assert_eq!(toggle_active(&mut currencies, "c-1"), Ok(false));
        assert_eq!(active_count(&currencies), 0);
        assert_eq!(toggle_active(&mut currencies, "c-1"), Ok(true));
        assert_eq!(
            toggle_active(&mut currencies, "missing"),
            Err(RegistryError::NotFound("missing".into()))
        );
    }

    #[test]
    fn add_rejects_duplicates_and_blanks() {
        let mut currencies = vec![currency("c-1", "EUR", "Euro")];
        assert_eq!(
            add_entry(&mut currencies, currency("c-2", "eur", "Euro again")),
            Err(RegistryError::DuplicateCode("EUR".into()))
        );
        assert_eq!(
            add_entry(&mut currencies, currency("c-3", " ", "Blank")),
            Err(RegistryError::MissingField("code"))
        );
        assert_eq!(add_entry(&mut currencies, currency("c-4", "USD", "US Dollar")), Ok(()));
        assert_eq!(currencies.len(), 2);
    }
}
