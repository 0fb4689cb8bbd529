//! Contract form model and its validation.

use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date};
use url::Url;

use super::entities::{Contract, ContractStatus, TransportMode};

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const MIN_CUSTOMER_LEN: usize = 3;

/// Raw form input, everything as typed by the user.
#[derive(Clone, Debug, PartialEq)]
pub struct ContractDraft {
    pub reference: String,
    pub customer: String,
    pub mode: String,
    pub start: String,
    pub end: String,
    pub monthly_volume_teu: String,
    pub portal_url: String,
}

impl Default for ContractDraft {
    fn default() -> Self {
        Self {
            reference: String::new(),
            customer: String::new(),
            mode: TransportMode::Sea.label().to_string(),
            start: String::new(),
            end: String::new(),
            monthly_volume_teu: String::new(),
            portal_url: String::new(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContractError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("customer name must have at least {MIN_CUSTOMER_LEN} characters")]
    CustomerTooShort,
    #[error("unknown transport mode: {0}")]
    UnknownMode(String),
    #[error("{field} is not a date (expected YYYY-MM-DD): {value}")]
    InvalidDate { field: &'static str, value: String },
    #[error("contract must end after it starts")]
    EndBeforeStart,
    #[error("monthly volume must be a positive whole number")]
    InvalidVolume,
    #[error("portal link must be an http(s) URL")]
    InvalidPortalUrl,
}

impl ContractDraft {
    /// Checks the draft and builds a pending contract with the given id.
    pub fn validate(&self, id: impl Into<String>) -> Result<Contract, ContractError> {
        let reference = required("reference", &self.reference)?;
        let customer = required("customer", &self.customer)?;
        if customer.chars().count() < MIN_CUSTOMER_LEN {
            return Err(ContractError::CustomerTooShort);
        }
        let mode = TransportMode::from_label(self.mode.trim())
            .ok_or_else(|| ContractError::UnknownMode(self.mode.trim().to_string()))?;

        let start = parse_date("start date", &self.start)?;
        let end = parse_date("end date", &self.end)?;
        if end <= start {
            return Err(ContractError::EndBeforeStart);
        }

        let monthly_volume_teu = self
            .monthly_volume_teu
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|volume| *volume > 0)
            .ok_or(ContractError::InvalidVolume)?;

        let portal_url = parse_portal_url(&self.portal_url)?;

        Ok(Contract {
            id: id.into(),
            reference: reference.to_uppercase(),
            customer: customer.to_string(),
            mode,
            start,
            end,
            monthly_volume_teu,
            portal_url,
            status: ContractStatus::Pending,
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ContractError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ContractError::Missing(field))
    } else {
        Ok(trimmed)
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<Date, ContractError> {
    let value = required(field, value)?;
    parse_iso_date(value).ok_or_else(|| ContractError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// `YYYY-MM-DD`, as produced by date inputs.
pub fn parse_iso_date(value: &str) -> Option<Date> {
    Date::parse(value.trim(), DATE_FORMAT).ok()
}

fn parse_portal_url(value: &str) -> Result<Option<String>, ContractError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let url = Url::parse(value).map_err(|_| ContractError::InvalidPortalUrl)?;
    match url.scheme() {
        "http" | "https" => Ok(Some(url.to_string())),
        _ => Err(ContractError::InvalidPortalUrl),
    }
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use time::macros::date;

    fn draft() -> ContractDraft {
        ContractDraft {
            reference: "fc-2026-014".into(),
            customer: "Nordlicht Logistik".into(),
            mode: "sea".into(),
            start: "2026-11-01".into(),
            end: "2027-10-31".into(),
            monthly_volume_teu: "24".into(),
            portal_url: "https://portal.nordlicht.example/tracking".into(),
        }
    }

    #[test]
    fn valid_draft_becomes_pending_contract() {
        let contract = draft().validate("c-9").unwrap();
        assert_eq!(contract.reference, "FC-2026-014");
        assert_eq!(contract.mode, TransportMode::Sea);
        assert_eq!(contract.start, date!(2026 - 11 - 01));
        assert_eq!(contract.monthly_volume_teu, 24);
        assert_eq!(contract.status, ContractStatus::Pending);
        assert_eq!(
            contract.portal_url.as_deref(),
            Some("https://portal.nordlicht.example/tracking")
        );
    }

    #[test]
    fn reports_first_problem() {
        let mut blank = draft();
        blank.reference = "  ".into();
        assert_eq!(blank.validate("x"), Err(ContractError::Missing("reference")));

        let mut short = draft();
        short.customer = "AB".into();
        assert_eq!(short.validate("x"), Err(ContractError::CustomerTooShort));

        let mut mode = draft();
        mode.mode = "Pipeline".into();
        assert_eq!(
            mode.validate("x"),
            Err(ContractError::UnknownMode("Pipeline".into()))
        );
    }

    #[test]
    fn rejects_bad_dates_and_order() {
        let mut bad = draft();
        bad.start = "01.11.2026".into();
        assert_eq!(
            bad.validate("x"),
            Err(ContractError::InvalidDate {
                field: "start date",
                value: "01.11.2026".into()
            })
        );

        let mut reversed = draft();
        reversed.end = "2026-11-01".into();
        assert_eq!(reversed.validate("x"), Err(ContractError::EndBeforeStart));
    }

    #[test]
    fn rejects_zero_volume_and_foreign_schemes() {
        let mut zero = draft();
        zero.monthly_volume_teu = "0".into();
        assert_eq!(zero.validate("x"), Err(ContractError::InvalidVolume));

        let mut ftp = draft();
        ftp.portal_url = "ftp://files.example".into();
        assert_eq!(ftp.validate("x"), Err(ContractError::InvalidPortalUrl));

        let mut none = draft();
        none.portal_url = String::new();
        assert_eq!(none.validate("x").unwrap().portal_url, None);
    }

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_date(date!(2026 - 01 - 05)), "2026-01-05");
    }
}
