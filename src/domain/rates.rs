use std::{cmp::Ordering, collections::BTreeMap};

use time::Date;

use super::entities::{FreightRate, RateStatus, TransportMode};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateFilter {
    pub query: String,
    pub mode: Option<TransportMode>,
    pub status: Option<RateStatus>,
}

impl RateFilter {
    pub fn matches(&self, rate: &FreightRate) -> bool {
        let query = self.query.trim().to_lowercase();
        let text_ok = query.is_empty()
            || rate.origin.to_lowercase().contains(&query)
            || rate.destination.to_lowercase().contains(&query)
            || rate.currency.to_lowercase().contains(&query);
        text_ok
            && self.mode.map_or(true, |mode| rate.mode == mode)
            && self.status.map_or(true, |status| rate.status == status)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RateSort {
    #[default]
    ValidUntil,
    AmountAsc,
    AmountDesc,
}

impl RateSort {
    pub fn label(&self) -> &'static str {
        match self {
            RateSort::ValidUntil => "Validity",
            RateSort::AmountAsc => "Amount ↑",
            RateSort::AmountDesc => "Amount ↓",
        }
    }
}

pub fn filter_rates(rates: &[FreightRate], filter: &RateFilter) -> Vec<FreightRate> {
    rates
        .iter()
        .filter(|rate| filter.matches(rate))
        .cloned()
        .collect()
}

pub fn sort_rates(rates: &mut [FreightRate], sort: RateSort) {
    match sort {
        RateSort::ValidUntil => rates.sort_by(|a, b| {
            a.valid_until
                .cmp(&b.valid_until)
                .then_with(|| a.lane().cmp(&b.lane()))
        }),
        RateSort::AmountAsc => rates.sort_by(|a, b| cmp_amount(a.amount, b.amount)),
        RateSort::AmountDesc => rates.sort_by(|a, b| cmp_amount(b.amount, a.amount)),
    }
}

fn cmp_amount(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Flips active rates whose validity ended before `today`. Returns how many changed.
pub fn expire_outdated(rates: &mut [FreightRate], today: Date) -> usize {
    let mut expired = 0;
    for rate in rates
        .iter_mut()
        .filter(|rate| rate.status == RateStatus::Active && rate.valid_until < today)
    {
        rate.status = RateStatus::Expired;
        expired += 1;
    }
    expired
}

/// Mean amount of active rates per mode. Currencies are not converted.
pub fn average_by_mode(rates: &[FreightRate]) -> BTreeMap<&'static str, f64> {
    let mut totals: BTreeMap<&'static str, (f64, usize)> = BTreeMap::new();
    for rate in rates.iter().filter(|rate| rate.status == RateStatus::Active) {
        let entry = totals.entry(rate.mode.label()).or_insert((0.0, 0));
        entry.0 += rate.amount;
        entry.1 += 1;
    }
    totals
        .into_iter()
        .map(|(mode, (sum, count))| (mode, sum / count as f64))
        .collect()
}
