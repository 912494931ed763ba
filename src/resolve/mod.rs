//! Resolution of scraped rows into per-country results.
//!
//! - label matching (`matcher`)
//! - recency reconciliation across indicators (`recency`)

pub mod matcher;
pub mod recency;

pub use matcher::*;
pub use recency::*;

use crate::domain::{CountryEntry, CountryResult, Indicator, IndicatorRecord};
use crate::parse::IndicatorTable;

/// Resolve the three tracked indicators for `entry` from its page table.
pub fn resolve_country(entry: &CountryEntry, table: &IndicatorTable) -> CountryResult {
    let lookup = |indicator: Indicator| find_best_match(table, indicator.target_label()).cloned();

    let gdp = lookup(Indicator::Gdp);
    let inflation = lookup(Indicator::Inflation);
    let unemployment = lookup(Indicator::Unemployment);

    let recency = most_recent_period(&[period_of(&gdp), period_of(&inflation), period_of(&unemployment)]);

    CountryResult {
        country: entry.country.clone(),
        slug: entry.slug.clone(),
        gdp,
        inflation,
        unemployment,
        year: recency.period,
        latest: recency.date,
    }
}

fn period_of(record: &Option<IndicatorRecord>) -> &str {
    record.as_ref().map_or("", |r| r.period.as_str())
}
