//! Shared domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the countries input file.
///
/// `slug` is the URL path segment of the country on the source site
/// (e.g. `united-states`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub country: String,
    pub slug: String,
}

/// One data row of a country's indicators table.
///
/// All fields are kept as shown on the page; `last` is not parsed to a number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorRecord {
    pub label: String,
    pub last: String,
    pub unit: String,
    /// Reference period token, e.g. `Dec/25` or `Q3/25`.
    pub period: String,
}

/// The indicators tracked per country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Gdp,
    Inflation,
    Unemployment,
}

impl Indicator {
    /// Fixed order used for matching, recency comparison and output columns.
    pub const ALL: [Indicator; 3] = [Indicator::Gdp, Indicator::Inflation, Indicator::Unemployment];

    /// Row label as it appears on the indicators page.
    pub fn target_label(self) -> &'static str {
        match self {
            Indicator::Gdp => "GDP Annual Growth Rate",
            Indicator::Inflation => "Inflation Rate",
            Indicator::Unemployment => "Unemployment Rate",
        }
    }

    /// Column prefix in the full report (`gdp_last`, `gdp_unit`, ...).
    pub fn column_prefix(self) -> &'static str {
        match self {
            Indicator::Gdp => "gdp",
            Indicator::Inflation => "inflation",
            Indicator::Unemployment => "unemployment",
        }
    }
}

/// Resolved indicators for one country.
///
/// Both report rows for a country are projected from this one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryResult {
    pub country: String,
    pub slug: String,
    pub gdp: Option<IndicatorRecord>,
    pub inflation: Option<IndicatorRecord>,
    pub unemployment: Option<IndicatorRecord>,
    /// Most recent period token among the three indicators ("" if none parse).
    pub year: String,
    /// Parsed form of `year`.
    pub latest: Option<NaiveDate>,
}

impl CountryResult {
    pub fn indicator(&self, indicator: Indicator) -> Option<&IndicatorRecord> {
        match indicator {
            Indicator::Gdp => self.gdp.as_ref(),
            Indicator::Inflation => self.inflation.as_ref(),
            Indicator::Unemployment => self.unemployment.as_ref(),
        }
    }

    /// Latest value for `indicator`, or "" when it was not found on the page.
    pub fn last(&self, indicator: Indicator) -> &str {
        self.indicator(indicator).map(|r| r.last.as_str()).unwrap_or("")
    }

    pub fn unit(&self, indicator: Indicator) -> &str {
        self.indicator(indicator).map(|r| r.unit.as_str()).unwrap_or("")
    }

    pub fn period(&self, indicator: Indicator) -> &str {
        self.indicator(indicator).map(|r| r.period.as_str()).unwrap_or("")
    }

    pub fn missing(&self) -> Vec<Indicator> {
        Indicator::ALL
            .into_iter()
            .filter(|&i| self.indicator(i).is_none())
            .collect()
    }
}
