//! Report rows: project `CountryResult`s onto the compact and full column sets.

pub mod format;

pub use format::*;

use crate::domain::{CountryResult, Indicator};
use crate::io::Record;

/// Columns of the compact report: country, year, one value per indicator.
pub fn compact_fields() -> Vec<String> {
    let mut fields = vec!["country".to_string(), "year".to_string()];
    fields.extend(Indicator::ALL.iter().map(|i| i.target_label().to_string()));
    fields
}

/// Columns of the full report: adds slug plus unit and raw period per indicator.
pub fn full_fields() -> Vec<String> {
    let mut fields = vec!["country".to_string(), "slug".to_string(), "year".to_string()];
    for indicator in Indicator::ALL {
        let prefix = indicator.column_prefix();
        fields.push(format!("{prefix}_last"));
        fields.push(format!("{prefix}_unit"));
        fields.push(format!("{prefix}_updated"));
    }
    fields
}

pub fn compact_record(result: &CountryResult) -> Record {
    let mut record = Record::new();
    record.insert("country".to_string(), result.country.clone());
    record.insert("year".to_string(), result.year.clone());
    for indicator in Indicator::ALL {
        record.insert(indicator.target_label().to_string(), result.last(indicator).to_string());
    }
    record
}

pub fn full_record(result: &CountryResult) -> Record {
    let mut record = Record::new();
    record.insert("country".to_string(), result.country.clone());
    record.insert("slug".to_string(), result.slug.clone());
    record.insert("year".to_string(), result.year.clone());
    for indicator in Indicator::ALL {
        let prefix = indicator.column_prefix();
        record.insert(format!("{prefix}_last"), result.last(indicator).to_string());
        record.insert(format!("{prefix}_unit"), result.unit(indicator).to_string());
        record.insert(format!("{prefix}_updated"), result.period(indicator).to_string());
    }
    record
}
