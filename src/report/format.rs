//! Terminal summary of a run.

use crate::domain::{CountryResult, Indicator};

/// One line per country: resolved period, its parsed month, missing indicators.
pub fn format_run_summary(results: &[CountryResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== indicators: {} countries ===\n", results.len()));

    let width = results
        .iter()
        .map(|r| r.country.chars().count())
        .max()
        .unwrap_or(0)
        .max("country".len());

    out.push_str(&format!("{:<width$}  {:<8}  {:<7}  missing\n", "country", "year", "latest"));
    for r in results {
        let latest = r
            .latest
            .map(|d| d.format("%Y-%m").to_string())
            .unwrap_or_else(|| "-".to_string());
        let missing = format_missing(&r.missing());
        out.push_str(&format!(
            "{:<width$}  {:<8}  {:<7}  {}\n",
            r.country,
            if r.year.is_empty() { "-" } else { r.year.as_str() },
            latest,
            missing
        ));
    }
    out
}

fn format_missing(missing: &[Indicator]) -> String {
    if missing.is_empty() {
        return "-".to_string();
    }
    missing
        .iter()
        .map(|i| i.column_prefix())
        .collect::<Vec<_>>()
        .join(",")
}
