//! The scrape pipeline:
//! countries -> fetch page -> indicators table -> match -> reconcile -> CSV reports.
//!
//! Countries are processed one at a time, in file order. Any fetch failure or
//! page without an indicators table aborts the run before anything is
//! written. Missing indicators and unparseable periods are not errors.

use std::path::PathBuf;

use crate::config::RunConfig;
use crate::data::{PageSource, TeClient};
use crate::domain::{CountryEntry, CountryResult};
use crate::error::AppError;
use crate::io::{read_countries, write_records};
use crate::parse::parse_indicators_page;
use crate::report::{compact_fields, compact_record, full_fields, full_record};
use crate::resolve::resolve_country;

/// Outputs of a completed run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub results: Vec<CountryResult>,
    pub written: Vec<PathBuf>,
}

/// Run against the live site.
pub fn run(config: &RunConfig) -> Result<RunOutput, AppError> {
    let client = TeClient::new(&config.remote)?;
    run_with_source(config, &client)
}

/// Run with an arbitrary page source.
pub fn run_with_source(config: &RunConfig, source: &dyn PageSource) -> Result<RunOutput, AppError> {
    let countries = read_countries(&config.countries_path)?;
    tracing::info!(
        countries = countries.len(),
        path = %config.countries_path.display(),
        "loaded countries"
    );

    let mut results = Vec::with_capacity(countries.len());
    for entry in &countries {
        results.push(scrape_country(entry, source)?);
    }

    let compact: Vec<_> = results.iter().map(compact_record).collect();
    let full: Vec<_> = results.iter().map(full_record).collect();

    write_records(&config.out_compact, &compact_fields(), &compact)?;
    tracing::info!(path = %config.out_compact.display(), rows = compact.len(), "wrote compact report");
    write_records(&config.out_full, &full_fields(), &full)?;
    tracing::info!(path = %config.out_full.display(), rows = full.len(), "wrote full report");

    Ok(RunOutput {
        results,
        written: vec![config.out_compact.clone(), config.out_full.clone()],
    })
}

/// Fetch, parse and resolve one country.
pub fn scrape_country(entry: &CountryEntry, source: &dyn PageSource) -> Result<CountryResult, AppError> {
    tracing::info!(country = %entry.country, slug = %entry.slug, "fetching indicators");
    let body = source.fetch_page(&entry.slug)?;

    let table = parse_indicators_page(&body).ok_or_else(|| {
        AppError::remote(format!(
            "Could not find indicators table on {}",
            source.page_url(&entry.slug)
        ))
    })?;
    tracing::debug!(slug = %entry.slug, rows = table.len(), "indicators table parsed");

    let result = resolve_country(entry, &table);
    for indicator in result.missing() {
        tracing::warn!(
            country = %entry.country,
            indicator = indicator.target_label(),
            "indicator not found on page"
        );
    }
    if result.latest.is_none() {
        tracing::debug!(country = %entry.country, "no parseable reference period");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::config::RemoteConfig;
    use crate::io::read_records;

    struct CannedPages {
        pages: HashMap<String, String>,
    }

    impl CannedPages {
        fn new(pages: &[(&str, String)]) -> Self {
            Self {
                pages: pages.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            }
        }
    }

    impl PageSource for CannedPages {
        fn page_url(&self, slug: &str) -> String {
            format!("mem://{slug}/indicators")
        }

        fn fetch_page(&self, slug: &str) -> Result<String, AppError> {
            self.pages
                .get(slug)
                .cloned()
                .ok_or_else(|| AppError::remote(format!("Request to {} failed with status 404.", self.page_url(slug))))
        }
    }

    fn indicators_page(rows: &[[&str; 7]]) -> String {
        let mut html = String::from(
            "<html><body>\
             <table><tr><th>Market</th><th>Price</th></tr></table>\
             <table class=\"table\"><thead><tr>\
             <th></th><th>Last</th><th>Previous</th><th>Highest</th><th>Lowest</th><th>Unit</th><th></th>\
             </tr></thead><tbody>",
        );
        for row in rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{cell}</td>"));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table></body></html>");
        html
    }

    fn config(dir: &std::path::Path, countries_json: &str) -> RunConfig {
        let countries_path = dir.join("countries.json");
        std::fs::write(&countries_path, countries_json).unwrap();
        RunConfig {
            countries_path,
            out_compact: dir.join("data/indicators.csv"),
            out_full: dir.join("data/indicators_full.csv"),
            remote: RemoteConfig::default(),
        }
    }

    #[test]
    fn testland_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), r#"[{"country":"Testland","slug":"testland"}]"#);
        let source = CannedPages::new(&[(
            "testland",
            indicators_page(&[
                ["GDP Annual Growth Rate", "2.5%", "2.1", "10", "-5", "percent", "Dec/25"],
                ["Inflation Rate", "3.1%", "3.0", "20", "-1", "percent", "Nov/25"],
                ["Unemployment Rate", "4.0%", "4.1", "12", "3", "percent", "Dec/25"],
                ["Interest Rate", "5", "5", "20", "0", "percent", "Jan/26"],
            ]),
        )]);

        let output = run_with_source(&cfg, &source).unwrap();
        assert_eq!(output.results.len(), 1);

        let (headers, compact) = read_records(&cfg.out_compact).unwrap();
        assert_eq!(headers, compact_fields());
        assert_eq!(compact.len(), 1);
        let row: Vec<&str> = headers.iter().map(|h| compact[0][h].as_str()).collect();
        assert_eq!(row, vec!["Testland", "Dec/25", "2.5%", "3.1%", "4.0%"]);

        let (full_headers, full) = read_records(&cfg.out_full).unwrap();
        assert_eq!(full_headers, full_fields());
        assert_eq!(full[0]["slug"], "testland");
        assert_eq!(full[0]["inflation_updated"], "Nov/25");
        assert_eq!(full[0]["unemployment_unit"], "percent");
    }

    #[test]
    fn missing_indicators_are_empty_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), r#"[{"country":"Sparse","slug":"sparse"}]"#);
        let source = CannedPages::new(&[(
            "sparse",
            indicators_page(&[["Inflation Rate", "9.9", "9", "10", "1", "percent", "n/a"]]),
        )]);

        let output = run_with_source(&cfg, &source).unwrap();
        assert_eq!(output.results[0].year, "");

        let (_, compact) = read_records(&cfg.out_compact).unwrap();
        assert_eq!(compact[0]["year"], "");
        assert_eq!(compact[0]["Inflation Rate"], "9.9");
        assert_eq!(compact[0]["GDP Annual Growth Rate"], "");
    }

    #[test]
    fn missing_table_aborts_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(
            dir.path(),
            r#"[{"country":"Testland","slug":"testland"},{"country":"Broken","slug":"broken"}]"#,
        );
        let source = CannedPages::new(&[
            (
                "testland",
                indicators_page(&[["Inflation Rate", "3.1", "3", "20", "-1", "percent", "Nov/25"]]),
            ),
            ("broken", "<html><body><p>maintenance</p></body></html>".to_string()),
        ]);

        let err = run_with_source(&cfg, &source).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_REMOTE);
        assert!(err.to_string().contains("mem://broken/indicators"));
        assert!(!cfg.out_compact.exists());
        assert!(!cfg.out_full.exists());
    }

    #[test]
    fn fetch_failure_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), r#"[{"country":"Nowhere","slug":"nowhere"}]"#);
        let source = CannedPages::new(&[]);

        let err = run_with_source(&cfg, &source).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_REMOTE);
        assert!(!cfg.out_compact.exists());
    }

    #[test]
    fn rows_follow_country_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(
            dir.path(),
            r#"[{"country":"B","slug":"b"},{"country":"A","slug":"a"}]"#,
        );
        let page = indicators_page(&[["GDP Annual Growth Rate", "1", "1", "1", "1", "percent", "Q2/25"]]);
        let source = CannedPages::new(&[("a", page.clone()), ("b", page)]);

        run_with_source(&cfg, &source).unwrap();
        let (_, compact) = read_records(&cfg.out_compact).unwrap();
        let countries: Vec<&str> = compact.iter().map(|r| r["country"].as_str()).collect();
        assert_eq!(countries, vec!["B", "A"]);
        assert_eq!(compact[0]["year"], "Q2/25");
    }
}
