//! Command-line parsing.
//!
//! The scraper has a single job, so there are no subcommands: three optional
//! path overrides and clap's built-in `--help` / `--version`.

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_COUNTRIES: &str = "countries.json";
pub const DEFAULT_OUT: &str = "data/indicators.csv";
pub const DEFAULT_OUT_FULL: &str = "data/indicators_full.csv";

/// Scrape GDP growth, inflation and unemployment per country into CSV reports.
#[derive(Debug, Parser, Clone)]
#[command(name = "indicators", version, about = "TradingEconomics country indicators scraper")]
pub struct Cli {
    /// Countries list (JSON array of {"country", "slug"} objects).
    #[arg(long, value_name = "JSON", default_value = DEFAULT_COUNTRIES)]
    pub countries: PathBuf,

    /// Compact CSV output (one value column per indicator).
    #[arg(long, value_name = "CSV", default_value = DEFAULT_OUT)]
    pub out: PathBuf,

    /// Full CSV output (adds slug, units and update periods).
    #[arg(long = "out-full", value_name = "CSV", default_value = DEFAULT_OUT_FULL)]
    pub out_full: PathBuf,
}
