//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input identity (`CountryEntry`)
//! - scraped table rows (`IndicatorRecord`)
//! - the three tracked indicators (`Indicator`)
//! - per-country results (`CountryResult`)

pub mod types;

pub use types::*;
