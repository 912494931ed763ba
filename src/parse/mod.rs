//! Page parsing: indicators table lookup, row extraction and period tokens.

pub mod period;
pub mod table;

pub use period::*;
pub use table::*;

use scraper::Html;

/// Parse a country page and extract its indicators table.
///
/// Returns `None` when the page has no table with the indicators header
/// signature.
pub fn parse_indicators_page(body: &str) -> Option<IndicatorTable> {
    let document = Html::parse_document(body);
    let table = select_indicators_table(&document)?;
    Some(extract_rows(table))
}
