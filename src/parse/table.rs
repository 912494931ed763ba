//! Locate the indicators table on a country page and turn its rows into
//! `IndicatorRecord`s.
//!
//! Expected row layout on the source site:
//! `[Indicator, Last, Previous, Highest, Lowest, Unit, ReferencePeriod]`.
//! Only the label, last value, unit (second-to-last) and period (last) are kept.

use std::collections::{BTreeSet, HashMap};

use scraper::{ElementRef, Html};

use crate::domain::IndicatorRecord;

/// Rows with fewer cells than this are partial/malformed and skipped.
pub const MIN_ROW_CELLS: usize = 6;

/// Lower-cased header cell texts of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet(BTreeSet<String>);

impl HeaderSet {
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            texts
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .collect(),
        )
    }

    /// Header set of a `<table>` element: every `<th>` below it.
    pub fn of_table(table: ElementRef<'_>) -> Self {
        Self::from_texts(
            descendant_elements(table, "th").map(|th| th.text().collect::<String>()),
        )
    }

    pub fn contains(&self, header: &str) -> bool {
        self.0.contains(header)
    }
}

/// The set of (lower-case) headers a table must carry to be selected.
#[derive(Debug, Clone, Copy)]
pub struct HeaderSignature(&'static [&'static str]);

impl HeaderSignature {
    /// Signature of the country indicators table.
    pub const INDICATORS: HeaderSignature = HeaderSignature(&["last", "previous", "highest", "lowest"]);

    pub fn matches(&self, headers: &HeaderSet) -> bool {
        self.0.iter().all(|h| headers.contains(h))
    }
}

/// Label -> record map that keeps first-seen label order.
///
/// A repeated label replaces the earlier record but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct IndicatorTable {
    records: Vec<IndicatorRecord>,
    index: HashMap<String, usize>,
}

impl IndicatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: IndicatorRecord) {
        match self.index.get(&record.label) {
            Some(&idx) => self.records[idx] = record,
            None => {
                self.index.insert(record.label.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&IndicatorRecord> {
        self.index.get(label).map(|&idx| &self.records[idx])
    }

    /// Records in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, IndicatorRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<IndicatorRecord> for IndicatorTable {
    fn from_iter<T: IntoIterator<Item = IndicatorRecord>>(iter: T) -> Self {
        let mut table = IndicatorTable::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

/// First table (document order) whose headers satisfy `signature`.
pub fn select_table<'a>(document: &'a Html, signature: HeaderSignature) -> Option<ElementRef<'a>> {
    descendant_elements(document.root_element(), "table")
        .find(|table| signature.matches(&HeaderSet::of_table(*table)))
}

/// First table carrying the Last/Previous/Highest/Lowest headers.
pub fn select_indicators_table(document: &Html) -> Option<ElementRef<'_>> {
    select_table(document, HeaderSignature::INDICATORS)
}

/// Extract every well-formed data row of `table`.
pub fn extract_rows(table: ElementRef<'_>) -> IndicatorTable {
    descendant_elements(table, "tr")
        .filter_map(|tr| {
            let cells: Vec<String> = descendant_elements(tr, "td").map(cell_text).collect();
            record_from_cells(&cells)
        })
        .collect()
}

/// Map one row's cell texts to a record (`None` for header/partial rows).
pub fn record_from_cells(cells: &[String]) -> Option<IndicatorRecord> {
    if cells.len() < MIN_ROW_CELLS {
        return None;
    }
    let n = cells.len();
    Some(IndicatorRecord {
        label: cells[0].clone(),
        last: cells[1].clone(),
        unit: cells[n - 2].clone(),
        period: cells[n - 1].clone(),
    })
}

/// Text of a cell with runs of whitespace collapsed to single spaces.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn descendant_elements<'a>(root: ElementRef<'a>, tag: &'static str) -> impl Iterator<Item = ElementRef<'a>> {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == tag)
}
