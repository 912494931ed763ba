//! Resolve a target indicator label against the labels found on a page.

use crate::domain::IndicatorRecord;
use crate::parse::IndicatorTable;

/// Find the record for `target`.
///
/// Exact label first, then case-insensitive exact, then the first label (in
/// table order) containing `target` case-insensitively. A miss is not an error:
/// pages do not always carry every indicator.
pub fn find_best_match<'a>(table: &'a IndicatorTable, target: &str) -> Option<&'a IndicatorRecord> {
    if let Some(record) = table.get(target) {
        return Some(record);
    }

    let target_lc = target.to_lowercase();
    // Later duplicates win, mirroring a lower-cased label map built in order.
    if let Some(record) = table.iter().rev().find(|r| r.label.to_lowercase() == target_lc) {
        return Some(record);
    }

    table
        .iter()
        .find(|r| r.label.to_lowercase().contains(&target_lc))
}
