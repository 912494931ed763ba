//! Flat CSV reports.
//!
//! Records are field-name -> value maps written under an explicit, ordered
//! header. Values are written exactly as given; nothing is coerced to numbers.

use std::collections::HashMap;
use std::fs::{File, create_dir_all};
use std::path::Path;

use crate::error::AppError;

/// One output row keyed by field name.
pub type Record = HashMap<String, String>;

/// Write `records` to `path` under the header `fields`.
///
/// Missing parent directories are created and an existing file is replaced.
/// Fields absent from a record are written as empty strings. Keys not in
/// `fields` are dropped rather than rejected, so callers may pass records
/// carrying extra columns.
pub fn write_records<S: AsRef<str>>(path: &Path, fields: &[S], records: &[Record]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(|e| {
            AppError::input(format!("Failed to create output directory '{}': {e}", parent.display()))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create CSV '{}': {e}", path.display())))?;
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(fields.iter().map(AsRef::<str>::as_ref))
        .map_err(|e| AppError::input(format!("Failed to write CSV header to '{}': {e}", path.display())))?;

    for record in records {
        let row = fields
            .iter()
            .map(|f| record.get(AsRef::<str>::as_ref(f)).map(String::as_str).unwrap_or(""));
        writer
            .write_record(row)
            .map_err(|e| AppError::input(format!("Failed to write CSV row to '{}': {e}", path.display())))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::input(format!("Failed to flush CSV '{}': {e}", path.display())))?;

    Ok(())
}

/// Read a CSV written by [`write_records`] back into header + string records.
pub fn read_records(path: &Path) -> Result<(Vec<String>, Vec<Record>), AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open CSV '{}': {e}", path.display())))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records: Vec<Record> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = result.map_err(|e| AppError::input(format!("CSV parse error on line {}: {e}", idx + 2)))?;
        records.push(
            headers
                .iter()
                .cloned()
                .zip(row.iter().map(str::to_string))
                .collect(),
        );
    }

    Ok((headers, records))
}
