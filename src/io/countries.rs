//! Countries input file.
//!
//! A JSON array of `{"country": "...", "slug": "..."}` objects, processed in
//! file order.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::CountryEntry;
use crate::error::AppError;

pub fn read_countries(path: &Path) -> Result<Vec<CountryEntry>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open countries file '{}': {e}", path.display())))?;
    let countries: Vec<CountryEntry> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::input(format!("Invalid countries file '{}': {e}", path.display())))?;
    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_entries_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.json");
        std::fs::write(
            &path,
            r#"[{"country":"Testland","slug":"testland"},{"country":"Euro Area","slug":"euro-area"}]"#,
        )
        .unwrap();

        let countries = read_countries(&path).unwrap();
        assert_eq!(
            countries,
            vec![
                CountryEntry { country: "Testland".to_string(), slug: "testland".to_string() },
                CountryEntry { country: "Euro Area".to_string(), slug: "euro-area".to_string() },
            ]
        );
    }

    #[test]
    fn missing_or_malformed_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = read_countries(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(missing.exit_code(), crate::error::EXIT_INPUT);

        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"[{"country":"Testland"}]"#).unwrap();
        let bad = read_countries(&path).unwrap_err();
        assert_eq!(bad.exit_code(), crate::error::EXIT_INPUT);
        assert!(bad.to_string().contains("slug"));
    }
}
