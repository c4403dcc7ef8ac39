//! Header verification for delimited record files.
//!
//! The first line of a waste record file must name the expected columns in
//! exact order and count. Column names are compared verbatim after removing a
//! leading byte order mark.

use crate::constants::UTF8_BOM;
use crate::error::{ReaderError, Result};
use crate::reader::field_parsers::split_record;
use std::path::Path;
use tracing::debug;

/// Split a header line into its column names
pub fn split_header(line: &str, delimiter: u8) -> csv::Result<Vec<String>> {
    let record = split_record(line.trim_start_matches(UTF8_BOM), delimiter)?;
    Ok(record.iter().map(str::to_string).collect())
}

/// Whether the header columns equal `expected` exactly
pub fn header_matches(columns: &[String], expected: &[&str]) -> bool {
    columns.len() == expected.len()
        && columns
            .iter()
            .zip(expected)
            .all(|(found, wanted)| found == wanted)
}

/// Verify the header line of `path` against the expected columns
pub fn verify_header(path: &Path, line: &str, delimiter: u8, expected: &[&str]) -> Result<()> {
    let columns = split_header(line, delimiter)
        .map_err(|e| ReaderError::malformed_record(path, 1, format!("cannot split header: {e}")))?;

    if !header_matches(&columns, expected) {
        return Err(ReaderError::HeaderMismatch {
            path: path.to_path_buf(),
            expected: expected.iter().map(|column| column.to_string()).collect(),
            found: columns,
        });
    }

    debug!(
        "Header of {} matches {} expected columns",
        path.display(),
        expected.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WASTE_HEADER;

    const VALID: &str = "Año;Mes;Lote;Residuo;Distrito;Nombre Distrito;Toneladas";

    #[test]
    fn test_valid_header() {
        assert!(verify_header(Path::new("r.csv"), VALID, b';', WASTE_HEADER).is_ok());
    }

    #[test]
    fn test_header_with_bom() {
        let line = format!("{UTF8_BOM}{VALID}");
        assert!(verify_header(Path::new("r.csv"), &line, b';', WASTE_HEADER).is_ok());
    }

    #[test]
    fn test_header_with_other_delimiter() {
        let line = VALID.replace(';', ",");
        assert!(verify_header(Path::new("r.csv"), &line, b',', WASTE_HEADER).is_ok());
        assert!(verify_header(Path::new("r.csv"), &line, b';', WASTE_HEADER).is_err());
    }

    #[test]
    fn test_each_missing_column_is_rejected() {
        for skipped in 0..WASTE_HEADER.len() {
            let line = WASTE_HEADER
                .iter()
                .enumerate()
                .filter(|(index, _)| *index != skipped)
                .map(|(_, column)| *column)
                .collect::<Vec<_>>()
                .join(";");

            let result = verify_header(Path::new("r.csv"), &line, b';', WASTE_HEADER);
            assert!(
                matches!(result, Err(ReaderError::HeaderMismatch { .. })),
                "header without column {skipped} should be rejected"
            );
        }
    }

    #[test]
    fn test_extra_column_is_rejected() {
        let line = format!("{VALID};Extra");
        let result = verify_header(Path::new("r.csv"), &line, b';', WASTE_HEADER);
        assert!(matches!(result, Err(ReaderError::HeaderMismatch { .. })));
    }

    #[test]
    fn test_reordered_columns_are_rejected() {
        let line = "Mes;Año;Lote;Residuo;Distrito;Nombre Distrito;Toneladas";
        assert!(verify_header(Path::new("r.csv"), line, b';', WASTE_HEADER).is_err());
    }

    #[test]
    fn test_mismatch_reports_found_columns() {
        match verify_header(Path::new("r.csv"), "Year;Month", b';', WASTE_HEADER) {
            Err(ReaderError::HeaderMismatch {
                expected, found, ..
            }) => {
                assert_eq!(expected.len(), 7);
                assert_eq!(found, vec!["Year".to_string(), "Month".to_string()]);
            }
            other => panic!("Expected HeaderMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_split_header() {
        let columns = split_header(&format!("{UTF8_BOM}A/B//C"), b'/').unwrap();
        assert_eq!(columns, vec!["A", "B", "", "C"]);
    }
}
