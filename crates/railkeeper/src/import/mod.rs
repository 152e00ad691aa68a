//! Spreadsheet importer for railkeeper.
//!
//! Turns an uploaded tabular file into normalized maintenance records.
//! Column headers are mapped through the ordered rule table in [`rules`];
//! rows whose resolved train number is blank are discarded entirely. The
//! importer never mutates the record store itself; it reports the accepted
//! records back to the caller.

pub mod rules;
pub mod tabular;

use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::MaintenanceRecord;

use rules::TargetField;
use tabular::Row;

pub use rules::{ColumnRule, COLUMN_RULES};

/// Placeholder for blank type/status cells.
const UNKNOWN: &str = "Unknown";

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// The accepted records, in file order.
    pub records: Vec<MaintenanceRecord>,
    /// Count of accepted rows (always `records.len()`, kept for reporting).
    pub accepted: usize,
}

/// Import records from raw file bytes.
///
/// # Errors
///
/// - [`Error::ImportUnreadable`] if the bytes cannot be parsed as tabular
///   data at all.
/// - [`Error::ImportEmpty`] if the file parsed but zero rows survived
///   filtering.
pub fn import_bytes(bytes: &[u8]) -> Result<ImportReport> {
    let rows = tabular::parse(bytes)?;
    let total = rows.len();

    let records: Vec<MaintenanceRecord> = rows.into_iter().filter_map(normalize_row).collect();
    if records.is_empty() {
        debug!("Import produced no valid rows out of {total}");
        return Err(Error::ImportEmpty);
    }

    info!("Imported {} of {} rows", records.len(), total);
    Ok(ImportReport {
        accepted: records.len(),
        records,
    })
}

/// Import records from a file on disk.
///
/// Reading the file's bytes is the single suspension point of the system;
/// parsing and normalization are synchronous.
///
/// # Errors
///
/// Returns [`Error::ImportUnreadable`] if the file cannot be read, plus the
/// same outcomes as [`import_bytes`].
pub async fn import_path(path: impl AsRef<Path>) -> Result<ImportReport> {
    let bytes = tokio::fs::read(path.as_ref())
        .await
        .map_err(|e| Error::import_unreadable(e.to_string()))?;
    import_bytes(&bytes)
}

/// Map one row's cells through the rule table and build a record.
///
/// Returns `None` when the resolved train number is empty or
/// whitespace-only; such rows are dropped without individual reporting.
fn normalize_row(row: Row) -> Option<MaintenanceRecord> {
    let mut train_number = String::new();
    let mut kind = String::new();
    let mut status = String::new();
    let mut date = String::new();
    let mut notes = String::new();

    for (header, value) in row {
        match rules::resolve(&header) {
            Some(TargetField::TrainNumber) => train_number = value,
            Some(TargetField::Kind) => kind = value,
            Some(TargetField::Status) => status = value,
            Some(TargetField::Date) => date = value,
            Some(TargetField::Notes) => notes = value,
            // Fallback guess: an unmatched column feeds the train number,
            // but only while it is still unset for this row.
            None => {
                if train_number.is_empty() {
                    train_number = value;
                }
            }
        }
    }

    if train_number.trim().is_empty() {
        return None;
    }

    Some(MaintenanceRecord::new(
        train_number,
        or_unknown(kind),
        or_unknown(status),
        date,
        notes,
    ))
}

/// Substitute the placeholder for blank cell values.
fn or_unknown(value: String) -> String {
    if value.trim().is_empty() {
        UNKNOWN.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> Row {
        cells
            .iter()
            .map(|(h, v)| ((*h).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_normalize_row_full() {
        let record = normalize_row(row(&[
            ("trainNumber", "T100"),
            ("type", "Express"),
            ("status", "Delayed"),
            ("date", "2026-04-01"),
            ("notes", "axle check"),
        ]))
        .unwrap();

        assert_eq!(record.train_number, "T100");
        assert_eq!(record.kind, "Express");
        assert_eq!(record.status, "Delayed");
        assert_eq!(record.date, "2026-04-01");
        assert_eq!(record.notes, "axle check");
    }

    #[test]
    fn test_normalize_row_heterogeneous_headers() {
        let record = normalize_row(row(&[
            ("TrainNo", "T100"),
            ("Class", "Express"),
            ("State", "Delayed"),
        ]))
        .unwrap();

        assert_eq!(record.train_number, "T100");
        assert_eq!(record.kind, "Express");
        assert_eq!(record.status, "Delayed");
    }

    #[test]
    fn test_normalize_row_defaults() {
        let record = normalize_row(row(&[("trainNumber", "T5")])).unwrap();

        assert_eq!(record.kind, "Unknown");
        assert_eq!(record.status, "Unknown");
        assert_eq!(record.date, MaintenanceRecord::today());
        assert_eq!(record.notes, "");
    }

    #[test]
    fn test_normalize_row_blank_train_number_discarded() {
        assert!(normalize_row(row(&[
            ("trainNumber", ""),
            ("type", "Local"),
            ("status", "OK"),
        ]))
        .is_none());

        assert!(normalize_row(row(&[("trainNumber", "   ")])).is_none());
    }

    #[test]
    fn test_normalize_row_fallback_guess() {
        // No header matches any rule; the first unmatched value becomes
        // the train number and later ones are ignored.
        let record = normalize_row(row(&[("id", "T300"), ("owner", "depot 4")])).unwrap();
        assert_eq!(record.train_number, "T300");
    }

    #[test]
    fn test_normalize_row_fallback_does_not_overwrite() {
        let record = normalize_row(row(&[("trainNumber", "T1"), ("misc", "junk")])).unwrap();
        assert_eq!(record.train_number, "T1");
    }

    #[test]
    fn test_import_bytes_scenario() {
        let csv = b"TrainNo,Class,State\nT100,Express,Delayed\n,Local,OK\n";
        let report = import_bytes(csv).unwrap();

        assert_eq!(report.accepted, 1);
        assert_eq!(report.records.len(), 1);
        let record = &report.records[0];
        assert_eq!(record.train_number, "T100");
        assert_eq!(record.kind, "Express");
        assert_eq!(record.status, "Delayed");
    }

    #[test]
    fn test_import_bytes_zero_valid_rows() {
        let csv = b"trainNumber,type,status\n,Local,OK\n  ,Express,Late\n";
        let err = import_bytes(csv).unwrap_err();
        assert!(matches!(err, Error::ImportEmpty));
    }

    #[test]
    fn test_import_bytes_unreadable() {
        let mut bytes = b"PK\x03\x04".to_vec();
        bytes.extend_from_slice(&[0u8; 16]);
        let err = import_bytes(&bytes).unwrap_err();
        assert!(matches!(err, Error::ImportUnreadable { .. }));
    }

    #[test]
    fn test_import_determinism() {
        let csv = b"trainNumber,type\nT1,Express\n,Local\nT2,Local\n";
        for _ in 0..3 {
            let report = import_bytes(csv).unwrap();
            let trains: Vec<_> = report
                .records
                .iter()
                .map(|r| r.train_number.as_str())
                .collect();
            assert_eq!(trains, ["T1", "T2"]);
        }
    }

    #[test]
    fn test_import_bytes_fresh_ids_per_row() {
        let csv = b"trainNumber\nT1\nT2\n";
        let report = import_bytes(csv).unwrap();
        assert_ne!(report.records[0].id, report.records[1].id);
    }

    #[tokio::test]
    async fn test_import_path_missing_file_is_unreadable() {
        let err = import_path("/nonexistent/railkeeper/upload.xlsx")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ImportUnreadable { .. }));
    }

    #[tokio::test]
    async fn test_import_path_reads_csv() {
        let path = std::env::temp_dir().join(format!("railkeeper_import_{}.csv", std::process::id()));
        std::fs::write(&path, "trainNumber,status\nT9,OK\n").unwrap();

        let report = import_path(&path).await.unwrap();
        assert_eq!(report.accepted, 1);
        assert_eq!(report.records[0].train_number, "T9");

        let _ = std::fs::remove_file(&path);
    }
}
