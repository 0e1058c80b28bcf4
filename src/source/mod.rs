//! Schedule Source
//!
//! Loads appointment records from files on disk. This is the stand-in for a
//! booking back-end: the widgets only ever see the resulting records.
//!
//! Supported formats, chosen by file extension:
//! - `.json`: an array of appointment records (camelCase fields)
//! - `.csv`: one appointment per row, see [`csv_import`]

pub mod csv_import;

pub use csv_import::{CsvScheduleImporter, ImportReport};

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::AppointmentRecord;
use crate::widgets::TimeFormatter;

/// Errors that can occur while loading a schedule
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read schedule file {path}: {error}")]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse schedule file {path}: {error}")]
    Json {
        path: PathBuf,
        error: serde_json::Error,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Could not parse start time: {0}")]
    InvalidTimestamp(String),

    #[error("Unsupported schedule format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Load every appointment in a schedule file.
///
/// JSON files must be fully valid. CSV rows that fail to parse are skipped
/// and listed in the report.
pub fn load_schedule(path: &Path) -> SourceResult<ImportReport> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let report = match extension.as_deref() {
        Some("json") => {
            let content = std::fs::read_to_string(path).map_err(|error| SourceError::Io {
                path: path.to_path_buf(),
                error,
            })?;
            let records = parse_json(&content).map_err(|error| SourceError::Json {
                path: path.to_path_buf(),
                error,
            })?;
            ImportReport {
                records,
                ..Default::default()
            }
        }
        Some("csv") => CsvScheduleImporter::new().import(path)?,
        _ => return Err(SourceError::UnsupportedFormat(path.to_path_buf())),
    };

    tracing::info!(
        path = %path.display(),
        records = report.records.len(),
        failed = report.rows_failed,
        "Schedule loaded"
    );
    for error in &report.errors {
        tracing::warn!(path = %path.display(), "{}", error);
    }

    Ok(report)
}

/// Parse a JSON array of appointment records
pub fn parse_json(content: &str) -> Result<Vec<AppointmentRecord>, serde_json::Error> {
    serde_json::from_str(content)
}

/// The appointments starting on `date` in the formatter's zone, earliest
/// first. Appointments with equal start times keep their input order.
pub fn appointments_on(
    records: &[AppointmentRecord],
    date: NaiveDate,
    formatter: &TimeFormatter,
) -> Vec<AppointmentRecord> {
    let mut day: Vec<AppointmentRecord> = records
        .iter()
        .filter(|appt| formatter.date_of(&appt.starts_at) == date)
        .cloned()
        .collect();
    day.sort_by_key(|appt| appt.starts_at);
    day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CustomerRecord;
    use chrono::{FixedOffset, TimeZone, Utc};
    use std::io::Write;

    fn named(path: &Path, body: &str) {
        let mut file = std::fs::File::create(path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_json_schedule() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("today.json");
        named(
            &path,
            r#"[
                {"startsAt": "2026-10-16T12:00:00Z", "customer": {"firstName": "Ashley"}},
                {"startsAt": 1792155600000, "customer": {"firstName": "Jordan"}, "details": {"stylist": "Sam"}}
            ]"#,
        );

        let report = load_schedule(&path).unwrap();
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.rows_failed, 0);
        assert_eq!(report.records[1].details.stylist.as_deref(), Some("Sam"));
    }

    #[test]
    fn test_load_csv_schedule() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("today.CSV");
        named(&path, "starts_at,first_name\n2026-10-16T12:00:00Z,Ashley\nbad,Jordan\n");

        let report = load_schedule(&path).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.rows_failed, 1);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("today.json");
        named(&path, r#"[{"customer": {}}]"#);

        assert!(matches!(load_schedule(&path), Err(SourceError::Json { .. })));
    }

    #[test]
    fn test_unsupported_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("today.txt");
        assert!(matches!(load_schedule(&txt), Err(SourceError::UnsupportedFormat(_))));

        let missing = dir.path().join("missing.json");
        assert!(matches!(load_schedule(&missing), Err(SourceError::Io { .. })));
    }

    #[test]
    fn test_appointments_on_filters_and_sorts() {
        let utc = TimeFormatter::fixed(FixedOffset::east_opt(0).unwrap());
        let record = |d: u32, h: u32, name: &str| {
            AppointmentRecord::new(Utc.with_ymd_and_hms(2026, 10, d, h, 0, 0).unwrap())
                .customer(CustomerRecord::new().first_name(name))
        };
        let records = vec![
            record(16, 13, "Jordan"),
            record(15, 9, "Yesterday"),
            record(16, 12, "Ashley"),
            record(16, 13, "Sam"),
        ];

        let day = appointments_on(&records, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(), &utc);
        let names: Vec<_> = day.iter().map(|a| a.customer.full_name()).collect();
        assert_eq!(names, vec!["Ashley", "Jordan", "Sam"]);
    }

    #[test]
    fn test_appointments_on_respects_display_zone() {
        // 23:30 UTC on the 15th is already the 16th at UTC+1
        let late = AppointmentRecord::new(Utc.with_ymd_and_hms(2026, 10, 15, 23, 30, 0).unwrap());
        let plus_one = TimeFormatter::fixed(FixedOffset::east_opt(3600).unwrap());

        let day = appointments_on(&[late], NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(), &plus_one);
        assert_eq!(day.len(), 1);
    }
}
