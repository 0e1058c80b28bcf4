//! CSV Schedule Import
//!
//! Reads a day's appointments from a CSV export. Columns are matched by
//! header name, case-insensitively and ignoring `_`, `-` and spaces, so
//! `starts_at`, `StartsAt` and `Starts At` all map to the start time.
//! Unknown columns are ignored.
//!
//! Bad rows do not abort the import: they are counted and described in the
//! report, and the remaining rows still load.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use super::{SourceError, SourceResult};
use crate::model::{parse_instant, AppointmentRecord, CustomerRecord, ServiceDetails};

/// Errors kept in a report before the rest are summarised
const MAX_REPORTED_ERRORS: usize = 100;

/// Column holding the start time; the only required one
const STARTS_AT: &str = "startsat";

/// Outcome of a schedule import
#[derive(Debug, Default)]
pub struct ImportReport {
    pub records: Vec<AppointmentRecord>,
    pub rows_failed: usize,
    pub errors: Vec<String>,
}

/// CSV importer for appointment schedules
#[derive(Debug, Clone)]
pub struct CsvScheduleImporter {
    delimiter: u8,
}

impl Default for CsvScheduleImporter {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Header positions, keyed by normalized column name
struct Columns(HashMap<String, usize>);

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        Self(
            headers
                .iter()
                .enumerate()
                .map(|(idx, h)| (normalize_header(h), idx))
                .collect(),
        )
    }

    /// Trimmed, non-empty cell for a column
    fn cell(&self, record: &csv::StringRecord, column: &str) -> Option<String> {
        self.0
            .get(column)
            .and_then(|idx| record.get(*idx))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

impl CsvScheduleImporter {
    /// Create an importer for comma-separated files
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Import a schedule from a CSV file
    pub fn import(&self, path: &Path) -> SourceResult<ImportReport> {
        let file = std::fs::File::open(path).map_err(|error| SourceError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        self.import_reader(file)
    }

    /// Import from a CSV string
    pub fn import_str(&self, csv_data: &str) -> SourceResult<ImportReport> {
        self.import_reader(csv_data.as_bytes())
    }

    fn import_reader<R: Read>(&self, rdr: R) -> SourceResult<ImportReport> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(rdr);

        let columns = Columns::from_headers(reader.headers()?);
        if !columns.0.contains_key(STARTS_AT) {
            return Err(SourceError::MissingColumn("starts_at".to_string()));
        }

        let mut report = ImportReport::default();

        for (line_num, result) in reader.records().enumerate() {
            // Header is line 1
            let actual_line = line_num + 2;

            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    report.errors.push(format!("Line {}: {}", actual_line, e));
                    report.rows_failed += 1;
                    continue;
                }
            };

            let Some(raw) = columns.cell(&record, STARTS_AT) else {
                report.errors.push(format!("Line {}: missing start time", actual_line));
                report.rows_failed += 1;
                continue;
            };

            let Some(starts_at) = parse_instant(&raw) else {
                report
                    .errors
                    .push(format!("Line {}: {}", actual_line, SourceError::InvalidTimestamp(raw)));
                report.rows_failed += 1;
                continue;
            };

            let cell = |column: &str| columns.cell(&record, column);
            report.records.push(AppointmentRecord {
                starts_at,
                customer: CustomerRecord {
                    first_name: cell("firstname"),
                    last_name: cell("lastname"),
                    phone_number: cell("phonenumber"),
                },
                details: ServiceDetails {
                    stylist: cell("stylist"),
                    service: cell("service"),
                    notes: cell("notes"),
                },
            });
        }

        if report.errors.len() > MAX_REPORTED_ERRORS {
            let total = report.errors.len();
            report.errors.truncate(MAX_REPORTED_ERRORS);
            report
                .errors
                .push(format!("... and {} more errors", total - MAX_REPORTED_ERRORS));
        }

        tracing::debug!(
            records = report.records.len(),
            failed = report.rows_failed,
            "CSV schedule parsed"
        );

        Ok(report)
    }
}
