mod mapping;
mod normalizer;
mod parser;

pub(crate) use normalizer::defaults;

use super::domain::EmployeeRecord;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Upper bound on data rows consumed from a single upload.
pub const MAX_IMPORT_ROWS: usize = 50;

#[derive(Debug)]
pub enum IntakeError {
    Io(std::io::Error),
    Csv(csv::Error),
    NoData,
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Io(err) => write!(f, "failed to read employee upload: {}", err),
            IntakeError::Csv(err) => write!(f, "employee upload is not readable CSV: {}", err),
            IntakeError::NoData => write!(f, "no valid data found in employee upload"),
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Io(err) => Some(err),
            IntakeError::Csv(err) => Some(err),
            IntakeError::NoData => None,
        }
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IntakeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Normalized upload plus the row accounting shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportOutcome {
    pub records: Vec<EmployeeRecord>,
    pub total_rows: usize,
    pub processed_rows: usize,
}

impl ImportOutcome {
    pub fn was_truncated(&self) -> bool {
        self.total_rows > self.processed_rows
    }
}

pub struct EmployeeImporter;

impl EmployeeImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ImportOutcome, IntakeError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_text(text: &str) -> Result<ImportOutcome, IntakeError> {
        Self::from_reader(text.as_bytes())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ImportOutcome, IntakeError> {
        let table = parser::parse_table(reader, MAX_IMPORT_ROWS)?.ok_or(IntakeError::NoData)?;

        let records: Vec<EmployeeRecord> =
            table.rows.iter().map(normalizer::normalize_row).collect();
        let outcome = ImportOutcome {
            processed_rows: records.len(),
            total_rows: table.total_rows,
            records,
        };

        if outcome.was_truncated() {
            warn!(
                total_rows = outcome.total_rows,
                processed_rows = outcome.processed_rows,
                "employee upload exceeds row cap; extra rows ignored"
            );
        }
        debug!(
            columns = table.headers.len(),
            rows = outcome.processed_rows,
            "employee upload normalized"
        );

        Ok(outcome)
    }
}
