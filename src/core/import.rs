use crate::core::{CourseId, CourseLedger, Storage};
use crate::utils::error::{LedgerError, Result, ValidationError};
use serde::{Deserialize, Serialize};

pub const REQUIRED_COLUMNS: [&str; 3] = ["name", "grade", "credits"];

/// One row of a course file: `name,grade,credits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRow {
    pub name: String,
    pub grade: String,
    pub credits: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// 1-based line in the file, header included.
    pub line: u64,
    pub name: String,
    pub error: ValidationError,
}

#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub imported: Vec<CourseId>,
    pub rejected: Vec<RejectedRow>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Adds every row of `data` through [`CourseLedger::add`].
///
/// Rows that fail validation are reported and skipped. A structurally
/// broken file stops the import with [`LedgerError::ImportError`].
pub fn import_csv(ledger: &mut CourseLedger, data: &[u8]) -> Result<ImportReport> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    if !headers.is_empty() {
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(LedgerError::ImportError {
                line: 1,
                message: format!("header is missing column(s): {}", missing.join(", ")),
            });
        }
    }

    let mut report = ImportReport::default();
    for result in reader.records() {
        let record = result.map_err(|e| LedgerError::ImportError {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            message: e.to_string(),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: CourseRow = record
            .deserialize(Some(&headers))
            .map_err(|e| LedgerError::ImportError {
                line,
                message: e.to_string(),
            })?;

        match ledger.add(&row.name, &row.grade, &row.credits) {
            Ok(course) => report.imported.push(course.id()),
            Err(error) => {
                tracing::warn!("Skipping line {} ('{}'): {}", line, row.name, error);
                report.rejected.push(RejectedRow {
                    line,
                    name: row.name,
                    error,
                });
            }
        }
    }

    tracing::info!(
        "Imported {} course(s), rejected {}",
        report.imported.len(),
        report.rejected.len()
    );
    Ok(report)
}

pub fn export_csv(ledger: &CourseLedger) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for course in ledger.courses() {
        writer.serialize(CourseRow {
            name: course.name().to_string(),
            grade: course.grade_label().to_string(),
            credits: course.credits().to_string(),
        })?;
    }
    writer.flush()?;
    writer.into_inner().map_err(|e| LedgerError::IoError(e.into_error()))
}

pub fn import_from<S: Storage>(
    storage: &S,
    ledger: &mut CourseLedger,
    path: &str,
) -> Result<ImportReport> {
    tracing::info!("Reading courses from {}", path);
    let data = storage.read_file(path)?;
    import_csv(ledger, &data)
}

pub fn export_to<S: Storage>(storage: &S, ledger: &CourseLedger, path: &str) -> Result<()> {
    let data = export_csv(ledger)?;
    storage.write_file(path, &data)?;
    tracing::info!("Wrote {} course(s) to {}", ledger.len(), path);
    Ok(())
}
