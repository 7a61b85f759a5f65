use crate::core::import::{export_to, import_from, ImportReport};
use crate::core::report::{render_course_table, render_summary, LedgerReport};
use crate::core::{ConfigProvider, CourseLedger, Storage};
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One batch calculation: import a course file, render it, optionally export.
pub struct Calculator<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> Calculator<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn run<W: Write>(
        &self,
        input: &str,
        format: OutputFormat,
        export: Option<&str>,
        out: &mut W,
    ) -> Result<(CourseLedger, ImportReport)> {
        let mut ledger = CourseLedger::from_config(&self.config);
        let report = import_from(&self.storage, &mut ledger, input)?;
        let precision = self.config.precision();

        match format {
            OutputFormat::Text => {
                write!(out, "{}", render_course_table(ledger.courses()))?;
                writeln!(out)?;
                write!(out, "{}", render_summary(&ledger.summary(), precision))?;
                for rejected in &report.rejected {
                    writeln!(
                        out,
                        "Skipped line {} ({}): {}",
                        rejected.line,
                        rejected.name,
                        rejected.error.user_message()
                    )?;
                }
            }
            OutputFormat::Json => {
                writeln!(out, "{}", LedgerReport::new(&ledger, precision).to_json()?)?;
            }
        }

        if let Some(path) = export {
            export_to(&self.storage, &ledger, path)?;
        }

        Ok((ledger, report))
    }
}
