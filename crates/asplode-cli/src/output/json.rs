//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use asplode_core::AsplodeError;
use asplode_core::AsplodeReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct FailureOutput {
    archive: String,
    depth: usize,
    message: String,
}

#[derive(Debug, Serialize)]
struct AsplodeOutput {
    root: Option<String>,
    extracted: Vec<String>,
    archives_extracted: usize,
    files_extracted: usize,
    directories_created: usize,
    bytes_written: u64,
    files_skipped: usize,
    failures: Vec<FailureOutput>,
    warnings: Vec<String>,
    duration_ms: u128,
}

impl From<&AsplodeReport> for AsplodeOutput {
    fn from(report: &AsplodeReport) -> Self {
        Self {
            root: report.root.as_ref().map(|p| p.display().to_string()),
            extracted: report
                .extracted
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            archives_extracted: report.archives_extracted,
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
            files_skipped: report.files_skipped,
            failures: report
                .failures
                .iter()
                .map(|f| FailureOutput {
                    archive: f.archive.display().to_string(),
                    depth: f.depth,
                    message: f.message.clone(),
                })
                .collect(),
            warnings: report.warnings.clone(),
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    // Progress and step failures are carried by the final report.
    fn format_archive_start(&self, _archive: &Path, _depth: usize) {}

    fn format_step_failure(&self, _archive: &Path, _error: &AsplodeError) {}

    fn format_report(&self, report: &AsplodeReport) -> Result<()> {
        let output = JsonOutput::success("extract", AsplodeOutput::from(report));
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("extract", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
