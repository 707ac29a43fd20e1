//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use asplode_core::AsplodeError;
use asplode_core::AsplodeReport;
use console::Term;
use console::style;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn display_name(archive: &Path) -> String {
        archive.file_name().map_or_else(
            || archive.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_archive_start(&self, archive: &Path, depth: usize) {
        if !self.verbose || self.quiet {
            return;
        }

        let indent = "  ".repeat(depth);
        let _ = self.term.write_line(&format!(
            "{indent} Extracting {}",
            Self::display_name(archive)
        ));
    }

    fn format_step_failure(&self, _archive: &Path, error: &AsplodeError) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error}"));
        }
    }

    fn format_report(&self, report: &AsplodeReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        match &report.root {
            Some(root) if self.use_colors => {
                let _ = self.term.write_line(&format!(
                    "{} Extracted to {}",
                    style("✓").green().bold(),
                    root.display()
                ));
            }
            Some(root) => {
                let _ = self
                    .term
                    .write_line(&format!("Extracted to {}", root.display()));
            }
            None if report.has_failures() => {
                let _ = self.term.write_line("Nothing extracted");
            }
            None => {
                let _ = self.term.write_line("Archive is empty");
            }
        }

        let _ = self.term.write_line(&format!(
            "  Archives: {}",
            Self::format_number(report.archives_extracted)
        ));
        let _ = self.term.write_line(&format!(
            "  Files extracted: {}",
            Self::format_number(report.files_extracted)
        ));
        let _ = self.term.write_line(&format!(
            "  Total size: {}",
            Self::format_size(report.bytes_written)
        ));

        if report.has_failures() {
            let _ = self
                .term
                .write_line(&format!("  Failures: {}", report.failures.len()));
        }

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Directories: {}",
                Self::format_number(report.directories_created)
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
            for path in &report.extracted {
                let _ = self.term.write_line(&format!("  - {}", path.display()));
            }
        }

        for warning in &report.warnings {
            self.format_warning(warning);
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("WARNING: {message}"));
        }
    }
}
