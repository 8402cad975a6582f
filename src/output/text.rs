//! Text summary of a generation run
//!
//! Lists included applications with their latest version and skipped
//! applications with the reason, followed by a one-line total.

use crate::assembler::{AssembleOutcome, SkippedApp};
use crate::domain::ApplicationRecord;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Formatter for the end-of-run summary
pub struct SummaryFormatter {
    /// Whether to use colors
    color: bool,
}

impl SummaryFormatter {
    /// Create a new summary formatter
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a new summary formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Write the summary for `outcome`, written to `output`
    pub fn format(
        &self,
        outcome: &AssembleOutcome,
        output: &Path,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let apps = &outcome.document.apps;
        let width = apps
            .iter()
            .map(|a| a.name.chars().count())
            .chain(outcome.skipped.iter().map(|s| s.name.chars().count()))
            .max()
            .unwrap_or(0);

        for app in apps {
            self.format_app_line(app, width, writer)?;
        }
        for skipped in &outcome.skipped {
            self.format_skip_line(skipped, width, writer)?;
        }

        let total = format!(
            "{} app(s) written to {}, {} skipped",
            apps.len(),
            output.display(),
            outcome.skipped.len()
        );
        if self.color {
            let mark = if outcome.skipped.is_empty() {
                "✓".green()
            } else {
                "!".yellow()
            };
            writeln!(writer, "{} {}", mark, total.bold())
        } else {
            writeln!(writer, "{}", total)
        }
    }

    fn format_app_line(
        &self,
        app: &ApplicationRecord,
        width: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let date = app.version_date.format("%Y/%m/%d");
        let count = app.versions.len();

        if self.color {
            writeln!(
                writer,
                "  {} {} {}",
                format!("{:width$}", app.name, width = width),
                app.version.bright_white().bold(),
                format!("({}, {} version(s))", date, count).dimmed()
            )
        } else {
            writeln!(
                writer,
                "  {:width$} {} ({}, {} version(s))",
                app.name,
                app.version,
                date,
                count,
                width = width
            )
        }
    }

    fn format_skip_line(
        &self,
        skipped: &SkippedApp,
        width: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.color {
            writeln!(
                writer,
                "  {} {}",
                format!("{:width$}", skipped.name, width = width).dimmed(),
                format!("(skipped: {})", skipped.reason).yellow()
            )
        } else {
            writeln!(
                writer,
                "  {:width$} (skipped: {})",
                skipped.name,
                skipped.reason,
                width = width
            )
        }
    }
}

impl Default for SummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}
