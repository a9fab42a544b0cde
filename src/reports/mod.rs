//! Report generation for scored vectors.
//!
//! This module provides multiple output formats for a [`ScoredVector`]:
//! - Summary: text bar chart of the four score groups, for terminals
//! - JSON: structured data for programmatic integration
//! - CSV: one row per plotted score, for spreadsheets
//! - Markdown: human-readable documentation
//!
//! Every reporter consumes the computed [`ScoreResult`](crate::scoring::ScoreResult)
//! fields as they are and never recomputes them.
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! The raw vector string is echoed verbatim and must be escaped before
//! embedding in Markdown or CSV reports.

mod csv;
pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{score_groups, ReportConfig, ReportFormat, ReportMetadata, ScoreGroup};

use crate::scoring::ScoredVector;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for one scored vector
    fn generate_score_report(
        &self,
        scored: &ScoredVector,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_score_report(
        &self,
        scored: &ScoredVector,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_score_report(scored, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_vector;

    #[test]
    fn test_create_reporter_matches_format() {
        for format in [
            ReportFormat::Summary,
            ReportFormat::Json,
            ReportFormat::Csv,
            ReportFormat::Markdown,
        ] {
            assert_eq!(create_reporter(format).format(), format);
        }
        assert_eq!(
            create_reporter(ReportFormat::Auto).format(),
            ReportFormat::Summary
        );
    }

    #[test]
    fn test_write_score_report_matches_generate() {
        let scored = score_vector("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap();
        let config = ReportConfig::default();
        let reporter = CsvReporter::new();

        let mut buffer = Vec::new();
        reporter
            .write_score_report(&scored, &config, &mut buffer)
            .unwrap();
        let generated = reporter.generate_score_report(&scored, &config).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), generated);
    }
}
