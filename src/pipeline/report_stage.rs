//! Report output stage.
//!
//! Resolves the report format, renders the scored vector and writes it
//! to file or stdout.

use crate::config::AppConfig;
use crate::reports::{create_reporter_with_options, ReportFormat};
use crate::scoring::ScoredVector;
use anyhow::Result;

use super::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Render a report for the configured format.
///
/// Returns the effective format alongside the report text.
pub fn render_report(
    config: &AppConfig,
    scored: &ScoredVector,
    target: &OutputTarget,
) -> Result<(ReportFormat, String)> {
    let effective_output = auto_detect_format(config.output.format, target);
    let use_color = should_use_color(config.output.no_color, target);
    let report_config = config.report_config();

    tracing::debug!(format = %effective_output, use_color, "rendering report");

    let reporter = create_reporter_with_options(effective_output, use_color);
    let report = reporter.generate_score_report(scored, &report_config)?;
    Ok((effective_output, report))
}

/// Output a score report to the given destination.
pub fn output_report(
    config: &AppConfig,
    scored: &ScoredVector,
    target: &OutputTarget,
) -> Result<()> {
    let (_, report) = render_report(config, scored, target)?;
    write_output(&report, target, config.behavior.quiet)
}
