//! Summary report generator for shell output.
//!
//! Renders the four score groups as horizontal bars on a 0-10 scale.

use super::{score_groups, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::scoring::{ScoredVector, Severity};

/// Width of a full-scale (10.0) bar, in cells.
const BAR_WIDTH: usize = 40;
/// Width of the label column.
const LABEL_WIDTH: usize = 16;
/// Width of the metric name column.
const METRIC_NAME_WIDTH: usize = 30;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "magenta" => format!("\x1b[35m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "magenta",
        Severity::High => "red",
        Severity::Medium => "yellow",
        Severity::Low => "green",
        Severity::None => "dim",
    }
}

/// Bar of `BAR_WIDTH` cells, filled in proportion to `score / 10`.
fn render_bar(score: f64) -> (String, String) {
    let filled = ((score.clamp(0.0, 10.0) / 10.0) * BAR_WIDTH as f64).round() as usize;
    ("█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn score_line(&self, label: &str, score: f64) -> String {
        let color = severity_color(Severity::from_score(score));
        let (filled, empty) = render_bar(score);
        format!(
            "  {label:<LABEL_WIDTH$}{}{} {}",
            self.color(&filled, color),
            self.color(&empty, "dim"),
            self.color(&format!("{score:>4.1}"), "bold"),
        )
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_score_report(
        &self,
        scored: &ScoredVector,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let result = &scored.result;
        let mut lines = Vec::new();

        // Header
        lines.push(self.color(config.title_or_default(), "bold"));
        lines.push(self.color("─".repeat(LABEL_WIDTH + BAR_WIDTH + 5).as_str(), "dim"));
        lines.push(format!("{}  {}", self.color("Vector:", "cyan"), scored.vector));
        lines.push(format!(
            "{}  {}",
            self.color("Canonical:", "cyan"),
            scored.canonical_vector()
        ));

        for group in score_groups(result) {
            lines.push(String::new());
            lines.push(self.color(group.name, "bold"));
            for (label, score) in group.scores {
                lines.push(self.score_line(label, score));
            }
        }

        lines.push(String::new());
        let severity = result.overall_severity();
        lines.push(format!(
            "{}  {}",
            self.color("Severity:", "cyan"),
            self.color(severity.as_str(), severity_color(severity))
        ));

        if config.include_metrics {
            lines.push(String::new());
            lines.push(self.color("Metrics:", "bold"));
            for (metric, letter) in scored.metrics.recognized() {
                let coefficient = scored
                    .input
                    .coefficient(metric)
                    .map_or_else(|| "-".to_string(), |c| format!("{c:.2}"));
                lines.push(format!(
                    "  {:<METRIC_NAME_WIDTH$}{}:{letter}  {}",
                    metric.name(),
                    metric.abbreviation(),
                    self.color(&coefficient, "dim"),
                ));
            }
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
