//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::{score_groups, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::scoring::{ScoredVector, Severity};
use std::fmt::Write as _;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_score_report(
        &self,
        scored: &ScoredVector,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();
        let result = &scored.result;

        writeln!(md, "# {}\n", escape_markdown_inline(config.title_or_default()))?;
        writeln!(md, "| | |")?;
        writeln!(md, "|---|---|")?;
        writeln!(md, "| **Vector** | `{}` |", escape_markdown_table(&scored.vector))?;
        writeln!(md, "| **Canonical** | `{}` |", scored.canonical_vector())?;
        writeln!(
            md,
            "| **Overall** | {:.1} ({}) |",
            result.overall_score,
            result.overall_severity()
        )?;
        writeln!(md)?;

        for group in score_groups(result) {
            writeln!(md, "## {}\n", group.name)?;
            writeln!(md, "| Score | Value | Severity |")?;
            writeln!(md, "|-------|------:|----------|")?;
            for (label, value) in group.scores {
                writeln!(md, "| {label} | {value:.1} | {} |", Severity::from_score(value))?;
            }
            writeln!(md)?;
        }

        if config.include_metrics {
            writeln!(md, "## Metrics\n")?;
            writeln!(md, "| Metric | Name | Value | Coefficient |")?;
            writeln!(md, "|--------|------|-------|------------:|")?;
            for (metric, letter) in scored.metrics.recognized() {
                let coefficient = scored
                    .input
                    .coefficient(metric)
                    .map_or_else(|| "-".to_string(), |c| format!("{c:.2}"));
                writeln!(
                    md,
                    "| {} | {} | {letter} | {coefficient} |",
                    metric.abbreviation(),
                    metric.name()
                )?;
            }
            writeln!(md)?;
        }

        writeln!(
            md,
            "---\n*Generated by cvss-scorer {}*",
            config.metadata.tool_version
        )?;

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
