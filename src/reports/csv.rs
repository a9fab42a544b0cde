//! CSV report generator.
//!
//! One `group,score,value` row per plotted score, in chart order, suitable
//! for spreadsheet import. With metrics enabled a second block lists
//! `metric,value,coefficient` rows.

use super::escape::escape_csv;
use super::{score_groups, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::scoring::ScoredVector;
use std::fmt::Write as _;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate_score_report(
        &self,
        scored: &ScoredVector,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();

        writeln!(content, "# Vector: {}", escape_csv(&scored.vector))?;
        content.push_str("group,score,value\n");
        for group in score_groups(&scored.result) {
            for (label, value) in group.scores {
                writeln!(content, "{},{label},{value:.1}", group.name)?;
            }
        }

        if config.include_metrics {
            content.push_str("\n# Metrics\n");
            content.push_str("metric,value,coefficient\n");
            for (metric, letter) in scored.metrics.recognized() {
                let coefficient = scored
                    .input
                    .coefficient(metric)
                    .map_or_else(String::new, |c| c.to_string());
                writeln!(content, "{},{letter},{coefficient}", metric.abbreviation())?;
            }
        }

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_vector;

    #[test]
    fn test_csv_score_rows() {
        let scored = score_vector("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap();
        let config = ReportConfig {
            include_metrics: false,
            ..ReportConfig::default()
        };
        let csv = CsvReporter::new()
            .generate_score_report(&scored, &config)
            .unwrap();

        let rows: Vec<&str> = csv.lines().skip(1).collect();
        assert_eq!(rows[0], "group,score,value");
        assert_eq!(rows[1], "Base Scores,Base,9.8");
        assert_eq!(rows[2], "Base Scores,Impact,5.9");
        assert_eq!(rows[3], "Base Scores,Exploitability,3.9");
        assert_eq!(rows.last(), Some(&"Overall,Overall,9.8"));
        assert!(!csv.contains("# Metrics"));
    }

    #[test]
    fn test_csv_escapes_vector() {
        let scored = score_vector("AV:N,\"x\"").unwrap();
        let csv = CsvReporter::new()
            .generate_score_report(&scored, &ReportConfig::default())
            .unwrap();
        assert!(csv.starts_with("# Vector: \"AV:N,\"\"x\"\"\"\n"));
    }

    #[test]
    fn test_csv_scope_marker_has_empty_coefficient() {
        let scored = score_vector("S:C/AV:P").unwrap();
        let csv = CsvReporter::new()
            .generate_score_report(&scored, &ReportConfig::default())
            .unwrap();
        assert!(csv.contains("AV,P,0.2\n"));
        assert!(csv.contains("S,C,\n"));
    }
}
