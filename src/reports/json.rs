//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::scoring::{ScoreResult, ScoredVector, Severity};
use crate::vector::{MetricGroup, ScopeFlags};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_score_report(
        &self,
        scored: &ScoredVector,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let metrics = config.include_metrics.then(|| {
            scored
                .metrics
                .recognized()
                .map(|(metric, letter)| JsonMetric {
                    metric: metric.abbreviation(),
                    name: metric.name(),
                    group: metric.group(),
                    value: letter,
                    coefficient: scored.input.coefficient(metric),
                })
                .collect()
        });

        let report = JsonScoreReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: "cvss-scorer".to_string(),
                    version: config.metadata.tool_version.clone(),
                },
                generated_at: config
                    .metadata
                    .generated_at
                    .clone()
                    .unwrap_or_else(|| Utc::now().to_rfc3339()),
                title: config.title.clone(),
            },
            vector: &scored.vector,
            canonical_vector: scored.canonical_vector(),
            scope: scored.metrics.scope_flags(),
            metrics,
            scores: &scored.result,
            severity: SeveritySummary::from_result(&scored.result),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures

#[derive(Serialize)]
struct JsonScoreReport<'a> {
    metadata: JsonReportMetadata,
    vector: &'a str,
    canonical_vector: String,
    scope: ScopeFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<Vec<JsonMetric>>,
    scores: &'a ScoreResult,
    severity: SeveritySummary,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct JsonMetric {
    metric: &'static str,
    name: &'static str,
    group: MetricGroup,
    value: char,
    /// Absent for scope markers
    #[serde(skip_serializing_if = "Option::is_none")]
    coefficient: Option<f64>,
}

#[derive(Serialize)]
struct SeveritySummary {
    base: Severity,
    temporal: Severity,
    environmental: Severity,
    overall: Severity,
}

impl SeveritySummary {
    fn from_result(result: &ScoreResult) -> Self {
        Self {
            base: result.base_severity(),
            temporal: result.temporal_severity(),
            environmental: result.environmental_severity(),
            overall: result.overall_severity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_vector;

    fn render(vector: &str, config: &ReportConfig) -> serde_json::Value {
        let scored = score_vector(vector).unwrap();
        let json = JsonReporter::new()
            .generate_score_report(&scored, config)
            .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_json_report_fields() {
        let value = render(
            "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H",
            &ReportConfig::default(),
        );

        assert_eq!(value["metadata"]["tool"]["name"], "cvss-scorer");
        assert_eq!(value["canonical_vector"], "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H");
        assert_eq!(value["scope"]["scope_changed"], false);
        assert_eq!(value["scores"]["base_score"], 9.8);
        assert_eq!(value["scores"]["overall_score"], 9.8);
        assert_eq!(value["severity"]["base"], "critical");
        assert_eq!(value["severity"]["temporal"], "none");

        let metrics = value["metrics"].as_array().unwrap();
        assert_eq!(metrics.len(), 8);
        assert_eq!(metrics[0]["metric"], "AV");
        assert_eq!(metrics[0]["coefficient"], 0.85);
        assert_eq!(metrics[4]["metric"], "S");
        assert!(metrics[4].get("coefficient").is_none());
    }

    #[test]
    fn test_json_report_without_metrics() {
        let config = ReportConfig {
            include_metrics: false,
            ..ReportConfig::default()
        };
        let value = render("AV:N", &config);
        assert!(value.get("metrics").is_none());
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let scored = score_vector("AV:N").unwrap();
        let json = JsonReporter::new()
            .pretty(false)
            .generate_score_report(&scored, &ReportConfig::default())
            .unwrap();
        assert!(!json.contains('\n'));
    }
}
