//! Report type definitions.

use crate::scoring::ScoreResult;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect from the output file extension, summary otherwise
    #[default]
    Auto,
    /// Text bar chart of every score group
    Summary,
    /// Structured JSON output
    Json,
    /// CSV for spreadsheet import
    Csv,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Emit per-metric letters and coefficients
    pub include_metrics: bool,
    /// Title for the report
    pub title: Option<String>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_metrics: true,
            title: None,
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    /// Report title, falling back to a generic one.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("CVSS v3.1 Score Report")
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp
    pub generated_at: Option<String>,
}

impl ReportMetadata {
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    /// Stamp the metadata with the current time.
    #[must_use]
    pub fn with_timestamp(mut self) -> Self {
        self.generated_at = Some(chrono::Utc::now().to_rfc3339());
        self
    }
}

/// One chart group: a heading and the scores plotted under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreGroup {
    pub name: &'static str,
    pub scores: Vec<(&'static str, f64)>,
}

/// The four score groups every reporter presents, in display order.
///
/// Values are copied from the result as-is and never recomputed.
#[must_use]
pub fn score_groups(result: &ScoreResult) -> Vec<ScoreGroup> {
    vec![
        ScoreGroup {
            name: "Base Scores",
            scores: vec![
                ("Base", result.base_score),
                ("Impact", result.impact_subscore),
                ("Exploitability", result.exploitability),
            ],
        },
        ScoreGroup {
            name: "Temporal",
            scores: vec![("Temporal", result.temporal_score)],
        },
        ScoreGroup {
            name: "Environmental",
            scores: vec![
                ("Environmental", result.environmental_score),
                ("Modified Impact", result.modified_impact),
            ],
        },
        ScoreGroup {
            name: "Overall",
            scores: vec![("Overall", result.overall_score)],
        },
    ]
}
