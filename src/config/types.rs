//! Configuration types for cvss-scorer.

use crate::reports::{ReportConfig, ReportFormat, ReportMetadata};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, colors, report contents)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Report settings derived from the output section.
    #[must_use]
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            include_metrics: self.output.include_metrics,
            title: self.output.title.clone(),
            metadata: ReportMetadata::new().with_timestamp(),
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Include per-metric details in reports.
    pub const fn include_metrics(mut self, include: bool) -> Self {
        self.config.output.include_metrics = include;
        self
    }

    /// Set the report title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.output.title = Some(title.into());
        self
    }

    /// Fail when the overall score reaches this threshold.
    pub const fn fail_above(mut self, threshold: f64) -> Self {
        self.config.behavior.fail_above = Some(threshold);
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Disable colored output
    pub no_color: bool,
    /// Emit per-metric letters and coefficients
    pub include_metrics: bool,
    /// Report title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            no_color: false,
            include_metrics: true,
            title: None,
        }
    }
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when the overall score is at or above this value
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.0, max = 10.0))]
    pub fail_above: Option<f64>,
    /// Suppress non-essential output
    pub quiet: bool,
}

impl BehaviorConfig {
    /// Whether a score trips the configured threshold.
    #[must_use]
    pub fn exceeds_threshold(&self, score: f64) -> bool {
        self.fail_above.is_some_and(|threshold| score >= threshold)
    }
}
