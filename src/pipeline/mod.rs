//! Pipeline orchestration for scoring runs.
//!
//! This module provides the score → report → output workflow shared by
//! the CLI handler, plus the process exit codes.

mod output;
mod report_stage;

pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use report_stage::{output_report, render_report};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The configuration failed validation
    #[error("Invalid configuration: {}", .errors.join("; "))]
    InvalidConfig { errors: Vec<String> },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - scored, and below any configured threshold
    pub const SUCCESS: i32 = 0;
    /// The overall score reached the `fail_above` threshold
    pub const THRESHOLD_EXCEEDED: i32 = 1;
    /// The vector raised MalformedMetric or UnknownMetricValue
    pub const INVALID_VECTOR: i32 = 2;
    /// Any other error (I/O, configuration)
    pub const ERROR: i32 = 3;
}
