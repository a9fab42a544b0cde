//! **CVSS v3.1 vector parsing and scoring.**
//!
//! `cvss-scorer` turns a compact CVSS v3.1 vector such as
//! `AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H` into the full family of CVSS scores:
//! impact and exploitability sub-scores, base, temporal and environmental
//! scores, and a single overall score. It powers both a command-line
//! interface and a library for embedding in scanners, trackers and dashboards.
//!
//! ## Core Concepts & Modules
//!
//! - **[`vector`]**: the [`VectorParser`], which gates each `/`-separated
//!   segment through the `[A-Z]{1,3}:[A-Z]` grammar and produces a
//!   [`ValidatedMetricMap`]. Malformed segments and unknown abbreviations are
//!   tolerated; only structurally broken segments and unknown letters for
//!   known metrics are errors.
//! - **[`scoring`]**: the [`ScoreEngine`], which owns the CVSS lookup tables,
//!   folds a map into a [`ScoreInput`] and runs the formula chain to a
//!   [`ScoreResult`].
//! - **[`reports`]**: summary, JSON, CSV and Markdown renderings of a result.
//! - **[`config`]**, **[`pipeline`]** and **[`cli`]**: the command-line surface.
//!
//! ## Getting Started
//!
//! ```
//! use cvss_scorer::{ScoreEngine, VectorParser};
//!
//! let map = VectorParser::new().parse("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H")?;
//! let engine = ScoreEngine::new();
//! let input = engine.populate(&map)?;
//! let result = engine.compute_all(&input);
//!
//! assert_eq!(result.base_score, 9.8);
//! assert_eq!(result.overall_score, 9.8);
//! # Ok::<(), cvss_scorer::CvssError>(())
//! ```
//!
//! Or in one call with [`score_vector`]:
//!
//! ```
//! let scored = cvss_scorer::score_vector("AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:H/A:H")?;
//! assert_eq!(scored.result.base_score, 10.0);
//! # Ok::<(), cvss_scorer::CvssError>(())
//! ```
//!
//! ## Errors
//!
//! ```
//! use cvss_scorer::{score_vector, ParseErrorKind};
//!
//! let err = score_vector("AV:Z").unwrap_err();
//! assert!(matches!(
//!     err.parse_kind(),
//!     Some(ParseErrorKind::UnknownMetricValue { value: 'Z', .. })
//! ));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Score-to-bar-width and Roundup casts operate on values bounded to [0, 10]
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `iscb`/`miss` follow the CVSS formula names
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod reports;
pub mod scoring;
pub mod vector;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, ConfigPreset, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{CvssError, ErrorContext, ParseErrorKind, Result};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{
    round_up_1dp, score_vector, ScoreEngine, ScoreInput, ScoreResult, ScoredVector, Severity,
};
pub use vector::{Metric, MetricGroup, ScopeFlags, ValidatedMetricMap, VectorParser};
