//! Unified error types for cvss-scorer.
//!
//! Vector parsing has exactly two fatal failure kinds; everything else the
//! grammar does not recognise is dropped silently by the parser. The
//! remaining variant covers report output I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cvss-scorer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CvssError {
    /// A vector could not be turned into metric coefficients
    #[error("Failed to parse CVSS vector: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Fatal vector parse failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// A segment passed the grammar gate but did not split into one
    /// abbreviation and one value letter.
    #[error("Malformed metric segment '{segment}' (expected ABBREVIATION:VALUE)")]
    MalformedMetric { segment: String },

    /// A recognised metric carried a letter that is not in its lookup table.
    #[error("Unknown value '{value}' for metric {metric}")]
    UnknownMetricValue { metric: String, value: char },
}

impl ParseErrorKind {
    /// Stable name of the failure kind, used in CLI diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MalformedMetric { .. } => "MalformedMetric",
            Self::UnknownMetricValue { .. } => "UnknownMetricValue",
        }
    }

    /// The token that caused the failure.
    #[must_use]
    pub fn offending_token(&self) -> String {
        match self {
            Self::MalformedMetric { segment } => segment.clone(),
            Self::UnknownMetricValue { metric, value } => format!("{metric}:{value}"),
        }
    }
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for cvss-scorer operations
pub type Result<T> = std::result::Result<T, CvssError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl CvssError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for a segment that cannot be split
    pub fn malformed_metric(segment: impl Into<String>) -> Self {
        Self::parse(
            "splitting metric segment",
            ParseErrorKind::MalformedMetric {
                segment: segment.into(),
            },
        )
    }

    /// Create a parse error for a letter missing from a metric's table
    pub fn unknown_metric_value(metric: impl Into<String>, value: char) -> Self {
        Self::parse(
            "resolving metric value",
            ParseErrorKind::UnknownMetricValue {
                metric: metric.into(),
                value,
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// The parse failure kind, if this is a parse error.
    #[must_use]
    pub const fn parse_kind(&self) -> Option<&ParseErrorKind> {
        match self {
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for CvssError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to any context already on the error,
/// so a failure deep in the parser reads like
/// `"scoring vector 'AV:Z': resolving metric value"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<CvssError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: CvssError, new_ctx: &str) -> CvssError {
    match err {
        CvssError::Parse {
            context: existing,
            source,
        } => CvssError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        CvssError::Io {
            path,
            message,
            source,
        } => CvssError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
    }
}

/// Chain two context strings together.
///
/// Returns "`new`: `existing`", or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_names() {
        let malformed = ParseErrorKind::MalformedMetric {
            segment: "AVN".to_string(),
        };
        assert_eq!(malformed.name(), "MalformedMetric");
        assert_eq!(malformed.offending_token(), "AVN");

        let unknown = ParseErrorKind::UnknownMetricValue {
            metric: "AV".to_string(),
            value: 'Z',
        };
        assert_eq!(unknown.name(), "UnknownMetricValue");
        assert_eq!(unknown.offending_token(), "AV:Z");
    }

    #[test]
    fn test_error_display_names_metric_and_letter() {
        let err = CvssError::unknown_metric_value("AV", 'Z');
        let source = err.parse_kind().expect("parse error").to_string();
        assert!(source.contains("AV"), "missing metric: {source}");
        assert!(source.contains('Z'), "missing letter: {source}");
    }

    #[test]
    fn test_parse_kind_absent_for_other_errors() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(CvssError::from(io_err).parse_kind().is_none());
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CvssError::io("/path/to/report.json", io_err);

        assert!(err.to_string().contains("/path/to/report.json"));
    }

    #[test]
    fn test_context_chaining() {
        let initial: Result<()> = Err(CvssError::malformed_metric("AVN"));
        let err = initial.context("scoring vector").unwrap_err();

        match err {
            CvssError::Parse { context, source } => {
                assert_eq!(context, "scoring vector: splitting metric segment");
                assert_eq!(source.name(), "MalformedMetric");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(CvssError::malformed_metric("AVN"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
        assert_eq!(
            chain_context("outer", "middle: inner"),
            "outer: middle: inner"
        );
    }
}
