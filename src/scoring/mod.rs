//! CVSS v3.1 scoring engine.
//!
//! This module provides:
//! - The fixed letter-to-coefficient lookup tables
//! - [`ScoreInput`], folded from a [`ValidatedMetricMap`]
//! - The `Roundup` primitive and the full formula chain
//! - Qualitative [`Severity`] ratings
//!
//! ```
//! use cvss_scorer::scoring::{score_vector, Severity};
//!
//! let scored = score_vector("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H")?;
//! assert_eq!(scored.result.base_score, 9.8);
//! assert_eq!(scored.result.base_severity(), Severity::Critical);
//! # Ok::<(), cvss_scorer::CvssError>(())
//! ```

mod engine;
mod input;
mod round;
mod severity;
mod tables;

pub use engine::{ScoreEngine, ScoreResult};
pub use input::{ScoreInput, ScoreInputBuilder};
pub use round::round_up_1dp;
pub use severity::Severity;
pub use tables::{table_for, LookupTable};

use crate::error::{ErrorContext, Result};
use crate::vector::{ValidatedMetricMap, VectorParser};
use serde::Serialize;

/// A vector together with everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredVector {
    /// The raw input string
    pub vector: String,
    pub metrics: ValidatedMetricMap,
    pub input: ScoreInput,
    pub result: ScoreResult,
}

impl ScoredVector {
    /// Canonical `CVSS:3.1/...` rendering of the recognised metrics.
    #[must_use]
    pub fn canonical_vector(&self) -> String {
        self.metrics.to_vector_string()
    }
}

/// Parse, populate and compute in one call.
pub fn score_vector(vector: &str) -> Result<ScoredVector> {
    let engine = ScoreEngine::new();
    let metrics = VectorParser::new()
        .parse(vector)
        .with_context(|| format!("scoring vector '{vector}'"))?;
    let input = engine
        .populate(&metrics)
        .with_context(|| format!("scoring vector '{vector}'"))?;
    let result = engine.compute_all(&input);

    Ok(ScoredVector {
        vector: vector.to_string(),
        metrics,
        input,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CvssError;

    #[test]
    fn test_score_vector_end_to_end() {
        let scored = score_vector(
            "AV:N/AC:H/PR:N/UI:N/S:U/C:L/I:H/A:N/E:P/RL:W/RC:C/CR:H/IR:L/AR:L/MAV:N/MAC:L/MPR:H/MUI:N/MS:C/MC:H/MI:H/MA:H",
        )
        .expect("valid vector");

        assert_eq!(scored.result.impact_subscore, 4.3);
        assert_eq!(scored.result.exploitability, 2.3);
        assert_eq!(scored.result.base_score, 6.6);
        assert_eq!(scored.result.temporal_score, 6.1);
        assert_eq!(scored.result.modified_impact, 6.2);
        assert_eq!(scored.result.modified_exploitability, 2.3);
        assert_eq!(scored.result.environmental_score, 8.4);
        assert_eq!(scored.result.overall_score, 8.4);
    }

    #[test]
    fn test_score_vector_adds_context() {
        let err = score_vector("AV:Z").unwrap_err();
        match err {
            CvssError::Parse { context, source } => {
                assert!(context.starts_with("scoring vector 'AV:Z'"), "{context}");
                assert_eq!(source.name(), "UnknownMetricValue");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_canonical_vector() {
        let scored = score_vector("CVSS:3.1/A:H/AV:N").expect("valid vector");
        assert_eq!(scored.canonical_vector(), "CVSS:3.1/AV:N/A:H");
    }
}
