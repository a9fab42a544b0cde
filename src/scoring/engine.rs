//! CVSS v3.1 formula chain.

use super::input::ScoreInput;
use super::round::round_up_1dp;
use super::severity::Severity;
use crate::error::Result;
use crate::vector::ValidatedMetricMap;
use serde::Serialize;

/// Upper bound of every composite score.
const MAX_SCORE: f64 = 10.0;
/// Cap on the modified impact sub-score.
const MISS_CAP: f64 = 0.915;
/// Multiplier applied when scope is changed.
const SCOPE_CHANGED_FACTOR: f64 = 1.08;

/// Every score derived from a [`ScoreInput`].
///
/// Produced once by [`ScoreEngine::compute_all`]; recomputing from the same
/// input is bit-identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreResult {
    /// `1 - (1-C)(1-I)(1-A)`, before scaling
    pub impact_subscore_base: f64,
    pub impact_subscore: f64,
    pub exploitability: f64,
    pub base_score: f64,
    pub temporal_score: f64,
    /// MISS, before scaling
    pub modified_impact_subscore: f64,
    pub modified_impact: f64,
    pub modified_exploitability: f64,
    pub environmental_score: f64,
    /// Maximum of base, impact, exploitability, temporal, environmental and
    /// modified impact.
    pub overall_score: f64,
}

impl ScoreResult {
    #[must_use]
    pub fn base_severity(&self) -> Severity {
        Severity::from_score(self.base_score)
    }

    #[must_use]
    pub fn temporal_severity(&self) -> Severity {
        Severity::from_score(self.temporal_score)
    }

    #[must_use]
    pub fn environmental_severity(&self) -> Severity {
        Severity::from_score(self.environmental_score)
    }

    #[must_use]
    pub fn overall_severity(&self) -> Severity {
        Severity::from_score(self.overall_score)
    }
}

/// Converts parsed vectors into coefficients and runs the formula chain.
///
/// Stateless; the lookup tables are compile-time constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine;

impl ScoreEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolve every recognised metric letter into its coefficient.
    pub fn populate(&self, map: &ValidatedMetricMap) -> Result<ScoreInput> {
        ScoreInput::from_metrics(map)
    }

    /// Run the full formula chain.
    #[must_use]
    pub fn compute_all(&self, input: &ScoreInput) -> ScoreResult {
        let impact_subscore_base =
            impact_subscore_base(input.confidentiality, input.integrity, input.availability);
        let impact_subscore = impact_subscore(impact_subscore_base, input.scope_changed);
        let exploitability = exploitability_subscore(
            input.attack_vector,
            input.attack_complexity,
            input.privileges_required,
            input.user_interaction,
        );
        let base_score = base_score(impact_subscore, exploitability, input.scope_changed);
        let temporal_multiplier = temporal_multiplier(input);
        let temporal_score = round_up_1dp(base_score * temporal_multiplier);

        let modified_impact_subscore = modified_impact_subscore(input);
        let modified_impact =
            modified_impact(modified_impact_subscore, input.modified_scope_changed);
        let modified_exploitability = exploitability_subscore(
            input.modified_attack_vector,
            input.modified_attack_complexity,
            input.modified_privileges_required,
            input.modified_user_interaction,
        );
        let environmental_score = environmental_score(
            modified_impact,
            modified_exploitability,
            temporal_multiplier,
            input.modified_scope_changed,
        );

        let overall_score = [
            base_score,
            impact_subscore,
            exploitability,
            temporal_score,
            environmental_score,
            modified_impact,
        ]
        .into_iter()
        .fold(0.0, f64::max);

        let result = ScoreResult {
            impact_subscore_base,
            impact_subscore,
            exploitability,
            base_score,
            temporal_score,
            modified_impact_subscore,
            modified_impact,
            modified_exploitability,
            environmental_score,
            overall_score,
        };

        tracing::debug!(
            base = result.base_score,
            temporal = result.temporal_score,
            environmental = result.environmental_score,
            overall = result.overall_score,
            "computed CVSS scores"
        );

        result
    }
}

fn impact_subscore_base(confidentiality: f64, integrity: f64, availability: f64) -> f64 {
    1.0 - (1.0 - confidentiality) * (1.0 - integrity) * (1.0 - availability)
}

// Floored at zero: S:C with no impact would otherwise round to -0.2.
fn impact_subscore(iscb: f64, scope_changed: bool) -> f64 {
    let raw = if scope_changed {
        7.52 * (iscb - 0.029) - 3.25 * (iscb - 0.02).powi(15)
    } else {
        6.42 * iscb
    };
    round_up_1dp(raw).max(0.0)
}

fn exploitability_subscore(
    attack_vector: f64,
    attack_complexity: f64,
    privileges_required: f64,
    user_interaction: f64,
) -> f64 {
    round_up_1dp(8.22 * attack_vector * attack_complexity * privileges_required * user_interaction)
}

fn base_score(impact_subscore: f64, exploitability: f64, scope_changed: bool) -> f64 {
    if impact_subscore <= 0.0 {
        return 0.0;
    }
    let sum = impact_subscore + exploitability;
    if scope_changed {
        round_up_1dp((SCOPE_CHANGED_FACTOR * sum).min(MAX_SCORE))
    } else {
        round_up_1dp(sum.min(MAX_SCORE))
    }
}

fn temporal_multiplier(input: &ScoreInput) -> f64 {
    input.exploit_code_maturity * input.remediation_level * input.report_confidence
}

fn modified_impact_subscore(input: &ScoreInput) -> f64 {
    let miss = 1.0
        - (1.0 - input.modified_confidentiality * input.confidentiality_requirement)
            * (1.0 - input.modified_integrity * input.integrity_requirement)
            * (1.0 - input.modified_availability * input.availability_requirement);
    miss.min(MISS_CAP)
}

fn modified_impact(miss: f64, modified_scope_changed: bool) -> f64 {
    let raw = if modified_scope_changed {
        7.52 * (miss - 0.029) - 3.25 * (miss * 0.9731 - 0.02).powi(13)
    } else {
        6.42 * miss
    };
    round_up_1dp(raw).max(0.0)
}

fn environmental_score(
    modified_impact: f64,
    modified_exploitability: f64,
    temporal_multiplier: f64,
    modified_scope_changed: bool,
) -> f64 {
    if modified_impact <= 0.0 {
        return 0.0;
    }
    let sum = modified_impact + modified_exploitability;
    let capped = if modified_scope_changed {
        round_up_1dp((SCOPE_CHANGED_FACTOR * sum).min(MAX_SCORE))
    } else {
        round_up_1dp(sum.min(MAX_SCORE))
    };
    round_up_1dp(capped * temporal_multiplier)
}
