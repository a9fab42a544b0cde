//! Metric coefficients fed into the formula chain.

use super::tables::table_for;
use crate::error::{CvssError, Result};
use crate::vector::{Metric, MetricSegment, ScopeFlags, ValidatedMetricMap};
use indexmap::IndexMap;
use serde::Serialize;

/// Coefficients for every metric, plus the two scope flags.
///
/// Every coefficient defaults to `0.0` and both flags to `false`, so the
/// formula chain is computable from any partially specified vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreInput {
    pub attack_vector: f64,
    pub attack_complexity: f64,
    pub privileges_required: f64,
    pub user_interaction: f64,
    pub scope_changed: bool,
    pub confidentiality: f64,
    pub integrity: f64,
    pub availability: f64,
    pub exploit_code_maturity: f64,
    pub remediation_level: f64,
    pub report_confidence: f64,
    pub confidentiality_requirement: f64,
    pub integrity_requirement: f64,
    pub availability_requirement: f64,
    pub modified_attack_vector: f64,
    pub modified_attack_complexity: f64,
    pub modified_privileges_required: f64,
    pub modified_user_interaction: f64,
    pub modified_scope_changed: bool,
    pub modified_confidentiality: f64,
    pub modified_integrity: f64,
    pub modified_availability: f64,
    /// Letters that were resolved, in order of first appearance.
    #[serde(skip)]
    assigned: IndexMap<Metric, char>,
}

impl ScoreInput {
    /// Start a builder for the given scope state.
    pub fn builder(scope: ScopeFlags) -> ScoreInputBuilder {
        ScoreInputBuilder::new(scope)
    }

    /// Fold a parsed vector into coefficients.
    ///
    /// Scope flags are resolved before any metric is dispatched, so `PR` and
    /// `MPR` select the right table regardless of segment order.
    pub fn from_metrics(map: &ValidatedMetricMap) -> Result<Self> {
        map.segments()
            .iter()
            .try_fold(Self::builder(map.scope_flags()), ScoreInputBuilder::apply)
            .map(ScoreInputBuilder::build)
    }

    /// Coefficient of a metric. Scope markers have none.
    #[must_use]
    pub const fn coefficient(&self, metric: Metric) -> Option<f64> {
        let value = match metric {
            Metric::AttackVector => self.attack_vector,
            Metric::AttackComplexity => self.attack_complexity,
            Metric::PrivilegesRequired => self.privileges_required,
            Metric::UserInteraction => self.user_interaction,
            Metric::Confidentiality => self.confidentiality,
            Metric::Integrity => self.integrity,
            Metric::Availability => self.availability,
            Metric::ExploitCodeMaturity => self.exploit_code_maturity,
            Metric::RemediationLevel => self.remediation_level,
            Metric::ReportConfidence => self.report_confidence,
            Metric::ConfidentialityRequirement => self.confidentiality_requirement,
            Metric::IntegrityRequirement => self.integrity_requirement,
            Metric::AvailabilityRequirement => self.availability_requirement,
            Metric::ModifiedAttackVector => self.modified_attack_vector,
            Metric::ModifiedAttackComplexity => self.modified_attack_complexity,
            Metric::ModifiedPrivilegesRequired => self.modified_privileges_required,
            Metric::ModifiedUserInteraction => self.modified_user_interaction,
            Metric::ModifiedConfidentiality => self.modified_confidentiality,
            Metric::ModifiedIntegrity => self.modified_integrity,
            Metric::ModifiedAvailability => self.modified_availability,
            Metric::Scope | Metric::ModifiedScope => return None,
        };
        Some(value)
    }

    /// Whether a metric was set by the vector rather than left at default.
    #[must_use]
    pub fn is_assigned(&self, metric: Metric) -> bool {
        self.assigned.contains_key(&metric)
    }

    /// Letter that produced a metric's coefficient.
    #[must_use]
    pub fn letter(&self, metric: Metric) -> Option<char> {
        self.assigned.get(&metric).copied()
    }

    /// Assigned metrics and their letters, in order of first appearance.
    pub fn assigned_metrics(&self) -> impl Iterator<Item = (Metric, char)> + '_ {
        self.assigned.iter().map(|(m, l)| (*m, *l))
    }

    fn coefficient_mut(&mut self, metric: Metric) -> Option<&mut f64> {
        let slot = match metric {
            Metric::AttackVector => &mut self.attack_vector,
            Metric::AttackComplexity => &mut self.attack_complexity,
            Metric::PrivilegesRequired => &mut self.privileges_required,
            Metric::UserInteraction => &mut self.user_interaction,
            Metric::Confidentiality => &mut self.confidentiality,
            Metric::Integrity => &mut self.integrity,
            Metric::Availability => &mut self.availability,
            Metric::ExploitCodeMaturity => &mut self.exploit_code_maturity,
            Metric::RemediationLevel => &mut self.remediation_level,
            Metric::ReportConfidence => &mut self.report_confidence,
            Metric::ConfidentialityRequirement => &mut self.confidentiality_requirement,
            Metric::IntegrityRequirement => &mut self.integrity_requirement,
            Metric::AvailabilityRequirement => &mut self.availability_requirement,
            Metric::ModifiedAttackVector => &mut self.modified_attack_vector,
            Metric::ModifiedAttackComplexity => &mut self.modified_attack_complexity,
            Metric::ModifiedPrivilegesRequired => &mut self.modified_privileges_required,
            Metric::ModifiedUserInteraction => &mut self.modified_user_interaction,
            Metric::ModifiedConfidentiality => &mut self.modified_confidentiality,
            Metric::ModifiedIntegrity => &mut self.modified_integrity,
            Metric::ModifiedAvailability => &mut self.modified_availability,
            Metric::Scope | Metric::ModifiedScope => return None,
        };
        Some(slot)
    }
}

/// Builds a [`ScoreInput`] one segment at a time.
#[derive(Debug)]
#[must_use]
pub struct ScoreInputBuilder {
    scope: ScopeFlags,
    input: ScoreInput,
}

impl ScoreInputBuilder {
    pub fn new(scope: ScopeFlags) -> Self {
        Self {
            scope,
            input: ScoreInput {
                scope_changed: scope.scope_changed,
                modified_scope_changed: scope.modified_scope_changed,
                ..ScoreInput::default()
            },
        }
    }

    /// Apply one accepted segment.
    ///
    /// Unknown abbreviations are ignored. A letter missing from a known
    /// metric's table fails with `UnknownMetricValue`.
    pub fn apply(self, segment: &MetricSegment) -> Result<Self> {
        match segment.metric() {
            Some(metric) => self.set(metric, segment.letter),
            None => {
                tracing::debug!(
                    abbreviation = %segment.abbreviation,
                    "ignoring metric outside CVSS v3.1"
                );
                Ok(self)
            }
        }
    }

    /// Resolve a metric's letter through its table.
    pub fn set(mut self, metric: Metric, letter: char) -> Result<Self> {
        let value = match table_for(metric, self.scope) {
            Some(table) => Some(
                table
                    .value(letter)
                    .ok_or_else(|| CvssError::unknown_metric_value(metric.abbreviation(), letter))?,
            ),
            None => {
                // Scope markers were already folded into the flags.
                tracing::debug!(metric = %metric, letter = %letter, "scope marker");
                if self.input.assigned.contains_key(&metric) {
                    return Ok(self);
                }
                None
            }
        };

        if let (Some(value), Some(slot)) = (value, self.input.coefficient_mut(metric)) {
            *slot = value;
        }
        if let Some(previous) = self.input.assigned.insert(metric, letter) {
            tracing::debug!(metric = %metric, previous = %previous, letter = %letter, "metric overwritten by later segment");
        }
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> ScoreInput {
        self.input
    }
}
