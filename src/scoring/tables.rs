//! CVSS v3.1 metric value tables.
//!
//! Values are fixed by the CVSS v3.1 specification and must not be tuned.

use crate::vector::{Metric, ScopeFlags};

const ATTACK_VECTOR: &[(char, f64)] = &[('N', 0.85), ('A', 0.62), ('L', 0.55), ('P', 0.2)];
const ATTACK_COMPLEXITY: &[(char, f64)] = &[('L', 0.77), ('H', 0.44)];
const PRIVILEGES_SCOPE_UNCHANGED: &[(char, f64)] = &[('N', 0.85), ('L', 0.62), ('H', 0.27)];
const PRIVILEGES_SCOPE_CHANGED: &[(char, f64)] = &[('N', 0.85), ('L', 0.68), ('H', 0.5)];
const USER_INTERACTION: &[(char, f64)] = &[('N', 0.85), ('R', 0.62)];
const IMPACT: &[(char, f64)] = &[('H', 0.56), ('L', 0.22), ('N', 0.0)];
const EXPLOIT_CODE_MATURITY: &[(char, f64)] =
    &[('X', 1.0), ('U', 0.91), ('P', 0.94), ('F', 0.97), ('H', 1.0)];
const REMEDIATION_LEVEL: &[(char, f64)] =
    &[('X', 1.0), ('O', 0.95), ('T', 0.96), ('W', 0.97), ('U', 1.0)];
const REPORT_CONFIDENCE: &[(char, f64)] = &[('X', 1.0), ('U', 0.92), ('R', 0.96), ('C', 1.0)];
const REQUIREMENT: &[(char, f64)] = &[('X', 1.0), ('L', 0.5), ('M', 1.0), ('H', 1.5)];

/// One of the fixed letter-to-coefficient tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTable {
    AttackVector,
    AttackComplexity,
    PrivilegesScopeUnchanged,
    PrivilegesScopeChanged,
    UserInteraction,
    Impact,
    ExploitCodeMaturity,
    RemediationLevel,
    ReportConfidence,
    Requirement,
}

impl LookupTable {
    /// Letter/value pairs of this table.
    #[must_use]
    pub const fn entries(self) -> &'static [(char, f64)] {
        match self {
            Self::AttackVector => ATTACK_VECTOR,
            Self::AttackComplexity => ATTACK_COMPLEXITY,
            Self::PrivilegesScopeUnchanged => PRIVILEGES_SCOPE_UNCHANGED,
            Self::PrivilegesScopeChanged => PRIVILEGES_SCOPE_CHANGED,
            Self::UserInteraction => USER_INTERACTION,
            Self::Impact => IMPACT,
            Self::ExploitCodeMaturity => EXPLOIT_CODE_MATURITY,
            Self::RemediationLevel => REMEDIATION_LEVEL,
            Self::ReportConfidence => REPORT_CONFIDENCE,
            Self::Requirement => REQUIREMENT,
        }
    }

    /// Coefficient for a letter, or `None` if the table has no such letter.
    #[must_use]
    pub fn value(self, letter: char) -> Option<f64> {
        self.entries()
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, v)| *v)
    }

    /// Letters accepted by this table, for diagnostics.
    #[must_use]
    pub fn letters(self) -> String {
        self.entries().iter().map(|(l, _)| *l).collect()
    }
}

/// Select the table for a metric under the given scope state.
///
/// Privileges-required variants depend on scope: `PR` follows `S`, `MPR`
/// follows `MS`. Scope markers have no table.
#[must_use]
pub const fn table_for(metric: Metric, scope: ScopeFlags) -> Option<LookupTable> {
    let table = match metric {
        Metric::AttackVector | Metric::ModifiedAttackVector => LookupTable::AttackVector,
        Metric::AttackComplexity | Metric::ModifiedAttackComplexity => {
            LookupTable::AttackComplexity
        }
        Metric::PrivilegesRequired => privileges_table(scope.scope_changed),
        Metric::ModifiedPrivilegesRequired => privileges_table(scope.modified_scope_changed),
        Metric::UserInteraction | Metric::ModifiedUserInteraction => LookupTable::UserInteraction,
        Metric::Confidentiality
        | Metric::Integrity
        | Metric::Availability
        | Metric::ModifiedConfidentiality
        | Metric::ModifiedIntegrity
        | Metric::ModifiedAvailability => LookupTable::Impact,
        Metric::ExploitCodeMaturity => LookupTable::ExploitCodeMaturity,
        Metric::RemediationLevel => LookupTable::RemediationLevel,
        Metric::ReportConfidence => LookupTable::ReportConfidence,
        Metric::ConfidentialityRequirement
        | Metric::IntegrityRequirement
        | Metric::AvailabilityRequirement => LookupTable::Requirement,
        Metric::Scope | Metric::ModifiedScope => return None,
    };
    Some(table)
}

const fn privileges_table(scope_changed: bool) -> LookupTable {
    if scope_changed {
        LookupTable::PrivilegesScopeChanged
    } else {
        LookupTable::PrivilegesScopeUnchanged
    }
}
