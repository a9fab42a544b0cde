//! The closed set of CVSS v3.1 metric abbreviations.

use serde::{Deserialize, Serialize};

/// Metric group a metric belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricGroup {
    Base,
    Temporal,
    Environmental,
}

/// A CVSS v3.1 metric, identified in a vector by its abbreviation.
///
/// Variants are declared in canonical vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    AttackVector,
    AttackComplexity,
    PrivilegesRequired,
    UserInteraction,
    Scope,
    Confidentiality,
    Integrity,
    Availability,
    ExploitCodeMaturity,
    RemediationLevel,
    ReportConfidence,
    ConfidentialityRequirement,
    IntegrityRequirement,
    AvailabilityRequirement,
    ModifiedAttackVector,
    ModifiedAttackComplexity,
    ModifiedPrivilegesRequired,
    ModifiedUserInteraction,
    ModifiedScope,
    ModifiedConfidentiality,
    ModifiedIntegrity,
    ModifiedAvailability,
}

impl Metric {
    /// Every metric, in canonical vector order.
    pub const ALL: [Self; 22] = [
        Self::AttackVector,
        Self::AttackComplexity,
        Self::PrivilegesRequired,
        Self::UserInteraction,
        Self::Scope,
        Self::Confidentiality,
        Self::Integrity,
        Self::Availability,
        Self::ExploitCodeMaturity,
        Self::RemediationLevel,
        Self::ReportConfidence,
        Self::ConfidentialityRequirement,
        Self::IntegrityRequirement,
        Self::AvailabilityRequirement,
        Self::ModifiedAttackVector,
        Self::ModifiedAttackComplexity,
        Self::ModifiedPrivilegesRequired,
        Self::ModifiedUserInteraction,
        Self::ModifiedScope,
        Self::ModifiedConfidentiality,
        Self::ModifiedIntegrity,
        Self::ModifiedAvailability,
    ];

    /// Resolve an abbreviation. Returns `None` outside the closed set.
    #[must_use]
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        let metric = match abbreviation {
            "AV" => Self::AttackVector,
            "AC" => Self::AttackComplexity,
            "PR" => Self::PrivilegesRequired,
            "UI" => Self::UserInteraction,
            "S" => Self::Scope,
            "C" => Self::Confidentiality,
            "I" => Self::Integrity,
            "A" => Self::Availability,
            "E" => Self::ExploitCodeMaturity,
            "RL" => Self::RemediationLevel,
            "RC" => Self::ReportConfidence,
            "CR" => Self::ConfidentialityRequirement,
            "IR" => Self::IntegrityRequirement,
            "AR" => Self::AvailabilityRequirement,
            "MAV" => Self::ModifiedAttackVector,
            "MAC" => Self::ModifiedAttackComplexity,
            "MPR" => Self::ModifiedPrivilegesRequired,
            "MUI" => Self::ModifiedUserInteraction,
            "MS" => Self::ModifiedScope,
            "MC" => Self::ModifiedConfidentiality,
            "MI" => Self::ModifiedIntegrity,
            "MA" => Self::ModifiedAvailability,
            _ => return None,
        };
        Some(metric)
    }

    /// The abbreviation used in vector strings.
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::AttackVector => "AV",
            Self::AttackComplexity => "AC",
            Self::PrivilegesRequired => "PR",
            Self::UserInteraction => "UI",
            Self::Scope => "S",
            Self::Confidentiality => "C",
            Self::Integrity => "I",
            Self::Availability => "A",
            Self::ExploitCodeMaturity => "E",
            Self::RemediationLevel => "RL",
            Self::ReportConfidence => "RC",
            Self::ConfidentialityRequirement => "CR",
            Self::IntegrityRequirement => "IR",
            Self::AvailabilityRequirement => "AR",
            Self::ModifiedAttackVector => "MAV",
            Self::ModifiedAttackComplexity => "MAC",
            Self::ModifiedPrivilegesRequired => "MPR",
            Self::ModifiedUserInteraction => "MUI",
            Self::ModifiedScope => "MS",
            Self::ModifiedConfidentiality => "MC",
            Self::ModifiedIntegrity => "MI",
            Self::ModifiedAvailability => "MA",
        }
    }

    /// Human-readable metric name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AttackVector => "Attack Vector",
            Self::AttackComplexity => "Attack Complexity",
            Self::PrivilegesRequired => "Privileges Required",
            Self::UserInteraction => "User Interaction",
            Self::Scope => "Scope",
            Self::Confidentiality => "Confidentiality",
            Self::Integrity => "Integrity",
            Self::Availability => "Availability",
            Self::ExploitCodeMaturity => "Exploit Code Maturity",
            Self::RemediationLevel => "Remediation Level",
            Self::ReportConfidence => "Report Confidence",
            Self::ConfidentialityRequirement => "Confidentiality Requirement",
            Self::IntegrityRequirement => "Integrity Requirement",
            Self::AvailabilityRequirement => "Availability Requirement",
            Self::ModifiedAttackVector => "Modified Attack Vector",
            Self::ModifiedAttackComplexity => "Modified Attack Complexity",
            Self::ModifiedPrivilegesRequired => "Modified Privileges Required",
            Self::ModifiedUserInteraction => "Modified User Interaction",
            Self::ModifiedScope => "Modified Scope",
            Self::ModifiedConfidentiality => "Modified Confidentiality",
            Self::ModifiedIntegrity => "Modified Integrity",
            Self::ModifiedAvailability => "Modified Availability",
        }
    }

    #[must_use]
    pub const fn group(&self) -> MetricGroup {
        match self {
            Self::AttackVector
            | Self::AttackComplexity
            | Self::PrivilegesRequired
            | Self::UserInteraction
            | Self::Scope
            | Self::Confidentiality
            | Self::Integrity
            | Self::Availability => MetricGroup::Base,
            Self::ExploitCodeMaturity | Self::RemediationLevel | Self::ReportConfidence => {
                MetricGroup::Temporal
            }
            Self::ConfidentialityRequirement
            | Self::IntegrityRequirement
            | Self::AvailabilityRequirement
            | Self::ModifiedAttackVector
            | Self::ModifiedAttackComplexity
            | Self::ModifiedPrivilegesRequired
            | Self::ModifiedUserInteraction
            | Self::ModifiedScope
            | Self::ModifiedConfidentiality
            | Self::ModifiedIntegrity
            | Self::ModifiedAvailability => MetricGroup::Environmental,
        }
    }

    /// Scope markers carry a flag rather than a coefficient.
    #[must_use]
    pub const fn is_scope_marker(&self) -> bool {
        matches!(self, Self::Scope | Self::ModifiedScope)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_roundtrip_covers_closed_set() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_abbreviation(metric.abbreviation()), Some(metric));
        }
    }

    #[test]
    fn test_unknown_abbreviations() {
        assert_eq!(Metric::from_abbreviation("ZZ"), None);
        assert_eq!(Metric::from_abbreviation("av"), None);
        assert_eq!(Metric::from_abbreviation(""), None);
        assert_eq!(Metric::from_abbreviation("CVSS"), None);
    }

    #[test]
    fn test_all_is_sorted_in_canonical_order() {
        let mut sorted = Metric::ALL;
        sorted.sort();
        assert_eq!(sorted, Metric::ALL);
    }

    #[test]
    fn test_groups() {
        assert_eq!(Metric::Scope.group(), MetricGroup::Base);
        assert_eq!(Metric::RemediationLevel.group(), MetricGroup::Temporal);
        assert_eq!(Metric::AvailabilityRequirement.group(), MetricGroup::Environmental);
        assert_eq!(Metric::ModifiedScope.group(), MetricGroup::Environmental);
    }

    #[test]
    fn test_scope_markers() {
        let markers: Vec<_> = Metric::ALL.iter().filter(|m| m.is_scope_marker()).collect();
        assert_eq!(markers, vec![&Metric::Scope, &Metric::ModifiedScope]);
    }
}
