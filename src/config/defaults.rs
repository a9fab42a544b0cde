//! Default configurations and presets for cvss-scorer.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};
use crate::reports::ReportFormat;
use crate::scoring::Severity;

/// Threshold used by the `gate` preset: fail at High severity and above.
pub const DEFAULT_GATE_THRESHOLD: f64 = Severity::High.lower_bound();

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Human-readable summary, no failure threshold
    Default,
    /// CI/CD: machine-readable output, quiet
    CiCd,
    /// Gate: fail when the score is High or Critical
    Gate,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CiCd => "ci-cd",
            Self::Gate => "gate",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci-cd" | "ci" | "cd" | "pipeline" => Some(Self::CiCd),
            "gate" | "strict" => Some(Self::Gate),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Summary output with no failure threshold",
            Self::CiCd => "Machine-readable JSON output optimized for CI/CD pipelines",
            Self::Gate => "Exit with code 1 for High or Critical overall scores",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::CiCd, Self::Gate]
    }
}

impl std::str::FromStr for ConfigPreset {
    type Err = String;

    /// Parse a preset name; the error lists every preset with its description.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| {
            let presets: Vec<String> = Self::all()
                .iter()
                .map(|preset| format!("  {}: {}", preset.name(), preset.description()))
                .collect();
            format!("unknown preset '{name}'. Available presets:\n{}", presets.join("\n"))
        })
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
            ConfigPreset::Gate => Self::gate_preset(),
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - No ANSI colors
    /// - Quiet mode to reduce noise
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                fail_above: None,
                quiet: true,
            },
        }
    }

    /// Severity gate preset.
    #[must_use]
    pub fn gate_preset() -> Self {
        Self {
            output: OutputConfig::default(),
            behavior: BehaviorConfig {
                fail_above: Some(DEFAULT_GATE_THRESHOLD),
                quiet: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
            assert!(!preset.description().is_empty());
        }
    }

    #[test]
    fn test_unknown_preset_lists_descriptions() {
        let err = "lenient".parse::<ConfigPreset>().unwrap_err();
        assert!(err.contains("'lenient'"));
        for preset in ConfigPreset::all() {
            assert!(err.contains(preset.description()), "{err}");
        }
        assert_eq!("gate".parse::<ConfigPreset>(), Ok(ConfigPreset::Gate));
    }

    #[test]
    fn test_preset_aliases() {
        assert_eq!(ConfigPreset::from_name("CI"), Some(ConfigPreset::CiCd));
        assert_eq!(ConfigPreset::from_name("strict"), Some(ConfigPreset::Gate));
        assert_eq!(ConfigPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_ci_cd_preset() {
        let config = AppConfig::from_preset(ConfigPreset::CiCd);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.no_color);
        assert!(config.behavior.quiet);
    }

    #[test]
    fn test_gate_preset_fails_at_high() {
        let config = AppConfig::from_preset(ConfigPreset::Gate);
        assert_eq!(config.behavior.fail_above, Some(7.0));
        assert!(config.behavior.exceeds_threshold(7.0));
        assert!(!config.behavior.exceeds_threshold(6.9));
    }
}
