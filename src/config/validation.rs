//! Configuration validation for cvss-scorer.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref title) = self.title {
            if title.trim().is_empty() {
                errors.push(ConfigError {
                    field: "output.title".to_string(),
                    message: "Title must not be blank".to_string(),
                });
            }
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(threshold) = self.fail_above {
            if !(0.0..=10.0).contains(&threshold) {
                errors.push(ConfigError {
                    field: "behavior.fail_above".to_string(),
                    message: format!("Threshold must be between 0.0 and 10.0, got {threshold}"),
                });
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_threshold_out_of_range() {
        for threshold in [-0.1, 10.5, f64::NAN] {
            let config = AppConfig::builder().fail_above(threshold).build();
            let errors = config.validate();
            assert_eq!(errors.len(), 1, "{threshold}");
            assert_eq!(errors[0].field, "behavior.fail_above");
        }
    }

    #[test]
    fn test_threshold_bounds_are_valid() {
        assert!(AppConfig::builder().fail_above(0.0).build().is_valid());
        assert!(AppConfig::builder().fail_above(10.0).build().is_valid());
    }

    #[test]
    fn test_blank_title() {
        let config = AppConfig::builder().title("   ").build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "output.title: Title must not be blank");
    }
}
