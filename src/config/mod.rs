//! Configuration module for cvss-scorer.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use cvss_scorer::config::{AppConfig, ConfigPreset};
//! use cvss_scorer::reports::ReportFormat;
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Gate);
//! assert_eq!(config.behavior.fail_above, Some(7.0));
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .output_format(ReportFormat::Json)
//!     .fail_above(9.0)
//!     .build();
//! # let _ = config;
//! ```
//!
//! # Configuration File
//!
//! Place a `.cvss-scorer.yaml` file in the working directory or
//! `~/.config/cvss-scorer/config.yaml`:
//!
//! ```yaml
//! output:
//!   format: json
//! behavior:
//!   fail_above: 7.0
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{ConfigPreset, DEFAULT_GATE_THRESHOLD};
pub use types::{AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    user_config_path, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.cvss-scorer.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema();
        assert!(schema.contains("\"output\""));
        assert!(schema.contains("\"fail_above\""));
        assert!(schema.contains("\"markdown\""));
    }
}
