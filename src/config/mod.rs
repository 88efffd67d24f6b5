//! Configuration module for footprint-score.
//!
//! This module provides:
//! - Declarative scoring tables (sub-metric weights, reference thresholds,
//!   dimension mappings) and the recommendation action table
//! - Validation that rejects malformed tables before any scan runs
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use footprint_score::config::{AppConfig, ConfigPreset, Validatable};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Strict);
//! config.ensure_valid()?;
//! ```
//!
//! # Configuration File
//!
//! Place a `.footprint-score.yaml` file in your project root or
//! `~/.config/footprint-score/`:
//!
//! ```yaml
//! recommendations:
//!   target: 85
//! behavior:
//!   min_score: 50
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    default_action_table, default_platform_tables, ConfigPreset, DEFAULT_COMPLETENESS_FLOOR,
    DEFAULT_TARGET,
};
pub use types::{
    ActionProfile, AppConfig, BehaviorConfig, EngineConfig, OutputConfig, PlatformTable,
    RecommendationConfig, ScoringConfig, SubMetricSpec,
};
pub use validation::{ConfigError, ConfigurationError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.footprint-score.yaml`.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
