//! Configuration validation.
//!
//! Malformed tables are deployment defects: they are collected in one pass
//! and reported together as a [`ConfigurationError`] before any scan runs.

use super::types::{
    AppConfig, BehaviorConfig, EngineConfig, OutputConfig, PlatformTable, RecommendationConfig,
    ScoringConfig,
};
use std::collections::HashSet;

/// Tolerance for "weights sum to 1.0"
const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

// ============================================================================
// Configuration Error
// ============================================================================

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Fatal configuration defect: every problem found in the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError {
    pub errors: Vec<ConfigError>,
}

impl ConfigurationError {
    #[must_use]
    pub const fn new(errors: Vec<ConfigError>) -> Self {
        Self { errors }
    }
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid configuration ({} problem(s))", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigurationError {}

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

    /// Turn validation findings into a fatal error.
    fn ensure_valid(&self) -> Result<(), ConfigurationError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigurationError::new(errors))
        }
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.engine().validate();
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for EngineConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.scoring.validate();
        errors.extend(self.recommendations.validate());

        // Every sub-metric needs an impact/effort entry
        for (t, table) in self.scoring.platforms.iter().enumerate() {
            for (m, metric) in table.sub_metrics.iter().enumerate() {
                if !self.recommendations.actions.contains_key(&metric.name) {
                    errors.push(ConfigError::new(
                        format!("scoring.platforms[{t}].sub_metrics[{m}].name"),
                        format!(
                            "No recommendations.actions entry for sub-metric '{}'",
                            metric.name
                        ),
                    ));
                }
            }
        }

        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.completeness_floor) {
            errors.push(ConfigError::new(
                "scoring.completeness_floor",
                format!(
                    "Completeness floor must be between 0.0 and 1.0, got {}",
                    self.completeness_floor
                ),
            ));
        }

        if self.platforms.is_empty() {
            errors.push(ConfigError::new(
                "scoring.platforms",
                "At least one platform table is required",
            ));
        }

        let mut seen = HashSet::new();
        for (t, table) in self.platforms.iter().enumerate() {
            if !seen.insert(table.platform) {
                errors.push(ConfigError::new(
                    format!("scoring.platforms[{t}].platform"),
                    format!("Duplicate table for platform '{}'", table.platform.tag()),
                ));
            }
            errors.extend(validate_table(t, table));
        }

        errors
    }
}

fn validate_table(index: usize, table: &PlatformTable) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    let prefix = format!("scoring.platforms[{index}]");

    if !table.weight.is_finite() || table.weight <= 0.0 {
        errors.push(ConfigError::new(
            format!("{prefix}.weight"),
            format!("Platform weight must be positive, got {}", table.weight),
        ));
    }

    if table.sub_metrics.is_empty() {
        errors.push(ConfigError::new(
            format!("{prefix}.sub_metrics"),
            "At least one sub-metric is required",
        ));
        return errors;
    }

    let known_signals = table.platform.signals();
    let mut names = HashSet::new();
    for (m, metric) in table.sub_metrics.iter().enumerate() {
        let field = format!("{prefix}.sub_metrics[{m}]");

        if metric.name.trim().is_empty() {
            errors.push(ConfigError::new(
                format!("{field}.name"),
                "Sub-metric name must not be empty",
            ));
        } else if !names.insert(metric.name.as_str()) {
            errors.push(ConfigError::new(
                format!("{field}.name"),
                format!("Duplicate sub-metric '{}'", metric.name),
            ));
        }

        if !metric.weight.is_finite() || metric.weight < 0.0 {
            errors.push(ConfigError::new(
                format!("{field}.weight"),
                format!("Sub-metric weight must be non-negative, got {}", metric.weight),
            ));
        }

        if !metric.reference_threshold.is_finite() || metric.reference_threshold <= 0.0 {
            errors.push(ConfigError::new(
                format!("{field}.reference_threshold"),
                format!(
                    "Reference threshold must be positive, got {}",
                    metric.reference_threshold
                ),
            ));
        }

        if !known_signals.contains(&metric.signal.as_str()) {
            errors.push(ConfigError::new(
                format!("{field}.signal"),
                format!(
                    "Unknown signal '{}' for {}. Valid options: {}",
                    metric.signal,
                    table.platform.tag(),
                    known_signals.join(", ")
                ),
            ));
        }

        if metric.dimensions.is_empty() {
            errors.push(ConfigError::new(
                format!("{field}.dimensions"),
                "Sub-metric must feed at least one dimension",
            ));
        }
    }

    let sum: f64 = table.sub_metrics.iter().map(|m| m.weight).sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        errors.push(ConfigError::new(
            format!("{prefix}.sub_metrics"),
            format!(
                "Sub-metric weights for {} must sum to 1.0, got {sum:.3}",
                table.platform.tag()
            ),
        ));
    }

    errors
}

impl Validatable for RecommendationConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(1..=100).contains(&self.target) {
            errors.push(ConfigError::new(
                "recommendations.target",
                format!("Target must be between 1 and 100, got {}", self.target),
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(parent) = self.file.as_ref().and_then(|f| f.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min) = self.min_score {
            if min > 100 {
                errors.push(ConfigError::new(
                    "behavior.min_score",
                    format!("Minimum score must be between 0 and 100, got {min}"),
                ));
            }
        }
        errors
    }
}
