//! Configuration types for footprint-score.
//!
//! Scoring tables are plain data: one [`PlatformTable`] per platform listing
//! its sub-metrics, and one action table keyed by sub-metric name. The
//! scorer, aggregator and recommender read nothing else, so alternate tables
//! can be swapped in for tests or deployments.

use crate::model::{Dimension, Level, Platform};
use crate::reports::ReportFormat;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loadable from YAML and overridable from the CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Platform scoring tables and weights
    pub scoring: ScoringConfig,
    /// Recommendation target and action table
    pub recommendations: RecommendationConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The part of the configuration the scan engine consumes
    #[must_use]
    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            scoring: self.scoring.clone(),
            recommendations: self.recommendations.clone(),
        }
    }
}

/// Tables consumed by the scorer, aggregator and recommender.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub recommendations: RecommendationConfig,
}

// ============================================================================
// Scoring Tables
// ============================================================================

/// Per-platform scoring tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Lower bound of the completeness damping factor (0.0-1.0)
    pub completeness_floor: f64,
    /// One table per platform, in platform order
    pub platforms: Vec<PlatformTable>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            completeness_floor: super::DEFAULT_COMPLETENESS_FLOOR,
            platforms: super::defaults::default_platform_tables(),
        }
    }
}

impl ScoringConfig {
    /// Table for a platform, if configured
    #[must_use]
    pub fn table(&self, platform: Platform) -> Option<&PlatformTable> {
        self.platforms.iter().find(|t| t.platform == platform)
    }
}

/// Declarative scoring table for one platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlatformTable {
    pub platform: Platform,
    /// Weight of this platform in the overall score
    pub weight: f64,
    /// Sub-metrics in declaration order; weights sum to 1.0
    pub sub_metrics: Vec<SubMetricSpec>,
}

/// One row of a platform table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubMetricSpec {
    pub name: String,
    pub weight: f64,
    /// Raw profile signal the value is computed from
    pub signal: String,
    /// Raw value that maps to a score of 100
    pub reference_threshold: f64,
    /// Dimensions this sub-metric feeds
    pub dimensions: Vec<Dimension>,
    /// Suggested action when the sub-metric is below target
    pub advice: String,
}

// ============================================================================
// Recommendations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Sub-metric value every recommendation aims for (1-100)
    pub target: u8,
    /// Impact/effort per sub-metric name
    pub actions: IndexMap<String, ActionProfile>,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            target: super::DEFAULT_TARGET,
            actions: super::defaults::default_action_table(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionProfile {
    pub impact: Level,
    pub effort: Level,
}

// ============================================================================
// Output & Behavior
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file path (stdout if not specified)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit non-zero when any scan's overall score is below this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u8>,
}
