//! Platform scoring and cross-platform aggregation.
//!
//! Scoring is table-driven: each platform has a declarative table of
//! sub-metrics (`name`, `weight`, `signal`, `reference_threshold`,
//! `dimensions`) consumed by one generic [`PlatformScorer`]. Adding a
//! platform means adding a table, not code.
//!
//! ```rust,ignore
//! use footprint_score::config::ScoringConfig;
//! use footprint_score::scoring::{DimensionAggregator, PlatformScorer};
//!
//! let scorer = PlatformScorer::new(ScoringConfig::default());
//! let scores: Vec<_> = profiles.iter().map(|p| scorer.score(p)).collect();
//! let dimensions = DimensionAggregator::new(ScoringConfig::default()).aggregate(&scores);
//! ```

mod aggregate;
mod scorer;

pub use aggregate::DimensionAggregator;
pub use scorer::{saturating_linear, PlatformScorer};

/// Scoring engine version, stamped into every scan
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Round and bound a raw score to 0-100 (NaN scores 0)
pub(crate) fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round() as u8
}
