//! **Digital-footprint aggregation and scoring.**
//!
//! `footprint-score` turns already-fetched developer profiles from several
//! platforms (GitHub, StackExchange, a professional network) into a single
//! explainable assessment: per-platform scores, four cross-platform
//! dimension scores, a privacy-risk report and a ranked list of improvement
//! actions. It performs no network I/O; an external fetcher supplies the
//! raw payloads and anything it could not fetch is simply reported as
//! unavailable.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: Canonical profiles, scores and the [`FootprintScan`]
//!   aggregate root.
//! - **[`normalize`]**: Maps loosely-shaped payloads into typed
//!   [`PlatformProfile`] variants, rejecting unattributable ones.
//! - **[`scoring`]**: Table-driven per-platform scoring and cross-platform
//!   aggregation with weight renormalization over present platforms.
//! - **[`privacy`]**: Rule-based detection of exposed personal data.
//! - **[`recommend`]**: Gap-based improvement actions ranked by impact and
//!   effort.
//! - **[`pipeline`]**: The [`ScanOrchestrator`] that runs all of the above
//!   for one request.
//! - **[`config`]**: Scoring tables, validation, presets and config files.
//! - **[`reports`]**: JSON, terminal summary and Markdown output.
//!
//! ## Getting Started
//!
//! ```no_run
//! use footprint_score::{EngineConfig, ScanOrchestrator, ScanRequest};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = ScanOrchestrator::new(EngineConfig::default())?;
//!     let request = ScanRequest::from_json(&std::fs::read_to_string("request.json")?)?;
//!     let scan = orchestrator.run(&request, chrono::Utc::now());
//!
//!     println!("Overall: {} (grade {})", scan.scores.overall, scan.grade.letter());
//!     for rec in scan.recommendations.iter().take(3) {
//!         println!("{}. {}", rec.priority, rec.action);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The scan timestamp is always passed in, so the same request and tables
//! produce byte-identical scoring output (and the same
//! `scoring_fingerprint`) on every run.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Scores are bounded to 0..=100 before every narrowing cast
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod privacy;
pub mod recommend;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigPreset, EngineConfig};
pub use config::{ConfigError, ConfigurationError, Validatable};
pub use error::{ErrorContext, FootprintError, Result};
pub use model::{
    Dimension, DimensionScores, FootprintGrade, FootprintScan, Platform, PlatformProfile,
    PlatformScore, PrivacyReport, PrivacyRisk, Recommendation, RiskLevel, Severity,
};
pub use normalize::{normalize, FailureReason, NormalizationFailure};
pub use pipeline::{PlatformInput, ScanOrchestrator, ScanRequest};
pub use privacy::PrivacyAnalyzer;
pub use recommend::RecommendationEngine;
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{DimensionAggregator, PlatformScorer, SCORING_ENGINE_VERSION};
