//! Scan orchestration.
//!
//! Drives normalize → score → aggregate → privacy → recommend for one scan
//! request and assembles the [`FootprintScan`]. Any subset of platforms may
//! be missing or broken; those are listed in `unavailable` and excluded
//! from scoring, and the scan still completes.

mod output;
mod request;

pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use request::{load_scan_request, PlatformInput, ScanRequest};

use crate::config::{ConfigurationError, EngineConfig, Validatable};
use crate::model::{
    DimensionScores, FootprintGrade, FootprintScan, Platform, PlatformProfile, PlatformResult,
    PlatformScore, PrivacyReport, Recommendation, UnavailablePlatform, UnavailableReason,
};
use crate::normalize::normalize;
use crate::privacy::PrivacyAnalyzer;
use crate::recommend::RecommendationEngine;
use crate::scoring::{DimensionAggregator, PlatformScorer, SCORING_ENGINE_VERSION};
use chrono::{DateTime, Utc};
use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Every scan completed (and met `--min-score`, if given)
    pub const SUCCESS: i32 = 0;
    /// A scan's overall score is below `--min-score`
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// Scoring tables or config file are invalid
    pub const CONFIG_ERROR: i32 = 2;
    /// Any other error
    pub const ERROR: i32 = 3;
}

/// Runs complete scans against one validated set of tables.
///
/// Holds no per-scan state, so a single orchestrator can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct ScanOrchestrator {
    config: EngineConfig,
    scorer: PlatformScorer,
    aggregator: DimensionAggregator,
    privacy: PrivacyAnalyzer,
    recommender: RecommendationEngine,
}

impl ScanOrchestrator {
    /// Validate the tables and build the engine.
    ///
    /// Malformed tables are rejected here, never per scan.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigurationError> {
        config.ensure_valid()?;
        Ok(Self {
            scorer: PlatformScorer::new(config.scoring.clone()),
            aggregator: DimensionAggregator::new(config.scoring.clone()),
            privacy: PrivacyAnalyzer::new(),
            recommender: RecommendationEngine::new(config.clone()),
            config,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one scan. `scanned_at` is recorded as given.
    pub fn run(&self, request: &ScanRequest, scanned_at: DateTime<Utc>) -> FootprintScan {
        let mut profiles: Vec<PlatformProfile> = Vec::new();
        let mut unavailable = Vec::new();

        for &platform in Platform::all() {
            match collect_profile(platform, request.platforms.get(&platform)) {
                Ok(profile) => profiles.push(profile),
                Err(missing) => unavailable.push(missing),
            }
        }

        let scores: Vec<PlatformScore> = profiles.iter().map(|p| self.scorer.score(p)).collect();
        let dimensions = self.aggregator.aggregate(&scores);
        let privacy = self.privacy.analyze(&profiles);
        let recommendations = self.recommender.recommend(&dimensions, &profiles, &scores);

        let platforms_scanned = profiles.iter().map(PlatformProfile::platform).collect();
        let results: Vec<PlatformResult> = profiles
            .into_iter()
            .zip(scores)
            .map(|(profile, score)| PlatformResult { profile, score })
            .collect();
        let scoring_fingerprint =
            scoring_fingerprint(&results, &dimensions, &privacy, &recommendations);

        tracing::info!(
            user_ref = request.user_ref.as_deref().unwrap_or("-"),
            scanned = results.len(),
            unavailable = unavailable.len(),
            overall = dimensions.overall,
            risk_level = privacy.risk_level.name(),
            "scan complete"
        );

        FootprintScan {
            engine_version: SCORING_ENGINE_VERSION.to_string(),
            scanned_at,
            user_ref: request.user_ref.clone(),
            platforms_scanned,
            results,
            unavailable,
            grade: FootprintGrade::from_score(dimensions.overall),
            scores: dimensions,
            privacy,
            recommendations,
            scoring_fingerprint,
        }
    }
}

/// Turn one platform's input into a profile, or record why it is unavailable
fn collect_profile(
    platform: Platform,
    input: Option<&PlatformInput>,
) -> Result<PlatformProfile, UnavailablePlatform> {
    let unavailable = |reason, detail| UnavailablePlatform {
        platform,
        reason,
        detail,
    };

    match input {
        None | Some(PlatformInput::NotConfigured) => {
            tracing::debug!(platform = platform.tag(), "platform not configured");
            Err(unavailable(UnavailableReason::NotConfigured, None))
        }
        Some(PlatformInput::FetchFailed { reason }) => {
            tracing::warn!(
                platform = platform.tag(),
                reason = reason.as_deref().unwrap_or("unknown"),
                "platform fetch failed, excluding from scan"
            );
            Err(unavailable(UnavailableReason::FetchFailed, reason.clone()))
        }
        Some(PlatformInput::Fetched { payload }) => normalize(platform, payload).map_err(|failure| {
            tracing::warn!(
                platform = platform.tag(),
                detail = %failure.detail,
                "platform payload rejected, excluding from scan"
            );
            unavailable(failure.reason.into(), Some(failure.detail))
        }),
    }
}

/// Fingerprinted part of a scan: everything but timestamp and user
#[derive(Debug, Serialize)]
struct ScoringOutput<'a> {
    results: &'a [PlatformResult],
    scores: &'a DimensionScores,
    privacy: &'a PrivacyReport,
    recommendations: &'a [Recommendation],
}

fn scoring_fingerprint(
    results: &[PlatformResult],
    scores: &DimensionScores,
    privacy: &PrivacyReport,
    recommendations: &[Recommendation],
) -> String {
    let output = ScoringOutput {
        results,
        scores,
        privacy,
        recommendations,
    };
    fingerprint_of(&output)
}

/// xxh3-64 hex digest of the JSON form, or of the `Debug` form when the
/// value does not serialize.
fn fingerprint_of<T: Serialize + std::fmt::Debug>(value: &T) -> String {
    let bytes = serde_json::to_vec(value).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "scoring output did not serialize, fingerprinting debug form");
        format!("{value:?}").into_bytes()
    });
    format!("{:016x}", xxh3_64(&bytes))
}
