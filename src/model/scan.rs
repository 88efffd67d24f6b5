//! The assembled scan record.

use super::{
    DimensionScores, FootprintGrade, Platform, PlatformProfile, PlatformScore, PrivacyReport,
    Recommendation,
};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Why a requested platform contributed nothing to the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// The user has not linked this platform
    NotConfigured,
    /// The upstream fetcher reported a failure
    FetchFailed,
    /// Payload lacked the account identity
    Incomplete,
    /// Payload was not a JSON object
    Malformed,
}

impl UnavailableReason {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not configured",
            Self::FetchFailed => "fetch failed",
            Self::Incomplete => "incomplete profile data",
            Self::Malformed => "malformed payload",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UnavailablePlatform {
    pub platform: Platform,
    pub reason: UnavailableReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Canonical profile and its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlatformResult {
    pub profile: PlatformProfile,
    pub score: PlatformScore,
}

/// One complete footprint scan. Never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[must_use]
pub struct FootprintScan {
    pub engine_version: String,
    pub scanned_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ref: Option<String>,
    pub platforms_scanned: BTreeSet<Platform>,
    /// One entry per scanned platform, in platform order
    pub results: Vec<PlatformResult>,
    pub unavailable: Vec<UnavailablePlatform>,
    pub scores: DimensionScores,
    pub grade: FootprintGrade,
    pub privacy: PrivacyReport,
    /// Sorted by priority
    pub recommendations: Vec<Recommendation>,
    /// xxh3 digest of the scoring output, independent of timestamp and user
    pub scoring_fingerprint: String,
}

impl FootprintScan {
    #[must_use]
    pub fn result_for(&self, platform: Platform) -> Option<&PlatformResult> {
        self.results.iter().find(|r| r.score.platform == platform)
    }

    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.unavailable.is_empty()
    }
}
