//! Ranked improvement actions.

use super::Platform;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Three-step scale used for both impact and effort
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Explainable improvement suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    /// 1-based rank (1 = most important)
    pub priority: u32,
    pub platform: Platform,
    pub sub_metric: String,
    pub action: String,
    pub impact: Level,
    pub effort: Level,
    pub rationale: String,
    pub current_score: u8,
    pub potential_score: u8,
}

impl Recommendation {
    /// Points gained by reaching the target
    #[must_use]
    pub const fn gap(&self) -> u8 {
        self.potential_score.saturating_sub(self.current_score)
    }
}
