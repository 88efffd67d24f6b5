//! Default scoring tables and presets.

use super::types::{
    ActionProfile, AppConfig, PlatformTable, RecommendationConfig, ScoringConfig, SubMetricSpec,
};
use crate::model::{Dimension, Level, Platform};
use indexmap::IndexMap;

/// Default sub-metric value recommendations aim for
pub const DEFAULT_TARGET: u8 = 80;

/// Default lower bound of the completeness damping factor
pub const DEFAULT_COMPLETENESS_FLOOR: f64 = 0.5;

// ============================================================================
// Default Tables
// ============================================================================

fn row(
    name: &str,
    weight: f64,
    signal: &str,
    reference_threshold: f64,
    dimensions: &[Dimension],
    advice: &str,
) -> SubMetricSpec {
    SubMetricSpec {
        name: name.to_string(),
        weight,
        signal: signal.to_string(),
        reference_threshold,
        dimensions: dimensions.to_vec(),
        advice: advice.to_string(),
    }
}

/// Built-in platform tables
#[must_use]
pub fn default_platform_tables() -> Vec<PlatformTable> {
    use Dimension::{Activity, Expertise, Impact, Visibility};

    vec![
        PlatformTable {
            platform: Platform::GitHub,
            weight: 0.40,
            sub_metrics: vec![
                row(
                    "activity",
                    0.30,
                    "commits_last_year",
                    500.0,
                    &[Activity],
                    "Commit to public repositories more regularly",
                ),
                row(
                    "impact",
                    0.25,
                    "total_stars",
                    1000.0,
                    &[Impact],
                    "Publish and promote projects others can star and reuse",
                ),
                row(
                    "quality",
                    0.25,
                    "followers",
                    500.0,
                    &[Visibility, Expertise],
                    "Polish flagship repositories with READMEs, docs and tests to attract followers",
                ),
                row(
                    "consistency",
                    0.20,
                    "active_weeks",
                    52.0,
                    &[Activity],
                    "Contribute a little every week instead of in bursts",
                ),
            ],
        },
        PlatformTable {
            platform: Platform::StackExchange,
            weight: 0.30,
            sub_metrics: vec![
                row(
                    "reputation",
                    0.40,
                    "reputation",
                    20000.0,
                    &[Impact, Visibility],
                    "Answer questions in your strongest tags to build reputation",
                ),
                row(
                    "expertise",
                    0.30,
                    "top_tag_score",
                    1000.0,
                    &[Expertise],
                    "Focus answers on a few tags to deepen recognized expertise",
                ),
                row(
                    "engagement",
                    0.20,
                    "answer_count",
                    200.0,
                    &[Activity],
                    "Post answers more frequently",
                ),
                row(
                    "reach",
                    0.10,
                    "people_reached",
                    100_000.0,
                    &[Impact, Visibility],
                    "Answer high-traffic canonical questions to reach more people",
                ),
            ],
        },
        PlatformTable {
            platform: Platform::ProfessionalNetwork,
            weight: 0.30,
            sub_metrics: vec![
                row(
                    "profile",
                    0.30,
                    "profile_sections",
                    8.0,
                    &[Visibility],
                    "Fill in every profile section (headline, summary, experience, education, skills)",
                ),
                row(
                    "network",
                    0.25,
                    "connections",
                    500.0,
                    &[Visibility, Impact],
                    "Connect with colleagues, collaborators and community members",
                ),
                row(
                    "endorsements",
                    0.25,
                    "skill_endorsements",
                    100.0,
                    &[Expertise],
                    "List core skills and ask collaborators for endorsements",
                ),
                row(
                    "activity",
                    0.20,
                    "posts_last_90_days",
                    24.0,
                    &[Activity],
                    "Share posts or articles about your work every couple of weeks",
                ),
            ],
        },
    ]
}

/// Built-in impact/effort table keyed by sub-metric name
#[must_use]
pub fn default_action_table() -> IndexMap<String, ActionProfile> {
    use Level::{High, Low, Medium};

    [
        ("activity", High, Medium),
        ("impact", High, High),
        ("quality", Medium, Medium),
        ("consistency", Medium, Low),
        ("reputation", High, High),
        ("expertise", High, Medium),
        ("engagement", Medium, Low),
        ("reach", Low, Medium),
        ("profile", High, Low),
        ("network", Medium, Low),
        ("endorsements", Medium, Medium),
    ]
    .into_iter()
    .map(|(name, impact, effort)| (name.to_string(), ActionProfile { impact, effort }))
    .collect()
}

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Built-in tables, target 80
    Default,
    /// Raises the recommendation target to 90
    Strict,
    /// Lowers the target to 70 and damps sparse profiles less
    Lenient,
}

impl ConfigPreset {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "standard" => Some(Self::Default),
            "strict" => Some(Self::Strict),
            "lenient" | "relaxed" => Some(Self::Lenient),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Built-in scoring tables with a recommendation target of 80",
            Self::Strict => "Recommends improvements for every sub-metric below 90",
            Self::Lenient => "Target of 70 and a completeness floor of 0.6 for sparse profiles",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Lenient]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self {
                recommendations: RecommendationConfig {
                    target: 90,
                    ..RecommendationConfig::default()
                },
                ..Self::default()
            },
            ConfigPreset::Lenient => Self {
                scoring: ScoringConfig {
                    completeness_floor: 0.6,
                    ..ScoringConfig::default()
                },
                recommendations: RecommendationConfig {
                    target: 70,
                    ..RecommendationConfig::default()
                },
                ..Self::default()
            },
        }
    }
}
