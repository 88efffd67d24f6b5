//! Platform and dimension tags.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// External professional-presence source.
///
/// Declaration order is the canonical order: scans, privacy findings and
/// recommendation tie-breaks all follow it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Platform {
    /// Code hosting (GitHub)
    #[serde(rename = "github")]
    GitHub,
    /// Q&A reputation (Stack Exchange network)
    #[serde(
        rename = "stackexchange",
        alias = "stack_exchange",
        alias = "stackoverflow"
    )]
    StackExchange,
    /// Professional network (LinkedIn-style)
    #[serde(rename = "professional_network", alias = "linkedin")]
    ProfessionalNetwork,
}

impl Platform {
    /// All platforms in declaration order
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::GitHub, Self::StackExchange, Self::ProfessionalNetwork]
    }

    /// Stable machine tag (matches the serialized form)
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::StackExchange => "stackexchange",
            Self::ProfessionalNetwork => "professional_network",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::StackExchange => "Stack Exchange",
            Self::ProfessionalNetwork => "Professional Network",
        }
    }

    /// Raw signals a normalized profile of this platform exposes to the scorer.
    #[must_use]
    pub const fn signals(&self) -> &'static [&'static str] {
        match self {
            Self::GitHub => &[
                "public_repos",
                "followers",
                "following",
                "total_stars",
                "total_forks",
                "commits_last_year",
                "active_weeks",
                "language_count",
            ],
            Self::StackExchange => &[
                "reputation",
                "answer_count",
                "question_count",
                "people_reached",
                "top_tag_score",
                "gold_badges",
                "silver_badges",
                "bronze_badges",
            ],
            Self::ProfessionalNetwork => &[
                "connections",
                "posts_last_90_days",
                "recommendations_received",
                "profile_sections",
                "skill_endorsements",
                "skill_count",
                "experience_count",
                "education_count",
            ],
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "github" | "gh" => Ok(Self::GitHub),
            "stackexchange" | "stack_exchange" | "stackoverflow" | "se" => Ok(Self::StackExchange),
            "professional_network" | "professional-network" | "linkedin" => {
                Ok(Self::ProfessionalNetwork)
            }
            _ => Err(format!(
                "Unknown platform '{s}'. Valid options: github, stackexchange, professional_network"
            )),
        }
    }
}

/// Cross-platform scoring axis
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Visibility,
    Activity,
    Impact,
    Expertise,
}

impl Dimension {
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Visibility,
            Self::Activity,
            Self::Impact,
            Self::Expertise,
        ]
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visibility => "visibility",
            Self::Activity => "activity",
            Self::Impact => "impact",
            Self::Expertise => "expertise",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
