//! Canonical per-platform profiles.
//!
//! Profiles are produced by the normalizer and never mutated afterwards.
//! Counters are stored as non-negative integers; anything the source payload
//! did not provide is zero or empty, with `completeness` recording how much
//! of the expected data was present.

use super::Platform;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical profile, one variant per platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "platform")]
pub enum PlatformProfile {
    #[serde(rename = "github")]
    GitHub(GitHubProfile),
    #[serde(rename = "stackexchange")]
    StackExchange(StackExchangeProfile),
    #[serde(rename = "professional_network")]
    ProfessionalNetwork(ProfessionalNetworkProfile),
}

/// Code-hosting profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GitHubProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    pub hireable: bool,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub total_stars: u64,
    pub total_forks: u64,
    pub commits_last_year: u64,
    /// Weeks in the last year with at least one contribution
    pub active_weeks: u64,
    pub languages: Vec<String>,
    /// Fraction of expected fields present in the source payload (0-1)
    pub completeness: f64,
}

/// Q&A reputation profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StackExchangeProfile {
    pub user_id: String,
    pub display_name: Option<String>,
    pub location: Option<String>,
    pub website_url: Option<String>,
    pub about_me: Option<String>,
    pub reputation: u64,
    pub answer_count: u64,
    pub question_count: u64,
    pub people_reached: u64,
    pub badges: BadgeCounts,
    pub top_tags: Vec<TagActivity>,
    pub completeness: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BadgeCounts {
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
}

/// Answer activity within one tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TagActivity {
    pub tag_name: String,
    pub answer_score: u64,
    pub answer_count: u64,
}

/// Professional-network profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProfessionalNetworkProfile {
    pub public_identifier: String,
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    pub open_to_work: bool,
    pub connections: u64,
    pub posts_last_90_days: u64,
    pub recommendations_received: u64,
    pub experience: Vec<Position>,
    pub education_count: u64,
    pub skills: Vec<Skill>,
    pub completeness: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    pub title: Option<String>,
    pub company: Option<String>,
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Skill {
    pub name: String,
    pub endorsements: u64,
}

/// Publicly visible, privacy-relevant fields of a profile.
///
/// Privacy rules only look at this view, so they stay independent of the
/// per-platform field layout.
#[derive(Debug, Clone, Default)]
pub struct ExposedFields<'a> {
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub location: Option<&'a str>,
    pub employer: Option<&'a str>,
    pub birth_date: Option<&'a str>,
    pub open_to_work: bool,
    /// Free-text fields (bio, about, headline, summary, ...)
    pub text: Vec<&'a str>,
}

impl PlatformProfile {
    #[must_use]
    pub const fn platform(&self) -> Platform {
        match self {
            Self::GitHub(_) => Platform::GitHub,
            Self::StackExchange(_) => Platform::StackExchange,
            Self::ProfessionalNetwork(_) => Platform::ProfessionalNetwork,
        }
    }

    /// Account identifier on the source platform
    #[must_use]
    pub fn identity(&self) -> &str {
        match self {
            Self::GitHub(p) => &p.login,
            Self::StackExchange(p) => &p.user_id,
            Self::ProfessionalNetwork(p) => &p.public_identifier,
        }
    }

    /// Fraction of expected fields present (0-1)
    #[must_use]
    pub fn completeness(&self) -> f64 {
        let raw = match self {
            Self::GitHub(p) => p.completeness,
            Self::StackExchange(p) => p.completeness,
            Self::ProfessionalNetwork(p) => p.completeness,
        };
        if raw.is_finite() {
            raw.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Look up a named raw counter. Unknown names yield `None`.
    #[must_use]
    pub fn signal(&self, name: &str) -> Option<f64> {
        let value = match self {
            Self::GitHub(p) => match name {
                "public_repos" => p.public_repos,
                "followers" => p.followers,
                "following" => p.following,
                "total_stars" => p.total_stars,
                "total_forks" => p.total_forks,
                "commits_last_year" => p.commits_last_year,
                "active_weeks" => p.active_weeks,
                "language_count" => p.languages.len() as u64,
                _ => return None,
            },
            Self::StackExchange(p) => match name {
                "reputation" => p.reputation,
                "answer_count" => p.answer_count,
                "question_count" => p.question_count,
                "people_reached" => p.people_reached,
                "top_tag_score" => p.top_tag_score(),
                "gold_badges" => p.badges.gold,
                "silver_badges" => p.badges.silver,
                "bronze_badges" => p.badges.bronze,
                _ => return None,
            },
            Self::ProfessionalNetwork(p) => match name {
                "connections" => p.connections,
                "posts_last_90_days" => p.posts_last_90_days,
                "recommendations_received" => p.recommendations_received,
                "profile_sections" => p.profile_sections(),
                "skill_endorsements" => p.skill_endorsements(),
                "skill_count" => p.skills.len() as u64,
                "experience_count" => p.experience.len() as u64,
                "education_count" => p.education_count,
                _ => return None,
            },
        };
        Some(value as f64)
    }

    /// Free-text fields scanned by privacy rules
    #[must_use]
    pub fn public_text(&self) -> Vec<&str> {
        self.exposed_fields().text
    }

    /// Privacy-relevant public fields
    #[must_use]
    pub fn exposed_fields(&self) -> ExposedFields<'_> {
        match self {
            Self::GitHub(p) => ExposedFields {
                email: p.email.as_deref(),
                phone: None,
                location: p.location.as_deref(),
                employer: p.company.as_deref(),
                birth_date: None,
                open_to_work: false,
                text: [p.bio.as_deref(), p.blog.as_deref(), p.name.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect(),
            },
            Self::StackExchange(p) => ExposedFields {
                email: None,
                phone: None,
                location: p.location.as_deref(),
                employer: None,
                birth_date: None,
                open_to_work: false,
                text: [p.about_me.as_deref(), p.website_url.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect(),
            },
            Self::ProfessionalNetwork(p) => ExposedFields {
                email: p.email.as_deref(),
                phone: p.phone.as_deref(),
                location: p.location.as_deref(),
                employer: p.current_employer(),
                birth_date: p.birth_date.as_deref(),
                open_to_work: p.open_to_work,
                text: [p.headline.as_deref(), p.summary.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect(),
            },
        }
    }
}

impl StackExchangeProfile {
    /// Summed answer score across the user's top tags
    #[must_use]
    pub fn top_tag_score(&self) -> u64 {
        self.top_tags
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.answer_score))
    }
}

impl ProfessionalNetworkProfile {
    /// Number of filled profile sections out of the eight the platform offers
    #[must_use]
    pub fn profile_sections(&self) -> u64 {
        let filled = |s: &Option<String>| s.as_deref().is_some_and(|v| !v.trim().is_empty());
        [
            filled(&self.full_name),
            filled(&self.headline),
            filled(&self.summary),
            filled(&self.location),
            filled(&self.industry),
            !self.experience.is_empty(),
            self.education_count > 0,
            !self.skills.is_empty(),
        ]
        .iter()
        .filter(|&&present| present)
        .count() as u64
    }

    #[must_use]
    pub fn skill_endorsements(&self) -> u64 {
        self.skills
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.endorsements))
    }

    /// Employer of the current position, falling back to the first listed one
    #[must_use]
    pub fn current_employer(&self) -> Option<&str> {
        self.experience
            .iter()
            .find(|p| p.current)
            .or_else(|| self.experience.first())
            .and_then(|p| p.company.as_deref())
    }
}
