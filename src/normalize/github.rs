//! Code-hosting payloads.

use super::reader::PayloadReader;
use super::NormalizationFailure;
use crate::model::{GitHubProfile, Platform};
use serde_json::{Map, Value};

const IDENTITY: &[&str] = &["login"];

pub(super) fn normalize(map: &Map<String, Value>) -> Result<GitHubProfile, NormalizationFailure> {
    let mut reader = PayloadReader::new(map);
    let login = reader
        .identity(IDENTITY)
        .ok_or_else(|| NormalizationFailure::missing_identity(Platform::GitHub, IDENTITY))?;

    let mut profile = GitHubProfile {
        login,
        name: reader.text(&["name"]),
        bio: reader.text(&["bio"]),
        email: reader.text(&["email"]),
        location: reader.text(&["location"]),
        company: reader.text(&["company"]),
        blog: reader.text(&["blog"]),
        twitter_username: reader.text(&["twitter_username"]),
        hireable: reader.flag(&["hireable"]),
        public_repos: reader.count(&["public_repos"]),
        followers: reader.count(&["followers"]),
        following: reader.count(&["following"]),
        total_stars: reader.count(&["total_stars", "stars"]),
        total_forks: reader.count(&["total_forks", "forks"]),
        commits_last_year: reader.count(&["commits_last_year", "commits"]),
        active_weeks: reader.count(&["active_weeks"]),
        languages: languages(reader.collection(&["languages"])),
        completeness: 0.0,
    };
    profile.completeness = reader.completeness();
    Ok(profile)
}

/// Languages arrive either as a list of names or as a `{name: bytes}` map
/// (largest first).
fn languages(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::Object(map)) => {
            let mut weighted: Vec<(&String, u64)> = map
                .iter()
                .map(|(name, bytes)| (name, super::reader::as_count(bytes).unwrap_or(0)))
                .collect();
            weighted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            weighted.into_iter().map(|(name, _)| name.clone()).collect()
        }
        _ => Vec::new(),
    }
}
