//! Table-driven per-platform scorer.

use super::clamp_score;
use crate::config::{PlatformTable, ScoringConfig, SubMetricSpec};
use crate::model::{PlatformProfile, PlatformScore};
use indexmap::IndexMap;

/// Scores one canonical profile against its platform table.
///
/// The scorer never fails: unreadable or negative signals score 0 and
/// every value is bounded to 0-100.
#[derive(Debug, Clone)]
pub struct PlatformScorer {
    config: ScoringConfig,
}

impl PlatformScorer {
    /// Create a scorer over already-validated tables
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a profile.
    ///
    /// `value` is computed from the rounded breakdown values actually
    /// stored, so it can always be re-derived from the breakdown.
    #[must_use]
    pub fn score(&self, profile: &PlatformProfile) -> PlatformScore {
        let platform = profile.platform();
        let completeness_factor = self.completeness_factor(profile);

        let Some(table) = self.config.table(platform) else {
            tracing::warn!(platform = platform.tag(), "no scoring table, scoring as zero");
            return PlatformScore {
                platform,
                value: 0,
                completeness_factor,
                sub_metric_breakdown: IndexMap::new(),
            };
        };

        let sub_metric_breakdown = breakdown(table, profile);
        let weighted: f64 = table
            .sub_metrics
            .iter()
            .map(|metric| {
                let value = sub_metric_breakdown.get(&metric.name).copied().unwrap_or(0);
                metric.weight * f64::from(value)
            })
            .sum();
        let value = clamp_score(weighted * completeness_factor);

        tracing::debug!(
            platform = platform.tag(),
            value,
            completeness_factor,
            "scored platform"
        );

        PlatformScore {
            platform,
            value,
            completeness_factor,
            sub_metric_breakdown,
        }
    }

    /// Completeness clamped to `[completeness_floor, 1.0]`
    fn completeness_factor(&self, profile: &PlatformProfile) -> f64 {
        let floor = self.config.completeness_floor.clamp(0.0, 1.0);
        profile.completeness().clamp(floor, 1.0)
    }
}

fn breakdown(table: &PlatformTable, profile: &PlatformProfile) -> IndexMap<String, u8> {
    table
        .sub_metrics
        .iter()
        .map(|metric| (metric.name.clone(), sub_metric_value(metric, profile)))
        .collect()
}

fn sub_metric_value(metric: &SubMetricSpec, profile: &PlatformProfile) -> u8 {
    let raw = profile.signal(&metric.signal).unwrap_or(0.0);
    saturating_linear(raw, metric.reference_threshold)
}

/// `min(100, max(0, raw) / threshold * 100)`, rounded
#[must_use]
pub fn saturating_linear(raw: f64, threshold: f64) -> u8 {
    if raw.is_nan() || raw <= 0.0 || !threshold.is_finite() || threshold <= 0.0 {
        return 0;
    }
    clamp_score(raw / threshold * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GitHubProfile, Platform, StackExchangeProfile};

    fn scorer() -> PlatformScorer {
        PlatformScorer::new(ScoringConfig::default())
    }

    fn github(commits: u64, stars: u64, followers: u64, weeks: u64) -> PlatformProfile {
        PlatformProfile::GitHub(GitHubProfile {
            login: "octocat".to_string(),
            commits_last_year: commits,
            total_stars: stars,
            followers,
            active_weeks: weeks,
            completeness: 1.0,
            ..Default::default()
        })
    }

    #[test]
    fn test_saturating_linear() {
        assert_eq!(saturating_linear(250.0, 500.0), 50);
        assert_eq!(saturating_linear(5000.0, 500.0), 100);
        assert_eq!(saturating_linear(-10.0, 500.0), 0);
        assert_eq!(saturating_linear(f64::NAN, 500.0), 0);
        assert_eq!(saturating_linear(f64::INFINITY, 500.0), 100);
        assert_eq!(saturating_linear(10.0, 0.0), 0);
        // 1/3 of the way rounds to 33
        assert_eq!(saturating_linear(1.0, 3.0), 33);
    }

    #[test]
    fn test_reference_thresholds_score_full_marks() {
        let score = scorer().score(&github(500, 1000, 500, 52));
        assert_eq!(score.platform, Platform::GitHub);
        assert!(score.sub_metric_breakdown.values().all(|v| *v == 100));
        assert_eq!(score.value, 100);
    }

    #[test]
    fn test_breakdown_follows_table_order() {
        let score = scorer().score(&github(250, 0, 0, 0));
        let names: Vec<_> = score.sub_metric_breakdown.keys().cloned().collect();
        assert_eq!(names, vec!["activity", "impact", "quality", "consistency"]);
        assert_eq!(score.sub_metric("activity"), Some(50));
        // 0.30 * 50
        assert_eq!(score.value, 15);
    }

    #[test]
    fn test_completeness_damping_uses_floor() {
        let mut profile = github(500, 1000, 500, 52);
        if let PlatformProfile::GitHub(p) = &mut profile {
            p.completeness = 0.1;
        }
        let score = scorer().score(&profile);
        assert!((score.completeness_factor - 0.5).abs() < f64::EPSILON);
        assert_eq!(score.value, 50);
    }

    #[test]
    fn test_all_zero_profile_scores_zero() {
        let profile = PlatformProfile::StackExchange(StackExchangeProfile {
            user_id: "1".to_string(),
            completeness: 1.0,
            ..Default::default()
        });
        let score = scorer().score(&profile);
        assert_eq!(score.value, 0);
        assert_eq!(score.sub_metric_breakdown.len(), 4);
    }

    #[test]
    fn test_missing_table_scores_zero() {
        let mut config = ScoringConfig::default();
        config.platforms.retain(|t| t.platform != Platform::GitHub);
        let score = PlatformScorer::new(config).score(&github(500, 1000, 500, 52));
        assert_eq!(score.value, 0);
        assert!(score.sub_metric_breakdown.is_empty());
    }

    #[test]
    fn test_value_matches_breakdown() {
        let score = scorer().score(&github(123, 456, 78, 9));
        let table = ScoringConfig::default();
        let table = table.table(Platform::GitHub).unwrap();
        let recomputed: f64 = table
            .sub_metrics
            .iter()
            .map(|m| m.weight * f64::from(score.sub_metric_breakdown[&m.name]))
            .sum::<f64>()
            * score.completeness_factor;
        assert_eq!(score.value, recomputed.round() as u8);
    }
}
