//! Ranked, explainable improvement recommendations.
//!
//! Every sub-metric below the configured target produces one
//! recommendation. The list is ranked by impact (high first), then effort
//! (low first), then by how far the sub-metric is from the target.

use crate::config::{ActionProfile, EngineConfig, PlatformTable, SubMetricSpec};
use crate::model::{
    DimensionScores, Level, Platform, PlatformProfile, PlatformScore, Recommendation,
};
use std::cmp::Reverse;

/// Derives recommendations from scored profiles.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn target(&self) -> u8 {
        self.config.recommendations.target
    }

    /// Build the ranked recommendation list.
    ///
    /// Returns an empty list when `scores` carries `insufficient_data`.
    #[must_use]
    pub fn recommend(
        &self,
        scores: &DimensionScores,
        profiles: &[PlatformProfile],
        platform_scores: &[PlatformScore],
    ) -> Vec<Recommendation> {
        if scores.insufficient_data {
            return Vec::new();
        }

        let target = self.target();
        let mut recommendations = Vec::new();

        for &platform in Platform::all() {
            if !profiles.iter().any(|p| p.platform() == platform) {
                continue;
            }
            let Some(score) = platform_scores.iter().find(|s| s.platform == platform) else {
                continue;
            };
            let Some(table) = self.config.scoring.table(platform) else {
                continue;
            };

            for metric in &table.sub_metrics {
                let Some(current) = score.sub_metric(&metric.name) else {
                    continue;
                };
                if current >= target {
                    continue;
                }
                let action = self.action_profile(&metric.name);
                recommendations.push(Recommendation {
                    priority: 0,
                    platform,
                    sub_metric: metric.name.clone(),
                    action: metric.advice.clone(),
                    impact: action.impact,
                    effort: action.effort,
                    rationale: rationale(table, metric, current, target, scores),
                    current_score: current,
                    potential_score: target,
                });
            }
        }

        // Stable: ties keep platform then table order
        recommendations.sort_by_key(|r| (Reverse(r.impact), r.effort, Reverse(r.gap())));
        for (rank, rec) in recommendations.iter_mut().enumerate() {
            rec.priority = u32::try_from(rank + 1).unwrap_or(u32::MAX);
        }

        tracing::debug!(count = recommendations.len(), "generated recommendations");
        recommendations
    }

    fn action_profile(&self, sub_metric: &str) -> ActionProfile {
        self.config
            .recommendations
            .actions
            .get(sub_metric)
            .copied()
            .unwrap_or_else(|| {
                tracing::warn!(sub_metric, "no action entry, assuming medium impact/effort");
                ActionProfile {
                    impact: Level::Medium,
                    effort: Level::Medium,
                }
            })
    }
}

fn rationale(
    table: &PlatformTable,
    metric: &SubMetricSpec,
    current: u8,
    target: u8,
    scores: &DimensionScores,
) -> String {
    let dimensions = metric
        .dimensions
        .iter()
        .map(|d| format!("{d} ({})", scores.get(*d)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} {} is {current}/100, {} points below the target of {target}; it feeds {dimensions}",
        table.platform,
        metric.name,
        target - current,
    )
}
