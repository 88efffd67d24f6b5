//! Cross-platform aggregation into overall and dimension scores.

use super::clamp_score;
use crate::config::{PlatformTable, ScoringConfig};
use crate::model::{Dimension, DimensionScores, PlatformScore};

/// Combines per-platform scores using platform weights.
///
/// Only platforms that were actually scored take part: their weights are
/// renormalized over what is present, so a missing platform never counts
/// as a zero.
#[derive(Debug, Clone)]
pub struct DimensionAggregator {
    config: ScoringConfig,
}

/// Running weighted mean
#[derive(Debug, Default, Clone, Copy)]
struct WeightedMean {
    sum: f64,
    weight: f64,
}

impl WeightedMean {
    fn add(&mut self, value: u8, weight: f64) {
        self.sum += weight * f64::from(value);
        self.weight += weight;
    }

    fn value(self) -> u8 {
        if self.weight > 0.0 {
            clamp_score(self.sum / self.weight)
        } else {
            0
        }
    }
}

impl DimensionAggregator {
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Aggregate whichever platform scores are present
    #[must_use]
    pub fn aggregate(&self, scores: &[PlatformScore]) -> DimensionScores {
        let scored: Vec<(&PlatformScore, &PlatformTable)> = scores
            .iter()
            .filter_map(|score| match self.config.table(score.platform) {
                Some(table) => Some((score, table)),
                None => {
                    tracing::warn!(
                        platform = score.platform.tag(),
                        "ignoring score for platform without a scoring table"
                    );
                    None
                }
            })
            .collect();

        if scored.is_empty() {
            tracing::debug!("no platform scores available, insufficient data");
            return DimensionScores::insufficient();
        }

        let mut overall = WeightedMean::default();
        for (score, table) in &scored {
            overall.add(score.value, table.weight);
        }

        let mut result = DimensionScores::insufficient();
        result.insufficient_data = false;
        result.overall = overall.value();

        for dimension in Dimension::all() {
            let mut mean = WeightedMean::default();
            for (score, table) in &scored {
                for metric in table
                    .sub_metrics
                    .iter()
                    .filter(|m| m.dimensions.contains(dimension))
                {
                    if let Some(value) = score.sub_metric(&metric.name) {
                        mean.add(value, table.weight * metric.weight);
                    }
                }
            }
            result.set(*dimension, mean.value());
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Platform;
    use indexmap::IndexMap;

    fn aggregator() -> DimensionAggregator {
        DimensionAggregator::new(ScoringConfig::default())
    }

    fn score(platform: Platform, value: u8, breakdown: &[(&str, u8)]) -> PlatformScore {
        PlatformScore {
            platform,
            value,
            completeness_factor: 1.0,
            sub_metric_breakdown: breakdown
                .iter()
                .map(|(name, v)| ((*name).to_string(), *v))
                .collect::<IndexMap<_, _>>(),
        }
    }

    #[test]
    fn test_single_platform_overall_equals_its_score() {
        let scores = [score(
            Platform::StackExchange,
            80,
            &[("reputation", 80), ("expertise", 80), ("engagement", 80), ("reach", 80)],
        )];
        let result = aggregator().aggregate(&scores);
        assert_eq!(result.overall, 80);
        assert!(!result.insufficient_data);
    }

    #[test]
    fn test_empty_input_is_insufficient() {
        let result = aggregator().aggregate(&[]);
        assert!(result.insufficient_data);
        assert_eq!(result, DimensionScores::insufficient());
    }

    #[test]
    fn test_overall_renormalizes_platform_weights() {
        // github 0.40, stackexchange 0.30 -> (0.4*100 + 0.3*30) / 0.7 = 70
        let scores = [
            score(Platform::GitHub, 100, &[]),
            score(Platform::StackExchange, 30, &[]),
        ];
        assert_eq!(aggregator().aggregate(&scores).overall, 70);
    }

    #[test]
    fn test_dimension_without_contributors_is_zero() {
        // professional network feeds no activity when only `profile` is known
        let scores = [score(Platform::ProfessionalNetwork, 30, &[("profile", 100)])];
        let result = aggregator().aggregate(&scores);
        assert_eq!(result.visibility, 100);
        assert_eq!(result.activity, 0);
        assert_eq!(result.expertise, 0);
    }

    #[test]
    fn test_dimension_weighting_across_platforms() {
        let scores = [
            score(
                Platform::GitHub,
                0,
                &[("activity", 100), ("impact", 0), ("quality", 0), ("consistency", 0)],
            ),
            score(
                Platform::StackExchange,
                0,
                &[("reputation", 0), ("expertise", 0), ("engagement", 0), ("reach", 0)],
            ),
        ];
        // activity: gh activity 0.4*0.3, gh consistency 0.4*0.2, se engagement 0.3*0.2
        // = 0.12*100 / (0.12 + 0.08 + 0.06) = 46.15
        assert_eq!(aggregator().aggregate(&scores).activity, 46);
    }

    #[test]
    fn test_platform_without_table_is_ignored() {
        let mut config = ScoringConfig::default();
        config.platforms.retain(|t| t.platform != Platform::GitHub);
        let scores = [score(Platform::GitHub, 90, &[])];
        let result = DimensionAggregator::new(config).aggregate(&scores);
        assert!(result.insufficient_data);
    }
}
