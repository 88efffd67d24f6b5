//! Score structures produced by the scorer and aggregator.

use super::{Dimension, Platform};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bounded score for one platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlatformScore {
    pub platform: Platform,
    /// Composite score (0-100)
    pub value: u8,
    /// Damping factor applied for sparse data (0.5-1.0 with default tables)
    pub completeness_factor: f64,
    /// Sub-metric values (0-100) in table order
    pub sub_metric_breakdown: IndexMap<String, u8>,
}

impl PlatformScore {
    /// Value of one sub-metric, if the platform's table defines it
    #[must_use]
    pub fn sub_metric(&self, name: &str) -> Option<u8> {
        self.sub_metric_breakdown.get(name).copied()
    }
}

/// Overall and per-dimension scores for one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DimensionScores {
    pub overall: u8,
    pub visibility: u8,
    pub activity: u8,
    pub impact: u8,
    pub expertise: u8,
    /// Set when no platform produced a usable profile
    pub insufficient_data: bool,
}

impl DimensionScores {
    /// All-zero scores flagged as insufficient data
    #[must_use]
    pub const fn insufficient() -> Self {
        Self {
            overall: 0,
            visibility: 0,
            activity: 0,
            impact: 0,
            expertise: 0,
            insufficient_data: true,
        }
    }

    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Visibility => self.visibility,
            Dimension::Activity => self.activity,
            Dimension::Impact => self.impact,
            Dimension::Expertise => self.expertise,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: u8) {
        match dimension {
            Dimension::Visibility => self.visibility = value,
            Dimension::Activity => self.activity = value,
            Dimension::Impact => self.impact = value,
            Dimension::Expertise => self.expertise = value,
        }
    }
}

/// Letter grade for the overall footprint score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum FootprintGrade {
    /// Excellent: 90-100
    A,
    /// Good: 80-89
    B,
    /// Fair: 70-79
    C,
    /// Weak: 60-69
    D,
    /// Minimal: <60
    F,
}

impl FootprintGrade {
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::A,
            80..=89 => Self::B,
            70..=79 => Self::C,
            60..=69 => Self::D,
            _ => Self::F,
        }
    }

    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::A => "Excellent",
            Self::B => "Good",
            Self::C => "Fair",
            Self::D => "Weak",
            Self::F => "Minimal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_from_score() {
        assert_eq!(FootprintGrade::from_score(100), FootprintGrade::A);
        assert_eq!(FootprintGrade::from_score(85), FootprintGrade::B);
        assert_eq!(FootprintGrade::from_score(70), FootprintGrade::C);
        assert_eq!(FootprintGrade::from_score(69), FootprintGrade::D);
        assert_eq!(FootprintGrade::from_score(0), FootprintGrade::F);
    }

    #[test]
    fn test_dimension_accessors() {
        let mut scores = DimensionScores::insufficient();
        scores.set(Dimension::Impact, 42);
        assert_eq!(scores.get(Dimension::Impact), 42);
        assert_eq!(scores.get(Dimension::Expertise), 0);
    }

    #[test]
    fn test_insufficient_snapshot() {
        insta::assert_json_snapshot!(DimensionScores::insufficient(), @r###"
        {
          "overall": 0,
          "visibility": 0,
          "activity": 0,
          "impact": 0,
          "expertise": 0,
          "insufficient_data": true
        }
        "###);
    }
}
