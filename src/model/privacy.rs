//! Privacy exposure findings.

use super::Platform;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity of a single privacy finding
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Aggregate exposure level of a privacy report
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    /// Exposed secrets or credentials
    Critical,
}

impl RiskLevel {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// What kind of information a finding exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    ContactExposure,
    LocationExposure,
    CredentialExposure,
    PersonalDetails,
    IdentityCorrelation,
}

impl RiskCategory {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ContactExposure => "Contact Exposure",
            Self::LocationExposure => "Location Exposure",
            Self::CredentialExposure => "Credential Exposure",
            Self::PersonalDetails => "Personal Details",
            Self::IdentityCorrelation => "Identity Correlation",
        }
    }
}

/// One triggered privacy rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PrivacyRisk {
    /// Identifier of the rule that fired
    pub rule: String,
    pub category: RiskCategory,
    pub severity: Severity,
    pub platform: Platform,
    pub description: String,
    pub recommendation: String,
}

/// Ordered findings plus the derived risk level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PrivacyReport {
    /// Findings in rule-evaluation order
    pub risks: Vec<PrivacyRisk>,
    pub risk_level: RiskLevel,
}

impl PrivacyReport {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            risks: Vec::new(),
            risk_level: RiskLevel::Low,
        }
    }

    #[must_use]
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.risks.iter().filter(|r| r.severity == severity).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&RiskLevel::Critical).unwrap(),
            "\"critical\""
        );
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Critical > RiskLevel::High);
        assert!(RiskLevel::Medium > RiskLevel::Low);
    }
}
