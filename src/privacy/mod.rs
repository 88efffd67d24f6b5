//! Privacy exposure analysis.
//!
//! Inspects canonical profiles for publicly exposed personal data and
//! produces an ordered [`PrivacyReport`]. Findings keep evaluation order
//! (platform order, then rule order); the aggregate [`RiskLevel`] is derived
//! from them afterwards.

mod rules;

use crate::model::{PlatformProfile, PrivacyReport, PrivacyRisk, RiskCategory, RiskLevel, Severity};

pub use rules::{looks_like_secret, PrivacyRule, RULES};

/// Runs the built-in privacy rules over a set of profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrivacyAnalyzer;

impl PrivacyAnalyzer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Analyze profiles in the order given
    #[must_use]
    pub fn analyze(&self, profiles: &[PlatformProfile]) -> PrivacyReport {
        let mut risks = Vec::new();

        for profile in profiles {
            let platform = profile.platform();
            let fields = profile.exposed_fields();
            for rule in RULES {
                if let Some(description) = rule.evaluate(&fields, platform) {
                    tracing::debug!(platform = platform.tag(), rule = rule.id, "privacy rule fired");
                    risks.push(PrivacyRisk {
                        rule: rule.id.to_string(),
                        category: rule.category,
                        severity: rule.severity,
                        platform,
                        description,
                        recommendation: rule.recommendation.to_string(),
                    });
                }
            }
        }

        let risk_level = risk_level(&risks);
        PrivacyReport { risks, risk_level }
    }
}

/// Derive the aggregate level.
///
/// Precedence: any credential exposure is critical; otherwise any high
/// finding is high; two or more medium findings are medium; anything else
/// (including no findings) is low.
#[must_use]
pub fn risk_level(risks: &[PrivacyRisk]) -> RiskLevel {
    if risks
        .iter()
        .any(|r| r.category == RiskCategory::CredentialExposure)
    {
        return RiskLevel::Critical;
    }
    if risks.iter().any(|r| r.severity == Severity::High) {
        return RiskLevel::High;
    }
    let medium = risks
        .iter()
        .filter(|r| r.severity == Severity::Medium)
        .count();
    if medium >= 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
