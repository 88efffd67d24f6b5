//! Platform payload normalization.
//!
//! Converts one already-fetched, loosely-shaped platform payload into the
//! canonical [`PlatformProfile`] for that platform. Sparse payloads are
//! accepted and flagged through `completeness`; payloads that cannot be
//! attributed to an account are rejected with a [`NormalizationFailure`],
//! which excludes the platform from scoring.

mod github;
mod professional;
mod reader;
mod stackexchange;

use crate::model::{Platform, PlatformProfile, UnavailableReason};
use serde_json::Value;
use thiserror::Error;

/// Why a payload could not be normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Object payload without the identity field
    Incomplete,
    /// Payload is not a JSON object
    Malformed,
}

impl From<FailureReason> for UnavailableReason {
    fn from(reason: FailureReason) -> Self {
        match reason {
            FailureReason::Incomplete => Self::Incomplete,
            FailureReason::Malformed => Self::Malformed,
        }
    }
}

/// Per-platform, non-fatal normalization failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{platform} payload rejected ({reason:?}): {detail}")]
pub struct NormalizationFailure {
    pub platform: Platform,
    pub reason: FailureReason,
    pub detail: String,
}

impl NormalizationFailure {
    pub(crate) fn malformed(platform: Platform, found: &Value) -> Self {
        Self {
            platform,
            reason: FailureReason::Malformed,
            detail: format!("expected a JSON object, found {}", json_type(found)),
        }
    }

    pub(crate) fn missing_identity(platform: Platform, keys: &[&str]) -> Self {
        Self {
            platform,
            reason: FailureReason::Incomplete,
            detail: format!("missing identity field ({})", keys.join(" or ")),
        }
    }
}

/// Normalize a raw payload for `platform` into its canonical profile.
pub fn normalize(
    platform: Platform,
    payload: &Value,
) -> Result<PlatformProfile, NormalizationFailure> {
    let Some(map) = payload.as_object() else {
        return Err(NormalizationFailure::malformed(platform, payload));
    };

    let profile = match platform {
        Platform::GitHub => github::normalize(map).map(PlatformProfile::GitHub),
        Platform::StackExchange => {
            stackexchange::normalize(map).map(PlatformProfile::StackExchange)
        }
        Platform::ProfessionalNetwork => {
            professional::normalize(map).map(PlatformProfile::ProfessionalNetwork)
        }
    }?;

    tracing::debug!(
        platform = platform.tag(),
        identity = profile.identity(),
        completeness = profile.completeness(),
        "normalized platform payload"
    );
    Ok(profile)
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_payloads_are_malformed() {
        for payload in [json!(null), json!("octocat"), json!([1, 2]), json!(3)] {
            let err = normalize(Platform::GitHub, &payload).unwrap_err();
            assert_eq!(err.reason, FailureReason::Malformed);
            assert_eq!(err.platform, Platform::GitHub);
        }
    }

    #[test]
    fn test_missing_identity_is_incomplete_for_every_platform() {
        for platform in Platform::all() {
            let err = normalize(*platform, &json!({"followers": 10})).unwrap_err();
            assert_eq!(err.reason, FailureReason::Incomplete, "{platform}");
        }
    }

    #[test]
    fn test_failure_reason_maps_to_unavailable_reason() {
        assert_eq!(
            UnavailableReason::from(FailureReason::Malformed),
            UnavailableReason::Malformed
        );
        assert_eq!(
            UnavailableReason::from(FailureReason::Incomplete),
            UnavailableReason::Incomplete
        );
    }

    #[test]
    fn test_failure_message_names_the_platform() {
        let err = normalize(Platform::StackExchange, &json!({})).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Stack Exchange"));
        assert!(message.contains("user_id or account_id"));
    }
}
