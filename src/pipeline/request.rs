//! Scan request documents.
//!
//! A request maps platform tags to what the external fetcher produced for
//! that platform:
//!
//! ```json
//! {
//!   "user_ref": "user-42",
//!   "platforms": {
//!     "github": {"status": "ok", "payload": {"login": "octocat"}},
//!     "stackexchange": {"status": "fetch_failed", "reason": "HTTP 503"},
//!     "professional_network": {"status": "not_configured"}
//!   }
//! }
//! ```
//!
//! A bare object without `status` is taken as the payload itself. So is an
//! object whose `status` is not one of the envelope values and which has no
//! `payload` key, since platform payloads may carry their own `status`
//! field. An envelope with an unrecognized status is a failed fetch.

use crate::error::{ErrorContext, FootprintError, Result};
use crate::model::Platform;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Fetcher outcome for one platform
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlatformInput {
    /// Raw payload as returned by the fetcher
    #[serde(rename = "ok")]
    Fetched { payload: Value },
    /// The user never linked this platform
    NotConfigured,
    /// The fetcher gave up on this platform
    FetchFailed {
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

impl<'de> Deserialize<'de> for PlatformInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let status = value.get("status").and_then(Value::as_str);
        match status {
            Some("ok") => Ok(Self::Fetched {
                payload: value.get("payload").cloned().unwrap_or(Value::Null),
            }),
            Some("not_configured") => Ok(Self::NotConfigured),
            Some("fetch_failed") => Ok(Self::FetchFailed {
                reason: value
                    .get("reason")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
            Some(other) if value.get("payload").is_some() => {
                tracing::warn!(status = other, "unrecognized platform status");
                Ok(Self::FetchFailed {
                    reason: Some(format!("unrecognized status '{other}'")),
                })
            }
            _ => Ok(Self::Fetched { payload: value }),
        }
    }
}

impl PlatformInput {
    /// Shorthand for a successfully fetched payload
    #[must_use]
    pub const fn payload(payload: Value) -> Self {
        Self::Fetched { payload }
    }
}

/// One user's scan input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ref: Option<String>,
    #[serde(default, deserialize_with = "unique_platforms")]
    pub platforms: BTreeMap<Platform, PlatformInput>,
}

/// Platform map that rejects a platform listed twice, e.g. under an alias
/// and under its canonical tag.
fn unique_platforms<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<Platform, PlatformInput>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PlatformsVisitor;

    impl<'de> de::Visitor<'de> for PlatformsVisitor {
        type Value = BTreeMap<Platform, PlatformInput>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of platform tags to platform inputs")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: de::MapAccess<'de>,
        {
            let mut platforms = BTreeMap::new();
            while let Some((platform, input)) = map.next_entry::<Platform, PlatformInput>()? {
                if platforms.insert(platform, input).is_some() {
                    return Err(de::Error::custom(format_args!(
                        "platform '{}' is listed more than once",
                        platform.tag()
                    )));
                }
            }
            Ok(platforms)
        }
    }

    deserializer.deserialize_map(PlatformsVisitor)
}

impl ScanRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_user_ref(mut self, user_ref: impl Into<String>) -> Self {
        self.user_ref = Some(user_ref.into());
        self
    }

    /// Add (or replace) the input for one platform
    #[must_use]
    pub fn with_platform(mut self, platform: Platform, input: PlatformInput) -> Self {
        self.platforms.insert(platform, input);
        self
    }

    /// Parse a request from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("scan request")
    }
}

/// Read and parse a scan request file
pub fn load_scan_request(path: &Path) -> Result<ScanRequest> {
    let content =
        std::fs::read_to_string(path).map_err(|e| FootprintError::io(path, e))?;
    if content.trim().is_empty() {
        return Err(FootprintError::validation(format!(
            "scan request {} is empty",
            path.display()
        )));
    }
    ScanRequest::from_json(&content).with_context(|| format!("loading {}", path.display()))
}
