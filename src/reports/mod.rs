//! Report generation for footprint scans.
//!
//! Output formats:
//! - JSON: the full scan records for programmatic integration
//! - Summary: compact terminal output, colored by grade
//! - Markdown: human-readable documentation
//!
//! # Security
//!
//! Profile text is user-controlled. The `escape` module must be used before
//! embedding any of it in Markdown.

pub mod escape;
mod json;
mod markdown;
mod summary;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;

use crate::model::FootprintScan;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Summary on a terminal, JSON otherwise
    #[default]
    Auto,
    /// Full scan records as JSON
    Json,
    /// Brief terminal summary
    Summary,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<ReportError> for crate::error::FootprintError {
    fn from(err: ReportError) -> Self {
        use crate::error::ReportErrorKind;
        let kind = match err {
            ReportError::SerializationError(message) => {
                ReportErrorKind::JsonSerializationError(message)
            }
            other => ReportErrorKind::FormatError(other.to_string()),
        };
        Self::report("rendering scan report", kind)
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render one or more scans
    fn generate(&self, scans: &[FootprintScan]) -> Result<String, ReportError>;

    /// Write the rendered report to a writer
    fn write_to(&self, scans: &[FootprintScan], writer: &mut dyn Write) -> Result<(), ReportError> {
        let report = self.generate(scans)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator with color control.
///
/// `Auto` should be resolved by the caller first; here it falls back to
/// the summary.
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator + Send + Sync> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

/// Create a report generator with colors enabled
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator + Send + Sync> {
    create_reporter_with_options(format, true)
}

/// A small but complete scan for reporter tests
#[cfg(test)]
pub(crate) fn sample_scan() -> FootprintScan {
    use crate::config::EngineConfig;
    use crate::model::Platform;
    use crate::pipeline::{PlatformInput, ScanOrchestrator, ScanRequest};
    use serde_json::json;

    let request = ScanRequest::new()
        .with_user_ref("user-7")
        .with_platform(
            Platform::GitHub,
            PlatformInput::payload(json!({
                "login": "octo|cat",
                "email": "octo@example.com",
                "location": "Austin, TX 78701",
                "public_repos": 12,
                "followers": 250,
                "following": 3,
                "total_stars": 1000,
                "total_forks": 40,
                "commits_last_year": 500,
                "active_weeks": 26,
                "languages": ["Rust"]
            })),
        )
        .with_platform(
            Platform::StackExchange,
            PlatformInput::FetchFailed {
                reason: Some("HTTP 503".to_string()),
            },
        );
    let scanned_at = chrono::DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    ScanOrchestrator::new(EngineConfig::default())
        .unwrap()
        .run(&request, scanned_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&ReportFormat::Markdown).unwrap(),
            "\"markdown\""
        );
        let parsed: ReportFormat = serde_json::from_str("\"summary\"").unwrap();
        assert_eq!(parsed, ReportFormat::Summary);
    }

    #[test]
    fn test_display_matches_value_names() {
        for format in ReportFormat::value_variants() {
            let value = format.to_possible_value().unwrap();
            assert_eq!(value.get_name(), format.to_string());
        }
    }

    #[test]
    fn test_write_to_writer() {
        let mut buf = Vec::new();
        create_reporter(ReportFormat::Json)
            .write_to(&[sample_scan()], &mut buf)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["scans"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_factory_formats() {
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
        assert_eq!(
            create_reporter(ReportFormat::Markdown).format(),
            ReportFormat::Markdown
        );
        assert_eq!(
            create_reporter_with_options(ReportFormat::Auto, false).format(),
            ReportFormat::Summary
        );
    }
}
