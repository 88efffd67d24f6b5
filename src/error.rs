//! Unified error types for footprint-score.
//!
//! Per-platform problems (missing identity, malformed payloads) are not
//! errors: the normalizer reports them as [`NormalizationFailure`] values and
//! the scan carries on without that platform. The variants here cover what
//! can genuinely fail: loading inputs, rendering reports, and configuration.
//!
//! [`NormalizationFailure`]: crate::normalize::NormalizationFailure

use crate::config::ConfigurationError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for footprint-score operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FootprintError {
    /// Errors while reading a scan request or config document
    #[error("Failed to parse input: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Scoring tables or other settings are malformed. Fatal at startup.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Formatting failed: {0}")]
    FormatError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for footprint-score operations
pub type Result<T> = std::result::Result<T, FootprintError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl FootprintError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Whether this error means the process cannot run at all
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for FootprintError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for FootprintError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml_ng::Error> for FootprintError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost-first, so a failure deep inside
/// request loading reads like `"loading request.json: JSON deserialization"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (only evaluated on error).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<FootprintError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: FootprintError, new_ctx: &str) -> FootprintError {
    match err {
        FootprintError::Parse {
            context: existing,
            source,
        } => FootprintError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        FootprintError::Report {
            context: existing,
            source,
        } => FootprintError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        FootprintError::Io {
            path,
            message,
            source,
        } => FootprintError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        FootprintError::Validation(msg) => FootprintError::Validation(chain_context(new_ctx, &msg)),
        // Configuration errors already name the offending fields
        other @ FootprintError::Configuration(_) => other,
    }
}

fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
