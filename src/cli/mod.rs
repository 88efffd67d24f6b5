//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod config;
mod scan;

pub use config::{run_config_init, run_config_path, run_config_schema, run_config_show};
pub use scan::{parse_preset, parse_timestamp, run_scan, ScanCommand};

use crate::config::{ConfigFileError, ConfigurationError};
use crate::pipeline::exit_codes;

/// Map a failed command to its exit code.
///
/// Invalid tables and unreadable config files get their own code so CI can
/// tell a broken deployment from a broken request.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    let is_config = err
        .chain()
        .any(|e| e.is::<ConfigurationError>() || e.is::<ConfigFileError>());
    if is_config {
        exit_codes::CONFIG_ERROR
    } else {
        exit_codes::ERROR
    }
}
