//! Scan command handler.
//!
//! Implements the `scan` subcommand: score one or more request files against
//! a single validated set of tables.

use crate::config::{load_or_default, AppConfig, ConfigPreset, Validatable};
use crate::model::FootprintScan;
use crate::pipeline::{
    auto_detect_format, exit_codes, load_scan_request, should_use_color, write_output,
    OutputTarget, ScanOrchestrator,
};
use crate::reports::{create_reporter_with_options, ReportFormat};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::path::PathBuf;

/// Everything the `scan` subcommand was asked to do
#[derive(Debug, Clone, Default)]
pub struct ScanCommand {
    /// Scan request files
    pub requests: Vec<PathBuf>,
    /// Explicit config file (otherwise discovered)
    pub config_path: Option<PathBuf>,
    /// Replaces the scoring and recommendation tables of the loaded config
    pub preset: Option<ConfigPreset>,
    /// CLI-level settings merged over the loaded config
    pub overrides: AppConfig,
    /// Timestamp recorded on every scan; now if unset
    pub scanned_at: Option<DateTime<Utc>>,
}

/// Parse an RFC 3339 `--scanned-at` value
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

/// Parse a `--preset` name
pub fn parse_preset(value: &str) -> Result<ConfigPreset, String> {
    ConfigPreset::from_name(value).ok_or_else(|| {
        let known: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
        format!("unknown preset '{value}' (expected one of: {})", known.join(", "))
    })
}

/// Run the scan command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_scan(command: ScanCommand) -> Result<i32> {
    let config = resolve_config(&command)?;
    config.ensure_valid().context("configuration rejected")?;

    let orchestrator =
        ScanOrchestrator::new(config.engine()).context("scoring tables rejected")?;
    let scanned_at = command.scanned_at.unwrap_or_else(Utc::now);

    tracing::debug!("Scanning {} request(s)", command.requests.len());
    let scans = command
        .requests
        .par_iter()
        .map(|path| -> Result<FootprintScan> {
            let request = load_scan_request(path)?;
            Ok(orchestrator.run(&request, scanned_at))
        })
        .collect::<Result<Vec<FootprintScan>>>()?;

    let target = OutputTarget::from_option(config.output.file.clone());
    let format = auto_detect_format(config.output.format, &target);
    let use_color = format == ReportFormat::Summary
        && target.is_terminal()
        && should_use_color(config.output.no_color);
    let reporter = create_reporter_with_options(format, use_color);
    let rendered = reporter
        .generate(&scans)
        .with_context(|| format!("rendering {format} report"))?;
    write_output(&rendered, &target, config.behavior.quiet)?;

    Ok(min_score_exit_code(&scans, config.behavior.min_score))
}

/// Load the config file, apply the preset, then the CLI overrides
fn resolve_config(command: &ScanCommand) -> Result<AppConfig> {
    let (mut config, loaded_from) =
        load_or_default(command.config_path.as_deref()).context("loading configuration")?;
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }

    if let Some(preset) = command.preset {
        let preset_config = AppConfig::from_preset(preset);
        config.scoring = preset_config.scoring;
        config.recommendations = preset_config.recommendations;
    }

    config.merge(&command.overrides);
    Ok(config)
}

fn min_score_exit_code(scans: &[FootprintScan], min_score: Option<u8>) -> i32 {
    let Some(min) = min_score else {
        return exit_codes::SUCCESS;
    };
    let below: Vec<&FootprintScan> = scans.iter().filter(|s| s.scores.overall < min).collect();
    if below.is_empty() {
        return exit_codes::SUCCESS;
    }
    for scan in &below {
        tracing::warn!(
            "Overall score {} is below the minimum of {min} ({})",
            scan.scores.overall,
            scan.user_ref.as_deref().unwrap_or("unnamed scan")
        );
    }
    exit_codes::BELOW_MIN_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_request(dir: &TempDir, name: &str, followers: u64) -> PathBuf {
        let path = dir.path().join(name);
        let request = json!({
            "user_ref": name,
            "platforms": {
                "github": {
                    "login": "octocat",
                    "public_repos": 8,
                    "followers": followers,
                    "following": 1,
                    "total_stars": 40,
                    "total_forks": 2,
                    "commits_last_year": 120,
                    "active_weeks": 20,
                    "languages": ["Rust", "Go"]
                }
            }
        });
        std::fs::write(&path, request.to_string()).unwrap();
        path
    }

    fn command(dir: &TempDir, requests: Vec<PathBuf>) -> ScanCommand {
        // An explicit, empty config keeps discovery away from the developer's files
        let config_path = dir.path().join("footprint-score.yaml");
        std::fs::write(&config_path, "{}\n").unwrap();
        ScanCommand {
            requests,
            config_path: Some(config_path),
            overrides: AppConfig {
                output: OutputConfig {
                    format: ReportFormat::Json,
                    file: Some(dir.path().join("report.json")),
                    no_color: true,
                },
                ..AppConfig::default()
            },
            scanned_at: Some(parse_timestamp("2026-01-15T08:00:00Z").unwrap()),
            ..ScanCommand::default()
        }
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2026-01-15T09:00:00+01:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-01-15T08:00:00+00:00");
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_parse_preset() {
        assert_eq!(parse_preset("Strict").unwrap(), ConfigPreset::Strict);
        let err = parse_preset("paranoid").unwrap_err();
        assert!(err.contains("default, strict, lenient"));
    }

    #[test]
    fn test_scan_writes_one_record_per_request() {
        let dir = TempDir::new().unwrap();
        let first = write_request(&dir, "first.json", 100);
        let second = write_request(&dir, "second.json", 5);
        let code = run_scan(command(&dir, vec![first, second])).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let report = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        let scans = value["scans"].as_array().unwrap();
        assert_eq!(scans.len(), 2);
        assert_eq!(scans[0]["user_ref"], "first.json");
        assert_eq!(scans[1]["user_ref"], "second.json");
        assert_eq!(scans[0]["scanned_at"], "2026-01-15T08:00:00Z");
    }

    #[test]
    fn test_min_score_gate() {
        let dir = TempDir::new().unwrap();
        let request = write_request(&dir, "low.json", 0);
        let mut cmd = command(&dir, vec![request]);
        cmd.overrides.behavior.min_score = Some(95);
        assert_eq!(run_scan(cmd).unwrap(), exit_codes::BELOW_MIN_SCORE);
    }

    #[test]
    fn test_missing_request_is_an_error() {
        let dir = TempDir::new().unwrap();
        let cmd = command(&dir, vec![dir.path().join("nope.json")]);
        let err = run_scan(cmd).unwrap_err();
        assert_eq!(crate::cli::exit_code_for(&err), exit_codes::ERROR);
    }

    #[test]
    fn test_invalid_tables_exit_with_config_error() {
        let dir = TempDir::new().unwrap();
        let request = write_request(&dir, "r.json", 10);
        let mut cmd = command(&dir, vec![request]);
        let bad_config = dir.path().join("bad.yaml");
        std::fs::write(&bad_config, "recommendations:\n  target: 0\n").unwrap();
        cmd.config_path = Some(bad_config);
        let err = run_scan(cmd).unwrap_err();
        assert_eq!(crate::cli::exit_code_for(&err), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn test_preset_replaces_tables() {
        let dir = TempDir::new().unwrap();
        let cmd = ScanCommand {
            preset: Some(ConfigPreset::Lenient),
            ..command(&dir, Vec::new())
        };
        let config = resolve_config(&cmd).unwrap();
        assert_eq!(config.recommendations.target, 70);
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_min_score_exit_code_without_gate() {
        assert_eq!(min_score_exit_code(&[], None), exit_codes::SUCCESS);
        assert_eq!(min_score_exit_code(&[], Some(100)), exit_codes::SUCCESS);
    }
}
