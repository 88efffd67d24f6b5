//! footprint-score: digital-footprint scoring and privacy analysis
//!
//! Scores pre-fetched platform profiles and reports privacy risks and
//! ranked improvement actions.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use footprint_score::{
    cli::{self, ScanCommand},
    config::{AppConfig, BehaviorConfig, ConfigPreset, OutputConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with scoring info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nPlatforms:",
        "\n  github, stackexchange, professional_network",
        "\n\nOutput Formats:",
        "\n  json, summary, markdown"
    )
}

#[derive(Parser)]
#[command(name = "footprint-score")]
#[command(version, long_version = build_long_version())]
#[command(about = "Digital-footprint scoring and privacy analysis", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  A scan's overall score is below --min-score
    2  Invalid configuration or scoring tables
    3  Error occurred

EXAMPLES:
    # Score one request with a terminal summary
    footprint-score scan request.json

    # Batch scan for CI, failing below 60
    footprint-score scan requests/*.json -o json --min-score 60

    # Reproducible output for a fixed timestamp
    footprint-score scan request.json --scanned-at 2026-01-01T00:00:00Z")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "FOOTPRINT_SCORE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `scan` subcommand
#[derive(Parser)]
struct ScanArgs {
    /// Scan request files (JSON)
    #[arg(required = true)]
    requests: Vec<PathBuf>,

    /// Output format (auto: summary on a terminal, json otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if any overall score is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,

    /// Timestamp recorded on every scan (RFC 3339); defaults to now
    #[arg(long, value_parser = cli::parse_timestamp)]
    scanned_at: Option<DateTime<Utc>>,

    /// Scoring preset (default, strict, lenient)
    #[arg(long, value_parser = cli::parse_preset)]
    preset: Option<ConfigPreset>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one or more scan requests
    Scan(ScanArgs),

    /// Show, discover, initialize or describe configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .footprint-score.yaml in the current directory
    Init,
    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            cli::exit_code_for(&err)
        }
    };
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Scan(args) => {
            let overrides = AppConfig {
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                behavior: BehaviorConfig {
                    quiet: cli.quiet,
                    min_score: args.min_score,
                },
                ..AppConfig::default()
            };
            cli::run_scan(ScanCommand {
                requests: args.requests,
                config_path: cli.config,
                preset: args.preset,
                overrides,
                scanned_at: args.scanned_at,
            })
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => cli::run_config_show(cli.config.as_deref()),
            ConfigAction::Path => cli::run_config_path(cli.config.as_deref()),
            ConfigAction::Init => {
                let cwd = std::env::current_dir().context("cannot determine current directory")?;
                cli::run_config_init(&cwd)?;
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Schema { output } => cli::run_config_schema(output.as_deref()),
        },

        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "footprint-score",
                &mut io::stdout(),
            );
            Ok(exit_codes::SUCCESS)
        }
    }
}
