//! Config command handlers.
//!
//! `config show|path|init|schema`: inspect, locate, create and describe the
//! configuration file.

use crate::config::{
    discover_config_file, file::search_paths, generate_example_config, generate_json_schema,
    load_or_default,
};
use crate::pipeline::exit_codes;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// File name written by `config init`
const INIT_FILE_NAME: &str = ".footprint-score.yaml";

/// Print the effective configuration (defaults merged with the file) as YAML.
pub fn run_config_show(explicit: Option<&Path>) -> Result<i32> {
    let (config, loaded_from) = load_or_default(explicit).context("loading configuration")?;
    match &loaded_from {
        Some(path) => eprintln!("# Loaded from: {}", path.display()),
        None => eprintln!("# No config file found; showing defaults"),
    }
    let yaml = serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
    print!("{yaml}");
    Ok(exit_codes::SUCCESS)
}

/// Print the config search paths and the file that would be used.
pub fn run_config_path(explicit: Option<&Path>) -> Result<i32> {
    eprintln!("Config file search paths (in order):");
    for path in search_paths() {
        eprintln!("  {}", path.display());
    }
    eprintln!();
    match discover_config_file(explicit) {
        Some(path) => eprintln!("Active config file: {}", path.display()),
        None => eprintln!("No config file found."),
    }
    Ok(exit_codes::SUCCESS)
}

/// Write an example config file into `dir`, refusing to overwrite one.
pub fn run_config_init(dir: &Path) -> Result<PathBuf> {
    let target = dir.join(INIT_FILE_NAME);
    if target.exists() {
        bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }
    std::fs::write(&target, generate_example_config())
        .with_context(|| format!("failed to write {}", target.display()))?;
    eprintln!("Created {}", target.display());
    Ok(target)
}

/// Print the config JSON Schema, or write it to `output`.
pub fn run_config_schema(output: Option<&Path>) -> Result<i32> {
    let schema = generate_json_schema().context("failed to generate schema")?;
    match output {
        Some(path) => {
            std::fs::write(path, &schema)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Schema written to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config_file, AppConfig};
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = run_config_init(dir.path()).unwrap();
        let loaded = load_config_file(&path).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(INIT_FILE_NAME), "behavior:\n  quiet: true\n").unwrap();
        let err = run_config_init(dir.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_schema_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schema.json");
        run_config_schema(Some(&path)).unwrap();
        let schema: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert!(schema["properties"]["scoring"].is_object());
    }
}
