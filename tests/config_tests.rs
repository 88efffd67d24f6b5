//! Configuration loading, validation and preset tests.

use footprint_score::config::{
    load_config_file, load_or_default, AppConfig, ConfigPreset, EngineConfig, Validatable,
};
use footprint_score::model::{Dimension, Platform};
use footprint_score::pipeline::{PlatformInput, ScanOrchestrator, ScanRequest};
use serde_json::json;
use tempfile::TempDir;

fn write_config(dir: &TempDir, yaml: &str) -> std::path::PathBuf {
    let path = dir.path().join(".footprint-score.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn default_tables_are_valid() {
    let config = AppConfig::default();
    assert!(config.is_valid(), "{:?}", config.validate());
    assert_eq!(config.scoring.platforms.len(), Platform::all().len());
}

#[test]
fn every_preset_is_valid() {
    for preset in ConfigPreset::all() {
        let config = AppConfig::from_preset(*preset);
        assert!(config.is_valid(), "preset {preset} invalid");
    }
    assert_eq!(AppConfig::from_preset(ConfigPreset::Strict).recommendations.target, 90);
    let lenient = AppConfig::from_preset(ConfigPreset::Lenient);
    assert_eq!(lenient.recommendations.target, 70);
    assert!((lenient.scoring.completeness_floor - 0.6).abs() < f64::EPSILON);
}

#[test]
fn weights_not_summing_to_one_are_rejected_at_construction() {
    let mut engine = EngineConfig::default();
    engine.scoring.platforms[0].sub_metrics[0].weight = 0.9;

    let err = ScanOrchestrator::new(engine).unwrap_err();
    assert!(err
        .errors
        .iter()
        .any(|e| e.field.starts_with("scoring.platforms[0]")));
}

#[test]
fn every_problem_is_reported_at_once() {
    let mut engine = EngineConfig::default();
    engine.scoring.platforms[1].sub_metrics[0].reference_threshold = 0.0;
    engine.scoring.platforms[2].sub_metrics[0].dimensions.clear();
    engine.recommendations.actions.shift_remove("reach");
    engine.recommendations.target = 0;

    let errors = engine.validate();
    assert!(errors.len() >= 4, "{errors:?}");
}

#[test]
fn yaml_file_overrides_tables() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r"
scoring:
  completeness_floor: 0.75
recommendations:
  target: 60
behavior:
  min_score: 30
",
    );

    let (config, loaded_from) = load_or_default(Some(&path)).unwrap();
    assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
    assert!((config.scoring.completeness_floor - 0.75).abs() < f64::EPSILON);
    assert_eq!(config.recommendations.target, 60);
    assert_eq!(config.behavior.min_score, Some(30));
    assert!(config.is_valid());
}

#[test]
fn custom_table_changes_scoring() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    let github = config
        .scoring
        .platforms
        .iter_mut()
        .find(|t| t.platform == Platform::GitHub)
        .unwrap();
    for metric in &mut github.sub_metrics {
        if metric.name == "activity" {
            metric.reference_threshold = 100.0;
        }
    }
    let path = write_config(&dir, &serde_yaml_ng::to_string(&config).unwrap());

    let loaded = load_config_file(&path).unwrap();
    let orchestrator = ScanOrchestrator::new(loaded.engine()).unwrap();
    let request = ScanRequest::new().with_platform(
        Platform::GitHub,
        PlatformInput::payload(json!({"login": "tuned", "commits_last_year": 100})),
    );
    let scan = orchestrator.run(&request, chrono::DateTime::<chrono::Utc>::UNIX_EPOCH);
    let github = scan.result_for(Platform::GitHub).unwrap();
    assert_eq!(github.score.sub_metric("activity"), Some(100));
}

#[test]
fn json_schema_describes_config() {
    let schema = footprint_score::config::generate_json_schema().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
    for section in ["scoring", "recommendations", "output", "behavior"] {
        assert!(value["properties"][section].is_object(), "missing {section}");
    }
}

#[test]
fn dimension_mapping_covers_every_dimension() {
    let config = AppConfig::default();
    for dimension in Dimension::all() {
        let fed = config
            .scoring
            .platforms
            .iter()
            .flat_map(|t| &t.sub_metrics)
            .any(|m| m.dimensions.contains(dimension));
        assert!(fed, "{dimension} has no contributing sub-metric");
    }
}
