use std::env;
use std::fs;
use std::path::PathBuf;

use serial_test::serial;

use kwspot_config::{ConfigError, DatasetSource, KwsConfig, SpectrogramShape};

fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kwspot.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
#[serial]
fn test_from_path_partial_override() {
    let (_dir, path) = write_config(
        r#"
[training]
batch_size = 32

[optimizer]
start_learning_rate = 0.0005
"#,
    );

    let config = KwsConfig::from_path(&path).unwrap();
    assert_eq!(config.training.batch_size, 32);
    assert!((config.optimizer.start_learning_rate - 0.0005).abs() < f64::EPSILON);
    // Everything not named in the file keeps its default.
    assert_eq!(config.audio.sample_rate_hz, 16_000);
    assert_eq!(config.spectrogram.rows, 49);
    assert_eq!(config.training.num_classes, 4);
}

#[test]
#[serial]
fn test_from_path_dataset_source() {
    let (_dir, path) = write_config(
        r#"
[dataset]
source = "PeteWarden"
"#,
    );

    let config = KwsConfig::from_path(&path).unwrap();
    assert_eq!(config.dataset.source, DatasetSource::PeteWarden);
    assert_eq!(config.dataset.source.path(), "../dataset/Pete_Warden_dataset");
}

#[test]
#[serial]
fn test_from_path_rejects_framing_drift() {
    // Tuning the stride without updating the spectrogram shape must not
    // load silently.
    let (_dir, path) = write_config(
        r#"
[audio]
stride_size_ms = 10
"#,
    );

    let err = KwsConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ShapeMismatch { expected_rows: 98, .. }));
}

#[test]
#[serial]
fn test_from_path_accepts_consistent_retuning() {
    let (_dir, path) = write_config(
        r#"
[audio]
stride_size_ms = 10

[spectrogram]
rows = 98
cols = 40
"#,
    );

    let config = KwsConfig::from_path(&path).unwrap();
    assert_eq!(config.spectrogram, SpectrogramShape { rows: 98, cols: 40 });
    assert_eq!(config.spectrogram, SpectrogramShape::derive(&config.audio));
}

#[test]
#[serial]
fn test_from_path_relabeled_classes() {
    let (_dir, path) = write_config(
        r#"
[training]
num_classes = 2
labels = ["go", "stop"]
"#,
    );

    let config = KwsConfig::from_path(&path).unwrap();
    assert_eq!(config.training.labels, vec!["go", "stop"]);
}

#[test]
#[serial]
fn test_from_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = KwsConfig::from_path(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
#[serial]
fn test_load_defaults_without_file() {
    env::remove_var("KWSPOT_TRAINING__BATCH_SIZE");
    let config = KwsConfig::load().unwrap();
    assert_eq!(config.training.batch_size, 8);
    assert_eq!(config.dataset.split.train_ratio, 0.7);
    assert_eq!(config.dataset.split.test_ratio, 0.3);
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let (_dir, path) = write_config(
        r#"
[training]
batch_size = 32
"#,
    );

    env::set_var("KWSPOT_TRAINING__BATCH_SIZE", "64");
    let config = KwsConfig::from_path(&path).unwrap();
    env::remove_var("KWSPOT_TRAINING__BATCH_SIZE");

    assert_eq!(config.training.batch_size, 64);
}

#[test]
#[serial]
fn test_env_invalid_value_fails_deserialization() {
    env::set_var("KWSPOT_TRAINING__BATCH_SIZE", "abc");
    let result = KwsConfig::load();
    env::remove_var("KWSPOT_TRAINING__BATCH_SIZE");

    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
#[serial]
fn test_env_zero_batch_size_fails_validation() {
    env::set_var("KWSPOT_TRAINING__BATCH_SIZE", "0");
    let result = KwsConfig::load();
    env::remove_var("KWSPOT_TRAINING__BATCH_SIZE");

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { field, .. } if field == "training.batch_size"));
}
