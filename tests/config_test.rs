//! Integration tests for Settings loading from an explicit config file.
//!
//! A global config on the machine running the tests would sit below the
//! explicit file, so assertions only cover fields the file sets.

use std::fs;

use tempfile::TempDir;

use treeviz::application::ApplicationError;
use treeviz::config::{OutputFormat, Settings};
use treeviz::domain::HeapStrategy;

#[test]
fn given_config_file_when_load_then_overrides_specified_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treeviz.toml");
    fs::write(
        &path,
        r#"
format = "json"
heap_strategy = "sift-down"
show_indices = false
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.format, OutputFormat::Json);
    assert_eq!(settings.heap_strategy, HeapStrategy::SiftDown);
    assert!(!settings.show_indices);
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "format = [").unwrap();

    let result = Settings::load(Some(&path));
    match result {
        Err(ApplicationError::Config { message }) => assert!(message.contains("parse")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn given_unknown_strategy_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treeviz.toml");
    fs::write(&path, r#"heap_strategy = "bubble""#).unwrap();

    assert!(matches!(
        Settings::load(Some(&path)),
        Err(ApplicationError::Config { .. })
    ));
}

#[test]
fn given_missing_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let result = Settings::load(Some(&dir.path().join("absent.toml")));
    match result {
        Err(ApplicationError::Config { message }) => assert!(message.contains("read")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn given_settings_when_serialized_then_template_keys_match() {
    let toml = Settings::default().to_toml().unwrap();
    for key in ["format", "heap_strategy", "color", "show_indices"] {
        assert!(toml.contains(key), "missing {}", key);
        assert!(Settings::template().contains(key), "template missing {}", key);
    }
}
