//! Configuration system tests
//!
//! Tests for config paths and settings loading.

use std::path::PathBuf;

use linkchord::config_paths;
use linkchord::editor::Placeholders;
use linkchord::Settings;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("linkchord"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_storage_file_is_in_config_dir() {
    let config = config_paths::config_dir().unwrap();
    let storage = config_paths::storage_file().unwrap();
    assert!(storage.starts_with(&config));
    assert!(storage.to_string_lossy().ends_with("storage.json"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

#[test]
fn test_ensure_logs_dir_creates_logs_dir() {
    let created = config_paths::ensure_logs_dir().unwrap();
    assert_eq!(Some(created.clone()), config_paths::logs_dir());
    assert!(created.is_dir());
}

// ========================================================================
// Settings Tests
// ========================================================================

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert!(settings.open_links);
    assert_eq!(settings.link_placeholder, "Type shortcut link");
    assert_eq!(settings.chord_placeholder, "Press");
}

#[test]
fn test_default_storage_file_without_override() {
    let settings = Settings::default();
    assert_eq!(settings.storage_file(), config_paths::storage_file());
}

#[test]
fn test_settings_yaml_roundtrip() {
    let settings = Settings {
        storage_path: Some(PathBuf::from("/data/bindings.json")),
        link_placeholder: "URL".to_string(),
        chord_placeholder: "Keys".to_string(),
        open_links: false,
    };
    let yaml = serde_yaml::to_string(&settings).unwrap();
    let parsed: Settings = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, settings);
    assert_eq!(
        parsed.placeholders(),
        Placeholders {
            link: "URL".to_string(),
            chord: "Keys".to_string()
        }
    );
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(settings, Settings::default());
}
