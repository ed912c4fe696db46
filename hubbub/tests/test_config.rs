use std::fs;

use hubbub::config::AppConfig;
use hubbub::models::{CommunityId, View};
use hubbub::ui::theme::ThemePreference;
use tempfile::TempDir;
use tracing_test::traced_test;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.theme, ThemePreference::Dark);
    assert_eq!(config.start_view, View::DirectMessages);
}

#[test]
#[traced_test]
fn test_missing_file_yields_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    // Act
    let config = AppConfig::load_from(&path).unwrap();

    // Assert
    assert_eq!(config, AppConfig::default());
    assert!(logs_contain("No config file, using defaults"));
}

#[test]
fn test_load_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"theme": "light", "start_view": "music"}"#).unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.theme, ThemePreference::Light);
    assert_eq!(config.start_view, View::Community(CommunityId::Music));
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"start_view": "discovery"}"#).unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.theme, ThemePreference::Dark);
    assert_eq!(config.start_view, View::Discovery);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"start_view": "lobby"}"#).unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_config_roundtrip_through_json() {
    let config = AppConfig {
        theme: ThemePreference::Light,
        start_view: View::Community(CommunityId::Art),
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"theme":"light","start_view":"art"}"#);
    let back: AppConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
