use flickflow::catalog::PageKind;
use flickflow::config::{Config, ConfigError};
use flickflow::ui::theme::ThemeMode;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.storage.path, None);
    assert_eq!(config.storage.key, "movies");
    assert_eq!(config.fallback.source, "movies.json");
    assert_eq!(config.slideshow.interval_ms, 4000);
    assert_eq!(config.slideshow.top_n, 5);
    assert_eq!(config.ui.tick_ms, 250);
    assert_eq!(config.ui.theme, ThemeMode::Dark);
    assert_eq!(config.ui.start_page, PageKind::Home);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("flickflow/config.toml"));
}

#[test]
fn test_storage_path_defaults_to_data_dir() {
    let config = Config::default();
    assert!(config.storage.resolved_path().ends_with("flickflow/storage.json"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.slideshow.top_n, 5);
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[storage]
path = "/var/lib/flickflow/catalog.json"

[slideshow]
interval_ms = 2500

[ui]
theme = "light"
start_page = "dashboard"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(
        config.storage.resolved_path(),
        PathBuf::from("/var/lib/flickflow/catalog.json")
    );
    assert_eq!(config.storage.key, "movies");
    assert_eq!(config.slideshow.interval_ms, 2500);
    assert_eq!(config.slideshow.top_n, 5);
    assert_eq!(config.ui.theme, ThemeMode::Light);
    assert_eq!(config.ui.start_page, PageKind::Dashboard);
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[slideshow\ninterval_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_unknown_page_is_a_parse_error() {
    let (_dir, path) = write_config("[ui]\nstart_page = \"settings\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_zero_interval_fails_validation() {
    let (_dir, path) = write_config("[slideshow]\ninterval_ms = 0\n");

    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("interval_ms"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_blank_storage_key_fails_validation() {
    let mut config = Config::default();
    config.storage.key = "   ".to_string();

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => assert!(message.contains("storage.key")),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}
