//! Tests for config module

use std::io::Write;

use super::*;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.remote, Remote::new("origin", ""));
    assert_eq!(config.settings.gui.window_width, 520.0);
    assert_eq!(config.settings.gui.window_height, 240.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_full_config() {
    let toml = r#"
[remote]
name = "upstream"
url = "git@host:x.git"

[settings.gui]
window_width = 640.0
window_height = 300.0
title = "Remotes"
"#;
    let config = Config::from_toml_str(toml).unwrap();
    assert_eq!(config.remote, Remote::new("upstream", "git@host:x.git"));
    assert_eq!(config.settings.gui.window_width, 640.0);
    assert_eq!(config.settings.gui.title, "Remotes");
}

#[test]
fn test_parse_partial_config_uses_defaults() {
    let config = Config::from_toml_str("[remote]\nname = \"origin\"\n").unwrap();
    assert_eq!(config.remote.url, "");
    assert_eq!(config.settings.gui, GuiSettings::default());
}

#[test]
fn test_validate_remote_name() {
    let mut config = Config::default();
    config.remote.name = "  ".to_string();
    assert_eq!(config.validate(), Err(ConfigError::EmptyRemoteName));

    config.remote.name = "my remote".to_string();
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidRemoteName("my remote".to_string()))
    );
}

#[test]
fn test_validate_window_size() {
    let mut config = Config::default();
    config.settings.gui.window_height = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWindowSize { .. })
    ));
}

#[test]
fn test_empty_url_is_valid_config() {
    // An empty URL is a legal transient state; only the editor flags it
    let config = Config::from_toml_str("[remote]\nname = \"origin\"\nurl = \"\"\n").unwrap();
    assert!(!config.remote.has_url());
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::default();
    config.apply_overrides(None, Some("https://example.com/repo.git".to_string()));
    assert_eq!(config.remote, Remote::new("origin", "https://example.com/repo.git"));

    config.apply_overrides(Some("upstream".to_string()), None);
    assert_eq!(config.remote.name, "upstream");
    assert_eq!(config.remote.url, "https://example.com/repo.git");
}

#[test]
fn test_from_file_and_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = Config::load_or_default(&path).unwrap();
    assert_eq!(config, Config::default());

    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[remote]\nname = \"origin\"\nurl = \"https://example.com/repo.git\"").unwrap();

    let config = Config::load_or_default(&path).unwrap();
    assert_eq!(config.remote.url, "https://example.com/repo.git");
}

#[test]
fn test_from_file_reports_path_on_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[remote\nname = ").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    assert!(err.to_string().contains("config.toml"));
}
