use std::fs;

use kakeibo_config::{Config, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_targets_yen_and_a_month() {
    let cfg = Config::default();

    assert_eq!(cfg.currency, "JPY");
    assert_eq!(cfg.default_horizon_days, 30);
    assert_eq!(cfg.highlight_limit, 5);
    assert!(!cfg.include_sample_events);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    assert_eq!(manager.load().expect("load"), Config::default());
    assert!(manager.config_path().ends_with("config/config.json"));
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let cfg = Config {
        default_horizon_days: 90,
        include_sample_events: true,
        ..Config::default()
    };

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"locale":"en-US","currency":"USD"}"#).expect("write config");

    let loaded = ConfigManager::new(path).load().expect("load config");

    assert_eq!(loaded.currency, "USD");
    assert_eq!(loaded.default_horizon_days, 30);
}

#[test]
fn zero_horizon_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));
    let cfg = Config {
        default_horizon_days: 0,
        ..Config::default()
    };

    assert!(matches!(manager.save(&cfg), Err(ConfigError::Invalid(_))));
}

#[test]
fn malformed_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{not json").expect("write config");

    assert!(matches!(
        ConfigManager::new(path).load(),
        Err(ConfigError::Serde(_))
    ));
}
