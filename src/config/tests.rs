//! Tests for config functionality.

use super::*;
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.max_depth, 3);
    assert_eq!(config.prompts_dir, default_prompts_dir());
    assert!(config.prompts_dir.ends_with("pren/prompts"));
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let config = Config::from_yaml("max_depth: 8\n").unwrap();
    assert_eq!(config.max_depth, 8);
    assert_eq!(config.prompts_dir, default_prompts_dir());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
prompts_dir: /srv/prompts
max_depth: 5
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.prompts_dir, PathBuf::from("/srv/prompts"));
    assert_eq!(config.max_depth, 5);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
max_depth: 4
clipboard: true
future_feature:
  nested: 1
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.max_depth, 4);
}

#[test]
fn test_zero_depth_rejected() {
    let err = Config::from_yaml("max_depth: 0").unwrap_err();
    assert!(err.to_string().contains("max_depth"));
}

#[test]
fn test_invalid_yaml_rejected() {
    assert!(Config::from_yaml("max_depth: [not a number").is_err());
    assert!(Config::from_yaml("max_depth: lots").is_err());
}

#[test]
fn test_yaml_roundtrip() {
    let config = Config {
        prompts_dir: PathBuf::from("/tmp/prompts"),
        max_depth: 6,
    };
    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    std::fs::write(&path, "max_depth: 9\n").unwrap();

    assert_eq!(Config::load(&path).unwrap().max_depth, 9);
    assert!(Config::load(temp.path().join("missing.yaml")).is_err());
}

#[test]
#[serial]
fn test_load_default_honors_env_var() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.yaml");
    std::fs::write(&path, "max_depth: 11\nprompts_dir: /x\n").unwrap();

    // SAFETY: tests touching the environment are serialized.
    unsafe { std::env::set_var(CONFIG_ENV_VAR, &path) };
    let loaded = Config::load_default();
    let located = default_config_path();
    unsafe { std::env::remove_var(CONFIG_ENV_VAR) };

    assert_eq!(located, Some(path));
    let loaded = loaded.unwrap();
    assert_eq!(loaded.max_depth, 11);
    assert_eq!(loaded.prompts_dir, PathBuf::from("/x"));
}

#[test]
#[serial]
fn test_load_default_missing_file_is_default() {
    let temp = TempDir::new().unwrap();

    unsafe { std::env::set_var(CONFIG_ENV_VAR, temp.path().join("absent.yaml")) };
    let loaded = Config::load_default();
    unsafe { std::env::remove_var(CONFIG_ENV_VAR) };

    assert_eq!(loaded.unwrap(), Config::default());
}
