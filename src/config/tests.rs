//! Configuration tests

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

/// Verify that serialized config can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), env_from(&[]));
    assert_eq!(resolved.shop_name, "Tech Shop");
    assert_eq!(resolved.fixture, None);
    assert_eq!(resolved.theme, "dark");
    assert_eq!(resolved.notice_ttl_secs, 3);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.shop_name = "Gadget \"Barn\"".to_string();
    config.fixture = Some(PathBuf::from("/tmp/products.json"));
    config.theme = "light".to_string();
    config.notice_ttl_secs = 5;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let resolved = Config::resolve(file, env_from(&[]));

    assert_eq!(resolved.shop_name, "Gadget \"Barn\"");
    assert_eq!(resolved.fixture, Some(PathBuf::from("/tmp/products.json")));
    assert_eq!(resolved.theme, "light");
    assert_eq!(resolved.notice_ttl(), Duration::from_secs(5));
    assert!(resolved.logging.file_enabled);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_config_roundtrip_control_characters() {
    let mut config = Config::default();
    config.shop_name = "Shop\u{1b}[1m\u{7f}\ttabs".to_string();
    config.logging.file_prefix = "logs\\win".to_string();

    let toml_str = config.to_toml();
    let file: FileConfig = toml::from_str(&toml_str)
        .unwrap_or_else(|e| panic!("TOML:\n{}\nError: {}", toml_str, e));
    let resolved = Config::resolve(file, env_from(&[]));

    assert_eq!(resolved.shop_name, "Shop\u{1b}[1m\u{7f}\ttabs");
    assert_eq!(resolved.logging.file_prefix, "logs\\win");
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
shop_name = "From File"
theme = "light"
notice_ttl_secs = 10
"#,
    )
    .unwrap();

    let config = Config::resolve(
        file,
        env_from(&[
            ("TECHSHOP_SHOP_NAME", "From Env"),
            ("TECHSHOP_FIXTURE", "seed.json"),
            ("TECHSHOP_NOTICE_TTL", "1"),
        ]),
    );

    assert_eq!(config.shop_name, "From Env");
    assert_eq!(config.fixture, Some(PathBuf::from("seed.json")));
    assert_eq!(config.theme, "light");
    assert_eq!(config.notice_ttl_secs, 1);
}

#[test]
fn test_invalid_env_ttl_falls_back_to_file() {
    let file: FileConfig = toml::from_str("notice_ttl_secs = 7").unwrap();
    let config = Config::resolve(file, env_from(&[("TECHSHOP_NOTICE_TTL", "soon")]));
    assert_eq!(config.notice_ttl_secs, 7);
}

#[test]
fn test_empty_fixture_means_builtin() {
    let config = Config::resolve(FileConfig::default(), env_from(&[("TECHSHOP_FIXTURE", "")]));
    assert_eq!(config.fixture, None);
}

#[test]
fn test_partial_logging_section_keeps_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
[logging]
level = "debug"
file_rotation = "weekly"
"#,
    )
    .unwrap();
    let config = Config::resolve(file, env_from(&[]));

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
    assert_eq!(config.logging.file_prefix, "techshop");
    assert!(!config.logging.file_enabled);
}
