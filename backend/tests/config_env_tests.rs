mod support;

use std::path::PathBuf;

use staffing_grid::config::{AppConfig, ConfigError};
use support::with_scoped_env;

const CLEAR: [(&str, Option<&str>); 4] = [
    ("HOST", None),
    ("PORT", None),
    ("STAFFING_DEFAULT_FILE", None),
    ("STAFFING_CONFIG", None),
];

fn env_with<'a>(extra: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, Option<&'a str>)> {
    let mut changes: Vec<(&str, Option<&str>)> = CLEAR.to_vec();
    changes.extend_from_slice(extra);
    changes
}

#[test]
fn test_load_explicit_config_file_with_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        "[server]\nhost = \"127.0.0.1\"\nport = 7000\n\n[dashboard]\ndefault_file = \"a.csv\"\n",
    )
    .unwrap();
    let path_str = path.to_str().unwrap();

    let config = with_scoped_env(
        &env_with(&[("STAFFING_CONFIG", Some(path_str)), ("PORT", Some("7100"))]),
        AppConfig::load,
    )
    .unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 7100);
    assert_eq!(config.dashboard.default_file, Some(PathBuf::from("a.csv")));
}

#[test]
fn test_load_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let result = with_scoped_env(
        &env_with(&[("STAFFING_CONFIG", Some(missing.to_str().unwrap()))]),
        AppConfig::load,
    );

    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_load_default_file_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "").unwrap();

    let config = with_scoped_env(
        &env_with(&[
            ("STAFFING_CONFIG", Some(path.to_str().unwrap())),
            ("STAFFING_DEFAULT_FILE", Some("outputs/today.json")),
            ("HOST", Some("127.0.0.1")),
        ]),
        AppConfig::load,
    )
    .unwrap();

    assert_eq!(
        config.dashboard.default_file,
        Some(PathBuf::from("outputs/today.json"))
    );
    assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
}

#[test]
fn test_load_rejects_bad_port() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "").unwrap();

    let result = with_scoped_env(
        &env_with(&[
            ("STAFFING_CONFIG", Some(path.to_str().unwrap())),
            ("PORT", Some("99999")),
        ]),
        AppConfig::load,
    );

    assert!(matches!(result, Err(ConfigError::InvalidValue { key: "PORT", .. })));
}
