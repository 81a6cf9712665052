//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use serial_test::serial;
use solar_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig, CONFIG_FILE_ENV};
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const VARS: [&str; 5] = [
    "SOLAR_PROJECTS_PATH",
    "SOLAR_GENERATION_DIR",
    "SOLAR_PORT",
    "SOLAR_CORS_ORIGIN",
    CONFIG_FILE_ENV,
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();

    env::set_var("SOLAR_PROJECTS_PATH", "/env/projects.json");
    env::set_var("SOLAR_PORT", "4100");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
projects_path = "/file/projects.json"
generation_dir = "/file/generation"
port = 4000
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    assert_eq!(config.projects_path.value, PathBuf::from("/env/projects.json"));
    assert_eq!(config.projects_path.source, ConfigSource::Environment);
    assert_eq!(config.port.value, 4100);
    assert_eq!(config.port.source, ConfigSource::Environment);
    // Not set in env, file wins
    assert_eq!(config.generation_dir.value, PathBuf::from("/file/generation"));
    assert_eq!(config.generation_dir.source, ConfigSource::File);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_port_is_ignored() {
    clear_env();
    env::set_var("SOLAR_PORT", "not-a-port");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.port.value, 3001);
    assert_eq!(config.port.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_resolve_reads_file_from_env_and_applies_cli() {
    clear_env();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
generation_dir = "/file/generation"
cors_origin = "https://solar.example.org"
port = 4000
"#
    )
    .unwrap();

    env::set_var(CONFIG_FILE_ENV, file.path());
    env::set_var("SOLAR_PORT", "4100");

    let config = LayeredConfig::resolve(
        None,
        CliConfigOverrides {
            port: Some(4200),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(config.generation_dir.source, ConfigSource::File);
    assert_eq!(config.cors_origin.value, "https://solar.example.org");
    assert_eq!(config.port.value, 4200);
    assert_eq!(config.port.source, ConfigSource::Cli);

    clear_env();
}

#[test]
#[serial]
fn test_resolve_with_missing_explicit_file_fails() {
    clear_env();

    let result = LayeredConfig::resolve(
        Some(std::path::Path::new("/nonexistent/solar.toml")),
        CliConfigOverrides::default(),
    );

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_resolve_defaults_without_file() {
    clear_env();

    let config = LayeredConfig::resolve(None, CliConfigOverrides::default()).unwrap();

    assert_eq!(config.port.source, ConfigSource::Default);
    assert_eq!(config.projects_path.value, PathBuf::from("data/projects.json"));
}
