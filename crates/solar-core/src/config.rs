use crate::error::{Result, SolarError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a TOML config file
pub const CONFIG_FILE_ENV: &str = "SOLAR_CONFIG";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the solar projects API
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub projects_path: ConfigValue<PathBuf>,
    pub generation_dir: ConfigValue<PathBuf>,
    pub port: ConfigValue<u16>,
    pub cors_origin: ConfigValue<String>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            projects_path: ConfigValue::new(
                PathBuf::from("data/projects.json"),
                ConfigSource::Default,
            ),
            generation_dir: ConfigValue::new(
                PathBuf::from("data/generation_data"),
                ConfigSource::Default,
            ),
            port: ConfigValue::new(3001, ConfigSource::Default),
            cors_origin: ConfigValue::new(
                "http://localhost:3000".to_string(),
                ConfigSource::Default,
            ),
        }
    }

    /// Defaults, then an optional file, then the environment, then CLI overrides.
    ///
    /// The file is `config_file` if given, otherwise `SOLAR_CONFIG` if set.
    pub fn resolve(config_file: Option<&Path>, overrides: CliConfigOverrides) -> Result<Self> {
        let env_file = env::var_os(CONFIG_FILE_ENV).map(PathBuf::from);
        let file = config_file.map(Path::to_path_buf).or(env_file);

        let mut config = Self::with_defaults();
        if let Some(path) = file {
            config = config.load_from_file(path)?;
        }

        let mut config = config.load_from_env();
        config.update_from_cli(overrides);
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| SolarError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| SolarError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(projects_path) = file_config.projects_path {
            self.projects_path.update(projects_path, ConfigSource::File);
        }

        if let Some(generation_dir) = file_config.generation_dir {
            self.generation_dir.update(generation_dir, ConfigSource::File);
        }

        if let Some(port) = file_config.port {
            self.port.update(port, ConfigSource::File);
        }

        if let Some(cors_origin) = file_config.cors_origin {
            self.cors_origin.update(cors_origin, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // SOLAR_PROJECTS_PATH
        if let Some(path) = env::var_os("SOLAR_PROJECTS_PATH") {
            self.projects_path.update(PathBuf::from(path), ConfigSource::Environment);
        }

        // SOLAR_GENERATION_DIR
        if let Some(dir) = env::var_os("SOLAR_GENERATION_DIR") {
            self.generation_dir.update(PathBuf::from(dir), ConfigSource::Environment);
        }

        // SOLAR_PORT
        if let Ok(port_str) = env::var("SOLAR_PORT") {
            match port_str.parse::<u16>() {
                Ok(port) => self.port.update(port, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid SOLAR_PORT value '{}': expected a port number",
                    port_str
                ),
            }
        }

        // SOLAR_CORS_ORIGIN
        if let Ok(origin) = env::var("SOLAR_CORS_ORIGIN") {
            self.cors_origin.update(origin, ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(projects_path) = overrides.projects_path {
            self.projects_path.update(projects_path, ConfigSource::Cli);
        }

        if let Some(generation_dir) = overrides.generation_dir {
            self.generation_dir.update(generation_dir, ConfigSource::Cli);
        }

        if let Some(port) = overrides.port {
            self.port.update(port, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "projects_path".to_string(),
            (self.projects_path.value.display().to_string(), self.projects_path.source),
        );

        map.insert(
            "generation_dir".to_string(),
            (self.generation_dir.value.display().to_string(), self.generation_dir.source),
        );

        map.insert("port".to_string(), (self.port.value.to_string(), self.port.source));

        map.insert(
            "cors_origin".to_string(),
            (self.cors_origin.value.clone(), self.cors_origin.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    projects_path: Option<PathBuf>,
    generation_dir: Option<PathBuf>,
    port: Option<u16>,
    cors_origin: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub projects_path: Option<PathBuf>,
    pub generation_dir: Option<PathBuf>,
    pub port: Option<u16>,
}
