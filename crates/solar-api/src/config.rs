use solar_core::config::LayeredConfig;
use std::path::PathBuf;

/// API server configuration resolved from the layered config
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub projects_path: PathBuf,
    pub generation_dir: PathBuf,
}

impl ApiConfig {
    pub fn from_layered(config: &LayeredConfig) -> Self {
        Self {
            port: config.port.value,
            cors_origin: config.cors_origin.value.clone(),
            projects_path: config.projects_path.value.clone(),
            generation_dir: config.generation_dir.value.clone(),
        }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
