use async_trait::async_trait;
use solar_core::error::{Result, SolarError};
use solar_core::models::Project;
use solar_core::ports::ProjectSource;
use std::path::{Path, PathBuf};

/// Project dataset stored as a JSON array of project records
#[derive(Debug, Clone)]
pub struct JsonProjectSource {
    path: PathBuf,
}

impl JsonProjectSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProjectSource for JsonProjectSource {
    async fn load_projects(&self) -> Result<Vec<Project>> {
        let content =
            tokio::fs::read_to_string(&self.path).await.map_err(|e| SolarError::ProjectDataset {
                path: self.path.clone(),
                reason: format!("Failed to read file: {}", e),
            })?;

        serde_json::from_str(&content).map_err(|e| SolarError::ProjectDataset {
            path: self.path.clone(),
            reason: format!("Failed to parse JSON: {}", e),
        })
    }
}
