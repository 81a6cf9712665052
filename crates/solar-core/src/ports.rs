//! Port trait definitions
//!
//! These traits define the data sources that adapters must implement.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Project, ProjectId, TimeSeriesPoint};

/// Port for the project metadata dataset
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Load every project in the dataset.
    ///
    /// Any record that fails to parse fails the whole load.
    async fn load_projects(&self) -> Result<Vec<Project>>;
}

/// Port for per-project generation data
#[async_trait]
pub trait GenerationSource: Send + Sync {
    /// Load the generation series for a project.
    ///
    /// Returns `Ok(None)` when the project has no generation data at all and
    /// an error when data exists but cannot be parsed.
    async fn load_generation(&self, id: ProjectId) -> Result<Option<Vec<TimeSeriesPoint>>>;
}
