use solar_core::error::Result;
use solar_core::ports::{GenerationSource, ProjectSource};
use solar_core::{ProjectStore, QueryService};
use solar_store::{CsvGenerationSource, JsonProjectSource};
use std::sync::Arc;

use crate::config::ApiConfig;

pub struct AppState {
    pub query: QueryService,
}

impl AppState {
    pub fn new(projects: ProjectStore, generation: Arc<dyn GenerationSource>) -> Self {
        Self {
            query: QueryService::new(Arc::new(projects), generation),
        }
    }

    /// Load the project dataset and wire the generation directory.
    ///
    /// Fails if the dataset cannot be loaded in full.
    pub async fn load(config: &ApiConfig) -> Result<Self> {
        let projects = JsonProjectSource::new(&config.projects_path);
        let generation = Arc::new(CsvGenerationSource::new(&config.generation_dir));

        Self::from_sources(&projects, generation).await
    }

    pub async fn from_sources(
        projects: &dyn ProjectSource,
        generation: Arc<dyn GenerationSource>,
    ) -> Result<Self> {
        let store = ProjectStore::load(projects).await?;
        Ok(Self::new(store, generation))
    }
}
