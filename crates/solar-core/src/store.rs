use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Result, SolarError};
use crate::models::{Project, ProjectId};
use crate::ports::ProjectSource;

/// Immutable set of projects, built once at startup.
///
/// Iteration follows dataset order; lookups by ID are constant time.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Arc<Project>>,
    index: HashMap<ProjectId, usize>,
}

impl ProjectStore {
    /// Load the full dataset from a source. No partial loads.
    pub async fn load(source: &dyn ProjectSource) -> Result<Self> {
        let projects = source.load_projects().await?;
        let store = Self::from_projects(projects)?;

        tracing::info!(count = store.len(), "Loaded project dataset");

        Ok(store)
    }

    /// Build a store, rejecting duplicate IDs and invalid capacities
    pub fn from_projects(projects: impl IntoIterator<Item = Project>) -> Result<Self> {
        let mut store = Self::default();

        for project in projects {
            if !project.capacity_kw.is_finite() || project.capacity_kw < 0.0 {
                return Err(SolarError::InvalidProject {
                    id: project.id,
                    reason: format!(
                        "capacity_kw must be a non-negative number, got {}",
                        project.capacity_kw
                    ),
                });
            }

            if store.index.contains_key(&project.id) {
                return Err(SolarError::DuplicateProject { id: project.id });
            }

            store.index.insert(project.id, store.projects.len());
            store.projects.push(Arc::new(project));
        }

        Ok(store)
    }

    pub fn get(&self, id: ProjectId) -> Option<Arc<Project>> {
        self.index.get(&id).map(|&i| self.projects[i].clone())
    }

    pub fn contains(&self, id: ProjectId) -> bool {
        self.index.contains_key(&id)
    }

    /// Projects in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
