//! In-memory source implementations for development and testing.
//!
//! These implementations use `RwLock::unwrap()`. Lock poisoning only occurs
//! when another thread panicked while holding the lock, which is an
//! unrecoverable state.

use async_trait::async_trait;
use solar_core::error::Result;
use solar_core::models::{Project, ProjectId, TimeSeriesPoint};
use solar_core::ports::{GenerationSource, ProjectSource};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// In-memory implementation of ProjectSource
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectSource {
    projects: Vec<Project>,
}

impl MemoryProjectSource {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

#[async_trait]
impl ProjectSource for MemoryProjectSource {
    async fn load_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }
}

/// In-memory implementation of GenerationSource that counts loads
#[derive(Debug, Default)]
pub struct MemoryGenerationSource {
    series: RwLock<HashMap<ProjectId, Vec<TimeSeriesPoint>>>,
    loads: AtomicUsize,
}

impl MemoryGenerationSource {
    /// Create a new empty generation source
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the series for a project, replacing any previous one
    pub fn insert(&self, id: ProjectId, points: Vec<TimeSeriesPoint>) {
        self.series.write().unwrap().insert(id, points);
    }

    /// Number of times any series has been requested
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationSource for MemoryGenerationSource {
    async fn load_generation(&self, id: ProjectId) -> Result<Option<Vec<TimeSeriesPoint>>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.series.read().unwrap().get(&id).cloned())
    }
}
