//! Read-only query facade over the project store and the output caches

use std::sync::Arc;

use crate::aggregate::MaxOutputCalculator;
use crate::error::{Result, SolarError};
use crate::generation::GenerationCache;
use crate::models::{MaxOutput, Project, ProjectId, UsState};
use crate::ports::GenerationSource;
use crate::store::ProjectStore;

/// Outcome of a lookup by key
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}

/// Outcome of a max-output query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaxOutputLookup {
    Found(MaxOutput),
    /// The project ID is not in the dataset
    UnknownProject,
    /// The project exists but has no generation data
    NoData,
}

/// Outcome of a filter that returns project names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameList {
    Found(Vec<String>),
    /// The filter was valid but matched nothing
    Empty,
}

impl NameList {
    fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            NameList::Empty
        } else {
            NameList::Found(names)
        }
    }
}

/// Service answering the supported project queries
pub struct QueryService {
    projects: Arc<ProjectStore>,
    generation: Arc<GenerationCache>,
    max_output: MaxOutputCalculator,
}

impl QueryService {
    pub fn new(projects: Arc<ProjectStore>, source: Arc<dyn GenerationSource>) -> Self {
        let generation = Arc::new(GenerationCache::new(source));
        let max_output = MaxOutputCalculator::new(generation.clone());

        Self {
            projects,
            generation,
            max_output,
        }
    }

    pub fn projects(&self) -> &ProjectStore {
        &self.projects
    }

    pub fn generation(&self) -> &GenerationCache {
        &self.generation
    }

    pub fn project_by_id(&self, id: ProjectId) -> Lookup<Arc<Project>> {
        self.projects.get(id).into()
    }

    /// Month of maximum output for a known project
    pub async fn max_output_month(&self, id: ProjectId) -> Result<MaxOutputLookup> {
        if !self.projects.contains(id) {
            return Ok(MaxOutputLookup::UnknownProject);
        }

        Ok(match self.max_output.get(id).await? {
            Some(output) => MaxOutputLookup::Found(output),
            None => MaxOutputLookup::NoData,
        })
    }

    /// Names of projects located in `code`, matched case-sensitively
    pub fn projects_by_state(&self, code: &str) -> Result<NameList> {
        let state: UsState = code.parse()?;

        let names = self
            .projects
            .iter()
            .filter(|p| p.state == state)
            .map(|p| p.name.clone())
            .collect();

        Ok(NameList::from_names(names))
    }

    /// Names of projects with `lower <= capacity_kw <= upper`.
    ///
    /// Inverted bounds are not an error; they simply match nothing.
    pub fn projects_by_capacity_range(&self, lower: f64, upper: f64) -> Result<Vec<String>> {
        for bound in [lower, upper] {
            if bound.is_nan() {
                return Err(SolarError::InvalidCapacityBound {
                    value: bound.to_string(),
                    reason: "bound must be a number".to_string(),
                });
            }
        }

        Ok(self
            .projects
            .iter()
            .filter(|p| lower <= p.capacity_kw && p.capacity_kw <= upper)
            .map(|p| p.name.clone())
            .collect())
    }
}

/// Parse a capacity bound from request text
pub fn parse_capacity_bound(raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| SolarError::InvalidCapacityBound {
        value: raw.to_string(),
        reason: "expected a number".to_string(),
    })?;

    if value.is_nan() {
        return Err(SolarError::InvalidCapacityBound {
            value: raw.to_string(),
            reason: "bound must be a number".to_string(),
        });
    }

    Ok(value)
}
