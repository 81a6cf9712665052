//! Error types for the solar projects API

use std::path::PathBuf;
use thiserror::Error;

use crate::models::ProjectId;

#[derive(Debug, Error)]
pub enum SolarError {
    // Lookup errors
    #[error("Project {id} not found")]
    ProjectNotFound { id: ProjectId },

    // Validation errors
    #[error("Invalid state code '{value}'. Expected one of NY, RI, MA")]
    InvalidState { value: String },

    #[error("Invalid project id '{value}': expected an integer")]
    InvalidProjectId { value: String },

    #[error("Invalid capacity bound '{value}': {reason}")]
    InvalidCapacityBound { value: String, reason: String },

    // Generation data errors
    #[error("Malformed generation data in {path}: {reason}")]
    GenerationData { path: PathBuf, reason: String },

    // Startup errors
    #[error("Failed to load project dataset {path}: {reason}")]
    ProjectDataset { path: PathBuf, reason: String },

    #[error("Duplicate project id {id} in dataset")]
    DuplicateProject { id: ProjectId },

    #[error("Invalid project {id}: {reason}")]
    InvalidProject { id: ProjectId, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Broad category of a [`SolarError`], used by callers to pick a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested entity does not exist
    NotFound,
    /// The caller supplied input outside the accepted domain
    Validation,
    /// Stored data exists but could not be read
    Data,
    /// The process cannot start with the given data or configuration
    Startup,
}

impl SolarError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolarError::ProjectNotFound { .. } => ErrorKind::NotFound,
            SolarError::InvalidState { .. }
            | SolarError::InvalidProjectId { .. }
            | SolarError::InvalidCapacityBound { .. } => ErrorKind::Validation,
            SolarError::GenerationData { .. } | SolarError::Io(_) => ErrorKind::Data,
            SolarError::ProjectDataset { .. }
            | SolarError::DuplicateProject { .. }
            | SolarError::InvalidProject { .. }
            | SolarError::ConfigInvalid { .. } => ErrorKind::Startup,
        }
    }
}

pub type Result<T> = std::result::Result<T, SolarError>;
