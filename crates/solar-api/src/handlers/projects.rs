use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use solar_core::models::ProjectId;
use solar_core::{Lookup, MaxOutputLookup};

use crate::dto::{MaxOutputResponse, ProjectResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Get metadata for a project
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let id: ProjectId = project_id.parse()?;

    tracing::info!(project_id = %id, "Getting project");

    match state.query.project_by_id(id) {
        Lookup::Found(project) => Ok(Json(ProjectResponse::from(project.as_ref()))),
        Lookup::NotFound => Err(ApiError::not_found(format!("Project {} not found", id))),
    }
}

/// Get the month of maximum output for a project
pub async fn get_max_output_month(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> Result<Json<MaxOutputResponse>, ApiError> {
    let id: ProjectId = project_id.parse()?;

    tracing::info!(project_id = %id, "Getting max output month");

    match state.query.max_output_month(id).await? {
        MaxOutputLookup::Found(output) => Ok(Json(output.into())),
        MaxOutputLookup::UnknownProject => {
            Err(ApiError::not_found(format!("Project {} not found", id)))
        }
        MaxOutputLookup::NoData => Err(ApiError::not_found(format!(
            "No generation data for project {}",
            id
        ))),
    }
}
