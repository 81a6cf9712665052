use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use solar_core::query::parse_capacity_bound;
use solar_core::NameList;

use crate::dto::CapacityRangeParams;
use crate::error::ApiError;
use crate::state::AppState;

/// Names of the projects in a state. A valid state with no projects is a 404.
pub async fn list_projects_by_state(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    tracing::info!(state = %code, "Listing projects by state");

    match state.query.projects_by_state(&code)? {
        NameList::Found(names) => Ok(Json(names)),
        NameList::Empty => {
            Err(ApiError::not_found(format!("No projects found for state {}", code)))
        }
    }
}

/// Names of the projects whose capacity lies in `[lower, upper]`
pub async fn list_projects_by_capacity_range(
    State(state): State<Arc<AppState>>,
    Path(params): Path<CapacityRangeParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let lower = parse_capacity_bound(&params.lower)?;
    let upper = parse_capacity_bound(&params.upper)?;

    tracing::info!(lower = lower, upper = upper, "Listing projects by capacity range");

    let names = state.query.projects_by_capacity_range(lower, upper)?;
    Ok(Json(names))
}
