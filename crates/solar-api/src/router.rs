use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Single project
        .route("/project/{id}", get(handlers::get_project))
        .route("/project/output/{id}", get(handlers::get_max_output_month))

        // Project filters
        .route("/projects/state/{state}", get(handlers::list_projects_by_state))
        .route(
            "/projects/capacity-range/{lower}/{upper}",
            get(handlers::list_projects_by_capacity_range),
        )

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
