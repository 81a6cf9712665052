use serde::Serialize;
use solar_core::models::{MaxOutput, Project};

/// Project metadata response
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub capacity_kw: f64,
    pub address: String,
    pub city: String,
    pub state: &'static str,
    pub zip: String,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.0,
            name: project.name.clone(),
            capacity_kw: project.capacity_kw,
            address: project.address.clone(),
            city: project.city.clone(),
            state: project.state.code(),
            zip: project.zip.clone(),
        }
    }
}

/// Month of maximum output response
#[derive(Debug, Serialize)]
pub struct MaxOutputResponse {
    pub month: String,
    pub output: String,
}

impl From<MaxOutput> for MaxOutputResponse {
    fn from(output: MaxOutput) -> Self {
        Self {
            month: output.month,
            output: output.output,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub projects: usize,
}

impl HealthResponse {
    pub fn ok(projects: usize) -> Self {
        Self {
            status: "ok",
            service: "solar-api",
            projects,
        }
    }
}
