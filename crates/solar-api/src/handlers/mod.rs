mod health;
mod projects;
mod search;

pub use health::health_check;
pub use projects::{get_max_output_month, get_project};
pub use search::{list_projects_by_capacity_range, list_projects_by_state};
