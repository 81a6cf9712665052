mod request;
mod response;

pub use request::CapacityRangeParams;
pub use response::{HealthResponse, MaxOutputResponse, ProjectResponse};
