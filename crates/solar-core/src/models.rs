pub mod generation;
pub mod project;

pub use generation::{MaxOutput, MonthlyAggregate, TimeSeriesPoint};
pub use project::{Project, ProjectId, UsState};
