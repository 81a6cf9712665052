use serde::Deserialize;

/// Path parameters of the capacity range query, parsed by the handler
#[derive(Debug, Deserialize)]
pub struct CapacityRangeParams {
    pub lower: String,
    pub upper: String,
}
