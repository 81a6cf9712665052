use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SolarError;

/// Unique identifier for a project, assigned by the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub i64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectId {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(ProjectId).map_err(|_| SolarError::InvalidProjectId {
            value: s.to_string(),
        })
    }
}

/// States a project may be located in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsState {
    #[serde(rename = "NY")]
    NewYork,
    #[serde(rename = "RI")]
    RhodeIsland,
    #[serde(rename = "MA")]
    Massachusetts,
}

impl UsState {
    pub const ALL: [UsState; 3] = [UsState::NewYork, UsState::RhodeIsland, UsState::Massachusetts];

    /// Two-letter postal code
    pub fn code(&self) -> &'static str {
        match self {
            UsState::NewYork => "NY",
            UsState::RhodeIsland => "RI",
            UsState::Massachusetts => "MA",
        }
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parsing is case-sensitive: `"ny"` is rejected.
impl FromStr for UsState {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsState::ALL
            .into_iter()
            .find(|state| state.code() == s)
            .ok_or_else(|| SolarError::InvalidState { value: s.to_string() })
    }
}

/// Solar project metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,

    /// Project name
    pub name: String,

    /// Nameplate capacity in kilowatts
    pub capacity_kw: f64,

    /// Street address
    pub address: String,

    pub city: String,

    pub state: UsState,

    /// Postal code, kept as text to preserve leading zeros
    pub zip: String,
}
