use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's generation reading for a project
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Day of the reading
    pub ts: NaiveDate,

    /// Total output for the day
    pub total: f64,
}

impl TimeSeriesPoint {
    pub fn new(ts: NaiveDate, total: f64) -> Self {
        Self { ts, total }
    }
}

/// Summed output for one calendar month of one year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyAggregate {
    /// Month of year, 1-based
    pub month: u32,
    pub year: i32,
    pub total: f64,
}

impl MonthlyAggregate {
    /// Label in `month/year` form without zero padding, e.g. `1/2022`
    pub fn label(&self) -> String {
        format!("{}/{}", self.month, self.year)
    }
}

/// Month of maximum output for a project, formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxOutput {
    pub month: String,
    pub output: String,
}

impl From<&MonthlyAggregate> for MaxOutput {
    fn from(aggregate: &MonthlyAggregate) -> Self {
        Self {
            month: aggregate.label(),
            output: format_output(aggregate.total),
        }
    }
}

/// Formats an output total with two decimals.
///
/// Rounds half away from zero on `total * 100`, so `0.125` becomes `"0.13"`
/// and `10.005` becomes `"10.01"`.
pub fn format_output(total: f64) -> String {
    let rounded = (total * 100.0).round() / 100.0;
    // avoid printing "-0.00"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}", rounded)
}
