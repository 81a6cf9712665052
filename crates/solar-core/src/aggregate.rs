//! Month-of-maximum-output aggregation

use chrono::Datelike;
use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::MemoCache;
use crate::error::{Result, SolarError};
use crate::generation::GenerationCache;
use crate::models::{MaxOutput, MonthlyAggregate, ProjectId, TimeSeriesPoint};

/// Sums points per (month, year), in order of each month's first occurrence
pub fn monthly_totals(points: &[TimeSeriesPoint]) -> Vec<MonthlyAggregate> {
    let mut totals: Vec<MonthlyAggregate> = Vec::new();
    let mut positions: HashMap<(i32, u32), usize> = HashMap::new();

    for point in points {
        let key = (point.ts.year(), point.ts.month());
        match positions.get(&key) {
            Some(&i) => totals[i].total += point.total,
            None => {
                positions.insert(key, totals.len());
                totals.push(MonthlyAggregate {
                    month: key.1,
                    year: key.0,
                    total: point.total,
                });
            }
        }
    }

    totals
}

/// The month with the strictly largest total.
///
/// On a tie the month that appeared first in `points` wins. Callers should
/// treat that choice as implementation-defined.
pub fn max_month(points: &[TimeSeriesPoint]) -> Option<MonthlyAggregate> {
    monthly_totals(points).into_iter().fold(None, |best, candidate| match best {
        Some(best) if best.total >= candidate.total => Some(best),
        _ => Some(candidate),
    })
}

/// Memoized per-project month of maximum output
pub struct MaxOutputCalculator {
    generation: Arc<GenerationCache>,
    results: MemoCache<ProjectId, Option<MaxOutput>>,
}

impl MaxOutputCalculator {
    pub fn new(generation: Arc<GenerationCache>) -> Self {
        Self {
            generation,
            results: MemoCache::new(),
        }
    }

    /// Month of maximum output for a project, or `None` when it has no data
    pub async fn get(&self, id: ProjectId) -> Result<Option<MaxOutput>> {
        self.results
            .get_or_try_init(id, || async move {
                let points = self.generation.get(id).await?;
                let result = max_month(&points).map(|aggregate| MaxOutput::from(&aggregate));

                tracing::debug!(
                    project_id = %id,
                    points = points.len(),
                    month = result.as_ref().map(|r| r.month.as_str()).unwrap_or("none"),
                    "Computed max output month"
                );

                Ok::<Option<MaxOutput>, SolarError>(result)
            })
            .await
    }
}
