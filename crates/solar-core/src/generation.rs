use std::sync::Arc;

use crate::cache::MemoCache;
use crate::error::{Result, SolarError};
use crate::models::{ProjectId, TimeSeriesPoint};
use crate::ports::GenerationSource;

/// Lazily loaded, memoized generation series per project.
///
/// Entries are never invalidated: once a project's series is loaded the
/// source is not consulted again for that project.
pub struct GenerationCache {
    source: Arc<dyn GenerationSource>,
    entries: MemoCache<ProjectId, Arc<[TimeSeriesPoint]>>,
}

impl GenerationCache {
    pub fn new(source: Arc<dyn GenerationSource>) -> Self {
        Self {
            source,
            entries: MemoCache::new(),
        }
    }

    /// Get the generation series for a project.
    ///
    /// A project without generation data yields an empty series, which is
    /// cached like any other. Parse failures are returned and not cached.
    pub async fn get(&self, id: ProjectId) -> Result<Arc<[TimeSeriesPoint]>> {
        self.entries
            .get_or_try_init(id, || async move {
                tracing::debug!(project_id = %id, "Generation cache miss");

                let points = match self.source.load_generation(id).await {
                    Ok(Some(points)) => {
                        tracing::info!(
                            project_id = %id,
                            count = points.len(),
                            "Loaded generation data"
                        );
                        points
                    }
                    Ok(None) => {
                        tracing::debug!(project_id = %id, "No generation data for project");
                        Vec::new()
                    }
                    Err(e) => {
                        tracing::error!(project_id = %id, error = %e, "Failed to load generation data");
                        return Err(e);
                    }
                };

                Ok::<Arc<[TimeSeriesPoint]>, SolarError>(points.into())
            })
            .await
    }

    /// Number of projects whose series is resident
    pub fn cached_len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeSource {
        loads: AtomicUsize,
    }

    #[async_trait]
    impl GenerationSource for FakeSource {
        async fn load_generation(&self, id: ProjectId) -> Result<Option<Vec<TimeSeriesPoint>>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            match id.0 {
                1 => Ok(Some(vec![TimeSeriesPoint::new(
                    NaiveDate::from_ymd_opt(2022, 1, 5).unwrap(),
                    10.0,
                )])),
                2 => Err(SolarError::GenerationData {
                    path: PathBuf::from("2_data.csv"),
                    reason: "row 1: bad value".to_string(),
                }),
                _ => Ok(None),
            }
        }
    }

    fn cache() -> (Arc<FakeSource>, GenerationCache) {
        let source = Arc::new(FakeSource { loads: AtomicUsize::new(0) });
        let cache = GenerationCache::new(source.clone());
        (source, cache)
    }

    #[tokio::test]
    async fn test_second_get_does_not_touch_source() {
        let (source, cache) = cache();

        let first = cache.get(ProjectId(1)).await.unwrap();
        let second = cache.get(ProjectId(1)).await.unwrap();

        assert_eq!(first.len(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_source_is_cached_as_empty() {
        let (source, cache) = cache();

        assert!(cache.get(ProjectId(99)).await.unwrap().is_empty());
        assert!(cache.get(ProjectId(99)).await.unwrap().is_empty());

        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
        assert_eq!(cache.cached_len(), 1);
    }

    #[tokio::test]
    async fn test_errors_propagate_and_are_retried() {
        let (source, cache) = cache();

        assert!(matches!(
            cache.get(ProjectId(2)).await,
            Err(SolarError::GenerationData { .. })
        ));
        assert!(cache.get(ProjectId(2)).await.is_err());

        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
        assert_eq!(cache.cached_len(), 0);
    }
}
