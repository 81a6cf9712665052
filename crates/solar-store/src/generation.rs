//! Per-project generation data stored as CSV files.
//!
//! Each project's readings live in `{dir}/{id}_data.csv`. Only the date column
//! and the designated meter column are read; every other column is ignored.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use solar_core::error::{Result, SolarError};
use solar_core::models::{ProjectId, TimeSeriesPoint};
use solar_core::ports::GenerationSource;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Header of the reading date column
pub const DATE_COLUMN: &str = "ts";

/// Header of the column holding the daily output total
pub const OUTPUT_COLUMN: &str = "Generation Meter RM - 01";

/// Format of the reading date, always midnight
pub const DATE_FORMAT: &str = "%Y-%m-%dT00:00:00";

#[derive(Debug, Deserialize)]
struct GenerationRow {
    #[serde(rename = "ts")]
    ts: String,
    #[serde(rename = "Generation Meter RM - 01")]
    total: String,
}

/// Generation source reading one CSV file per project from a directory
#[derive(Debug, Clone)]
pub struct CsvGenerationSource {
    dir: PathBuf,
}

impl CsvGenerationSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding a project's readings
    pub fn path_for(&self, id: ProjectId) -> PathBuf {
        self.dir.join(format!("{}_data.csv", id))
    }
}

#[async_trait]
impl GenerationSource for CsvGenerationSource {
    async fn load_generation(&self, id: ProjectId) -> Result<Option<Vec<TimeSeriesPoint>>> {
        let path = self.path_for(id);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SolarError::Io(e)),
        };

        tracing::debug!(path = %path.display(), size = bytes.len(), "Parsing generation file");

        parse_generation_csv(bytes.as_slice(), &path).map(Some)
    }
}

/// Parse generation readings from CSV.
///
/// Any row with an unparseable date or output value fails the whole parse;
/// rows are never skipped. `path` is only used in error messages.
pub fn parse_generation_csv<R: Read>(input: R, path: &Path) -> Result<Vec<TimeSeriesPoint>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);

    let headers = reader.headers().map_err(|e| data_error(path, format!("header: {}", e)))?;
    for column in [DATE_COLUMN, OUTPUT_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(data_error(path, format!("missing column '{}'", column)));
        }
    }

    let mut points = Vec::new();

    for (i, record) in reader.deserialize::<GenerationRow>().enumerate() {
        let row = i + 1;
        let record = record.map_err(|e| data_error(path, format!("row {}: {}", row, e)))?;

        let ts = NaiveDate::parse_from_str(&record.ts, DATE_FORMAT).map_err(|e| {
            data_error(
                path,
                format!("row {}: invalid {} '{}': {}", row, DATE_COLUMN, record.ts, e),
            )
        })?;

        let total = record
            .total
            .parse::<f64>()
            .ok()
            .filter(|total| total.is_finite())
            .ok_or_else(|| {
                data_error(
                    path,
                    format!("row {}: invalid {} '{}'", row, OUTPUT_COLUMN, record.total),
                )
            })?;

        points.push(TimeSeriesPoint::new(ts, total));
    }

    Ok(points)
}

fn data_error(path: &Path, reason: String) -> SolarError {
    SolarError::GenerationData {
        path: path.to_path_buf(),
        reason,
    }
}
