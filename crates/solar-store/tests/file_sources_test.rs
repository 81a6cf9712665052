//! Integration tests for the file-backed sources

use solar_core::error::SolarError;
use solar_core::models::{ProjectId, UsState};
use solar_core::ports::{GenerationSource, ProjectSource};
use solar_core::ProjectStore;
use solar_store::{CsvGenerationSource, JsonProjectSource};
use std::fs;
use tempfile::TempDir;

const PROJECTS_JSON: &str = r#"[
    {
        "id": 1,
        "name": "Hudson Valley Array",
        "capacity_kw": 7.5,
        "address": "12 River Rd",
        "city": "Kingston",
        "state": "NY",
        "zip": "12401"
    },
    {
        "id": 2,
        "name": "Narragansett Rooftop",
        "capacity_kw": 5.0,
        "address": "8 Bay St",
        "city": "Providence",
        "state": "RI",
        "zip": "02903"
    }
]"#;

#[tokio::test]
async fn test_json_source_loads_all_projects() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects.json");
    fs::write(&path, PROJECTS_JSON).unwrap();

    let source = JsonProjectSource::new(&path);
    let store = ProjectStore::load(&source).await.unwrap();

    assert_eq!(store.len(), 2);
    let project = store.get(ProjectId(2)).unwrap();
    assert_eq!(project.state, UsState::RhodeIsland);
    assert_eq!(project.zip, "02903");
}

#[tokio::test]
async fn test_json_source_missing_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let source = JsonProjectSource::new(dir.path().join("absent.json"));

    let err = source.load_projects().await.unwrap_err();
    assert!(matches!(err, SolarError::ProjectDataset { .. }));
    assert_eq!(err.kind(), solar_core::ErrorKind::Startup);
}

#[tokio::test]
async fn test_json_source_rejects_any_bad_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects.json");
    // Second record has a state outside the accepted set
    fs::write(
        &path,
        r#"[
            {"id": 1, "name": "a", "capacity_kw": 1.0, "address": "x", "city": "y", "state": "NY", "zip": "1"},
            {"id": 2, "name": "b", "capacity_kw": 2.0, "address": "x", "city": "y", "state": "VT", "zip": "2"}
        ]"#,
    )
    .unwrap();

    let source = JsonProjectSource::new(&path);
    assert!(matches!(ProjectStore::load(&source).await, Err(SolarError::ProjectDataset { .. })));
}

#[tokio::test]
async fn test_json_source_rejects_missing_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects.json");
    fs::write(&path, r#"[{"id": 1, "name": "a", "capacity_kw": 1.0}]"#).unwrap();

    let source = JsonProjectSource::new(&path);
    assert!(source.load_projects().await.is_err());
}

#[tokio::test]
async fn test_csv_source_reads_project_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("1_data.csv"),
        "ts,Generation Meter RM - 01,Other\n\
         2022-01-05T00:00:00,10,x\n\
         2022-01-20T00:00:00,15,y\n\
         2022-02-01T00:00:00,5,z\n",
    )
    .unwrap();

    let source = CsvGenerationSource::new(dir.path());
    let points = source.load_generation(ProjectId(1)).await.unwrap().unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points.iter().map(|p| p.total).sum::<f64>(), 30.0);
}

#[tokio::test]
async fn test_csv_source_without_file_is_none() {
    let dir = TempDir::new().unwrap();
    let source = CsvGenerationSource::new(dir.path());

    assert!(source.load_generation(ProjectId(9)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_csv_source_malformed_row_is_data_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("3_data.csv"),
        "ts,Generation Meter RM - 01\n2022-01-05T00:00:00,ten\n",
    )
    .unwrap();

    let source = CsvGenerationSource::new(dir.path());
    let err = source.load_generation(ProjectId(3)).await.unwrap_err();

    assert!(matches!(err, SolarError::GenerationData { .. }));
    assert!(err.to_string().contains("3_data.csv"));
}

#[test]
fn test_csv_path_layout() {
    let source = CsvGenerationSource::new("/data/generation_data");
    assert_eq!(
        source.path_for(ProjectId(42)),
        std::path::PathBuf::from("/data/generation_data/42_data.csv")
    );
}
