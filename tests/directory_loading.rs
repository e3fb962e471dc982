//! Integration tests for loading reference tables from a directory.

use std::collections::HashMap;
use std::path::Path;

use geolookup::{LatLong, LoadError, Origin, Resource, load_table_from_directory};
use tempfile::TempDir;

#[test]
fn test_load_from_temp_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("STATE_CODE_TO_NAME.json"),
        r#"{"1": "Alabama", "99": "Atlantis"}"#,
    )
    .unwrap();

    let names: HashMap<u32, String> =
        load_table_from_directory(Resource::StateCodeToName, temp_dir.path()).unwrap();

    assert_eq!(names.len(), 2);
    assert_eq!(names[&99], "Atlantis");
}

#[test]
fn test_nested_county_table() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("COUNTY_LAT_LONG.json"),
        r#"{"6": {"37": [34.3, -118.2], "75": [37.75, -122.44]}}"#,
    )
    .unwrap();

    let centroids: HashMap<u32, HashMap<u32, LatLong>> =
        load_table_from_directory(Resource::CountyLatLong, temp_dir.path()).unwrap();

    assert_eq!(centroids[&6][&75], LatLong::new(37.75, -122.44));
}

#[test]
fn test_nonexistent_directory_is_missing() {
    let result = load_table_from_directory::<HashMap<u32, String>>(
        Resource::StateCodeToName,
        Path::new("/nonexistent/path/12345"),
    );
    assert!(matches!(result, Err(LoadError::Missing { resource: Resource::StateCodeToName, .. })));
}

#[test]
fn test_invalid_json_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("STATE_LAT_LONG.json");
    std::fs::write(&file_path, "{ this is not valid json }").unwrap();

    let error = load_table_from_directory::<HashMap<u32, LatLong>>(
        Resource::StateLatLong,
        temp_dir.path(),
    )
    .unwrap_err();

    match error {
        LoadError::Json { resource, origin, .. } => {
            assert_eq!(resource, Resource::StateLatLong);
            assert_eq!(origin, Origin::File(file_path));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_other_files_ignored() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("readme.txt"), "Some text").unwrap();
    std::fs::write(temp_dir.path().join("STATE_CODE_TO_NAME.yml"), "1: Alabama").unwrap();

    let result = load_table_from_directory::<HashMap<u32, String>>(
        Resource::StateCodeToName,
        temp_dir.path(),
    );
    assert!(matches!(result, Err(LoadError::Missing { .. })));
}
