//! Tests for standard definition loading.

use std::fs;

use stdef_standards::{StandardsError, load_standard_definition, parse_standard_definition};
use tempfile::TempDir;

const SAMPLE: &str = r#"[
    {
        "key": "L1",
        "sub_sections": [
            {"key": "L11", "data_type": "digits", "max_length": 1},
            {"key": "L12", "data_type": "word_characters", "max_length": 3},
            {"key": "L13", "data_type": "word_characters", "max_length": 2}
        ]
    },
    {
        "key": "L4",
        "sub_sections": [
            {"key": "L41", "data_type": "word_characters", "max_length": 1},
            {"key": "L42", "data_type": "digits", "max_length": 6}
        ]
    }
]"#;

#[test]
fn loads_and_indexes_a_definition_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("standard_definition.json");
    fs::write(&path, SAMPLE).unwrap();

    let definition = load_standard_definition(&path).unwrap();
    assert_eq!(definition.sections().len(), 2);
    assert_eq!(definition.resolve("L4").unwrap().len(), 2);
}

#[test]
fn missing_file_reports_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("not_here.json");

    let error = load_standard_definition(&path).unwrap_err();
    assert!(matches!(error, StandardsError::Io { .. }));
    assert!(error.to_string().contains("not_here.json"));
    assert!(error.to_string().contains("not accessible"));
}

#[test]
fn malformed_json_reports_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();

    let error = load_standard_definition(&path).unwrap_err();
    assert!(matches!(error, StandardsError::Json { .. }));
    assert!(error.to_string().contains("broken.json"));
}

#[test]
fn parses_in_memory_json() {
    let definition = parse_standard_definition(SAMPLE).unwrap();
    let keys: Vec<&str> = definition
        .sections()
        .iter()
        .map(|section| section.key.as_str())
        .collect();
    assert_eq!(keys, vec!["L1", "L4"]);
}

#[test]
fn wrong_shape_is_a_parse_error() {
    // A top-level object instead of an array of sections.
    assert!(parse_standard_definition(r#"{"key": "L1"}"#).is_err());
}
