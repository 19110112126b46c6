//! Tests for the report and summary writers.

use std::fs;

use stdef_model::{DataType, FieldConstraint, Section, StandardDefinition};
use stdef_report::{append_report, append_summary, ensure_output_dir, remove_if_exists};
use stdef_validate::{LineProcessor, Process};
use tempfile::TempDir;

fn sample_definition() -> StandardDefinition {
    StandardDefinition::new(vec![Section {
        key: "L1".to_string(),
        sub_sections: vec![
            FieldConstraint {
                key: "L11".to_string(),
                data_type: DataType::Digits,
                max_length: 1,
            },
            FieldConstraint {
                key: "L12".to_string(),
                data_type: DataType::WordCharacters,
                max_length: 3,
            },
            FieldConstraint {
                key: "L13".to_string(),
                data_type: DataType::WordCharacters,
                max_length: 2,
            },
        ],
    }])
}

#[test]
fn report_writes_header_once_then_appends() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.csv");
    let definition = sample_definition();

    let first = LineProcessor::new("L1&99&&A", &definition).process().unwrap();
    let second = LineProcessor::new("L1&4&AbC&xY", &definition)
        .process()
        .unwrap();
    append_report(&path, &first.records).unwrap();
    append_report(&path, &second.records).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(
        lines[0],
        "Section,Sub-Section,Given DataType,Expected DataType,Given Length,Expected MaxLength,Error Code"
    );
    assert_eq!(lines[1], "L1,L11,digits,digits,2,1,E03");
    assert_eq!(lines[2], "L1,L12,,word_characters,,3,E04");
    assert_eq!(lines[3], "L1,L13,word_characters,word_characters,1,2,E01");
    assert_eq!(lines[4], "L1,L11,digits,digits,1,1,E01");
    // Only one header in the whole file.
    assert_eq!(
        contents.matches("Section,Sub-Section").count(),
        1,
        "header must appear exactly once"
    );
}

#[test]
fn summary_separates_lines_with_a_blank_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("summary.txt");
    let definition = sample_definition();

    let outcome = LineProcessor::new("L1&99&&A", &definition).process().unwrap();
    append_summary(&path, &outcome.records).unwrap();
    append_summary(&path, &outcome.records).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let expected_block = "\
L11 field under section L1 fails the max length (expected: 1) validation, however it passes the data type (digits) validation
L12 field under section L1 fails all the validation criteria.
L13 field under segment L1 passes all the validation criteria
";
    assert_eq!(
        contents,
        format!("{expected_block}\n{expected_block}\n"),
        "each line's block ends with a blank separator"
    );
}

#[test]
fn remove_if_exists_tolerates_absence() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.csv");
    remove_if_exists(&path).unwrap();

    fs::write(&path, "stale").unwrap();
    remove_if_exists(&path).unwrap();
    assert!(!path.exists());
}

#[test]
fn ensure_output_dir_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("parsed").join("deep");
    ensure_output_dir(&nested).unwrap();
    ensure_output_dir(&nested).unwrap();
    assert!(nested.is_dir());
}
