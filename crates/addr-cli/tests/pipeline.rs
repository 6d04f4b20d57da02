//! End-to-end runs of the standardize pipeline against temporary files.

use std::fs;
use std::path::Path;

use addr_cli::pipeline::{PipelineConfig, standardize_file};
use addr_cli::types::{IssueAction, MAX_RECORDED_ISSUES};
use addr_ingest::{CsvOptions, IngestError};
use addr_normalization::{ErrorPolicy, StandardizeOptions};
use tempfile::TempDir;

fn config(dir: &Path, chunk_size: usize, policy: ErrorPolicy) -> PipelineConfig {
    PipelineConfig {
        input_file: dir.join("addresses.csv"),
        output_file: dir.join("standardized.csv"),
        csv: CsvOptions::default().with_chunk_size(chunk_size),
        standardize: StandardizeOptions::new("HOUSENUM", "STREET").with_error_policy(policy),
    }
}

#[test]
fn test_standardize_file_counts_batches_and_records() {
    let dir = TempDir::new().unwrap();
    let config = config(dir.path(), 2, ErrorPolicy::Fail);
    fs::write(
        &config.input_file,
        "HOUSENUM,STREET\n101,w elm ave\n12r,sw oak road\n7,n main st\n",
    )
    .unwrap();

    let result = standardize_file(&config).unwrap();

    assert_eq!(result.batches, 2);
    assert_eq!(result.records_read, 3);
    assert_eq!(result.records_written, 3);
    assert!(!result.has_errors());
    let written = fs::read_to_string(&config.output_file).unwrap();
    insta::assert_snapshot!(written.trim_end(), @r"
    HOUSENUM,STREET,HOUSENUM_STD,PARTIAL,REAR,ADDITIONAL_HOUSENUMS,STREET_NAME,STREET_SUFFIX,STREET_DIRECTIONAL,ADDITIONAL_STREETS
    101,W ELM AVE,101,,,,ELM,AVE,W,
    12R,SW OAK ROAD,12,,R,,OAK,RD,SW,
    7,N MAIN ST,7,,,,MAIN,ST,N,
    ");
}

#[test]
fn test_header_only_input_writes_header() {
    let dir = TempDir::new().unwrap();
    let config = config(dir.path(), 10, ErrorPolicy::Fail);
    fs::write(&config.input_file, "ID,HOUSENUM,STREET\n").unwrap();

    let result = standardize_file(&config).unwrap();

    assert_eq!(result.batches, 0);
    assert_eq!(result.records_written, 0);
    let written = fs::read_to_string(&config.output_file).unwrap();
    assert_eq!(
        written.trim_end(),
        "ID,HOUSENUM,STREET,HOUSENUM_STD,PARTIAL,REAR,ADDITIONAL_HOUSENUMS,\
         STREET_NAME,STREET_SUFFIX,STREET_DIRECTIONAL,ADDITIONAL_STREETS"
    );
}

#[test]
fn test_missing_column_creates_no_output() {
    let dir = TempDir::new().unwrap();
    let mut config = config(dir.path(), 10, ErrorPolicy::Fail);
    config.standardize.street_column = "STREET_ADDRESS".to_string();
    fs::write(&config.input_file, "HOUSENUM,STREET\n1,ELM\n").unwrap();

    let err = standardize_file(&config).unwrap_err();

    assert!(format!("{err:#}").contains("STREET_ADDRESS"));
    assert!(!config.output_file.exists());
}

#[test]
fn test_existing_output_is_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let config = config(dir.path(), 10, ErrorPolicy::Fail);
    fs::write(&config.input_file, "HOUSENUM,STREET\n1,ELM\n").unwrap();
    fs::write(&config.output_file, "keep me\n").unwrap();

    let err = standardize_file(&config).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::OutputExists { .. })
    ));
    assert_eq!(fs::read_to_string(&config.output_file).unwrap(), "keep me\n");
}

#[test]
fn test_skip_policy_reports_issues() {
    let dir = TempDir::new().unwrap();
    let config = config(dir.path(), 2, ErrorPolicy::Skip);
    fs::write(
        &config.input_file,
        "HOUSENUM,STREET\n1,ELM\n2,&\n3,PINE\n ,OAK\n",
    )
    .unwrap();

    let result = standardize_file(&config).unwrap();

    assert_eq!(result.records_read, 4);
    assert_eq!(result.records_written, 2);
    assert_eq!(result.records_skipped, 2);
    assert!(result.has_errors());
    let rows: Vec<(usize, &str, IssueAction)> = result
        .issues
        .iter()
        .map(|issue| (issue.row, issue.column.as_str(), issue.action))
        .collect();
    assert_eq!(
        rows,
        vec![
            (1, "STREET", IssueAction::Skipped),
            (3, "HOUSENUM", IssueAction::Skipped),
        ]
    );
}

#[test]
fn test_keep_policy_writes_every_record() {
    let dir = TempDir::new().unwrap();
    let config = config(dir.path(), 10, ErrorPolicy::Keep);
    fs::write(&config.input_file, "HOUSENUM,STREET\n,ELM\n5,OAK\n").unwrap();

    let result = standardize_file(&config).unwrap();

    assert_eq!(result.records_written, 2);
    assert_eq!(result.records_kept_with_errors, 1);
    let written = fs::read_to_string(&config.output_file).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[1], ",ELM,,,,,,,,");
    assert_eq!(lines[2], "5,OAK,5,,,,OAK,,,");
}

#[test]
fn test_summary_serializes_issue_actions() {
    let dir = TempDir::new().unwrap();
    let config = config(dir.path(), 10, ErrorPolicy::Keep);
    fs::write(&config.input_file, "HOUSENUM,STREET\n,ELM\n").unwrap();

    let result = standardize_file(&config).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["records_kept_with_errors"], 1);
    assert_eq!(json["issues"][0]["action"], "kept");
    assert_eq!(json["issues"][0]["column"], "HOUSENUM");
}

#[test]
fn test_recorded_issues_are_capped() {
    let dir = TempDir::new().unwrap();
    let config = config(dir.path(), 400, ErrorPolicy::Keep);
    let bad_records = MAX_RECORDED_ISSUES + 5;
    let mut input = String::from("HOUSENUM,STREET\n");
    for _ in 0..bad_records {
        input.push_str(",ELM\n");
    }
    fs::write(&config.input_file, input).unwrap();

    let result = standardize_file(&config).unwrap();

    assert_eq!(result.records_written, bad_records);
    assert_eq!(result.records_kept_with_errors, bad_records);
    assert_eq!(result.error_count(), bad_records);
    assert_eq!(result.issues.len(), MAX_RECORDED_ISSUES);
    assert_eq!(result.issues.last().unwrap().row, MAX_RECORDED_ISSUES - 1);
}
