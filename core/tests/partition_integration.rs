//! File-level partition behaviour: fault paths and idempotence.
use std::fs;

use oddjobs_core::api::{partition_file, PartitionError, PartitionMode};
use pretty_assertions::assert_eq;

#[test]
fn missing_input_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.txt");
    let output = dir.path().join("out.txt");
    fs::write(&output, "previous\n").unwrap();

    let err = partition_file(Some(&input), Some(&output), PartitionMode::Compat).unwrap_err();
    assert!(matches!(err, PartitionError::InputNotFound));
    assert_eq!(err.to_string(), "Input file not found!");
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
}

#[test]
fn missing_output_arg_does_not_create_anything() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "H\nA B\n").unwrap();

    let err = partition_file(Some(&input), None, PartitionMode::Compat).unwrap_err();
    assert!(matches!(err, PartitionError::MissingOutputPath));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn missing_input_is_reported_before_missing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.txt");
    let err = partition_file(Some(&input), None, PartitionMode::Compat).unwrap_err();
    assert!(matches!(err, PartitionError::InputNotFound));
}

#[test]
fn rewrites_and_releases_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "HEADER\nA1 B1\nA2 B2\nTRAILER\n").unwrap();

    partition_file(Some(&input), Some(&output), PartitionMode::Compat).unwrap();
    let first = fs::read_to_string(&output).unwrap();
    assert!(first.starts_with("HEADER"));
    assert!(first.contains("B2"));

    partition_file(Some(&input), Some(&output), PartitionMode::Compat).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), first);

    fs::remove_file(&input).unwrap();
}

#[test]
fn records_mode_reverses_whole_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "H\nA1 B1\nA2 B2\nT\n").unwrap();

    let parsed = partition_file(Some(&input), Some(&output), PartitionMode::Records).unwrap();
    assert_eq!(parsed.header, "H");
    assert_eq!(parsed.data.len(), 2);
    assert_eq!(parsed.trailer, "T");
    assert!(fs::read_to_string(&output).unwrap().starts_with("H"));
}

#[test]
fn input_is_released_after_output_fault() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out_dir");
    fs::write(&input, "H\nA B\nC\nT\n").unwrap();
    fs::create_dir(&output).unwrap();

    let err = partition_file(Some(&input), Some(&output), PartitionMode::Compat).unwrap_err();
    assert!(matches!(err, PartitionError::Io(_)));

    fs::remove_file(&input).unwrap();
    assert!(!input.exists());
}

#[test]
fn malformed_input_is_reported_and_released() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "H\na b\n").unwrap();

    let err = partition_file(Some(&input), Some(&output), PartitionMode::Compat).unwrap_err();
    assert!(matches!(err, PartitionError::Malformed(_)));
    assert!(!output.exists());

    fs::remove_file(&input).unwrap();
}

#[test]
fn empty_input_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "").unwrap();

    let err = partition_file(Some(&input), Some(&output), PartitionMode::Records).unwrap_err();
    assert!(matches!(err, PartitionError::Malformed(_)));
    assert!(!output.exists());
}
