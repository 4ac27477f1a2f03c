#![allow(clippy::unwrap_used)]
//! Integration tests for `header_validator::validate_tree`.

use std::fs;
use std::path::{Path, PathBuf};

use header_validator::{
    ConfigError, Outcome, ReadErrorKind, RequiredField, ScanConfig, validate_tree,
};
use tempfile::TempDir;

const FULL_HEADER_PY: &str =
    "# Purpose: demo\n# Author: Test User\n# Date: 2025-12-17\n# Modified By: N/A\n\nimport os\n";

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample")
}

fn result_for<'a>(
    report: &'a header_validator::ValidationReport,
    name: &str,
) -> &'a header_validator::HeaderResult {
    report
        .results
        .iter()
        .find(|r| r.file.path.ends_with(name))
        .unwrap_or_else(|| panic!("no result for {name}: {report:?}"))
}

#[test]
fn test_validate_tree_missing_root_is_config_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does_not_exist");
    let err = validate_tree(&ScanConfig::new(&missing)).unwrap_err();
    assert!(matches!(err, ConfigError::MissingRoot(_)));
    assert!(err.to_string().contains("does not exist"), "got: {err}");
}

#[test]
fn test_validate_tree_complete_header_passes() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("ok.py"), FULL_HEADER_PY).unwrap();

    let report = validate_tree(&ScanConfig::new(tmp.path())).unwrap();
    assert_eq!(report.checked, 1);
    assert_eq!(report.passed, 1);
    assert!(report.ok, "expected ok, got: {:?}", report.results);
}

#[test]
fn test_validate_tree_partial_header_lists_exact_missing_fields() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("partial.go"),
        "// Purpose: x\n// Author: y\n\npackage main\n",
    )
    .unwrap();

    let report = validate_tree(&ScanConfig::new(tmp.path())).unwrap();
    assert!(!report.ok);
    let result = &report.results[0];
    assert_eq!(result.outcome, Outcome::MissingFields);
    assert_eq!(
        result.missing,
        vec![RequiredField::Date, RequiredField::ModifiedBy]
    );
}

#[test]
fn test_validate_tree_empty_file_misses_every_field() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("empty.java"), "").unwrap();

    let report = validate_tree(&ScanConfig::new(tmp.path())).unwrap();
    assert_eq!(report.failed, 1);
    assert_eq!(report.results[0].missing, RequiredField::ALL.to_vec());
}

#[test]
fn test_validate_tree_exclude_removes_subtree_from_counts() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("ok.py"), FULL_HEADER_PY).unwrap();
    let third_party = tmp.path().join("third_party");
    fs::create_dir(&third_party).unwrap();
    fs::write(third_party.join("lib.py"), "import os\n").unwrap();

    let report = validate_tree(&ScanConfig::new(tmp.path())).unwrap();
    assert_eq!(report.checked, 2);
    assert!(!report.ok);

    let mut config = ScanConfig::new(tmp.path());
    config.exclude_dirs = vec!["third_party".to_owned()];
    let report = validate_tree(&config).unwrap();
    assert_eq!(report.checked, 1, "exclude should reduce file count");
    assert!(report.ok);
    assert!(
        report
            .results
            .iter()
            .all(|r| !r.file.path.starts_with(&third_party))
    );
}

#[test]
fn test_validate_tree_non_utf8_file_is_unreadable_not_fatal() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("binary.py"), [0xFF, 0xFE, 0x00, 0x01]).unwrap();
    fs::write(tmp.path().join("ok.py"), FULL_HEADER_PY).unwrap();

    let report = validate_tree(&ScanConfig::new(tmp.path())).unwrap();
    assert_eq!(report.checked, 2);
    assert_eq!(report.passed, 1);
    assert_eq!(report.unreadable, 1);
    let binary = result_for(&report, "binary.py");
    assert_eq!(binary.outcome, Outcome::Unreadable);
    assert_eq!(binary.read_error, Some(ReadErrorKind::InvalidEncoding));
}

#[test]
fn test_validate_tree_oversized_file_is_unreadable() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("big.py"), FULL_HEADER_PY).unwrap();

    let mut config = ScanConfig::new(tmp.path());
    config.max_file_size = 10;
    let report = validate_tree(&config).unwrap();
    assert_eq!(report.unreadable, 1);
    assert_eq!(report.results[0].read_error, Some(ReadErrorKind::TooLarge));
    assert!(!report.ok);
}

#[test]
fn test_validate_tree_no_matching_files_is_ok() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("readme.txt"), "Purpose: none").unwrap();

    let report = validate_tree(&ScanConfig::new(tmp.path())).unwrap();
    assert_eq!(report.checked, 0);
    assert!(report.ok, "empty run should be ok, not an error");
}

#[test]
fn test_validate_tree_is_idempotent() {
    let root = fixtures();
    let first = validate_tree(&ScanConfig::new(&root)).unwrap();
    let second = validate_tree(&ScanConfig::new(&root)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_validate_tree_fixture_samples() {
    let report = validate_tree(&ScanConfig::new(fixtures())).unwrap();
    assert_eq!(report.checked, 6, "README.txt must be ignored: {report:?}");
    assert_eq!(report.passed, 3);
    assert_eq!(report.failed, 3);

    for name in ["inventory.go", "report.py", "Ledger.java"] {
        assert!(result_for(&report, name).passed(), "{name} should pass");
    }
    assert_eq!(
        result_for(&report, "partial.js").missing,
        vec![RequiredField::Date, RequiredField::ModifiedBy]
    );
    assert_eq!(
        result_for(&report, "bare.ts").missing,
        RequiredField::ALL.to_vec()
    );

    let mut config = ScanConfig::new(fixtures());
    config.exclude_dirs = vec!["vendor".to_owned()];
    let report = validate_tree(&config).unwrap();
    assert_eq!(report.checked, 5);
    assert_eq!(report.failed, 2);
}

#[test]
fn test_validate_tree_single_file_root() {
    let report = validate_tree(&ScanConfig::new(fixtures().join("partial.js"))).unwrap();
    assert_eq!(report.checked, 1);
    assert!(!report.ok);
}

#[test]
fn test_write_human_success_output() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("ok.py"), FULL_HEADER_PY).unwrap();
    let report = validate_tree(&ScanConfig::new(tmp.path())).unwrap();

    let mut buf = Vec::new();
    header_validator::output::write_human(&report, false, &mut buf).unwrap();
    let output = String::from_utf8(buf).unwrap();

    assert!(output.contains("SOURCE HEADER VALIDATOR"), "got: {output}");
    assert!(output.contains("Files checked:  1"));
    assert!(output.contains("Files passed:   1"));
    assert!(output.contains("Files failed:   0"));
    assert!(output.contains("All 1 files passed"));
    assert!(!output.contains("FAILED FILES"));
    assert!(!output.contains("PASSED FILES"));
}

#[test]
fn test_write_human_failure_output() {
    let report = validate_tree(&ScanConfig::new(fixtures())).unwrap();

    let mut buf = Vec::new();
    header_validator::output::write_human(&report, true, &mut buf).unwrap();
    let output = String::from_utf8(buf).unwrap();

    assert!(output.contains("FAILED FILES"));
    assert!(output.contains("partial.js: missing Date, Modified By [Purpose: Client-side form helpers]"));
    assert!(output.contains("bare.ts: missing Purpose, Author, Date, Modified By [no leading comment block]"));
    assert!(output.contains("PASSED FILES"));
    assert!(output.contains("inventory.go: ok [Purpose: Tracks stock levels"));
    assert!(output.contains("3 file(s) failed header validation"));
    assert!(output.contains("Modified By: <value>"));
}

#[test]
fn test_write_json_output_contract() {
    let report = validate_tree(&ScanConfig::new(fixtures())).unwrap();

    let mut buf = Vec::new();
    header_validator::output::write_json(&report, &mut buf).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert_eq!(json["checked"], 6);
    assert_eq!(json["passed"], 3);
    assert_eq!(json["failed"], 3);
    assert_eq!(json["ok"], false);
    let results = json["results"].as_array().unwrap();
    let partial = results
        .iter()
        .find(|r| r["path"].as_str().unwrap().ends_with("partial.js"))
        .unwrap();
    assert_eq!(partial["language"], "javascript");
    assert_eq!(partial["outcome"], "missing_fields");
    assert_eq!(partial["missing"], serde_json::json!(["Date", "Modified By"]));
    assert!(partial.get("header").is_none());
    assert!(partial.get("read_error").is_none());
}
