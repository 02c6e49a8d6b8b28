// logtally - tests/e2e_report.rs
//
// End-to-end tests for the load -> parse -> aggregate -> report pipeline.
//
// These tests exercise the real filesystem and the real renderers through
// the same `pipeline::run` entry point the binary uses.

use logtally::app::cli::{resolve_invocation, Invocation};
use logtally::app::pipeline::{load_logs, run};
use logtally::core::aggregate::count_by_level;
use logtally::core::filter::filter_by_level;
use logtally::platform::config::AppConfig;
use logtally::util::constants::DEFAULT_MAX_FILE_SIZE;
use logtally::util::error::{ErrorCategory, UsageError};
use std::io::Write;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Run the full report for `positionals` and return stdout as text.
fn report(positionals: &[&str]) -> String {
    let invocation = resolve_invocation(&args(positionals)).unwrap();
    let mut out = Vec::new();
    run(&invocation, &AppConfig::default(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn e2e_counts_table_for_fixture() {
    let path = fixture("app.log");
    let output = report(&[path.to_str().unwrap()]);

    let expected = "Log level | Counts\n\
                    ------------------\n\
                    INFO      | 4     \n\
                    DEBUG     | 3     \n\
                    ERROR     | 2     \n\
                    WARNING   | 1     \n";
    assert_eq!(output, expected);
}

#[test]
fn e2e_counts_and_details_for_level() {
    let path = fixture("app.log");
    let output = report(&[path.to_str().unwrap(), "error"]);

    assert!(output.starts_with("Log level | Counts\n"));
    assert!(output.ends_with(
        "\nLog details for 'ERROR' level\n\
         2024-01-22 09:00:45 - Database connection failed.\n\
         2024-01-22 11:30:15 - Backup process failed.\n"
    ));
}

#[test]
fn e2e_absent_level_prints_empty_details() {
    let path = fixture("app.log");
    let output = report(&[path.to_str().unwrap(), "critical"]);
    assert!(output.ends_with("\nLog details for 'CRITICAL' level\n"));
}

#[test]
fn e2e_sum_of_counts_equals_line_count() {
    let path = fixture("app.log");
    let records = load_logs(&path, DEFAULT_MAX_FILE_SIZE).unwrap();
    let line_count = std::fs::read_to_string(&path).unwrap().lines().count();

    assert_eq!(records.len(), line_count);
    assert_eq!(count_by_level(&records).total(), line_count);
}

#[test]
fn e2e_records_round_trip_to_normalised_lines() {
    let path = fixture("app.log");
    let records = load_logs(&path, DEFAULT_MAX_FILE_SIZE).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    for (record, line) in records.iter().zip(content.lines()) {
        let normalised = line.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(record.to_line(), normalised);
    }
}

#[test]
fn e2e_filter_matches_levels_case_insensitively() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "2024-01-01 10:00:00 Info one").unwrap();
    writeln!(file, "2024-01-01 10:00:01 INFO two").unwrap();
    writeln!(file, "2024-01-01 10:00:02 error three").unwrap();
    writeln!(file, "2024-01-01 10:00:03 info four").unwrap();

    let records = load_logs(file.path(), DEFAULT_MAX_FILE_SIZE).unwrap();
    let selected: Vec<_> = filter_by_level(&records, "INFO")
        .iter()
        .map(|r| r.description.as_str())
        .collect();
    assert_eq!(selected, vec!["one", "two", "four"]);

    // Grouping keys stay case-sensitive.
    assert_eq!(count_by_level(&records).len(), 4);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn e2e_malformed_fixture_aborts_whole_report() {
    let invocation = Invocation {
        path: fixture("malformed.log"),
        level: Some("info".to_string()),
    };
    let mut out = Vec::new();
    let err = run(&invocation, &AppConfig::default(), &mut out).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Corrupted);
    assert!(out.is_empty(), "partial output: {:?}", String::from_utf8_lossy(&out));
}

#[test]
fn e2e_missing_file_is_not_found() {
    let invocation = Invocation {
        path: fixture("does_not_exist.log"),
        level: None,
    };
    let err = run(&invocation, &AppConfig::default(), Vec::new()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[test]
fn e2e_non_utf8_file_is_corrupted() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"2024-01-01 10:00:00 INFO caf\xe9\n").unwrap();
    let err = load_logs(file.path(), DEFAULT_MAX_FILE_SIZE).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Corrupted);
}

#[test]
fn e2e_oversized_file_is_other_failure() {
    let path = fixture("app.log");
    let config = AppConfig {
        max_file_size: 16,
        ..AppConfig::default()
    };
    let invocation = Invocation { path, level: None };
    let err = run(&invocation, &config, Vec::new()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Other);
}

#[test]
fn e2e_usage_errors() {
    assert_eq!(resolve_invocation(&[]), Err(UsageError::MissingPath));
    assert_eq!(
        resolve_invocation(&args(&["a.log", "info", "extra"])),
        Err(UsageError::TooManyArguments { count: 3 })
    );
}
