//! ctr-kat CLI Library
//!
//! Library functions behind the `ctr-kat` binary: load vectors, run them
//! against the built-in registry, compare, and write reports.

#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
// Allow common patterns in test code
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod error;

pub use error::{Error, Result};

use ctr_kat_report::{JunitReport, KatSummary};
use ctr_kat_runner::{
    ErrorReporter, ExecutionConfig, ExecutionResult, Executor, Registry, TestRecord,
    load_vectors, reference_records,
};
use std::path::{Path, PathBuf};

/// Exit status when every record passed
pub const EXIT_PASSED: i32 = 0;
/// Exit status when at least one record failed
pub const EXIT_FAILED: i32 = 1;
/// Exit status on a fatal error
pub const EXIT_FATAL: i32 = 2;

/// Options for a run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Check every binding before processing any record
    pub preflight: bool,
    /// Write a JSON summary here
    pub json: Option<PathBuf>,
    /// Write a JUnit XML report here
    pub junit: Option<PathBuf>,
}

impl RunOptions {
    /// Execution config for these options
    pub fn execution_config(&self) -> ExecutionConfig {
        ExecutionConfig {
            preflight: self.preflight,
        }
    }
}

/// What a completed run produced
#[derive(Debug)]
pub struct RunOutcome {
    /// Records after execution
    pub records: Vec<TestRecord>,
    /// Executor result
    pub execution: ExecutionResult,
    /// Comparator summary
    pub summary: KatSummary,
}

impl RunOutcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.summary.is_success() {
            EXIT_PASSED
        } else {
            EXIT_FAILED
        }
    }

    /// Console lines: one per failure, then the summary line
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .summary
            .failures()
            .map(|case| format!("FAIL {case}"))
            .collect();
        lines.push(self.summary.summary_line());
        lines
    }
}

/// Execute `records` against `registry`, compare, and write requested reports
pub fn run_records(
    mut records: Vec<TestRecord>,
    registry: &Registry,
    options: &RunOptions,
    reporter: ErrorReporter,
) -> Result<RunOutcome> {
    let executor = Executor::with_reporter(registry, options.execution_config(), reporter);
    let execution = executor.execute(&mut records)?;
    let summary = KatSummary::from_records(&records).with_duration_ms(execution.duration_ms);

    if let Some(path) = &options.json {
        summary.write_json(path)?;
        tracing::info!(path = %path.display(), "wrote JSON summary");
    }
    if let Some(path) = &options.junit {
        JunitReport::default().write_to(path, &summary)?;
        tracing::info!(path = %path.display(), "wrote JUnit report");
    }

    Ok(RunOutcome {
        records,
        execution,
        summary,
    })
}

/// Load a vector file and run it against the built-in registry
pub fn run_vectors(path: &Path, options: &RunOptions, reporter: ErrorReporter) -> Result<RunOutcome> {
    let records = load_vectors(path)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded vectors");
    run_records(records, &Registry::builtin(), options, reporter)
}

/// Run the built-in reference table against the built-in registry
pub fn verify_reference(options: &RunOptions, reporter: ErrorReporter) -> Result<RunOutcome> {
    run_records(reference_records()?, &Registry::builtin(), options, reporter)
}

/// One line per compiled-in binding, e.g. `philox2x32 10`
pub fn list_bindings(registry: &Registry) -> Vec<String> {
    registry
        .bindings()
        .into_iter()
        .map(|(kind, rounds)| format!("{kind} {rounds}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctr_kat_gen::GeneratorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCENARIO_A: &str = "threefry2x32 20 0 0 0 0 6b200159 99ba4efe\n";

    fn vectors(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_run_vectors_passes() {
        let file = vectors(SCENARIO_A);
        let (reporter, buffer) = ErrorReporter::buffered();
        let outcome = run_vectors(file.path(), &RunOptions::default(), reporter).unwrap();
        assert_eq!(outcome.exit_code(), EXIT_PASSED);
        assert_eq!(outcome.report_lines().len(), 1);
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_wrong_answer_fails_with_diagnostics() {
        let file = vectors("philox2x32 10 0 0 0 1 2\n");
        let (reporter, buffer) = ErrorReporter::buffered();
        let outcome = run_vectors(file.path(), &RunOptions::default(), reporter).unwrap();
        assert_eq!(outcome.exit_code(), EXIT_FAILED);
        let lines = outcome.report_lines();
        assert!(lines[0].starts_with("FAIL philox2x32 10"));
        assert_eq!(buffer.lines().len(), 2);
    }

    #[test]
    fn test_missing_binding_is_fatal() {
        let file = vectors(&format!("{SCENARIO_A}ars4x32 7 0 0 0 0 0 0 0 0 0 0 0 0\n"));
        let (reporter, _buffer) = ErrorReporter::buffered();
        let err = run_vectors(file.path(), &RunOptions::default(), reporter).unwrap_err();
        assert!(matches!(
            err,
            Error::Runner(ctr_kat_runner::Error::MissingBinding {
                kind: GeneratorKind::Ars4x32,
                rounds: 7
            })
        ));
    }

    #[test]
    fn test_reports_written() {
        let file = vectors(SCENARIO_A);
        let dir = tempfile::tempdir().unwrap();
        let options = RunOptions {
            preflight: true,
            json: Some(dir.path().join("kat.json")),
            junit: Some(dir.path().join("kat.xml")),
        };
        let (reporter, _buffer) = ErrorReporter::buffered();
        run_vectors(file.path(), &options, reporter).unwrap();
        assert!(
            std::fs::read_to_string(dir.path().join("kat.json"))
                .unwrap()
                .contains("\"passed\": 1")
        );
        assert!(
            std::fs::read_to_string(dir.path().join("kat.xml"))
                .unwrap()
                .contains("tests=\"1\"")
        );
    }

    #[test]
    fn test_verify_reference_passes() {
        let (reporter, _buffer) = ErrorReporter::buffered();
        let outcome = verify_reference(&RunOptions::default(), reporter).unwrap();
        assert_eq!(outcome.exit_code(), EXIT_PASSED);
        assert_eq!(outcome.execution.total, outcome.summary.passed);
    }

    #[test]
    fn test_list_bindings_sorted() {
        let lines = list_bindings(&Registry::builtin());
        assert_eq!(lines[0], "threefry2x32 13");
        assert!(lines.contains(&"philox4x32 7".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("ars4x32")));
    }
}
