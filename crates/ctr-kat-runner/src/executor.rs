//! Record executor
//!
//! Walks the record sequence in order, dispatching each record to the routine
//! registered for its `(kind, rounds)`. A missing binding aborts the run.

#![allow(clippy::cast_possible_truncation)]

use crate::error::Result;
use crate::record::TestRecord;
use crate::registry::Registry;
use crate::reporter::{AdaptorClass, ErrorReporter};
use crate::validate::{RecordOutcome, RecordState};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Execution configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Check every record's binding before touching any record
    pub preflight: bool,
}

/// Executor for running records against a registry
#[derive(Debug)]
pub struct Executor<'r> {
    config: ExecutionConfig,
    registry: &'r Registry,
    reporter: ErrorReporter,
}

impl<'r> Executor<'r> {
    /// Executor with default config, reporting to standard error
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_config(registry, ExecutionConfig::default())
    }

    /// Executor with custom config, reporting to standard error
    #[must_use]
    pub fn with_config(registry: &'r Registry, config: ExecutionConfig) -> Self {
        Self::with_reporter(registry, config, ErrorReporter::stderr())
    }

    /// Executor with custom config and reporter
    #[must_use]
    pub fn with_reporter(
        registry: &'r Registry,
        config: ExecutionConfig,
        reporter: ErrorReporter,
    ) -> Self {
        Self {
            config,
            registry,
            reporter,
        }
    }

    /// Run every record in order
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingBinding`] for the first record whose
    /// pair is not registered. Without preflight, records before it have
    /// already been processed.
    pub fn execute(&self, records: &mut [TestRecord]) -> Result<ExecutionResult> {
        let start = Instant::now();

        if self.config.preflight {
            self.preflight(records)?;
        }

        let mut outcomes = Vec::with_capacity(records.len());
        for (index, record) in records.iter_mut().enumerate() {
            let routine = self.registry.lookup(record.kind, record.rounds)?;
            tracing::trace!(index, kind = %record.kind, rounds = record.rounds, "dispatch");
            outcomes.push(routine.validate(record, &self.reporter)?);
        }

        let published = outcomes.iter().filter(|o| o.is_published()).count();
        let result = ExecutionResult {
            total: outcomes.len(),
            published,
            suppressed: outcomes.len() - published,
            duration_ms: start.elapsed().as_millis() as u64,
            outcomes,
        };
        tracing::debug!(
            total = result.total,
            published = result.published,
            suppressed = result.suppressed,
            "execution finished"
        );
        Ok(result)
    }

    fn preflight(&self, records: &[TestRecord]) -> Result<()> {
        for record in records {
            self.registry.lookup(record.kind, record.rounds)?;
        }
        Ok(())
    }

    /// Shared reporter
    #[must_use]
    pub fn reporter(&self) -> &ErrorReporter {
        &self.reporter
    }

    /// Get config
    #[must_use]
    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }
}

/// Result of executing a record sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Records processed
    pub total: usize,
    /// Records whose direct result was published
    pub published: usize,
    /// Records left unpublished
    pub suppressed: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
    /// Per-record outcomes, in input order
    pub outcomes: Vec<RecordOutcome>,
}

impl ExecutionResult {
    /// Check if every record was published
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.suppressed == 0
    }

    /// Indices of suppressed records
    #[must_use]
    pub fn suppressed_indices(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| o.state == RecordState::Suppressed)
            .map(|(i, _)| i)
            .collect()
    }

    /// Local errors summed over all records for `class`
    #[must_use]
    pub fn local_errors(&self, class: AdaptorClass) -> usize {
        self.outcomes
            .iter()
            .map(|o| match class {
                AdaptorClass::SingleUse => o.adaptor_errors,
                AdaptorClass::Engine => o.engine_errors,
            })
            .sum()
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use ctr_kat_gen::GeneratorKind;

    fn scenario_a() -> TestRecord {
        TestRecord::new(
            GeneratorKind::Threefry2x32,
            20,
            &[0, 0],
            &[0, 0],
            &[0x6b20_0159, 0x99ba_4efe],
        )
        .unwrap()
    }

    fn philox_zero() -> TestRecord {
        TestRecord::new(
            GeneratorKind::Philox2x32,
            10,
            &[0, 0],
            &[0],
            &[0xff1d_ae59, 0x6cd1_0df2],
        )
        .unwrap()
    }

    fn unregistered() -> TestRecord {
        TestRecord::new(GeneratorKind::Ars4x32, 7, &[0; 4], &[0; 4], &[0; 4]).unwrap()
    }

    #[test]
    fn test_execute_publishes_in_order() {
        let registry = Registry::builtin();
        let (reporter, buffer) = ErrorReporter::buffered();
        let executor = Executor::with_reporter(&registry, ExecutionConfig::default(), reporter);
        let mut records = vec![scenario_a(), philox_zero()];

        let result = executor.execute(&mut records).unwrap();
        assert_eq!(result.total, 2);
        assert_eq!(result.published, 2);
        assert!(result.is_success());
        assert_eq!(result.outcomes[0].kind, GeneratorKind::Threefry2x32);
        assert_eq!(result.outcomes[1].kind, GeneratorKind::Philox2x32);
        assert_eq!(records[0].computed(), vec![0x6b20_0159, 0x99ba_4efe]);
        assert_eq!(records[1].computed(), records[1].expected());
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_executor_never_compares_computed() {
        let registry = Registry::builtin();
        let (reporter, buffer) = ErrorReporter::buffered();
        let executor = Executor::with_reporter(&registry, ExecutionConfig::default(), reporter);
        let mut bad =
            TestRecord::new(GeneratorKind::Philox2x32, 10, &[0, 0], &[0], &[1, 2]).unwrap();
        bad.set_field(crate::record::Field::Computed, &[1, 2]).unwrap();
        let mut records = vec![bad];

        let result = executor.execute(&mut records).unwrap();
        assert_eq!(result.suppressed, 1);
        assert_eq!(result.suppressed_indices(), vec![0]);
        // stale computed survives suppression
        assert_eq!(records[0].computed(), vec![1, 2]);
        assert_eq!(result.local_errors(AdaptorClass::SingleUse), 2);
        assert_eq!(result.local_errors(AdaptorClass::Engine), 2);
        assert_eq!(buffer.lines().len(), 2);
    }

    #[test]
    fn test_missing_binding_aborts_after_earlier_records() {
        let registry = Registry::builtin();
        let (reporter, _buffer) = ErrorReporter::buffered();
        let executor = Executor::with_reporter(&registry, ExecutionConfig::default(), reporter);
        let mut records = vec![scenario_a(), unregistered(), philox_zero()];

        let err = executor.execute(&mut records).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingBinding {
                kind: GeneratorKind::Ars4x32,
                rounds: 7
            }
        ));
        assert_eq!(records[0].computed(), records[0].expected());
        assert_eq!(records[2].computed(), vec![0, 0]);
    }

    #[test]
    fn test_preflight_aborts_before_any_record() {
        let registry = Registry::builtin();
        let (reporter, _buffer) = ErrorReporter::buffered();
        let executor =
            Executor::with_reporter(&registry, ExecutionConfig { preflight: true }, reporter);
        let mut records = vec![scenario_a(), unregistered()];

        let err = executor.execute(&mut records).unwrap_err();
        assert!(err.to_string().contains("(ars4x32, 7)"));
        assert_eq!(records[0].computed(), vec![0, 0]);
    }

    #[test]
    fn test_empty_registry_fails_first_record() {
        let registry = Registry::new();
        let executor = Executor::new(&registry);
        let mut records = vec![scenario_a()];
        assert!(executor.execute(&mut records).is_err());
    }

    #[test]
    fn test_empty_input_succeeds() {
        let registry = Registry::new();
        let executor = Executor::new(&registry);
        let result = executor.execute(&mut []).unwrap();
        assert_eq!(result.total, 0);
        assert!(result.is_success());
    }

    #[test]
    fn test_reporter_counts_persist_across_runs() {
        let registry = Registry::builtin();
        let (reporter, buffer) = ErrorReporter::buffered();
        let executor = Executor::with_reporter(&registry, ExecutionConfig::default(), reporter);
        for _ in 0..3 {
            let mut records =
                vec![TestRecord::new(GeneratorKind::Philox2x32, 10, &[0, 0], &[0], &[1, 2]).unwrap()];
            executor.execute(&mut records).unwrap();
        }
        assert_eq!(buffer.lines().len(), 2);
        assert_eq!(executor.reporter().count(AdaptorClass::SingleUse), 3);
        assert_eq!(executor.reporter().count(AdaptorClass::Engine), 6);
    }

    #[test]
    fn test_result_json_carries_outcomes() {
        let registry = Registry::builtin();
        let (reporter, _buffer) = ErrorReporter::buffered();
        let executor = Executor::with_reporter(&registry, ExecutionConfig::default(), reporter);
        let mut records = vec![scenario_a()];
        let json = executor.execute(&mut records).unwrap().to_json().unwrap();
        assert!(json.contains("\"kind\": \"threefry2x32\""));
        assert!(json.contains("\"state\": \"published\""));
    }

    #[test]
    fn test_default_config() {
        let registry = Registry::new();
        let executor = Executor::new(&registry);
        assert!(!executor.config().preflight);
    }
}
