//! Comparator and run summary
//!
//! A record passes when its `computed` block equals its `expected` block.
//! Records whose routine suppressed write-back keep a stale or zero
//! `computed` value and so show up here as failures.

use crate::error::Result;
use chrono::{DateTime, Utc};
use ctr_kat_gen::GeneratorKind;
use ctr_kat_runner::TestRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Verdict for one record, with its fields rendered as hex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KatCase {
    /// Position in the input sequence
    pub index: usize,
    /// Generator family
    pub kind: GeneratorKind,
    /// Round count
    pub rounds: u32,
    /// Counter words
    pub counter: Vec<String>,
    /// Key words
    pub key: Vec<String>,
    /// Known answer
    pub expected: Vec<String>,
    /// Published value (or whatever the field held)
    pub computed: Vec<String>,
    /// `computed == expected`
    pub passed: bool,
}

impl KatCase {
    /// Compare one record
    #[must_use]
    pub fn from_record(index: usize, record: &TestRecord) -> Self {
        let bits = record.kind.word_bits();
        let hex = |words: Vec<u64>| -> Vec<String> {
            words
                .into_iter()
                .map(|w| {
                    if bits == 32 {
                        format!("{w:08x}")
                    } else {
                        format!("{w:016x}")
                    }
                })
                .collect()
        };
        let expected = record.expected();
        let computed = record.computed();
        Self {
            index,
            kind: record.kind,
            rounds: record.rounds,
            counter: hex(record.counter()),
            key: hex(record.key()),
            passed: expected == computed,
            expected: hex(expected),
            computed: hex(computed),
        }
    }

    /// Name used for the case in reports, e.g. `threefry2x32_20#3`
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}_{}#{}", self.kind, self.rounds, self.index)
    }
}

impl fmt::Display for KatCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ctr=[{}] key=[{}] expected=[{}] computed=[{}]",
            self.kind,
            self.rounds,
            self.counter.join(" "),
            self.key.join(" "),
            self.expected.join(" "),
            self.computed.join(" ")
        )
    }
}

/// Outcome of comparing a record sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KatSummary {
    /// When the comparison ran
    pub generated_at: DateTime<Utc>,
    /// Records compared
    pub total: usize,
    /// Records whose computed block matched
    pub passed: usize,
    /// Records whose computed block did not match
    pub failed: usize,
    /// Execution time of the run, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Per-record verdicts, in input order
    pub cases: Vec<KatCase>,
}

impl KatSummary {
    /// Compare every record's computed block against its expected block
    #[must_use]
    pub fn from_records(records: &[TestRecord]) -> Self {
        let cases: Vec<KatCase> = records
            .iter()
            .enumerate()
            .map(|(i, r)| KatCase::from_record(i, r))
            .collect();
        let passed = cases.iter().filter(|c| c.passed).count();
        Self {
            generated_at: Utc::now(),
            total: cases.len(),
            passed,
            failed: cases.len() - passed,
            duration_ms: None,
            cases,
        }
    }

    /// Attach the run's execution time
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Failed cases, in input order
    pub fn failures(&self) -> impl Iterator<Item = &KatCase> {
        self.cases.iter().filter(|c| !c.passed)
    }

    /// `true` when every record passed
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Pass rate as a percentage (100 for an empty run)
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.passed as f64 / self.total as f64 * 100.0
        }
    }

    /// One-line summary for the console
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{} of {} known-answer tests passed ({} failed, {:.1}%)",
            self.passed,
            self.total,
            self.failed,
            self.pass_rate()
        )
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON summary to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
