//! Error types for ctr-kat-runner

use ctr_kat_gen::GeneratorKind;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading records or running them
#[derive(Debug, Error)]
pub enum Error {
    /// A record names a (kind, rounds) pair with no registered routine
    #[error(
        "({kind}, {rounds}) not in dispatch registry; you probably need to register a binding for {kind} with {rounds} rounds"
    )]
    MissingBinding {
        /// Generator family named by the record
        kind: GeneratorKind,
        /// Round count named by the record
        rounds: u32,
    },

    /// The same (kind, rounds) pair was registered twice
    #[error("Duplicate binding: ({kind}, {rounds}) is already registered")]
    DuplicateBinding {
        /// Generator family
        kind: GeneratorKind,
        /// Round count
        rounds: u32,
    },

    /// A routine was registered under a key it is not specialized for
    #[error("Binding mismatch: routine for ({actual_kind}, {actual_rounds}) registered as ({kind}, {rounds})")]
    BindingMismatch {
        /// Requested family
        kind: GeneratorKind,
        /// Requested round count
        rounds: u32,
        /// Family the routine is specialized for
        actual_kind: GeneratorKind,
        /// Round count the routine is specialized for
        actual_rounds: u32,
    },

    /// A record was handed to a routine specialized for another family
    #[error("Record layout mismatch: {record} record decoded as {routine}")]
    LayoutMismatch {
        /// Family named by the record
        record: GeneratorKind,
        /// Family the decoder expected
        routine: GeneratorKind,
    },

    /// A field was filled with the wrong number of words or an oversized word
    #[error("Invalid {field} for {kind}: {reason}")]
    InvalidField {
        /// Generator family
        kind: GeneratorKind,
        /// Field name
        field: &'static str,
        /// What was wrong
        reason: String,
    },

    /// Vector file parse error
    #[error("Parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong
        reason: String,
    },

    /// Generator or adaptor error
    #[error("Generator error: {0}")]
    Generator(#[from] ctr_kat_gen::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
