//! ctr-kat runner
//!
//! Cross-validates counter-based generators against known-answer records.
//! Each record is dispatched by `(kind, rounds)` to a routine that checks the
//! direct call against the single-use adaptor and the stateful engine, and
//! publishes the direct result only when all three agree.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
// Allow common patterns
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::unused_self)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
// Allow common patterns in test code
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
#![cfg_attr(test, allow(clippy::uninlined_format_args))]

pub mod error;
pub mod executor;
pub mod loader;
pub mod record;
pub mod reference;
pub mod registry;
pub mod reporter;
pub mod validate;

pub use error::{Error, Result};
pub use executor::{ExecutionConfig, ExecutionResult, Executor};
pub use loader::{load_vectors, parse_vectors};
pub use record::{Decoded, Field, PAYLOAD_CAPACITY, PayloadLayout, TestRecord};
pub use reference::{PHILOX_64_REFERENCE_VECTORS, REFERENCE_VECTORS, reference_records};
pub use registry::{PHILOX_ROUNDS, Registry, THREEFRY_ROUNDS};
pub use reporter::{AdaptorClass, DiagnosticBuffer, ErrorReporter};
pub use validate::{CrossValidation, RecordOutcome, RecordState, ValidationRoutine};
