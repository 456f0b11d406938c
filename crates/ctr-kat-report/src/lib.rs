//! ctr-kat report generation
//!
//! Compares each record's published `computed` block with its known answer
//! and renders the verdicts as a JSON summary or JUnit XML.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
// Allow common patterns
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_raw_string_hashes)]
#![allow(clippy::uninlined_format_args)]
// Allow common patterns in test code
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod error;
pub mod junit;
pub mod summary;

pub use error::{Error, Result};
pub use junit::JunitReport;
pub use summary::{KatCase, KatSummary};
