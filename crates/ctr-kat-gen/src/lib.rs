//! Counter-based random number generators
//!
//! Threefry and Philox families parameterised by round count, plus the two
//! stream wrappers that known-answer tests cross-check against the direct
//! call: the single-use [`MicroUrng`] and the skip-capable [`Engine`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
// Allow common patterns
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
// Allow common patterns in test code
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]

pub mod cbrng;
pub mod engine;
pub mod error;
pub mod kind;
pub mod micro_urng;
pub mod philox;
pub mod proptest_impl;
pub mod threefry;
pub mod word;

pub use cbrng::CounterBasedRng;
pub use engine::{Engine, SkipEngine};
pub use error::{Error, Result};
pub use kind::GeneratorKind;
pub use micro_urng::{MicroUrng, SingleUseAdaptor};
pub use philox::{Philox2x32, Philox2x64, Philox4x32, Philox4x64};
pub use threefry::{Threefry2x32, Threefry2x64, Threefry4x32, Threefry4x64};
pub use word::{Block, Word, increment};
