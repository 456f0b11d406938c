//! The counter-based generator capability

use crate::kind::GeneratorKind;
use crate::word::{Block, Word};
use std::fmt;

/// A keyed bijection from counters to output blocks
///
/// Implementations are stateless: the same `(ctr, key)` always maps to the
/// same block. Family and round count are fixed at compile time.
pub trait CounterBasedRng: Default + Copy + fmt::Debug + Send + Sync + 'static {
    /// Lane type
    type Word: Word;
    /// Counter (and output block) type
    type Ctr: Block<Word = Self::Word>;
    /// Key type
    type Key: Block<Word = Self::Word>;

    /// Family this generator belongs to
    const KIND: GeneratorKind;
    /// Number of rounds applied
    const ROUNDS: u32;

    /// Map `ctr` under `key` to an output block
    fn apply(&self, ctr: &Self::Ctr, key: &Self::Key) -> Self::Ctr;
}
