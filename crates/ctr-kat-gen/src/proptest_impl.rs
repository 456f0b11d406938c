//! Proptest strategies for generator inputs
//!
//! Counters are biased toward the values that stress the adaptor and engine
//! arithmetic: zero, small multiples of three, and words at or near the top
//! of their range.

use crate::kind::GeneratorKind;
use crate::word::{Block, Word};
use proptest::prelude::*;

/// Strategy for a single word with edge values over-represented
pub fn word_strategy<W: Word>() -> impl Strategy<Value = W> {
    let max = u64::MAX >> (64 - W::BITS);
    prop_oneof![
        2 => Just(0u64),
        2 => 0u64..16,
        2 => Just(max),
        2 => (max - 16)..=max,
        1 => Just(max / 3),
        1 => Just(max >> 1),
        4 => 0..=max,
    ]
    .prop_map(W::from_u64_truncating)
}

/// Strategy for a counter or key block
pub fn block_strategy<B: Block>() -> impl Strategy<Value = B> {
    prop::collection::vec(word_strategy::<B::Word>(), B::WIDTH)
        .prop_map(|words| B::from_fn(|i| words[i]))
}

/// Strategy for the generator families that have software implementations
pub fn implemented_kind_strategy() -> impl Strategy<Value = GeneratorKind> {
    prop::sample::select(
        GeneratorKind::ALL
            .into_iter()
            .filter(|kind| !matches!(kind, GeneratorKind::Ars4x32 | GeneratorKind::AesNi4x32))
            .collect::<Vec<_>>(),
    )
}
