//! Stateful skip-capable engine
//!
//! [`Engine`] wraps a counter-based generator in a conventional stream
//! interface. It holds a counter and the block generated from it; words of a
//! block are returned from the last index down, and the counter is
//! incremented before each fresh block. `discard` skips any number of words
//! in constant time.

use crate::cbrng::CounterBasedRng;
use crate::error::{Error, Result};
use crate::word::{Block, increment};

/// A seeded stream with explicit counter control and bulk skip-ahead
pub trait SkipEngine<G: CounterBasedRng> {
    /// Engine keyed by `key`, counter zero, nothing buffered
    fn seeded(key: G::Key) -> Self;

    /// Position the engine so that `elem` words of `ctr`'s block remain
    ///
    /// # Errors
    ///
    /// Returns an error if `elem` exceeds the block width.
    fn set_counter(&mut self, ctr: G::Ctr, elem: usize) -> Result<()>;

    /// Next word of the stream
    fn draw(&mut self) -> G::Word;

    /// Skip `n` words
    fn discard(&mut self, n: u64);
}

/// Conventional engine over generator `G`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine<G: CounterBasedRng> {
    rng: G,
    key: G::Key,
    ctr: G::Ctr,
    buf: G::Ctr,
    elem: usize,
}

impl<G: CounterBasedRng> Engine<G> {
    /// Engine keyed by `key` with a zero counter
    #[must_use]
    pub fn new(key: G::Key) -> Self {
        Self {
            rng: G::default(),
            key,
            ctr: G::Ctr::zeroed(),
            buf: G::Ctr::zeroed(),
            elem: 0,
        }
    }

    /// Key in use
    #[must_use]
    pub fn key(&self) -> G::Key {
        self.key
    }

    /// Current counter and the number of words of its block still buffered
    ///
    /// This is the stored form, not a canonical one: `(c, 0)` and
    /// `(c + 1, WIDTH)` name the same stream position. Compare draws, not
    /// counters, to test two engines for equivalence.
    #[must_use]
    pub fn counter(&self) -> (G::Ctr, usize) {
        (self.ctr, self.elem)
    }

    /// Position the engine so that `elem` words of `ctr`'s block remain.
    ///
    /// `elem == WIDTH` makes the next draws walk the whole block at `ctr`;
    /// `elem == 0` makes the next draw start the block at `ctr + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if `elem` exceeds the block width.
    pub fn set_counter(&mut self, ctr: G::Ctr, elem: usize) -> Result<()> {
        if elem > G::Ctr::WIDTH {
            return Err(Error::ElementOutOfRange {
                elem,
                max: G::Ctr::WIDTH,
            });
        }
        self.ctr = ctr;
        self.elem = elem;
        self.refill();
        Ok(())
    }

    /// Next word of the stream
    pub fn draw(&mut self) -> G::Word {
        if self.elem == 0 {
            increment(self.ctr.words_mut(), 1);
            self.buf = self.rng.apply(&self.ctr, &self.key);
            self.elem = G::Ctr::WIDTH;
        }
        self.elem -= 1;
        self.buf.words()[self.elem]
    }

    /// Skip `n` words without producing them
    pub fn discard(&mut self, n: u64) {
        let width = G::Ctr::WIDTH as u64;
        let sub = (n % width) as usize;
        let mut blocks = n / width;
        if self.elem < sub {
            self.elem += G::Ctr::WIDTH;
            blocks += 1;
        }
        self.elem -= sub;
        increment(self.ctr.words_mut(), blocks);
        self.refill();
    }

    fn refill(&mut self) {
        if self.elem != 0 {
            self.buf = self.rng.apply(&self.ctr, &self.key);
        }
    }
}

impl<G: CounterBasedRng> SkipEngine<G> for Engine<G> {
    fn seeded(key: G::Key) -> Self {
        Self::new(key)
    }

    fn set_counter(&mut self, ctr: G::Ctr, elem: usize) -> Result<()> {
        Engine::set_counter(self, ctr, elem)
    }

    fn draw(&mut self) -> G::Word {
        Engine::draw(self)
    }

    fn discard(&mut self, n: u64) {
        Engine::discard(self, n);
    }
}

impl<G: CounterBasedRng> Iterator for Engine<G> {
    type Item = G::Word;

    fn next(&mut self) -> Option<Self::Item> {
        Some(Engine::draw(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::philox::{Philox2x32, Philox4x64};
    use crate::threefry::{Threefry2x64, Threefry4x32};

    #[test]
    fn test_fresh_engine_starts_at_counter_one() {
        let mut engine = Engine::<Threefry4x32<20>>::new([3, 4, 0, 0]);
        let block = Threefry4x32::<20>.apply(&[1, 0, 0, 0], &[3, 4, 0, 0]);
        let drawn: Vec<u32> = (0..4).map(|_| engine.draw()).collect();
        assert_eq!(drawn, vec![block[3], block[2], block[1], block[0]]);
        assert_eq!(engine.counter(), ([1, 0, 0, 0], 0));
    }

    #[test]
    fn test_set_counter_full_block() {
        let key = [42u32];
        let mut engine = Engine::<Philox2x32<10>>::new(key);
        engine.set_counter([10, 20], 2).unwrap();
        let block = Philox2x32::<10>.apply(&[10, 20], &key);
        assert_eq!(engine.draw(), block[1]);
        assert_eq!(engine.draw(), block[0]);
        let next = Philox2x32::<10>.apply(&[11, 20], &key);
        assert_eq!(engine.draw(), next[1]);
    }

    #[test]
    fn test_set_counter_out_of_range() {
        let mut engine = Engine::<Philox2x32<10>>::new([0]);
        let err = engine.set_counter([0, 0], 3).unwrap_err();
        assert_eq!(err, Error::ElementOutOfRange { elem: 3, max: 2 });
    }

    #[test]
    fn test_discard_matches_sequential_draws() {
        let key = [1u64, 2];
        for skip in 0..20u64 {
            let mut stepped = Engine::<Philox4x64<10>>::new(key);
            let mut skipped = stepped.clone();
            stepped.draw();
            skipped.draw();
            for _ in 0..skip {
                stepped.draw();
            }
            skipped.discard(skip);
            assert_eq!(stepped.draw(), skipped.draw(), "skip={skip}");
            assert_eq!(stepped.counter(), skipped.counter(), "skip={skip}");
        }
    }

    #[test]
    fn test_exhausted_block_and_full_next_block_agree() {
        let key = [7u32, 8, 0, 0];
        let mut stepped = Engine::<Threefry4x32<13>>::new(key);
        stepped.set_counter([5, 0, 0, 0], 4).unwrap();
        for _ in 0..28 {
            stepped.draw();
        }
        let mut skipped = Engine::<Threefry4x32<13>>::new(key);
        skipped.set_counter([5, 0, 0, 0], 4).unwrap();
        skipped.discard(28);

        assert_eq!(stepped.counter(), ([11, 0, 0, 0], 0));
        assert_eq!(skipped.counter(), ([12, 0, 0, 0], 4));
        let a: Vec<u32> = stepped.take(8).collect();
        let b: Vec<u32> = skipped.take(8).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_discard_carries_into_high_word() {
        let key = [5u64, 6];
        let mut engine = Engine::<Threefry2x64<20>>::new(key);
        engine.set_counter([u64::MAX - 1, 0], 2).unwrap();
        engine.discard(6);
        let block = Threefry2x64::<20>.apply(&[1, 1], &key);
        assert_eq!(engine.draw(), block[1]);
        assert_eq!(engine.draw(), block[0]);
    }

    #[test]
    fn test_iterator_never_ends() {
        let engine = Engine::<Philox2x32<7>>::new([9]);
        assert_eq!(engine.take(100).count(), 100);
    }
}
