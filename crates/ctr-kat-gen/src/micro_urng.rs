//! Single-use adaptor
//!
//! [`MicroUrng`] turns one `(counter, key)` pair into a short stream of words
//! by reserving the top `BITS` bits of the highest counter word for an
//! internal block index. The caller's counter must leave those bits clear,
//! otherwise construction fails. After `2^BITS` blocks the stream is spent.
//!
//! Words of each block are handed out from the last index down.

use crate::cbrng::CounterBasedRng;
use crate::error::{Error, Result};
use crate::word::{Block, Word};

/// A construct that yields a bounded number of words from one counter/key pair
pub trait SingleUseAdaptor<G: CounterBasedRng>: Sized {
    /// Build the adaptor, refusing counters it cannot extend
    ///
    /// # Errors
    ///
    /// Returns an error if the counter leaves no room for the adaptor's
    /// internal block index.
    fn construct(ctr: G::Ctr, key: G::Key) -> Result<Self>;

    /// Next word of the stream
    ///
    /// # Errors
    ///
    /// Returns an error once the adaptor is exhausted.
    fn draw(&mut self) -> Result<G::Word>;
}

/// Single-use adaptor reserving `BITS` high counter bits
#[derive(Debug, Clone)]
pub struct MicroUrng<G: CounterBasedRng, const BITS: u32 = 1> {
    rng: G,
    c0: G::Ctr,
    key: G::Key,
    blocks: u64,
    remaining: usize,
    buf: G::Ctr,
}

impl<G: CounterBasedRng, const BITS: u32> MicroUrng<G, BITS> {
    /// Create an adaptor over `ctr` and `key`
    ///
    /// # Errors
    ///
    /// - [`Error::ReservedBits`] if `BITS` is zero or not narrower than the word
    /// - [`Error::HighBitsSet`] if any of the top `BITS` bits of the highest
    ///   counter word are set
    pub fn new(ctr: G::Ctr, key: G::Key) -> Result<Self> {
        let word_bits = <G::Word as Word>::BITS;
        if BITS == 0 || BITS >= word_bits {
            return Err(Error::ReservedBits {
                bits: BITS,
                word_bits,
            });
        }
        let top = ctr.words()[G::Ctr::WIDTH - 1];
        if top.to_u64() >> (word_bits - BITS) != 0 {
            return Err(Error::HighBitsSet { bits: BITS });
        }
        Ok(Self {
            rng: G::default(),
            c0: ctr,
            key,
            blocks: 0,
            remaining: 0,
            buf: G::Ctr::zeroed(),
        })
    }

    /// Total number of blocks this adaptor can produce
    #[must_use]
    pub const fn capacity_blocks() -> u64 {
        1u64 << BITS
    }

    /// Words still available before exhaustion
    #[must_use]
    pub fn remaining_draws(&self) -> u64 {
        (Self::capacity_blocks() - self.blocks) * G::Ctr::WIDTH as u64 + self.remaining as u64
    }

    /// Next word of the stream
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] once `2^BITS` blocks have been consumed.
    pub fn draw(&mut self) -> Result<G::Word> {
        if self.remaining == 0 {
            if self.blocks >= Self::capacity_blocks() {
                return Err(Error::Exhausted {
                    blocks: self.blocks,
                });
            }
            let shift = <G::Word as Word>::BITS - BITS;
            let mut ctr = self.c0;
            let top = &mut ctr.words_mut()[G::Ctr::WIDTH - 1];
            *top = *top | G::Word::from_u64_truncating(self.blocks << shift);
            self.buf = self.rng.apply(&ctr, &self.key);
            self.blocks += 1;
            self.remaining = G::Ctr::WIDTH;
        }
        self.remaining -= 1;
        Ok(self.buf.words()[self.remaining])
    }
}

impl<G: CounterBasedRng, const BITS: u32> SingleUseAdaptor<G> for MicroUrng<G, BITS> {
    fn construct(ctr: G::Ctr, key: G::Key) -> Result<Self> {
        Self::new(ctr, key)
    }

    fn draw(&mut self) -> Result<G::Word> {
        MicroUrng::draw(self)
    }
}

impl<G: CounterBasedRng, const BITS: u32> Iterator for MicroUrng<G, BITS> {
    type Item = G::Word;

    fn next(&mut self) -> Option<Self::Item> {
        MicroUrng::draw(self).ok()
    }
}
