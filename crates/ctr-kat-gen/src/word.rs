//! Word and block abstractions
//!
//! Counter-based generators operate on short fixed-width arrays of unsigned
//! words. [`Word`] covers the 32- and 64-bit lanes, [`Block`] covers the
//! arrays built from them.

use std::fmt;
use std::ops::{BitOr, BitXor};

/// An unsigned machine word usable as a generator lane
pub trait Word:
    Copy
    + Eq
    + Ord
    + fmt::Debug
    + fmt::LowerHex
    + BitXor<Output = Self>
    + BitOr<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Width in bits
    const BITS: u32;
    /// Width in bytes
    const BYTES: usize;
    /// The zero word
    const ZERO: Self;

    /// Modular addition
    #[must_use]
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Left rotation by `n` bits
    #[must_use]
    fn rotate_left(self, n: u32) -> Self;

    /// Full-width product split into `(high, low)` halves
    #[must_use]
    fn mulhilo(self, rhs: Self) -> (Self, Self);

    /// Widen to `u64`
    fn to_u64(self) -> u64;

    /// Narrow from `u64`, discarding high bits
    #[must_use]
    fn from_u64_truncating(value: u64) -> Self;

    /// Narrow from `u64`, `None` if the value does not fit
    fn try_from_u64(value: u64) -> Option<Self>;

    /// Most-significant bit
    fn msb(self) -> bool {
        self.to_u64() >> (Self::BITS - 1) != 0
    }

    /// Encode little-endian into the first [`Self::BYTES`] bytes of `out`
    fn write_le(self, out: &mut [u8]);

    /// Decode little-endian from the first [`Self::BYTES`] bytes of `bytes`
    fn read_le(bytes: &[u8]) -> Self;
}

macro_rules! impl_word {
    ($t:ty, $wide:ty) => {
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
            const BYTES: usize = std::mem::size_of::<$t>();
            const ZERO: Self = 0;

            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            fn rotate_left(self, n: u32) -> Self {
                <$t>::rotate_left(self, n)
            }

            fn mulhilo(self, rhs: Self) -> (Self, Self) {
                let product = <$wide>::from(self) * <$wide>::from(rhs);
                ((product >> <$t>::BITS) as $t, product as $t)
            }

            fn to_u64(self) -> u64 {
                u64::from(self)
            }

            fn from_u64_truncating(value: u64) -> Self {
                value as $t
            }

            fn try_from_u64(value: u64) -> Option<Self> {
                <$t>::try_from(value).ok()
            }

            fn write_le(self, out: &mut [u8]) {
                out[..Self::BYTES].copy_from_slice(&self.to_le_bytes());
            }

            fn read_le(bytes: &[u8]) -> Self {
                let mut buf = [0u8; std::mem::size_of::<$t>()];
                buf.copy_from_slice(&bytes[..Self::BYTES]);
                <$t>::from_le_bytes(buf)
            }
        }
    };
}

impl_word!(u32, u64);
impl_word!(u64, u128);

/// A fixed-width array of words: a counter, a key or an output block
pub trait Block: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Lane type
    type Word: Word;
    /// Number of words
    const WIDTH: usize;

    /// Build a block lane by lane
    fn from_fn(f: impl FnMut(usize) -> Self::Word) -> Self;

    /// All-zero block
    #[must_use]
    fn zeroed() -> Self {
        Self::from_fn(|_| Self::Word::ZERO)
    }

    /// Lanes as a slice, index 0 first
    fn words(&self) -> &[Self::Word];

    /// Mutable lanes
    fn words_mut(&mut self) -> &mut [Self::Word];
}

impl<W: Word, const N: usize> Block for [W; N] {
    type Word = W;
    const WIDTH: usize = N;

    fn from_fn(f: impl FnMut(usize) -> W) -> Self {
        std::array::from_fn(f)
    }

    fn words(&self) -> &[W] {
        self
    }

    fn words_mut(&mut self) -> &mut [W] {
        self
    }
}

/// Add `by` to a multi-word counter (word 0 least significant), carrying
/// upward and wrapping at the full counter width.
pub fn increment<W: Word>(words: &mut [W], by: u64) {
    let mask = (1u128 << W::BITS) - 1;
    let mut carry = u128::from(by);
    for word in words {
        if carry == 0 {
            break;
        }
        let sum = u128::from(word.to_u64()) + carry;
        *word = W::from_u64_truncating((sum & mask) as u64);
        carry = sum >> W::BITS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mulhilo_32() {
        let (hi, lo) = 0xD256_D193_u32.mulhilo(0xFFFF_FFFF);
        let full = 0xD256_D193_u64 * 0xFFFF_FFFF_u64;
        assert_eq!(hi, (full >> 32) as u32);
        assert_eq!(lo, full as u32);
    }

    #[test]
    fn test_mulhilo_64() {
        let (hi, lo) = u64::MAX.mulhilo(u64::MAX);
        assert_eq!(hi, u64::MAX - 1);
        assert_eq!(lo, 1);
    }

    #[test]
    fn test_msb() {
        assert!(0x8000_0000_u32.msb());
        assert!(!0x7FFF_FFFF_u32.msb());
        assert!(u64::MAX.msb());
        assert!(!0_u64.msb());
    }

    #[test]
    fn test_try_from_u64() {
        assert_eq!(u32::try_from_u64(0xFFFF_FFFF), Some(0xFFFF_FFFF));
        assert_eq!(u32::try_from_u64(0x1_0000_0000), None);
        assert_eq!(u64::try_from_u64(u64::MAX), Some(u64::MAX));
    }

    #[test]
    fn test_le_codec() {
        let mut buf = [0u8; 8];
        0x0102_0304_u32.write_le(&mut buf);
        assert_eq!(&buf[..4], &[4, 3, 2, 1]);
        assert_eq!(u32::read_le(&buf), 0x0102_0304);

        0x0102_0304_0506_0708_u64.write_le(&mut buf);
        assert_eq!(u64::read_le(&buf), 0x0102_0304_0506_0708);
    }

    #[test]
    fn test_block_zeroed_and_width() {
        let block = <[u32; 4]>::zeroed();
        assert_eq!(block, [0; 4]);
        assert_eq!(<[u64; 2] as Block>::WIDTH, 2);
    }

    #[test]
    fn test_increment_carries_across_words() {
        let mut ctr = [u32::MAX, 0, 0, 0];
        increment(&mut ctr, 1);
        assert_eq!(ctr, [0, 1, 0, 0]);
    }

    #[test]
    fn test_increment_large_amount_into_32_bit_lanes() {
        let mut ctr = [0u32, 0];
        increment(&mut ctr, 0x0000_0003_0000_0005);
        assert_eq!(ctr, [5, 3]);
    }

    #[test]
    fn test_increment_wraps_at_counter_width() {
        let mut ctr = [u64::MAX, u64::MAX];
        increment(&mut ctr, 2);
        assert_eq!(ctr, [1, 0]);
    }

    #[test]
    fn test_increment_by_zero_is_noop() {
        let mut ctr = [7u64, 9];
        increment(&mut ctr, 0);
        assert_eq!(ctr, [7, 9]);
    }
}
