//! Philox generators
//!
//! Multiply-based Feistel-like networks: each round takes the widening
//! product of one or two lanes with a fixed multiplier, xors the high halves
//! into the neighbouring lanes along with the round key, and bumps the key by
//! a Weyl constant between rounds. 10 rounds is the standard strength.

use crate::cbrng::CounterBasedRng;
use crate::kind::GeneratorKind;
use crate::word::Word;

const PHILOX_M2X32: u32 = 0xD256_D193;
const PHILOX_M4X32: [u32; 2] = [0xD251_1F53, 0xCD9E_8D57];
const PHILOX_W32: [u32; 2] = [0x9E37_79B9, 0xBB67_AE85];

const PHILOX_M2X64: u64 = 0xD2B7_4407_B1CE_6E93;
const PHILOX_M4X64: [u64; 2] = [0xD2E7_470E_E14C_6C93, 0xCA5A_8263_9512_1157];
const PHILOX_W64: [u64; 2] = [0x9E37_79B9_7F4A_7C15, 0xBB67_AE85_84CA_A73B];

fn philox2<W: Word>(ctr: &[W; 2], key: &[W; 1], rounds: u32, multiplier: W, weyl: &[W; 2]) -> [W; 2] {
    let mut x = *ctr;
    let mut k = key[0];
    for round in 0..rounds {
        if round > 0 {
            k = k.wrapping_add(weyl[0]);
        }
        let (hi, lo) = multiplier.mulhilo(x[0]);
        x = [hi ^ k ^ x[1], lo];
    }
    x
}

fn philox4<W: Word>(
    ctr: &[W; 4],
    key: &[W; 2],
    rounds: u32,
    multipliers: &[W; 2],
    weyl: &[W; 2],
) -> [W; 4] {
    let mut x = *ctr;
    let mut k = *key;
    for round in 0..rounds {
        if round > 0 {
            k = [k[0].wrapping_add(weyl[0]), k[1].wrapping_add(weyl[1])];
        }
        let (hi0, lo0) = multipliers[0].mulhilo(x[0]);
        let (hi1, lo1) = multipliers[1].mulhilo(x[2]);
        x = [hi1 ^ x[1] ^ k[0], lo1, hi0 ^ x[3] ^ k[1], lo0];
    }
    x
}

macro_rules! philox_family {
    ($(#[$doc:meta])* $name:ident, $word:ty, $width:literal, $key_width:literal, $kind:expr, $body:ident, $multiplier:expr, $weyl:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name<const R: u32 = 10>;

        impl<const R: u32> CounterBasedRng for $name<R> {
            type Word = $word;
            type Ctr = [$word; $width];
            type Key = [$word; $key_width];

            const KIND: GeneratorKind = $kind;
            const ROUNDS: u32 = R;

            fn apply(&self, ctr: &Self::Ctr, key: &Self::Key) -> Self::Ctr {
                $body(ctr, key, R, $multiplier, &$weyl)
            }
        }
    };
}

philox_family!(
    /// Philox over two 32-bit words with an `R`-round network
    Philox2x32, u32, 2, 1, GeneratorKind::Philox2x32, philox2, PHILOX_M2X32, PHILOX_W32
);
philox_family!(
    /// Philox over four 32-bit words with an `R`-round network
    Philox4x32, u32, 4, 2, GeneratorKind::Philox4x32, philox4, &PHILOX_M4X32, PHILOX_W32
);
philox_family!(
    /// Philox over two 64-bit words with an `R`-round network
    Philox2x64, u64, 2, 1, GeneratorKind::Philox2x64, philox2, PHILOX_M2X64, PHILOX_W64
);
philox_family!(
    /// Philox over four 64-bit words with an `R`-round network
    Philox4x64, u64, 4, 2, GeneratorKind::Philox4x64, philox4, &PHILOX_M4X64, PHILOX_W64
);
