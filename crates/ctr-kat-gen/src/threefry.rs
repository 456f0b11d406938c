//! Threefry generators
//!
//! Threefish-derived add/rotate/xor networks with a key injection every four
//! rounds. The round count is a const parameter; 20 is the standard strength,
//! 13 the reduced variant that still passes the usual statistical batteries.

use crate::cbrng::CounterBasedRng;
use crate::kind::GeneratorKind;
use crate::word::Word;

const SKEIN_PARITY_32: u32 = 0x1BD1_1BDA;
const SKEIN_PARITY_64: u64 = 0x1BD1_1BDA_A9FC_1A22;

const ROTATIONS_32X2: [u32; 8] = [13, 15, 26, 6, 17, 29, 16, 24];
const ROTATIONS_64X2: [u32; 8] = [16, 42, 12, 31, 16, 32, 24, 21];
const ROTATIONS_32X4: [[u32; 2]; 8] = [
    [10, 26],
    [11, 21],
    [13, 27],
    [23, 5],
    [6, 20],
    [17, 11],
    [25, 10],
    [18, 20],
];
const ROTATIONS_64X4: [[u32; 2]; 8] = [
    [14, 16],
    [52, 57],
    [23, 40],
    [5, 37],
    [25, 33],
    [46, 12],
    [58, 22],
    [32, 32],
];

fn threefry2<W: Word>(
    ctr: &[W; 2],
    key: &[W; 2],
    rounds: u32,
    rotations: &[u32; 8],
    parity: W,
) -> [W; 2] {
    let ks = [key[0], key[1], parity ^ key[0] ^ key[1]];
    let mut x = [ctr[0].wrapping_add(ks[0]), ctr[1].wrapping_add(ks[1])];

    for round in 0..rounds {
        x[0] = x[0].wrapping_add(x[1]);
        x[1] = x[1].rotate_left(rotations[(round % 8) as usize]);
        x[1] = x[1] ^ x[0];

        if (round + 1) % 4 == 0 {
            let s = (round + 1) / 4;
            x[0] = x[0].wrapping_add(ks[(s % 3) as usize]);
            x[1] = x[1]
                .wrapping_add(ks[((s + 1) % 3) as usize])
                .wrapping_add(W::from_u64_truncating(u64::from(s)));
        }
    }
    x
}

fn threefry4<W: Word>(
    ctr: &[W; 4],
    key: &[W; 4],
    rounds: u32,
    rotations: &[[u32; 2]; 8],
    parity: W,
) -> [W; 4] {
    let ks = [
        key[0],
        key[1],
        key[2],
        key[3],
        parity ^ key[0] ^ key[1] ^ key[2] ^ key[3],
    ];
    let mut x: [W; 4] = std::array::from_fn(|i| ctr[i].wrapping_add(ks[i]));

    for round in 0..rounds {
        let [r0, r1] = rotations[(round % 8) as usize];
        if round % 2 == 0 {
            x[0] = x[0].wrapping_add(x[1]);
            x[1] = x[1].rotate_left(r0) ^ x[0];
            x[2] = x[2].wrapping_add(x[3]);
            x[3] = x[3].rotate_left(r1) ^ x[2];
        } else {
            x[0] = x[0].wrapping_add(x[3]);
            x[3] = x[3].rotate_left(r0) ^ x[0];
            x[2] = x[2].wrapping_add(x[1]);
            x[1] = x[1].rotate_left(r1) ^ x[2];
        }

        if (round + 1) % 4 == 0 {
            let s = (round + 1) / 4;
            for (i, lane) in x.iter_mut().enumerate() {
                *lane = lane.wrapping_add(ks[(s as usize + i) % 5]);
            }
            x[3] = x[3].wrapping_add(W::from_u64_truncating(u64::from(s)));
        }
    }
    x
}

macro_rules! threefry_family {
    ($(#[$doc:meta])* $name:ident, $word:ty, $width:literal, $kind:expr, $body:ident, $rotations:expr, $parity:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name<const R: u32 = 20>;

        impl<const R: u32> CounterBasedRng for $name<R> {
            type Word = $word;
            type Ctr = [$word; $width];
            type Key = [$word; $width];

            const KIND: GeneratorKind = $kind;
            const ROUNDS: u32 = R;

            fn apply(&self, ctr: &Self::Ctr, key: &Self::Key) -> Self::Ctr {
                $body(ctr, key, R, &$rotations, $parity)
            }
        }
    };
}

threefry_family!(
    /// Threefry over two 32-bit words with an `R`-round network
    Threefry2x32, u32, 2, GeneratorKind::Threefry2x32, threefry2, ROTATIONS_32X2, SKEIN_PARITY_32
);
threefry_family!(
    /// Threefry over four 32-bit words with an `R`-round network
    Threefry4x32, u32, 4, GeneratorKind::Threefry4x32, threefry4, ROTATIONS_32X4, SKEIN_PARITY_32
);
threefry_family!(
    /// Threefry over two 64-bit words with an `R`-round network
    Threefry2x64, u64, 2, GeneratorKind::Threefry2x64, threefry2, ROTATIONS_64X2, SKEIN_PARITY_64
);
threefry_family!(
    /// Threefry over four 64-bit words with an `R`-round network
    Threefry4x64, u64, 4, GeneratorKind::Threefry4x64, threefry4, ROTATIONS_64X4, SKEIN_PARITY_64
);
