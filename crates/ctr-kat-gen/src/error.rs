//! Error types for ctr-kat-gen

use thiserror::Error;

/// Result type alias for ctr-kat-gen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by generator lookup and the adaptor/engine wrappers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Generator name not recognized
    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    /// Single-use adaptor refused a counter whose reserved high bits are in use
    #[error("MicroUrng: counter does not have its top {bits} bit(s) clear")]
    HighBitsSet {
        /// Number of reserved high bits
        bits: u32,
    },

    /// Single-use adaptor reserved-bit count outside the word width
    #[error("MicroUrng: cannot reserve {bits} bit(s) of a {word_bits}-bit word")]
    ReservedBits {
        /// Requested reserved bits
        bits: u32,
        /// Word width in bits
        word_bits: u32,
    },

    /// Single-use adaptor has produced every block its reserved bits allow
    #[error("MicroUrng exhausted after {blocks} block(s)")]
    Exhausted {
        /// Blocks produced before exhaustion
        blocks: u64,
    },

    /// Engine counter set with an element index past the block width
    #[error("Engine::set_counter called with elem {elem} out of range (max {max})")]
    ElementOutOfRange {
        /// Requested element count
        elem: usize,
        /// Block width
        max: usize,
    },
}
