//! Known-answer test records
//!
//! A [`TestRecord`] carries a fixed-capacity payload holding four fields in
//! sequence: counter, key, expected and computed. Their widths come from the
//! record's [`PayloadLayout`]; words are stored little-endian.

use crate::error::{Error, Result};
use ctr_kat_gen::{Block, CounterBasedRng, GeneratorKind, Word};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Payload capacity in bytes: the largest family footprint (Threefry4x64)
pub const PAYLOAD_CAPACITY: usize = 128;

/// A field of the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Input counter
    Counter,
    /// Input key
    Key,
    /// Known answer
    Expected,
    /// Published direct result
    Computed,
}

impl Field {
    /// Field name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Key => "key",
            Self::Expected => "expected",
            Self::Computed => "computed",
        }
    }
}

/// Field widths for one generator family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadLayout {
    /// Words per counter (and per expected/computed block)
    pub ctr_words: usize,
    /// Words per key
    pub key_words: usize,
    /// Bytes per word
    pub word_bytes: usize,
}

impl PayloadLayout {
    /// Layout of `kind`'s records
    #[must_use]
    pub const fn for_kind(kind: GeneratorKind) -> Self {
        Self {
            ctr_words: kind.counter_words(),
            key_words: kind.key_words(),
            word_bytes: kind.word_bytes(),
        }
    }

    /// Bytes used by all four fields
    #[must_use]
    pub const fn footprint(&self) -> usize {
        (3 * self.ctr_words + self.key_words) * self.word_bytes
    }

    /// Words in `field`
    #[must_use]
    pub const fn words(&self, field: Field) -> usize {
        match field {
            Field::Key => self.key_words,
            Field::Counter | Field::Expected | Field::Computed => self.ctr_words,
        }
    }

    /// Byte range of `field` within the payload
    #[must_use]
    pub const fn range(&self, field: Field) -> Range<usize> {
        let start_words = match field {
            Field::Counter => 0,
            Field::Key => self.ctr_words,
            Field::Expected => self.ctr_words + self.key_words,
            Field::Computed => 2 * self.ctr_words + self.key_words,
        };
        let start = start_words * self.word_bytes;
        start..start + self.words(field) * self.word_bytes
    }
}

/// Fields of a record decoded with a generator's static widths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded<G: CounterBasedRng> {
    /// Input counter
    pub ctr: G::Ctr,
    /// Input key
    pub key: G::Key,
    /// Known answer
    pub expected: G::Ctr,
}

/// One known-answer test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    /// Generator family
    pub kind: GeneratorKind,
    /// Round count
    pub rounds: u32,
    payload: [u8; PAYLOAD_CAPACITY],
}

impl TestRecord {
    /// Build a record from counter, key and expected words; `computed` starts
    /// zeroed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if a field has the wrong number of words
    /// or a word does not fit the family's word size.
    pub fn new(
        kind: GeneratorKind,
        rounds: u32,
        counter: &[u64],
        key: &[u64],
        expected: &[u64],
    ) -> Result<Self> {
        let mut record = Self {
            kind,
            rounds,
            payload: [0; PAYLOAD_CAPACITY],
        };
        record.set_field(Field::Counter, counter)?;
        record.set_field(Field::Key, key)?;
        record.set_field(Field::Expected, expected)?;
        Ok(record)
    }

    /// Field widths of this record
    #[must_use]
    pub const fn layout(&self) -> PayloadLayout {
        PayloadLayout::for_kind(self.kind)
    }

    /// Used prefix of the raw payload
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload[..self.layout().footprint()]
    }

    /// Read `field` as widened words
    #[must_use]
    pub fn field(&self, field: Field) -> Vec<u64> {
        let layout = self.layout();
        self.payload[layout.range(field)]
            .chunks_exact(layout.word_bytes)
            .map(|chunk| match layout.word_bytes {
                4 => u64::from(u32::read_le(chunk)),
                _ => u64::read_le(chunk),
            })
            .collect()
    }

    /// Overwrite `field` with `words`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] on a width mismatch or an oversized word.
    pub fn set_field(&mut self, field: Field, words: &[u64]) -> Result<()> {
        let layout = self.layout();
        let want = layout.words(field);
        if words.len() != want {
            return Err(self.invalid(
                field,
                format!("expected {want} word(s), got {}", words.len()),
            ));
        }
        if layout.word_bytes == 4 {
            if let Some(&word) = words.iter().find(|&&w| u32::try_from_u64(w).is_none()) {
                return Err(Self::invalid_word(self.kind, field, word));
            }
        }
        let range = layout.range(field);
        for (chunk, &word) in self.payload[range]
            .chunks_exact_mut(layout.word_bytes)
            .zip(words)
        {
            match layout.word_bytes {
                4 => u32::from_u64_truncating(word).write_le(chunk),
                _ => word.write_le(chunk),
            }
        }
        Ok(())
    }

    /// Input counter words
    #[must_use]
    pub fn counter(&self) -> Vec<u64> {
        self.field(Field::Counter)
    }

    /// Key words
    #[must_use]
    pub fn key(&self) -> Vec<u64> {
        self.field(Field::Key)
    }

    /// Expected words
    #[must_use]
    pub fn expected(&self) -> Vec<u64> {
        self.field(Field::Expected)
    }

    /// Computed words (zero or stale until a routine publishes)
    #[must_use]
    pub fn computed(&self) -> Vec<u64> {
        self.field(Field::Computed)
    }

    /// Zero the computed field
    pub fn reset_computed(&mut self) {
        let range = self.layout().range(Field::Computed);
        self.payload[range].fill(0);
    }

    /// Decode counter, key and expected using `G`'s static widths
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayoutMismatch`] if the record belongs to another family.
    pub fn decode<G: CounterBasedRng>(&self) -> Result<Decoded<G>> {
        self.check_family::<G>()?;
        Ok(Decoded {
            ctr: self.read_block(Field::Counter),
            key: self.read_block(Field::Key),
            expected: self.read_block(Field::Expected),
        })
    }

    /// Write `computed` into the computed field
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayoutMismatch`] if the record belongs to another family.
    pub fn publish<G: CounterBasedRng>(&mut self, computed: &G::Ctr) -> Result<()> {
        self.check_family::<G>()?;
        let range = self.layout().range(Field::Computed);
        let bytes = <G::Word as Word>::BYTES;
        for (chunk, word) in self.payload[range]
            .chunks_exact_mut(bytes)
            .zip(computed.words())
        {
            word.write_le(chunk);
        }
        Ok(())
    }

    fn check_family<G: CounterBasedRng>(&self) -> Result<()> {
        if G::KIND == self.kind {
            Ok(())
        } else {
            Err(Error::LayoutMismatch {
                record: self.kind,
                routine: G::KIND,
            })
        }
    }

    fn read_block<B: Block>(&self, field: Field) -> B {
        let start = self.layout().range(field).start;
        let bytes = <B::Word as Word>::BYTES;
        B::from_fn(|i| <B::Word as Word>::read_le(&self.payload[start + i * bytes..]))
    }

    fn invalid(&self, field: Field, reason: String) -> Error {
        Error::InvalidField {
            kind: self.kind,
            field: field.as_str(),
            reason,
        }
    }

    fn invalid_word(kind: GeneratorKind, field: Field, word: u64) -> Error {
        Error::InvalidField {
            kind,
            field: field.as_str(),
            reason: format!("word {word:#x} does not fit in {} bits", kind.word_bits()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctr_kat_gen::{Philox2x32, Philox4x64, Threefry4x64};

    #[test]
    fn test_capacity_covers_every_family() {
        for kind in GeneratorKind::ALL {
            assert!(PayloadLayout::for_kind(kind).footprint() <= PAYLOAD_CAPACITY);
        }
        assert_eq!(
            PayloadLayout::for_kind(GeneratorKind::Threefry4x64).footprint(),
            PAYLOAD_CAPACITY
        );
    }

    #[test]
    fn test_field_ranges_are_contiguous() {
        let layout = PayloadLayout::for_kind(GeneratorKind::Philox2x32);
        assert_eq!(layout.range(Field::Counter), 0..8);
        assert_eq!(layout.range(Field::Key), 8..12);
        assert_eq!(layout.range(Field::Expected), 12..20);
        assert_eq!(layout.range(Field::Computed), 20..28);
    }

    #[test]
    fn test_new_round_trips_fields() {
        let record = TestRecord::new(
            GeneratorKind::Philox4x64,
            10,
            &[1, 2, 3, u64::MAX],
            &[5, 6],
            &[7, 8, 9, 10],
        )
        .unwrap();
        assert_eq!(record.counter(), vec![1, 2, 3, u64::MAX]);
        assert_eq!(record.key(), vec![5, 6]);
        assert_eq!(record.expected(), vec![7, 8, 9, 10]);
        assert_eq!(record.computed(), vec![0; 4]);
        assert_eq!(record.payload().len(), 112);
    }

    #[test]
    fn test_wrong_width_rejected() {
        let err =
            TestRecord::new(GeneratorKind::Philox2x32, 10, &[1, 2], &[3, 4], &[5, 6]).unwrap_err();
        assert!(err.to_string().contains("key"));
        assert!(err.to_string().contains("expected 1 word(s), got 2"));
    }

    #[test]
    fn test_oversized_word_rejected() {
        let err = TestRecord::new(
            GeneratorKind::Philox2x32,
            10,
            &[0x1_0000_0000, 0],
            &[0],
            &[0, 0],
        )
        .unwrap_err();
        assert!(err.to_string().contains("does not fit in 32 bits"));
    }

    #[test]
    fn test_rejected_field_left_untouched() {
        let mut record =
            TestRecord::new(GeneratorKind::Philox2x32, 10, &[0, 0], &[0], &[1, 2]).unwrap();
        let err = record
            .set_field(Field::Expected, &[0xdead_beef, 0x1_0000_0000])
            .unwrap_err();
        assert!(err.to_string().contains("0x100000000"));
        assert_eq!(record.expected(), vec![1, 2]);
    }

    #[test]
    fn test_decode_uses_static_widths() {
        let record = TestRecord::new(
            GeneratorKind::Threefry4x64,
            20,
            &[1, 2, 3, 4],
            &[5, 6, 7, 8],
            &[9, 10, 11, 12],
        )
        .unwrap();
        let decoded = record.decode::<Threefry4x64<20>>().unwrap();
        assert_eq!(decoded.ctr, [1, 2, 3, 4]);
        assert_eq!(decoded.key, [5, 6, 7, 8]);
        assert_eq!(decoded.expected, [9, 10, 11, 12]);
    }

    #[test]
    fn test_decode_rejects_other_family() {
        let record =
            TestRecord::new(GeneratorKind::Philox2x32, 10, &[1, 2], &[3], &[4, 5]).unwrap();
        let err = record.decode::<Philox4x64<10>>().unwrap_err();
        assert!(matches!(err, Error::LayoutMismatch { .. }));
    }

    #[test]
    fn test_publish_and_reset() {
        let mut record =
            TestRecord::new(GeneratorKind::Philox2x32, 10, &[1, 2], &[3], &[4, 5]).unwrap();
        record.publish::<Philox2x32<10>>(&[0xAAAA_5555, 0x1234]).unwrap();
        assert_eq!(record.computed(), vec![0xAAAA_5555, 0x1234]);
        assert_eq!(record.expected(), vec![4, 5]);
        record.reset_computed();
        assert_eq!(record.computed(), vec![0, 0]);
    }
}
