//! Known-answer vector loader
//!
//! One record per line:
//!
//! ```text
//! <name> <rounds> <counter words> <key words> <expected words>
//! ```
//!
//! Words are hexadecimal with an optional `0x` prefix. Field widths come from
//! the named family. Blank lines and lines starting with `#` are skipped.

use crate::error::{Error, Result};
use crate::record::{Field, PayloadLayout, TestRecord};
use ctr_kat_gen::GeneratorKind;
use std::path::Path;

/// Parse vector text into records, in input order
///
/// # Errors
///
/// Returns [`Error::Parse`] naming the 1-based line of the first malformed
/// record.
pub fn parse_vectors(text: &str) -> Result<Vec<TestRecord>> {
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        records.push(parse_line(line).map_err(|reason| Error::Parse {
            line: index + 1,
            reason,
        })?);
    }
    tracing::debug!(records = records.len(), "parsed vectors");
    Ok(records)
}

/// Read and parse a vector file
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse.
pub fn load_vectors(path: &Path) -> Result<Vec<TestRecord>> {
    let text = std::fs::read_to_string(path)?;
    parse_vectors(&text)
}

fn parse_line(line: &str) -> std::result::Result<TestRecord, String> {
    let mut tokens = line.split_whitespace();

    let name = tokens.next().ok_or("missing generator name")?;
    let kind: GeneratorKind = name.parse().map_err(|e: ctr_kat_gen::Error| e.to_string())?;

    let rounds = tokens.next().ok_or("missing round count")?;
    let rounds: u32 = rounds
        .parse()
        .map_err(|_| format!("invalid round count '{rounds}'"))?;

    let layout = PayloadLayout::for_kind(kind);
    let mut fields = Vec::with_capacity(3);
    for field in [Field::Counter, Field::Key, Field::Expected] {
        let want = layout.words(field);
        let mut words = Vec::with_capacity(want);
        for _ in 0..want {
            let token = tokens.next().ok_or_else(|| {
                format!(
                    "{kind}: {} needs {want} word(s), got {}",
                    field.as_str(),
                    words.len()
                )
            })?;
            words.push(parse_word(token, kind)?);
        }
        fields.push(words);
    }

    if let Some(extra) = tokens.next() {
        return Err(format!("unexpected trailing word '{extra}'"));
    }

    TestRecord::new(kind, rounds, &fields[0], &fields[1], &fields[2]).map_err(|e| e.to_string())
}

fn parse_word(token: &str, kind: GeneratorKind) -> std::result::Result<u64, String> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    let word = u64::from_str_radix(digits, 16).map_err(|_| format!("invalid word '{token}'"))?;
    if kind.word_bits() < 64 && word >> kind.word_bits() != 0 {
        return Err(format!(
            "word '{token}' does not fit in {} bits",
            kind.word_bits()
        ));
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_line() {
        let records = parse_vectors("threefry2x32 20 00000000 00000000 00000000 00000000 6b200159 99ba4efe\n").unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.kind, GeneratorKind::Threefry2x32);
        assert_eq!(record.rounds, 20);
        assert_eq!(record.expected(), vec![0x6b20_0159, 0x99ba_4efe]);
        assert_eq!(record.computed(), vec![0, 0]);
    }

    #[test]
    fn test_comments_blank_lines_and_prefixes() {
        let text = "\
# Philox vectors

philox2x32 10 0x0 0X0 0 ff1dae59 6cd10df2
   # indented comment
philox4x64 10 0 0 0 0 0 0 16554d9eca36314c db20fe9d672d0fdc d7e772cee186176b 7e68b68aec7ba23b
";
        let records = parse_vectors(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key(), vec![0]);
        assert_eq!(records[1].kind, GeneratorKind::Philox4x64);
        assert_eq!(records[1].expected()[0], 0x1655_4d9e_ca36_314c);
    }

    #[test]
    fn test_unknown_generator_reports_line() {
        let err = parse_vectors("\n\nmersenne 10 0 0\n").unwrap_err();
        match err {
            Error::Parse { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("mersenne"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_words() {
        let err = parse_vectors("philox4x32 10 0 0 0 0 0 0 1 2 3\n").unwrap_err();
        assert!(err.to_string().contains("expected needs 4 word(s), got 3"));
    }

    #[test]
    fn test_trailing_words() {
        let err = parse_vectors("philox2x32 10 0 0 0 1 2 3\n").unwrap_err();
        assert!(err.to_string().contains("unexpected trailing word '3'"));
    }

    #[test]
    fn test_bad_rounds_and_words() {
        assert!(
            parse_vectors("philox2x32 ten 0 0 0 1 2\n")
                .unwrap_err()
                .to_string()
                .contains("invalid round count 'ten'")
        );
        assert!(
            parse_vectors("philox2x32 10 0 zz 0 1 2\n")
                .unwrap_err()
                .to_string()
                .contains("invalid word 'zz'")
        );
    }

    #[test]
    fn test_word_too_wide_for_family() {
        let err = parse_vectors("threefry2x32 13 100000000 0 0 0 0 0\n").unwrap_err();
        assert!(err.to_string().contains("does not fit in 32 bits"));
    }

    #[test]
    fn test_unregistered_family_still_loads() {
        let records = parse_vectors("ars4x32 7 0 0 0 0 0 0 0 0 0 0 0 0\n").unwrap();
        assert_eq!(records[0].kind, GeneratorKind::Ars4x32);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "philox2x32 7 0 0 0 257a3673 cd26be2a").unwrap();
        let records = load_vectors(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rounds, 7);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_vectors(Path::new("/nonexistent/kat_vectors.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
