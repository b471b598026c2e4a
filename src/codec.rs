//! The encoded form of a run list: one `<char><count>\n` record per run.
//!
//! The character is a single raw byte, so records holding digits or a
//! newline as their character stay unambiguous. Counts are plain decimal,
//! without sign or leading zeros.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::helpers::push_decimal;
use crate::list::RunList;
use crate::run::Run;

pub(crate) fn encode(runs: &[Run]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for run in runs {
        out.try_reserve(run.encoded_len())
            .map_err(|_| Error::OutOfMemory)?;
        out.push(run.character);
        push_decimal(&mut out, run.count);
        out.push(b'\n');
    }
    Ok(out)
}

pub(crate) fn decode(bytes: &[u8]) -> Result<RunList> {
    let mut list = RunList::new();
    let mut pos = 0;
    while pos < bytes.len() {
        let (run, next) = parse_record(bytes, pos)?;
        if list.len().checked_add(run.count).is_none() {
            return Err(Error::RecordCountOverflow(pos));
        }
        if list.runs().last().map(|last| last.character) == Some(run.character) {
            warn!(
                "record at byte {} repeats character {:#04x}, merging",
                pos, run.character
            );
        }
        list.push_run(run)?;
        pos = next;
    }
    debug!("decoded {} runs, {} characters", list.runs().len(), list.len());
    Ok(list)
}

/// Parses the record starting at `start`, returning it with the offset
/// of the next record.
fn parse_record(bytes: &[u8], start: usize) -> Result<(Run, usize)> {
    let character = bytes[start];
    let digits = start + 1;
    let mut pos = digits;
    let mut count: usize = 0;
    while let Some(&b) = bytes.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        count = count
            .checked_mul(10)
            .and_then(|c| c.checked_add(usize::from(b - b'0')))
            .ok_or(Error::RecordCountOverflow(start))?;
        pos += 1;
    }
    if pos == digits {
        return match bytes.get(pos) {
            None => Err(Error::RecordTruncated(start)),
            Some(_) => Err(Error::RecordMissingCount(start)),
        };
    }
    if bytes[digits] == b'0' {
        return if pos - digits == 1 {
            Err(Error::RecordZeroCount(start))
        } else {
            Err(Error::RecordLeadingZero(start))
        };
    }
    match bytes.get(pos) {
        None => Err(Error::RecordTruncated(start)),
        Some(b'\n') => Ok((Run::new(character, count), pos + 1)),
        Some(_) => Err(Error::RecordBadTerminator(start)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn runs(list: &RunList) -> Vec<(u8, usize)> {
        list.runs().iter().map(|r| (r.character, r.count)).collect()
    }

    #[test]
    fn encodes_records() {
        let runs = [Run::new(b'a', 3), Run::new(b'b', 12)];
        assert_eq!(encode(&runs).unwrap(), b"a3\nb12\n");
        assert_eq!(encode(&[]).unwrap(), b"");
    }

    #[test]
    fn decodes_records() {
        let list = decode(b"a3\nb12\n").unwrap();
        assert_eq!(runs(&list), vec![(b'a', 3), (b'b', 12)]);
        assert_eq!(list.len(), 15);
    }

    #[test]
    fn decodes_digit_and_newline_characters() {
        let list = decode(b"12\n\n3\n 10\n").unwrap();
        assert_eq!(runs(&list), vec![(b'1', 2), (b'\n', 3), (b' ', 10)]);
        assert_eq!(encode(list.runs()).unwrap(), b"12\n\n3\n 10\n");
    }

    #[test]
    fn decode_merges_repeated_character() {
        let list = decode(b"a1\na2\nb1\n").unwrap();
        assert_eq!(runs(&list), vec![(b'a', 3), (b'b', 1)]);
    }

    #[test]
    fn decode_empty() {
        assert!(decode(b"").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_malformed_records() {
        assert_eq!(decode(b"a"), Err(Error::RecordTruncated(0)));
        assert_eq!(decode(b"a3"), Err(Error::RecordTruncated(0)));
        assert_eq!(decode(b"a3\nb\n"), Err(Error::RecordMissingCount(3)));
        assert_eq!(decode(b"a0\n"), Err(Error::RecordZeroCount(0)));
        assert_eq!(decode(b"a03\n"), Err(Error::RecordLeadingZero(0)));
        assert_eq!(decode(b"a3x\n"), Err(Error::RecordBadTerminator(0)));
        assert_eq!(
            decode(b"a99999999999999999999999\n"),
            Err(Error::RecordCountOverflow(0))
        );
    }

    #[test]
    fn encode_decode_encode_is_stable() {
        let first = b"#4\n 2\n@17\n\n1\n".to_vec();
        let second = encode(decode(&first).unwrap().runs()).unwrap();
        assert_eq!(second, first);
    }
}
