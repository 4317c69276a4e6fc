//! Printable string extraction from the tail of a scanned file.
//!
//! Once the magic header has been located, the rest of the file is cut
//! into maximal runs of printable ASCII. Carriage returns, linefeeds,
//! form feeds and tabs count as unprintable here; any byte outside
//! `0x20..=0x7e` ends the current run.

use log::warn;

use crate::error::{Result, ScanError};
use crate::reader::ForwardReader;

/// Lowest printable byte (space).
const PRINTABLE_MIN: u8 = 0x20;
/// Highest printable byte (tilde).
const PRINTABLE_MAX: u8 = 0x7e;

/// Collect printable ASCII strings from `offset` to the end of the file.
///
/// The reader is rewound to `offset` first, so the string containing the
/// match itself is part of the result. Runs shorter than `min_length` are
/// discarded. An I/O fault mid-walk ends collection early with a warning;
/// the runs gathered up to that point are still returned. Contract
/// violations on the reader are not swallowed.
pub fn collect_strings(
    reader: &mut ForwardReader,
    offset: u64,
    min_length: usize,
) -> Result<Vec<String>> {
    reader.seek(offset)?;
    let mut result = Vec::new();
    let mut run = String::new();
    loop {
        let byte = match reader.next_byte() {
            Ok(byte) => byte,
            Err(ScanError::Io(e)) => {
                warn!("string extraction ended early: {e}");
                break;
            }
            Err(e) => return Err(e),
        };
        match byte {
            Some(b) if (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&b) => run.push(b as char),
            Some(_) => flush(&mut run, min_length, &mut result),
            None => break,
        }
    }
    flush(&mut run, min_length, &mut result);
    Ok(result)
}

fn flush(run: &mut String, min_length: usize, out: &mut Vec<String>) {
    if run.len() >= min_length {
        out.push(std::mem::take(run));
    } else {
        run.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn reader_for(content: &[u8]) -> (NamedTempFile, ForwardReader) {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content).unwrap();
        f.flush().unwrap();
        let reader = ForwardReader::open(f.path()).unwrap();
        (f, reader)
    }

    #[test]
    fn test_single_run_to_eof() {
        let (_f, mut reader) = reader_for(b"hello world");
        reader.byte_at(0).unwrap();
        let strings = collect_strings(&mut reader, 0, 4).unwrap();
        assert_eq!(strings, vec!["hello world".to_string()]);
    }

    #[test]
    fn test_runs_split_on_unprintable_bytes() {
        let (_f, mut reader) = reader_for(b"first\x00second\x01\x02third");
        reader.byte_at(0).unwrap();
        let strings = collect_strings(&mut reader, 0, 5).unwrap();
        assert_eq!(strings, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_short_runs_are_discarded() {
        let (_f, mut reader) = reader_for(b"abc\x00longer run\x00xy");
        reader.byte_at(0).unwrap();
        let strings = collect_strings(&mut reader, 0, 4).unwrap();
        assert_eq!(strings, vec!["longer run"]);
    }

    #[test]
    fn test_tabs_and_newlines_split_runs() {
        let (_f, mut reader) = reader_for(b"alpha\tbeta\ngamma\rdelta");
        reader.byte_at(0).unwrap();
        let strings = collect_strings(&mut reader, 0, 5).unwrap();
        assert_eq!(strings, vec!["alpha", "gamma", "delta"]);
    }

    #[test]
    fn test_collection_starts_at_offset() {
        let (_f, mut reader) = reader_for(b"skipped\x00visible tail");
        reader.byte_at(10).unwrap();
        let strings = collect_strings(&mut reader, 8, 4).unwrap();
        assert_eq!(strings, vec!["visible tail"]);
    }

    #[test]
    fn test_space_and_tilde_are_printable() {
        let (_f, mut reader) = reader_for(b" ~ bounds ~ \x7f");
        reader.byte_at(0).unwrap();
        let strings = collect_strings(&mut reader, 0, 4).unwrap();
        assert_eq!(strings, vec![" ~ bounds ~ "]);
    }

    #[test]
    fn test_all_binary_yields_nothing() {
        let (_f, mut reader) = reader_for(&[0u8, 1, 2, 3, 255, 254]);
        reader.byte_at(0).unwrap();
        let strings = collect_strings(&mut reader, 0, 2).unwrap();
        assert!(strings.is_empty());
    }
}
