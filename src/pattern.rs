//! Knuth-Morris-Pratt search over a forward reader.
//!
//! A [`Pattern`] is compiled once from an ASCII literal and carries its
//! partial match table, so scanning a file is a single forward pass with
//! O(n + m) byte comparisons. The probed offsets never decrease, which is
//! exactly what [`ForwardReader`] requires.

use crate::error::{Result, ScanError};
use crate::reader::ForwardReader;

/// An immutable ASCII search pattern with its precomputed partial match
/// table.
///
/// Patterns are cheap to share: one instance scans any number of files,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct Pattern {
    bytes: Vec<u8>,
    table: Vec<i32>,
}

impl Pattern {
    /// Compile a search pattern.
    ///
    /// The pattern must be at least two bytes long and contain only 7-bit
    /// ASCII; anything else is a usage error.
    pub fn new(pattern: &str) -> Result<Self> {
        let bytes = pattern.as_bytes().to_vec();
        if bytes.len() < 2 {
            return Err(ScanError::PatternTooShort(bytes.len()));
        }
        if let Some((index, &byte)) = bytes.iter().enumerate().find(|(_, &b)| b > 0x7f) {
            return Err(ScanError::NonAsciiPattern { index, byte });
        }
        let table = partial_match_table(&bytes);
        Ok(Pattern { bytes, table })
    }

    /// Pattern length in bytes. Always at least 2.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Never true; patterns shorter than two bytes do not construct.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The pattern bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The partial match table, same length as the pattern.
    pub fn partial_match_table(&self) -> &[i32] {
        &self.table
    }

    /// Find the first occurrence of this pattern in the reader's stream.
    ///
    /// Returns the byte offset of the match, or `None` when the pattern
    /// does not occur. End of file mid-match is a normal miss.
    pub fn search(&self, reader: &mut ForwardReader) -> Result<Option<u64>> {
        let last_index = self.bytes.len() - 1;
        let mut match_offset: u64 = 0;
        let mut index: usize = 0;
        loop {
            let Some(byte) = reader.byte_at(match_offset + index as u64)? else {
                return Ok(None);
            };
            if self.bytes[index] == byte {
                if index == last_index {
                    return Ok(Some(match_offset));
                }
                index += 1;
            } else if self.table[index] > -1 {
                // Skip ahead by the length of the failed prefix that is not
                // also a suffix; the probe offset stays put.
                let fallback = self.table[index] as usize;
                match_offset += (index - fallback) as u64;
                index = fallback;
            } else {
                index = 0;
                match_offset += 1;
            }
        }
    }
}

/// Compute the KMP partial match table for a pattern of length >= 2.
///
/// `table[0]` holds the -1 sentinel and `table[1]` is 0; each later entry
/// is the length of the longest proper prefix of the pattern that is also
/// a suffix of the prefix ending just before that position.
fn partial_match_table(pattern: &[u8]) -> Vec<i32> {
    let mut table = vec![0i32; pattern.len()];
    table[0] = -1;
    table[1] = 0;
    let mut position = 2;
    let mut candidate = 0usize;
    while position < pattern.len() {
        if pattern[position - 1] == pattern[candidate] {
            candidate += 1;
            table[position] = candidate as i32;
            position += 1;
        } else if candidate > 0 {
            candidate = table[candidate] as usize;
        } else {
            table[position] = 0;
            position += 1;
        }
    }
    table
}
