//! Error types for the embedded identifier scanner.

use thiserror::Error;

/// Errors surfaced by pattern construction and file scanning.
///
/// Contract violations (a bad pattern, a backward probe) are programmer
/// errors and should never be swallowed. I/O failures carry the underlying
/// cause. A file that simply does not contain the magic header is not an
/// error anywhere in this crate.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Search patterns shorter than two bytes have no partial match table.
    #[error("expected non-trivial search pattern (length > 1), got {0}")]
    PatternTooShort(usize),

    /// Search patterns must be 7-bit ASCII.
    #[error("expected ASCII only, found byte {byte:#04x} at index {index}")]
    NonAsciiPattern { index: usize, byte: u8 },

    /// The reader was probed at an offset below the previous probe.
    #[error("offset {requested} should not be less than previous offset {previous}")]
    NonMonotonicRead { requested: u64, previous: u64 },

    /// Attempted to seek past the file bytes already read.
    #[error("attempted to seek past file bytes already accessed: {0}")]
    SeekPastWindow(u64),

    /// Underlying I/O failure while opening, refilling, or seeking.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scanner operations.
pub type Result<T> = std::result::Result<T, ScanError>;
