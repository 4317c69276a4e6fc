//! # eidscan - Embedded product identifier scanning
//!
//! This library locates a fixed ASCII magic header inside arbitrary
//! binary files and turns the identifier that follows it into
//! vendor/product/version evidence.
//!
//! ## Background
//!
//! Build pipelines can stamp object code with a small ASCII identifier:
//! the 22-byte header `EID:50CA347E-88EF4066:` followed by either
//! key-value fields (`vendor=...;product=...;version=...;`) or a CPE 2.3
//! name. Because the identifier can sit anywhere inside an otherwise
//! opaque binary, the scanner streams the file once through a buffered
//! forward reader, finds the header with Knuth-Morris-Pratt search, and
//! only then cuts the tail of the file into printable-ASCII strings for
//! parsing. No executable-format knowledge is needed; every byte is
//! opaque except the printable subrange.
//!
//! ## Usage
//!
//! ```no_run
//! use eidscan::scan_file;
//!
//! let evidence = scan_file("firmware.bin").unwrap();
//! for record in evidence {
//!     println!("{}: {} = {}", record.source, record.name, record.value);
//! }
//! ```

mod analyzer;
mod error;
mod extract;
mod identifier;
mod pattern;
mod reader;
mod types;

pub use analyzer::EmbeddedIdAnalyzer;
pub use error::{Result, ScanError};
pub use extract::collect_strings;
pub use identifier::{EMBEDDED_CPE, EMBEDDED_ID, MAGIC_HEADER};
pub use pattern::Pattern;
pub use reader::ForwardReader;
pub use types::{Confidence, Evidence, EvidenceKind, EvidenceSink};

use std::path::Path;

/// Scan a single file and collect all embedded identifier evidence.
///
/// This is the main entry point for one-off scans. A file without the
/// magic header yields an empty vector, as does a file that could not be
/// read (the failure is logged).
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<Vec<Evidence>> {
    let analyzer = EmbeddedIdAnalyzer::new();
    let mut evidence = Vec::new();
    analyzer.analyze(path.as_ref(), &mut evidence)?;
    Ok(evidence)
}
