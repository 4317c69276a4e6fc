//! File analysis: filter, scan, and evidence emission.
//!
//! [`EmbeddedIdAnalyzer`] owns the compiled magic-header pattern and
//! nothing else. Every file gets its own [`ForwardReader`] for the
//! duration of one scan, so a single analyzer value can serve any number
//! of files concurrently; the pattern and its partial match table are
//! immutable and shared read-only.

use std::path::Path;

use log::{debug, warn};

use crate::error::{Result, ScanError};
use crate::extract::collect_strings;
use crate::identifier::{parse_identifiers, MAGIC_HEADER};
use crate::pattern::Pattern;
use crate::reader::ForwardReader;
use crate::types::EvidenceSink;

/// Scans object files for embedded vendor/product/version identifiers.
pub struct EmbeddedIdAnalyzer {
    pattern: Pattern,
}

impl EmbeddedIdAnalyzer {
    pub fn new() -> Self {
        // 22 bytes of ASCII; compilation cannot fail.
        let pattern = Pattern::new(MAGIC_HEADER).expect("magic header is a valid pattern");
        EmbeddedIdAnalyzer { pattern }
    }

    /// Analyzer name for host pipelines.
    pub fn name(&self) -> &'static str {
        "Object File Embedded ID Analyzer"
    }

    /// Returns true when the magic header occurs anywhere in the file.
    ///
    /// This is the analyzer's file filter: any readable file qualifies.
    /// The scan's reader is dropped before returning; a later
    /// [`EmbeddedIdAnalyzer::analyze`] of the same file starts fresh.
    /// I/O problems are logged and treated as a non-match.
    pub fn accept(&self, path: &Path) -> bool {
        match self.search_file(path) {
            Ok(offset) => offset.is_some(),
            Err(e) => {
                warn!("problem while scanning {}: {e}", path.display());
                false
            }
        }
    }

    /// Scan `path` and emit evidence for every identifier found after the
    /// first magic-header occurrence.
    ///
    /// A file without the header yields no evidence and no error. A read
    /// failure while opening or searching is logged and likewise yields no
    /// evidence; only contract violations surface as errors. The extractor
    /// walks the whole tail, so a file carrying several identifiers emits
    /// them all, in file order.
    pub fn analyze(&self, path: &Path, sink: &mut dyn EvidenceSink) -> Result<()> {
        let mut reader = match ForwardReader::open(path) {
            Ok(reader) => reader,
            Err(ScanError::Io(e)) => {
                warn!("problem opening {}: {e}", path.display());
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let offset = match self.pattern.search(&mut reader) {
            Ok(Some(offset)) => offset,
            Ok(None) => {
                debug!("no embedded identifier header in {}", path.display());
                return Ok(());
            }
            Err(ScanError::Io(e)) => {
                warn!("problem searching {}: {e}", path.display());
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        debug!(
            "embedded identifier header at offset {offset} in {}",
            path.display()
        );
        let candidates = collect_strings(&mut reader, offset, self.pattern.len())?;
        let mut records = Vec::new();
        for candidate in &candidates {
            records.clear();
            parse_identifiers(candidate, &mut records);
            for record in records.drain(..) {
                sink.emit(record);
            }
        }
        Ok(())
    }

    fn search_file(&self, path: &Path) -> Result<Option<u64>> {
        let mut reader = ForwardReader::open(path)?;
        self.pattern.search(&mut reader)
    }
}

impl Default for EmbeddedIdAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
