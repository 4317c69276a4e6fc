//! Core types for embedded identifier evidence.
//!
//! This module defines the records handed to the surrounding pipeline
//! once an identifier has been parsed out of a file.

use serde::Serialize;

/// Which part of a product identity a piece of evidence contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceKind {
    /// The organization that produced the software
    Vendor,
    /// The product name
    Product,
    /// The product version
    Version,
}

impl std::fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvidenceKind::Vendor => write!(f, "vendor"),
            EvidenceKind::Product => write!(f, "product"),
            EvidenceKind::Version => write!(f, "version"),
        }
    }
}

/// How strongly a piece of evidence identifies the dependency.
///
/// Identifiers embedded at build time name their product directly, so the
/// extractor only ever emits [`Confidence::Highest`]; the full scale exists
/// for sinks that merge this evidence with weaker sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Lowest,
    Low,
    Medium,
    High,
    Highest,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Lowest => write!(f, "lowest"),
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High => write!(f, "high"),
            Confidence::Highest => write!(f, "highest"),
        }
    }
}

/// A single vendor/product/version record extracted from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evidence {
    /// What this record identifies
    pub kind: EvidenceKind,
    /// Which extraction path produced it (e.g. "Embedded ID")
    pub source: String,
    /// Field name as it appeared in the identifier
    pub name: String,
    /// Field value
    pub value: String,
    /// Strength of the identification
    pub confidence: Confidence,
}

impl Evidence {
    /// Build a highest-confidence record, the only strength the embedded
    /// identifier forms warrant.
    pub fn highest(
        kind: EvidenceKind,
        source: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Evidence {
            kind,
            source: source.into(),
            name: name.into(),
            value: value.into(),
            confidence: Confidence::Highest,
        }
    }
}

/// Receives evidence records as the extractor produces them.
///
/// Within one file, records arrive in increasing file-offset order. The
/// extractor reports everything it recognizes; de-duplication is the
/// sink's concern.
pub trait EvidenceSink {
    fn emit(&mut self, evidence: Evidence);
}

impl EvidenceSink for Vec<Evidence> {
    fn emit(&mut self, evidence: Evidence) {
        self.push(evidence);
    }
}
