//! Embedded identifier grammars.
//!
//! Two identifier forms may follow the magic header: a key-value form
//! (`vendor=...;product=...;version=...;`) and a CPE 2.3 form. Both are
//! matched case-insensitively anywhere inside a candidate string, and a
//! single string may carry both forms.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{Evidence, EvidenceKind};

/// The 22-byte ASCII header that marks an embedded identifier.
///
/// This is the wire contract: case-sensitive, with the single hyphen
/// between the two hex groups. Files are searched for these exact bytes.
pub const MAGIC_HEADER: &str = "EID:50CA347E-88EF4066:";

/// Source tag stamped on key-value evidence.
pub const EMBEDDED_ID: &str = "Embedded ID";
/// Source tag stamped on CPE 2.3 evidence.
pub const EMBEDDED_CPE: &str = "Embedded CPE";

const VENDOR: &str = "vendor";
const PRODUCT: &str = "product";
const VERSION: &str = "version";

/// Key-value form: the header followed by one to three `name=value;`
/// fields. Odd capture groups hold the field names, even groups the
/// values.
fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let magic = regex::escape(MAGIC_HEADER);
        let field = "(?:(vendor|product|version)=(.*?);)";
        Regex::new(&format!("(?i){magic}{field}{field}?{field}?"))
            .expect("embedded ID pattern compiles")
    })
}

/// CPE 2.3 form: the header followed by `cpe:2.3:a:` and nine
/// colon-separated fields, of which the first three are captured.
fn cpe_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let magic = regex::escape(MAGIC_HEADER);
        let capture = "([^:]+?)";
        let skip = "[^:]+?";
        Regex::new(&format!(
            "(?i){magic}cpe:2\\.3:a:{capture}:{capture}:{capture}:{skip}:{skip}:{skip}:{skip}:{skip}:{skip}"
        ))
        .expect("embedded CPE pattern compiles")
    })
}

/// Parse every identifier form present in `candidate`, appending one
/// evidence record per recognized field.
///
/// Returns true when at least one form matched. A string matching neither
/// form appends nothing.
pub fn parse_identifiers(candidate: &str, out: &mut Vec<Evidence>) -> bool {
    let id = parse_embedded_id(candidate, out);
    let cpe = parse_embedded_cpe(candidate, out);
    id || cpe
}

fn parse_embedded_id(candidate: &str, out: &mut Vec<Evidence>) -> bool {
    let Some(captures) = id_pattern().captures(candidate) else {
        return false;
    };
    for n in 0..3 {
        let (name, value) = match (captures.get(2 * n + 1), captures.get(2 * n + 2)) {
            (Some(name), Some(value)) => (name.as_str(), value.as_str()),
            _ => continue,
        };
        let kind = if name.eq_ignore_ascii_case(VENDOR) {
            EvidenceKind::Vendor
        } else if name.eq_ignore_ascii_case(PRODUCT) {
            EvidenceKind::Product
        } else {
            EvidenceKind::Version
        };
        out.push(Evidence::highest(kind, EMBEDDED_ID, name, value));
    }
    true
}

fn parse_embedded_cpe(candidate: &str, out: &mut Vec<Evidence>) -> bool {
    let Some(captures) = cpe_pattern().captures(candidate) else {
        return false;
    };
    // CPE packs spaces as underscores; undo that on emission.
    let field = |group: usize| captures[group].replace('_', " ");
    out.push(Evidence::highest(
        EvidenceKind::Vendor,
        EMBEDDED_CPE,
        VENDOR,
        field(1),
    ));
    out.push(Evidence::highest(
        EvidenceKind::Product,
        EMBEDDED_CPE,
        PRODUCT,
        field(2),
    ));
    out.push(Evidence::highest(
        EvidenceKind::Version,
        EMBEDDED_CPE,
        VERSION,
        field(3),
    ));
    true
}
