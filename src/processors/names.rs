//! Canonicalization of person names scraped from stat tables.
//!
//! The site renders names in several shapes depending on the page
//! generation: "First Last", "Last, First", "Last, Suffix, First",
//! sometimes with a parenthetical nickname or a renderer error fragment
//! appended. Everything funnels through [`normalize_name`] so downstream
//! tables carry a single "First Last [Suffix]" shape.

use crate::constants::name_artifacts::BLOCK_ERROR;

/// Canonicalizes a scraped name into "First Last [Suffix]" form.
///
/// Absent input stays absent: `None` maps to `None` rather than to an
/// empty string, so missing-name cells survive into typed columns.
///
/// Rules, applied in order:
/// 1. Trailing parenthetical content (nicknames, aliases) is stripped.
/// 2. Anything from a literal "block error" marker onward is dropped.
/// 3. Exactly one comma: treated as "Last, First", emitted "First Last".
/// 4. Exactly two commas: treated as "Last, Suffix, First", emitted
///    "First Last Suffix". The suffix component is reassembled without
///    retrimming, which leaves the historical double-space artifact in
///    place (see the module tests); consumers depend on the current
///    shape, so it is pinned rather than fixed.
/// 5. Anything else is passed through unchanged.
///
/// # Examples
/// ```
/// use ncaa_stats::processors::normalize_name;
///
/// assert_eq!(normalize_name(Some("Doe, John")), Some("John Doe".to_string()));
/// assert_eq!(
///     normalize_name(Some("John Doe (A.K.A. Johnny)")),
///     Some("John Doe".to_string())
/// );
/// assert_eq!(normalize_name(None), None);
/// ```
pub fn normalize_name(raw: Option<&str>) -> Option<String> {
    let raw = raw?;

    let mut text = raw;
    if let Some(idx) = text.find('(') {
        text = text[..idx].trim_end();
    }
    if let Some(idx) = text.find(BLOCK_ERROR) {
        text = text[..idx].trim_end();
    }

    let parts: Vec<&str> = text.split(',').collect();
    let canonical = match parts.len() {
        // "Last, First" -> "First Last"
        2 => format!("{} {}", parts[1].trim(), parts[0].trim()),
        // "Last, Suffix, First" -> "First Last Suffix"; the suffix keeps
        // its leading whitespace from the split (documented quirk)
        3 => format!("{} {} {}", parts[2].trim(), parts[0].trim(), parts[1]),
        _ => text.to_string(),
    };

    Some(canonical)
}
