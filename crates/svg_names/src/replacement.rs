//! Exact-match lookups over the SVG name replacement tables.

use crate::tables::{SVG_ATTRIBUTE_REPLACEMENTS, SVG_TAG_REPLACEMENTS};

/// A single name correction.
///
/// `from` is the lower-case spelling as it appears in normalized markup,
/// `to` the canonical mixed-case spelling to substitute. Entries live in
/// static storage for the process lifetime; lookups hand out borrowed
/// references, never copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Replacement {
    pub from: &'static str,
    pub to: &'static str,
}

/// Look up the correction for an SVG tag name.
///
/// Matching is exact: case-sensitive, length-exact, byte-for-byte against
/// the table keys. No case folding happens here; the tokenizer has already
/// lower-cased tag names by the time adjustment runs. Empty or non-ASCII
/// input simply misses.
pub fn svg_tag_replacement(name: &[u8]) -> Option<&'static Replacement> {
    lookup(&SVG_TAG_REPLACEMENTS, name)
}

/// Look up the correction for an SVG attribute name.
///
/// Same contract as [`svg_tag_replacement`], over the separate attribute
/// table. The two tables are disjoint data sets and are never cross-queried;
/// a tag name must not accidentally match in attribute context or vice
/// versa.
pub fn svg_attribute_replacement(name: &[u8]) -> Option<&'static Replacement> {
    lookup(&SVG_ATTRIBUTE_REPLACEMENTS, name)
}

/// Tag name with its correction applied, or the input unchanged on a miss.
pub fn adjusted_svg_tag_name(name: &str) -> &str {
    match svg_tag_replacement(name.as_bytes()) {
        Some(replacement) => {
            #[cfg(any(test, feature = "debug-stats"))]
            log::trace!(target: "svg.adjust", "tag {name} -> {}", replacement.to);
            replacement.to
        }
        None => name,
    }
}

/// Attribute name with its correction applied, or the input unchanged on a
/// miss.
pub fn adjusted_svg_attribute_name(name: &str) -> &str {
    match svg_attribute_replacement(name.as_bytes()) {
        Some(replacement) => {
            #[cfg(any(test, feature = "debug-stats"))]
            log::trace!(target: "svg.adjust", "attribute {name} -> {}", replacement.to);
            replacement.to
        }
        None => name,
    }
}

fn lookup(table: &'static [Replacement], name: &[u8]) -> Option<&'static Replacement> {
    // Tables are sorted by `from` byte order (checked in tables::tests).
    table
        .binary_search_by(|entry| entry.from.as_bytes().cmp(name))
        .ok()
        .map(|index| &table[index])
}
