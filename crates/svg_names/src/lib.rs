//! Canonical-name correction tables for SVG foreign content.
//!
//! During HTML tree construction, element and attribute names inside the SVG
//! namespace that were lower-cased by the tokenizer must be rewritten to
//! their canonical mixed-case spellings before insertion (`attributename`
//! becomes `attributeName`, `altglyph` becomes `altGlyph`). This crate owns
//! the two static replacement tables and their exact-match lookups. Deciding
//! *when* adjustment applies (namespace context, insertion mode) stays with
//! the tree builder; callers supply names already normalized to lower case.

mod replacement;
mod tables;

pub use crate::replacement::{
    Replacement, adjusted_svg_attribute_name, adjusted_svg_tag_name, svg_attribute_replacement,
    svg_tag_replacement,
};

#[cfg(feature = "internal-api")]
pub mod internal {
    //! Raw table access for fuzzing and diagnostics; not a stable API.
    pub use super::tables::{SVG_ATTRIBUTE_REPLACEMENTS, SVG_TAG_REPLACEMENTS};
}
