#![no_main]

use libfuzzer_sys::fuzz_target;
use svg_names::internal::{SVG_ATTRIBUTE_REPLACEMENTS, SVG_TAG_REPLACEMENTS};
use svg_names::{
    Replacement, adjusted_svg_attribute_name, adjusted_svg_tag_name, svg_attribute_replacement,
    svg_tag_replacement,
};

// Exact-match oracle: the binary search must agree with a plain scan.
fn linear_scan(table: &'static [Replacement], name: &[u8]) -> Option<&'static Replacement> {
    table.iter().find(|entry| entry.from.as_bytes() == name)
}

// Lookups must never panic on arbitrary bytes, a hit must be an exact
// byte-for-byte match of the queried name, and both lookups must agree with
// the linear-scan oracle over their table.
fuzz_target!(|data: &[u8]| {
    let tag_hit = svg_tag_replacement(data);
    assert_eq!(tag_hit, linear_scan(&SVG_TAG_REPLACEMENTS, data));
    if let Some(replacement) = tag_hit {
        assert_eq!(replacement.from.as_bytes(), data);
    }

    let attribute_hit = svg_attribute_replacement(data);
    assert_eq!(attribute_hit, linear_scan(&SVG_ATTRIBUTE_REPLACEMENTS, data));
    if let Some(replacement) = attribute_hit {
        assert_eq!(replacement.from.as_bytes(), data);
    }

    if let Ok(name) = std::str::from_utf8(data) {
        match tag_hit {
            Some(replacement) => assert_eq!(adjusted_svg_tag_name(name), replacement.to),
            None => assert_eq!(adjusted_svg_tag_name(name), name),
        }
        match attribute_hit {
            Some(replacement) => assert_eq!(adjusted_svg_attribute_name(name), replacement.to),
            None => assert_eq!(adjusted_svg_attribute_name(name), name),
        }
    }
});
