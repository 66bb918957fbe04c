//! Static replacement data for SVG foreign content.
//!
//! The entries are the HTML parsing specification's foreign-content
//! adjustment lists: the SVG element names whose canonical spelling is
//! mixed-case, and the "adjust SVG attributes" table.
//!
//! Invariants:
//! - Each table is sorted strictly ascending by `from` byte order; the
//!   lookups binary-search on that order.
//! - Every `from` is unique within its table, ASCII, and lower-case.
//! - Every entry is a pure case correction (`from` is the ASCII-lowercase
//!   folding of `to`).

use crate::replacement::Replacement;

const fn entry(from: &'static str, to: &'static str) -> Replacement {
    Replacement { from, to }
}

/// SVG tag names requiring correction, keyed by their lower-cased spelling.
pub static SVG_TAG_REPLACEMENTS: [Replacement; 37] = [
    entry("altglyph", "altGlyph"),
    entry("altglyphdef", "altGlyphDef"),
    entry("altglyphitem", "altGlyphItem"),
    entry("animatecolor", "animateColor"),
    entry("animatemotion", "animateMotion"),
    entry("animatetransform", "animateTransform"),
    entry("clippath", "clipPath"),
    entry("feblend", "feBlend"),
    entry("fecolormatrix", "feColorMatrix"),
    entry("fecomponenttransfer", "feComponentTransfer"),
    entry("fecomposite", "feComposite"),
    entry("feconvolvematrix", "feConvolveMatrix"),
    entry("fediffuselighting", "feDiffuseLighting"),
    entry("fedisplacementmap", "feDisplacementMap"),
    entry("fedistantlight", "feDistantLight"),
    entry("fedropshadow", "feDropShadow"),
    entry("feflood", "feFlood"),
    entry("fefunca", "feFuncA"),
    entry("fefuncb", "feFuncB"),
    entry("fefuncg", "feFuncG"),
    entry("fefuncr", "feFuncR"),
    entry("fegaussianblur", "feGaussianBlur"),
    entry("feimage", "feImage"),
    entry("femerge", "feMerge"),
    entry("femergenode", "feMergeNode"),
    entry("femorphology", "feMorphology"),
    entry("feoffset", "feOffset"),
    entry("fepointlight", "fePointLight"),
    entry("fespecularlighting", "feSpecularLighting"),
    entry("fespotlight", "feSpotLight"),
    entry("fetile", "feTile"),
    entry("feturbulence", "feTurbulence"),
    entry("foreignobject", "foreignObject"),
    entry("glyphref", "glyphRef"),
    entry("lineargradient", "linearGradient"),
    entry("radialgradient", "radialGradient"),
    entry("textpath", "textPath"),
];

/// SVG attribute names requiring correction, keyed by their lower-cased
/// spelling.
pub static SVG_ATTRIBUTE_REPLACEMENTS: [Replacement; 62] = [
    entry("attributename", "attributeName"),
    entry("attributetype", "attributeType"),
    entry("basefrequency", "baseFrequency"),
    entry("baseprofile", "baseProfile"),
    entry("calcmode", "calcMode"),
    entry("clippathunits", "clipPathUnits"),
    entry("contentscripttype", "contentScriptType"),
    entry("contentstyletype", "contentStyleType"),
    entry("diffuseconstant", "diffuseConstant"),
    entry("edgemode", "edgeMode"),
    entry("externalresourcesrequired", "externalResourcesRequired"),
    entry("filterres", "filterRes"),
    entry("filterunits", "filterUnits"),
    entry("glyphref", "glyphRef"),
    entry("gradienttransform", "gradientTransform"),
    entry("gradientunits", "gradientUnits"),
    entry("kernelmatrix", "kernelMatrix"),
    entry("kernelunitlength", "kernelUnitLength"),
    entry("keypoints", "keyPoints"),
    entry("keysplines", "keySplines"),
    entry("keytimes", "keyTimes"),
    entry("lengthadjust", "lengthAdjust"),
    entry("limitingconeangle", "limitingConeAngle"),
    entry("markerheight", "markerHeight"),
    entry("markerunits", "markerUnits"),
    entry("markerwidth", "markerWidth"),
    entry("maskcontentunits", "maskContentUnits"),
    entry("maskunits", "maskUnits"),
    entry("numoctaves", "numOctaves"),
    entry("pathlength", "pathLength"),
    entry("patterncontentunits", "patternContentUnits"),
    entry("patterntransform", "patternTransform"),
    entry("patternunits", "patternUnits"),
    entry("pointsatx", "pointsAtX"),
    entry("pointsaty", "pointsAtY"),
    entry("pointsatz", "pointsAtZ"),
    entry("preservealpha", "preserveAlpha"),
    entry("preserveaspectratio", "preserveAspectRatio"),
    entry("primitiveunits", "primitiveUnits"),
    entry("refx", "refX"),
    entry("refy", "refY"),
    entry("repeatcount", "repeatCount"),
    entry("repeatdur", "repeatDur"),
    entry("requiredextensions", "requiredExtensions"),
    entry("requiredfeatures", "requiredFeatures"),
    entry("specularconstant", "specularConstant"),
    entry("specularexponent", "specularExponent"),
    entry("spreadmethod", "spreadMethod"),
    entry("startoffset", "startOffset"),
    entry("stddeviation", "stdDeviation"),
    entry("stitchtiles", "stitchTiles"),
    entry("surfacescale", "surfaceScale"),
    entry("systemlanguage", "systemLanguage"),
    entry("tablevalues", "tableValues"),
    entry("targetx", "targetX"),
    entry("targety", "targetY"),
    entry("textlength", "textLength"),
    entry("viewbox", "viewBox"),
    entry("viewtarget", "viewTarget"),
    entry("xchannelselector", "xChannelSelector"),
    entry("ychannelselector", "yChannelSelector"),
    entry("zoomandpan", "zoomAndPan"),
];
