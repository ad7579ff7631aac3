//! Default allow-list tables.
//!
//! Reconstructed from the SVG portion of the `enshrined/svg-sanitize`
//! allow-lists. Animation elements (`animate`, `set`, `animateMotion`,
//! `animateTransform`, `animateColor`) are left out because they can rewrite
//! `href` values after sanitization.

/// Elements kept by the default policy. Names are case-sensitive.
pub const ALLOWED_TAGS: &[&str] = &[
    "svg",
    "a",
    "circle",
    "clipPath",
    "defs",
    "desc",
    "ellipse",
    "feBlend",
    "feColorMatrix",
    "feComponentTransfer",
    "feComposite",
    "feConvolveMatrix",
    "feDiffuseLighting",
    "feDisplacementMap",
    "feDistantLight",
    "feDropShadow",
    "feFlood",
    "feFuncA",
    "feFuncB",
    "feFuncG",
    "feFuncR",
    "feGaussianBlur",
    "feImage",
    "feMerge",
    "feMergeNode",
    "feMorphology",
    "feOffset",
    "fePointLight",
    "feSpecularLighting",
    "feSpotLight",
    "feTile",
    "feTurbulence",
    "filter",
    "g",
    "image",
    "line",
    "linearGradient",
    "marker",
    "mask",
    "metadata",
    "path",
    "pattern",
    "polygon",
    "polyline",
    "radialGradient",
    "rect",
    "stop",
    "style",
    "switch",
    "symbol",
    "text",
    "textPath",
    "title",
    "tref",
    "tspan",
    "use",
    "view",
];

/// Attributes allowed on every kept element.
pub const ALLOWED_ATTRIBUTES_GLOBAL: &[&str] = &[
    // core
    "id",
    "class",
    "style",
    "lang",
    "tabindex",
    "xml:lang",
    "xml:space",
    "xmlns",
    "xmlns:xlink",
    "requiredExtensions",
    "requiredFeatures",
    "systemLanguage",
    // geometry
    "cx",
    "cy",
    "d",
    "dx",
    "dy",
    "fx",
    "fy",
    "fr",
    "height",
    "pathLength",
    "points",
    "r",
    "rx",
    "ry",
    "transform",
    "viewBox",
    "width",
    "x",
    "x1",
    "x2",
    "y",
    "y1",
    "y2",
    // presentation
    "alignment-baseline",
    "baseline-shift",
    "clip",
    "clip-path",
    "clip-rule",
    "color",
    "color-interpolation",
    "color-interpolation-filters",
    "color-rendering",
    "cursor",
    "direction",
    "display",
    "dominant-baseline",
    "enable-background",
    "fill",
    "fill-opacity",
    "fill-rule",
    "filter",
    "flood-color",
    "flood-opacity",
    "font-family",
    "font-size",
    "font-size-adjust",
    "font-stretch",
    "font-style",
    "font-variant",
    "font-weight",
    "image-rendering",
    "kerning",
    "letter-spacing",
    "lighting-color",
    "marker-end",
    "marker-mid",
    "marker-start",
    "mask",
    "opacity",
    "overflow",
    "paint-order",
    "pointer-events",
    "shape-rendering",
    "stop-color",
    "stop-opacity",
    "stroke",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
    "text-anchor",
    "text-decoration",
    "text-rendering",
    "unicode-bidi",
    "vector-effect",
    "visibility",
    "word-spacing",
    "writing-mode",
    // text
    "lengthAdjust",
    "rotate",
    "textLength",
    // gradients, patterns, markers, masks
    "clipPathUnits",
    "gradientTransform",
    "gradientUnits",
    "markerHeight",
    "markerUnits",
    "markerWidth",
    "maskContentUnits",
    "maskUnits",
    "offset",
    "orient",
    "patternContentUnits",
    "patternTransform",
    "patternUnits",
    "preserveAspectRatio",
    "refX",
    "refY",
    "spreadMethod",
    // filters
    "amplitude",
    "azimuth",
    "baseFrequency",
    "bias",
    "diffuseConstant",
    "divisor",
    "edgeMode",
    "elevation",
    "exponent",
    "filterUnits",
    "in",
    "in2",
    "intercept",
    "k1",
    "k2",
    "k3",
    "k4",
    "kernelMatrix",
    "kernelUnitLength",
    "limitingConeAngle",
    "mode",
    "numOctaves",
    "operator",
    "order",
    "pointsAtX",
    "pointsAtY",
    "pointsAtZ",
    "preserveAlpha",
    "primitiveUnits",
    "radius",
    "result",
    "scale",
    "seed",
    "slope",
    "specularConstant",
    "specularExponent",
    "stdDeviation",
    "stitchTiles",
    "surfaceScale",
    "tableValues",
    "targetX",
    "targetY",
    "type",
    "values",
    "xChannelSelector",
    "yChannelSelector",
    "z",
];

/// Attributes allowed only on specific elements.
pub const ALLOWED_ATTRIBUTES_BY_TAG: &[(&str, &[&str])] = &[
    (
        "svg",
        &["version", "baseProfile", "zoomAndPan", "contentScriptType", "contentStyleType"],
    ),
    ("a", &["href", "xlink:href", "xlink:title", "target", "rel"]),
    ("use", &["href", "xlink:href"]),
    ("image", &["href", "xlink:href"]),
    ("feImage", &["href", "xlink:href"]),
    ("textPath", &["href", "xlink:href", "startOffset", "method", "spacing", "side", "path"]),
    ("tref", &["href", "xlink:href"]),
    ("linearGradient", &["href", "xlink:href"]),
    ("radialGradient", &["href", "xlink:href"]),
    ("pattern", &["href", "xlink:href"]),
    ("filter", &["href", "xlink:href"]),
    ("style", &["media", "title"]),
    ("view", &["viewTarget"]),
];

/// Attributes whose value is a URI reference.
pub const URI_BEARING_ATTRIBUTES: &[&str] = &["href", "xlink:href", "src"];

/// URI schemes accepted in URI-bearing attributes.
pub const ALLOWED_URI_SCHEMES: &[&str] = &["http", "https", "mailto", "data"];

/// Media types accepted in `data:` URIs.
pub const ALLOWED_DATA_MIME_TYPES: &[&str] = &[
    "image/png",
    "image/gif",
    "image/jpeg",
    "image/jpg",
    "image/webp",
];
