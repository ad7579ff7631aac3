//! The SVG sanitizer: parse, rewrite against a [`Policy`], serialize.
//!
//! [`SvgSanitizer`] implements the [`Sanitizer`] trait. The trait is the seam
//! used by [`sanitize_file`](crate::sanitize_file), so callers can plug in
//! their own implementation.

mod walker;

use std::sync::Arc;

pub use walker::SanitizeReport;

use crate::config::SvgSanitizerBuilder;
use crate::error::{Result, SvgSanitizerError};
use crate::parser::parse_document;
use crate::policy::Policy;
use crate::serializer::serialize_document;
use crate::tree::Document;
use walker::Walker;

/// Trait for SVG content sanitizers.
///
/// Implementations must be `Send + Sync` so one instance can serve
/// concurrent callers.
pub trait Sanitizer: Send + Sync {
    /// Sanitize `svg`, returning the complete safe document or an error.
    fn sanitize(&self, svg: &str) -> Result<String>;
}

/// Allow-list based SVG sanitizer.
///
/// Cheap to clone: the [`Policy`] is shared.
///
/// # Example
///
/// ```
/// use svg_sanitizer::SvgSanitizer;
///
/// let sanitizer = SvgSanitizer::default();
/// let clean = sanitizer
///     .sanitize(r#"<svg onload="evil()"><rect width="10"/><script>alert(1)</script></svg>"#)
///     .unwrap();
/// assert_eq!(clean, r#"<svg><rect width="10"/></svg>"#);
/// ```
#[derive(Clone, Debug)]
pub struct SvgSanitizer {
    policy: Arc<Policy>,
}

impl SvgSanitizer {
    /// Create a sanitizer enforcing `policy`.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Start a [`SvgSanitizerBuilder`] from the default policy.
    pub fn builder() -> SvgSanitizerBuilder {
        SvgSanitizerBuilder::new()
    }

    /// The policy this sanitizer enforces.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Sanitize `svg` and serialize the result.
    pub fn sanitize(&self, svg: &str) -> Result<String> {
        self.sanitize_with_report(svg).map(|(out, _)| out)
    }

    /// Like [`sanitize`](Self::sanitize), also returning what was removed.
    ///
    /// If the root element itself is removed the output is an empty `<svg/>`.
    pub fn sanitize_with_report(&self, svg: &str) -> Result<(String, SanitizeReport)> {
        let document = parse_document(svg, self.policy.limits()).inspect_err(|e| {
            tracing::warn!("Rejected SVG input: {e}");
        })?;

        let (sanitized, report) = self.sanitize_document(document);
        let output = serialize_document(&sanitized);

        tracing::debug!(
            "Sanitized SVG: {} elements removed, {} unwrapped, {} attributes removed, {} comments removed, {} processing instructions removed",
            report.elements_removed,
            report.elements_unwrapped,
            report.attributes_removed,
            report.comments_removed,
            report.processing_instructions_removed,
        );
        Ok((output, report))
    }

    /// Sanitize UTF-8 encoded bytes. A leading byte order mark is skipped.
    pub fn sanitize_bytes(&self, svg: &[u8]) -> Result<Vec<u8>> {
        let svg = decode_utf8(svg)?;
        self.sanitize(svg).map(String::into_bytes)
    }

    /// Enforce the policy on an already parsed document.
    pub fn sanitize_document(&self, document: Document) -> (Document, SanitizeReport) {
        let mut walker = Walker::new(&self.policy);
        let sanitized = walker.sanitize_document(document);
        (sanitized, walker.into_report())
    }
}

impl Default for SvgSanitizer {
    fn default() -> Self {
        Self::new(Policy::default())
    }
}

impl Sanitizer for SvgSanitizer {
    fn sanitize(&self, svg: &str) -> Result<String> {
        SvgSanitizer::sanitize(self, svg)
    }
}

/// Decode `bytes` as UTF-8, skipping a byte order mark.
pub(crate) fn decode_utf8(bytes: &[u8]) -> Result<&str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    std::str::from_utf8(bytes).map_err(|e| {
        tracing::warn!("Rejected SVG input: not UTF-8");
        SvgSanitizerError::Parse(format!("input is not valid UTF-8: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_typical_editor_export() {
        let input = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n",
            "<!-- Created with Inkscape (http://www.inkscape.org/) -->\n",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
            "xmlns:inkscape=\"http://www.inkscape.org/namespaces/inkscape\" ",
            "width=\"24\" height=\"24\" viewBox=\"0 0 24 24\" inkscape:version=\"1.3\">",
            "<sodipodi:namedview id=\"nv\" pagecolor=\"#ffffff\"/>",
            "<g inkscape:label=\"Layer 1\" id=\"layer1\">",
            "<path d=\"M0 0h24v24H0z\" fill=\"none\"/>",
            "</g></svg>\n",
        );
        let (out, report) = SvgSanitizer::default().sanitize_with_report(input).unwrap();
        assert_eq!(
            out,
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
                "width=\"24\" height=\"24\" viewBox=\"0 0 24 24\">",
                "<g id=\"layer1\">",
                "<path d=\"M0 0h24v24H0z\" fill=\"none\"/>",
                "</g></svg>",
            )
        );
        assert_eq!(report.elements_removed, 1);
        assert_eq!(report.attributes_removed, 3);
        assert_eq!(report.comments_removed, 0);
    }

    #[test]
    fn removed_root_gives_empty_svg() {
        let sanitizer = SvgSanitizer::default();
        let once = sanitizer.sanitize("<script>alert(1)</script>").unwrap();
        assert_eq!(once, "<svg/>");
        assert!(parse_document(&once, sanitizer.policy().limits()).is_ok());
        assert_eq!(sanitizer.sanitize(&once).unwrap(), once);

        let with_declaration = sanitizer
            .sanitize("<?xml version=\"1.0\"?>\n<html><svg/></html>")
            .unwrap();
        assert_eq!(
            with_declaration,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg/>"
        );
    }

    #[test]
    fn sanitize_bytes_handles_bom_and_rejects_invalid_utf8() {
        let sanitizer = SvgSanitizer::default();
        let out = sanitizer.sanitize_bytes(b"\xEF\xBB\xBF<svg/>").unwrap();
        assert_eq!(out, b"<svg/>");

        let err = sanitizer.sanitize_bytes(b"<svg>\xFF</svg>").unwrap_err();
        assert!(matches!(err, SvgSanitizerError::Parse(_)));
    }

    #[test]
    fn trait_object_dispatch() {
        let sanitizer: Box<dyn Sanitizer> = Box::new(SvgSanitizer::default());
        assert_eq!(
            sanitizer.sanitize("<svg><set attributeName=\"href\" to=\"javascript:x\"/></svg>").unwrap(),
            "<svg></svg>"
        );
    }

    #[test]
    fn clone_shares_policy() {
        let a = SvgSanitizer::default();
        let b = a.clone();
        assert!(std::ptr::eq(a.policy(), b.policy()));
    }
}
