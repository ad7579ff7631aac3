//! Builder for configuring an [`SvgSanitizer`] policy.

use std::collections::HashSet;

use crate::policy::Policy;
use crate::sanitizer::SvgSanitizer;

/// Builder for configuring and creating an [`SvgSanitizer`].
///
/// Starts from [`Policy::default`] (or an empty policy with
/// [`empty`](Self::empty)) and offers a fluent API to widen or narrow it.
/// Event handler attributes and executable URI schemes stay forbidden
/// whatever is configured here.
///
/// # Example
///
/// ```
/// use svg_sanitizer::SvgSanitizerBuilder;
///
/// let sanitizer = SvgSanitizerBuilder::new()
///     .deny_tag("image")
///     .allow_attribute_for_tag("rect", "data-name")
///     .unwrap_tag("sodipodi:namedview")
///     .max_tree_depth(64)
///     .remove_remote_references(false)
///     .build();
///
/// let out = sanitizer
///     .sanitize(r#"<svg><rect data-name="r"/><image href="a.png"/></svg>"#)
///     .unwrap();
/// assert_eq!(out, r#"<svg><rect data-name="r"/></svg>"#);
/// ```
pub struct SvgSanitizerBuilder {
    policy: Policy,
}

fn owned<I, S>(items: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl SvgSanitizerBuilder {
    /// Create a builder seeded with the default policy.
    ///
    /// Defaults: SVG structural, shape, text, gradient and filter elements;
    /// `http`, `https`, `mailto` and image `data:` URIs; tree depth 256;
    /// input size 16 MiB; remote references removed; nothing unwrapped.
    pub fn new() -> Self {
        Self {
            policy: Policy::default(),
        }
    }

    /// Create a builder seeded with a policy that allows nothing.
    pub fn empty() -> Self {
        Self {
            policy: Policy::empty(),
        }
    }

    /// Replace the set of allowed element names.
    pub fn allowed_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.allowed_tags = owned(tags);
        self
    }

    /// Allow one more element name.
    pub fn allow_tag(mut self, tag: impl Into<String>) -> Self {
        self.policy.allowed_tags.insert(tag.into());
        self
    }

    /// Remove an element name from the allow-list.
    pub fn deny_tag(mut self, tag: &str) -> Self {
        self.policy.allowed_tags.remove(tag);
        self
    }

    /// Replace the set of attributes allowed on every element.
    pub fn allowed_attributes_global<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.allowed_attributes_global = owned(attributes);
        self
    }

    /// Allow one more attribute on every element.
    pub fn allow_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.policy.allowed_attributes_global.insert(attribute.into());
        self
    }

    /// Allow `attribute` on elements named `tag` only.
    pub fn allow_attribute_for_tag(
        mut self,
        tag: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        self.policy
            .allowed_attributes_by_tag
            .entry(tag.into())
            .or_default()
            .insert(attribute.into());
        self
    }

    /// Replace the set of attributes whose values are checked as URIs.
    pub fn uri_bearing_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.uri_bearing_attributes = owned(attributes);
        self
    }

    /// Replace the set of accepted URI schemes (case-insensitive).
    pub fn allowed_uri_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.allowed_uri_schemes = schemes
            .into_iter()
            .map(|s| s.into().to_ascii_lowercase())
            .collect();
        self
    }

    /// Replace the set of media types accepted in `data:` URIs.
    pub fn allowed_data_mime_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.allowed_data_mime_types = types
            .into_iter()
            .map(|s| s.into().to_ascii_lowercase())
            .collect();
        self
    }

    /// Replace the set of disallowed tags that are unwrapped instead of
    /// removed with their subtree.
    pub fn unwrap_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.unwrap_tags = owned(tags);
        self
    }

    /// Unwrap one more tag. Has no effect on allowed tags.
    pub fn unwrap_tag(mut self, tag: impl Into<String>) -> Self {
        self.policy.unwrap_tags.insert(tag.into());
        self
    }

    /// Maximum element nesting depth before input is rejected.
    pub fn max_tree_depth(mut self, depth: usize) -> Self {
        self.policy.limits.max_tree_depth = depth;
        self
    }

    /// Maximum input size in bytes before input is rejected.
    pub fn max_input_bytes(mut self, bytes: usize) -> Self {
        self.policy.limits.max_input_bytes = bytes;
        self
    }

    /// Whether references to other hosts (`https://…`, `//host/…`) are removed.
    pub fn remove_remote_references(mut self, remove: bool) -> Self {
        self.policy.remove_remote_references = remove;
        self
    }

    /// Consume the builder and return the finished [`Policy`].
    pub fn build_policy(self) -> Policy {
        self.policy
    }

    /// Consume the builder and return an [`SvgSanitizer`].
    pub fn build(self) -> SvgSanitizer {
        SvgSanitizer::new(self.policy)
    }
}

impl Default for SvgSanitizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SvgSanitizerError;

    #[test]
    fn builder_default_matches_policy_default() {
        let policy = SvgSanitizerBuilder::default().build_policy();
        assert!(policy.is_tag_allowed("svg"));
        assert_eq!(policy.limits().max_tree_depth, 256);
        assert!(policy.remove_remote_references());
    }

    #[test]
    fn allow_and_deny_tags() {
        let policy = SvgSanitizerBuilder::new()
            .allow_tag("font")
            .deny_tag("image")
            .build_policy();
        assert!(policy.is_tag_allowed("font"));
        assert!(!policy.is_tag_allowed("image"));
    }

    #[test]
    fn minimal_policy_from_empty() {
        let sanitizer = SvgSanitizerBuilder::empty()
            .allowed_tags(["svg", "circle"])
            .allowed_attributes_global(["r"])
            .build();
        let out = sanitizer
            .sanitize(r#"<svg r="1" fill="red"><circle r="4" cx="1"/><rect/></svg>"#)
            .unwrap();
        assert_eq!(out, r#"<svg r="1"><circle r="4"/></svg>"#);
    }

    #[test]
    fn schemes_are_lowercased() {
        let policy = SvgSanitizerBuilder::new()
            .allowed_uri_schemes(["HTTPS"])
            .build_policy();
        assert!(policy.is_uri_safe("https://example.com"));
        assert!(!policy.is_uri_safe("mailto:a@example.com"));
    }

    #[test]
    fn listed_event_handler_is_still_removed() {
        let sanitizer = SvgSanitizerBuilder::new()
            .allow_attribute("onload")
            .allow_attribute_for_tag("rect", "onclick")
            .build();
        let out = sanitizer
            .sanitize(r#"<svg onload="a()"><rect onclick="b()"/></svg>"#)
            .unwrap();
        assert_eq!(out, "<svg><rect/></svg>");
    }

    #[test]
    fn data_mime_types_are_configurable() {
        let sanitizer = SvgSanitizerBuilder::new()
            .allowed_data_mime_types(["image/png"])
            .build();
        let out = sanitizer
            .sanitize(concat!(
                r#"<svg><image href="data:image/png;base64,AA"/>"#,
                r#"<image href="data:image/gif;base64,AA"/></svg>"#,
            ))
            .unwrap();
        assert_eq!(
            out,
            r#"<svg><image href="data:image/png;base64,AA"/><image/></svg>"#
        );
    }

    #[test]
    fn remote_references_can_be_kept() {
        let input = r#"<svg><image href="https://cdn.example.com/a.png"/></svg>"#;

        let strict = SvgSanitizerBuilder::new().build();
        assert_eq!(strict.sanitize(input).unwrap(), "<svg><image/></svg>");

        let relaxed = SvgSanitizerBuilder::new()
            .remove_remote_references(false)
            .build();
        assert_eq!(relaxed.sanitize(input).unwrap(), input);
    }

    #[test]
    fn limits_are_configurable() {
        let sanitizer = SvgSanitizerBuilder::new()
            .max_tree_depth(2)
            .max_input_bytes(64)
            .build();
        assert!(sanitizer.sanitize("<svg><g/></svg>").is_ok());
        assert!(matches!(
            sanitizer.sanitize("<svg><g><rect/></g></svg>"),
            Err(SvgSanitizerError::LimitExceeded { .. })
        ));
        assert!(matches!(
            sanitizer.sanitize(&format!("<svg>{}</svg>", "x".repeat(64))),
            Err(SvgSanitizerError::LimitExceeded { .. })
        ));
    }

    #[test]
    fn custom_uri_bearing_attributes() {
        let sanitizer = SvgSanitizerBuilder::new()
            .allow_attribute("data-link")
            .uri_bearing_attributes(["href", "xlink:href", "data-link"])
            .build();
        let out = sanitizer
            .sanitize(r#"<svg><rect data-link="javascript:x()"/></svg>"#)
            .unwrap();
        assert_eq!(out, "<svg><rect/></svg>");
    }
}
