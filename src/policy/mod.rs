//! The allow-list policy and its pure decision functions.
//!
//! A [`Policy`] is immutable once built. Use
//! [`SvgSanitizerBuilder`](crate::SvgSanitizerBuilder) to derive a custom one
//! from the defaults.

mod css;
pub mod defaults;
mod uri;

use std::collections::{HashMap, HashSet};

use crate::parser::Limits;

pub use uri::EXECUTABLE_SCHEMES;

/// Allow-list configuration consulted by the sanitizer.
///
/// Tag and attribute names are compared case-sensitively, as SVG is
/// case-sensitive (`linearGradient`, `viewBox`). URI schemes and media types
/// are compared lowercased.
#[derive(Clone, Debug)]
pub struct Policy {
    pub(crate) allowed_tags: HashSet<String>,
    pub(crate) allowed_attributes_global: HashSet<String>,
    pub(crate) allowed_attributes_by_tag: HashMap<String, HashSet<String>>,
    pub(crate) uri_bearing_attributes: HashSet<String>,
    pub(crate) allowed_uri_schemes: HashSet<String>,
    pub(crate) allowed_data_mime_types: HashSet<String>,
    pub(crate) unwrap_tags: HashSet<String>,
    pub(crate) limits: Limits,
    pub(crate) remove_remote_references: bool,
}

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Policy {
    /// A policy that allows nothing: every element is removed.
    pub fn empty() -> Self {
        Self {
            allowed_tags: HashSet::new(),
            allowed_attributes_global: HashSet::new(),
            allowed_attributes_by_tag: HashMap::new(),
            uri_bearing_attributes: set(defaults::URI_BEARING_ATTRIBUTES),
            allowed_uri_schemes: HashSet::new(),
            allowed_data_mime_types: HashSet::new(),
            unwrap_tags: HashSet::new(),
            limits: Limits::default(),
            remove_remote_references: true,
        }
    }

    /// Whether elements named `tag` are kept.
    pub fn is_tag_allowed(&self, tag: &str) -> bool {
        self.allowed_tags.contains(tag)
    }

    /// Whether a disallowed `tag` is stripped with its children promoted,
    /// instead of being removed with its whole subtree.
    pub fn is_unwrap_tag(&self, tag: &str) -> bool {
        self.unwrap_tags.contains(tag)
    }

    /// Whether `attribute` may stay on an element named `tag`.
    ///
    /// Event handlers are never allowed, even when listed.
    pub fn is_attribute_allowed(&self, tag: &str, attribute: &str) -> bool {
        if Self::is_event_handler(attribute) {
            return false;
        }
        self.allowed_attributes_global.contains(attribute)
            || self
                .allowed_attributes_by_tag
                .get(tag)
                .is_some_and(|attrs| attrs.contains(attribute))
    }

    /// True for `on*` attributes (`onload`, `ONCLICK`, `svg:onerror`).
    pub fn is_event_handler(attribute: &str) -> bool {
        let local = attribute.rsplit(':').next().unwrap_or(attribute);
        local
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
    }

    /// Whether the value of `attribute` is a URI reference.
    pub fn is_uri_attribute(&self, attribute: &str) -> bool {
        self.uri_bearing_attributes.contains(attribute)
    }

    /// Whether `value` is safe as a URI reference.
    ///
    /// Relative references are safe. Absolute ones need an allowed scheme;
    /// `data:` URIs also need an allowed media type.
    pub fn is_uri_safe(&self, value: &str) -> bool {
        let normalized = uri::normalize(value);
        match uri::scheme(&normalized) {
            uri::Scheme::None => true,
            uri::Scheme::Invalid => false,
            uri::Scheme::Named(scheme) => {
                if EXECUTABLE_SCHEMES.contains(&scheme)
                    || !self.allowed_uri_schemes.contains(scheme)
                {
                    return false;
                }
                scheme != "data"
                    || self
                        .allowed_data_mime_types
                        .contains(uri::data_media_type(&normalized))
            }
        }
    }

    /// Whether `value` points at another host (`https://…`, `//host/…`).
    pub fn is_remote_reference(&self, value: &str) -> bool {
        uri::is_remote(&uri::normalize(value))
    }

    /// Whether the value carries CSS the sanitizer has to inspect: every
    /// `style` attribute, and any other value calling a function such as
    /// `url(...)` or `image-set(...)`.
    pub fn needs_css_check(attribute: &str, value: &str) -> bool {
        attribute == "style" || css::has_function_call(value)
    }

    /// Whether a CSS fragment is safe: no script constructs, and every URL
    /// it loads (`url(...)`, `image-set("...")`) passes the URI checks.
    pub fn is_css_safe(&self, value: &str) -> bool {
        if css::has_forbidden_construct(value) {
            return false;
        }
        css::url_targets(value).iter().all(|target| {
            self.is_uri_safe(target)
                && !(self.remove_remote_references && self.is_remote_reference(target))
        })
    }

    /// Parser guards.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Whether references to other hosts are removed.
    pub fn remove_remote_references(&self) -> bool {
        self.remove_remote_references
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            allowed_tags: set(defaults::ALLOWED_TAGS),
            allowed_attributes_global: set(defaults::ALLOWED_ATTRIBUTES_GLOBAL),
            allowed_attributes_by_tag: defaults::ALLOWED_ATTRIBUTES_BY_TAG
                .iter()
                .map(|(tag, attrs)| (tag.to_string(), set(attrs)))
                .collect(),
            uri_bearing_attributes: set(defaults::URI_BEARING_ATTRIBUTES),
            allowed_uri_schemes: set(defaults::ALLOWED_URI_SCHEMES),
            allowed_data_mime_types: set(defaults::ALLOWED_DATA_MIME_TYPES),
            unwrap_tags: HashSet::new(),
            limits: Limits::default(),
            remove_remote_references: true,
        }
    }
}
