//! Depth-first rewriter that enforces a [`Policy`] on a parsed tree.
//!
//! Disallowed content is removed, never reported as an error. Recursion depth
//! is bounded by the parser's tree depth limit.

use crate::policy::Policy;
use crate::tree::{Attribute, Document, Element, Node};

/// Name of the element that replaces a removed root.
const EMPTY_ROOT: &str = "svg";

/// Counts of what the sanitizer removed from one document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SanitizeReport {
    /// Elements removed together with their subtree.
    pub elements_removed: usize,
    /// Elements stripped with their children promoted to the parent.
    pub elements_unwrapped: usize,
    /// Attributes dropped from kept elements.
    pub attributes_removed: usize,
    pub comments_removed: usize,
    pub processing_instructions_removed: usize,
}

impl SanitizeReport {
    /// Returns `true` if nothing was removed.
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

pub(crate) struct Walker<'p> {
    policy: &'p Policy,
    report: SanitizeReport,
}

impl<'p> Walker<'p> {
    pub(crate) fn new(policy: &'p Policy) -> Self {
        Self {
            policy,
            report: SanitizeReport::default(),
        }
    }

    pub(crate) fn into_report(self) -> SanitizeReport {
        self.report
    }

    /// Sanitize a whole document.
    ///
    /// When the root element itself is removed, or unwrapping it leaves no
    /// element behind, an empty `<svg/>` takes its place so the output is
    /// still a document. When an unwrapped root leaves several elements
    /// behind, the first one becomes the new root and the rest are dropped.
    pub(crate) fn sanitize_document(&mut self, document: Document) -> Document {
        let mut top = Vec::new();
        self.sanitize_element(document.root, &mut top);

        let mut roots = top.into_iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        });
        let root = match roots.next() {
            Some(root) => root,
            None => {
                tracing::debug!("Root element removed, substituting an empty <{EMPTY_ROOT}/>");
                empty_root()
            }
        };
        let extra = roots.count();
        if extra > 0 {
            tracing::debug!("Dropped {extra} extra top-level elements left by unwrapping the root");
            self.report.elements_removed += extra;
        }

        Document {
            root,
            declaration: document.declaration,
        }
    }

    fn sanitize_node(&mut self, node: Node, out: &mut Vec<Node>) {
        match node {
            Node::Element(element) => self.sanitize_element(element, out),
            Node::Text(text) => push_text(out, text),
            Node::Comment(_) => {
                tracing::debug!("Removed comment");
                self.report.comments_removed += 1;
            }
            Node::ProcessingInstruction(_) => {
                tracing::debug!("Removed processing instruction");
                self.report.processing_instructions_removed += 1;
            }
        }
    }

    fn sanitize_element(&mut self, mut element: Element, out: &mut Vec<Node>) {
        if !self.policy.is_tag_allowed(&element.name) {
            if self.policy.is_unwrap_tag(&element.name) {
                tracing::debug!("Unwrapped element <{}>", element.name);
                self.report.elements_unwrapped += 1;
                for child in element.children {
                    self.sanitize_node(child, out);
                }
            } else {
                tracing::debug!("Removed element <{}>", element.name);
                self.report.elements_removed += 1;
            }
            return;
        }

        self.sanitize_attributes(&mut element);

        if element.name == "use" && has_external_href(&element) {
            tracing::debug!("Removed <use> referencing an external resource");
            self.report.elements_removed += 1;
            return;
        }

        let children = std::mem::take(&mut element.children);
        let mut kept = Vec::with_capacity(children.len());
        for child in children {
            self.sanitize_node(child, &mut kept);
        }
        element.children = kept;

        if element.name == "style" && !self.policy.is_css_safe(&element.text()) {
            tracing::debug!("Removed <style> with unsafe CSS");
            self.report.elements_removed += 1;
            return;
        }

        out.push(Node::Element(element));
    }

    fn sanitize_attributes(&mut self, element: &mut Element) {
        let policy = self.policy;
        let report = &mut self.report;
        let tag = &element.name;

        element.attributes.retain(|attr| match removal_reason(policy, tag, attr) {
            Some(reason) => {
                tracing::debug!("Removed attribute {} from <{tag}>: {reason}", attr.name);
                report.attributes_removed += 1;
                false
            }
            None => true,
        });
    }
}

/// Why `attr` must go, or `None` if it may stay.
fn removal_reason(policy: &Policy, tag: &str, attr: &Attribute) -> Option<&'static str> {
    if Policy::is_event_handler(&attr.name) {
        return Some("event handler");
    }
    if !policy.is_attribute_allowed(tag, &attr.name) {
        return Some("not allowed");
    }
    if policy.is_uri_attribute(&attr.name) {
        if !policy.is_uri_safe(&attr.value) {
            return Some("unsafe URI");
        }
        if policy.remove_remote_references() && policy.is_remote_reference(&attr.value) {
            return Some("remote reference");
        }
    }
    if Policy::needs_css_check(&attr.name, &attr.value) && !policy.is_css_safe(&attr.value) {
        return Some("unsafe CSS");
    }
    None
}

/// `<use>` may only reference fragments of the same document.
fn has_external_href(element: &Element) -> bool {
    element
        .attributes
        .iter()
        .filter(|a| a.name == "href" || a.name == "xlink:href")
        .any(|a| !a.value.trim_start().starts_with('#'))
}

fn empty_root() -> Element {
    let mut root = Element::new(EMPTY_ROOT);
    root.self_closing = true;
    root
}

fn push_text(out: &mut Vec<Node>, text: String) {
    if let Some(Node::Text(last)) = out.last_mut() {
        last.push_str(&text);
    } else if !text.is_empty() {
        out.push(Node::Text(text));
    }
}
