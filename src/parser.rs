//! XML parsing into the owned [`Document`] tree.
//!
//! Parsing is strict: anything that is not well-formed XML is rejected with
//! [`SvgSanitizerError::Parse`] and never repaired. DOCTYPE declarations are
//! dropped without expanding any entity they declare.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Result, SvgSanitizerError};
use crate::tree::{Attribute, Document, Element, Node};

/// Default maximum element nesting depth.
pub const DEFAULT_MAX_TREE_DEPTH: usize = 256;

/// Default maximum input size (16 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

/// Resource guards applied while parsing untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum element nesting depth; the root element is at depth 1.
    pub max_tree_depth: usize,
    /// Maximum input length in bytes.
    pub max_input_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_tree_depth: DEFAULT_MAX_TREE_DEPTH,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

/// Parse `input` into a [`Document`], enforcing `limits`.
pub fn parse_document(input: &str, limits: &Limits) -> Result<Document> {
    if input.len() > limits.max_input_bytes {
        return Err(SvgSanitizerError::LimitExceeded {
            limit: "input size",
            max: limits.max_input_bytes,
        });
    }
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);

    let mut reader = Reader::from_str(input);
    reader.trim_text(false);
    reader.check_end_names(true);
    reader.expand_empty_elements(false);

    let mut builder = TreeBuilder::default();

    loop {
        let event = reader.read_event().map_err(|e| {
            SvgSanitizerError::Parse(format!("{e} at byte {}", reader.buffer_position()))
        })?;

        match event {
            Event::Start(e) => {
                builder.check_depth(limits)?;
                let element = element_from(&e, false)?;
                builder.open(element)?;
            }
            Event::Empty(e) => {
                builder.check_depth(limits)?;
                let element = element_from(&e, true)?;
                builder.open(element)?;
                builder.close()?;
            }
            Event::End(_) => builder.close()?,
            Event::Text(e) => {
                let text = e.unescape()?;
                builder.text(&text)?;
            }
            Event::CData(e) => {
                let text = String::from_utf8(e.into_inner().into_owned())
                    .map_err(|e| SvgSanitizerError::Parse(format!("invalid UTF-8 in CDATA: {e}")))?;
                builder.text(&text)?;
            }
            Event::Comment(e) => {
                builder.other(Node::Comment(String::from_utf8_lossy(&e).into_owned()));
            }
            Event::PI(e) => {
                builder.other(Node::ProcessingInstruction(
                    String::from_utf8_lossy(&e).into_owned(),
                ));
            }
            Event::Decl(_) => builder.declaration()?,
            Event::DocType(_) => {
                if builder.in_content() {
                    return Err(SvgSanitizerError::Parse(
                        "DOCTYPE inside the root element".into(),
                    ));
                }
                builder.seen_anything = true;
                tracing::debug!("Dropped DOCTYPE declaration");
            }
            Event::Eof => break,
        }
    }

    builder.finish()
}

fn element_from(start: &BytesStart, self_closing: bool) -> Result<Element> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| SvgSanitizerError::Parse(format!("invalid UTF-8 in element name: {e}")))?
        .to_string();

    let mut element = Element::new(name);
    element.self_closing = self_closing;

    for attr in start.attributes() {
        let attr = attr.map_err(|e| SvgSanitizerError::Parse(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(|e| {
            SvgSanitizerError::Parse(format!("invalid UTF-8 in attribute name: {e}"))
        })?;
        let value = attr.unescape_value()?;
        element
            .attributes
            .push(Attribute::new(key, value.into_owned()));
    }

    Ok(element)
}

/// Assembles the tree from the flat event stream.
#[derive(Default)]
struct TreeBuilder {
    open: Vec<Element>,
    root: Option<Element>,
    declaration: bool,
    seen_anything: bool,
}

impl TreeBuilder {
    fn in_content(&self) -> bool {
        !self.open.is_empty()
    }

    fn check_depth(&self, limits: &Limits) -> Result<()> {
        if self.open.len() + 1 > limits.max_tree_depth {
            return Err(SvgSanitizerError::LimitExceeded {
                limit: "tree depth",
                max: limits.max_tree_depth,
            });
        }
        Ok(())
    }

    fn open(&mut self, element: Element) -> Result<()> {
        if self.open.is_empty() && self.root.is_some() {
            return Err(SvgSanitizerError::Parse(format!(
                "second root element <{}>",
                element.name
            )));
        }
        self.seen_anything = true;
        self.open.push(element);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let element = self
            .open
            .pop()
            .ok_or_else(|| SvgSanitizerError::Parse("end tag without start tag".into()))?;

        match self.open.last_mut() {
            Some(parent) => parent.children.push(Node::Element(element)),
            None => self.root = Some(element),
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        match self.open.last_mut() {
            Some(parent) => {
                if let Some(Node::Text(last)) = parent.children.last_mut() {
                    last.push_str(text);
                } else if !text.is_empty() {
                    parent.children.push(Node::Text(text.to_string()));
                }
                Ok(())
            }
            None if text.trim().is_empty() => Ok(()),
            None => Err(SvgSanitizerError::Parse(
                "text outside the root element".into(),
            )),
        }
    }

    /// Comments and processing instructions; dropped when outside the root.
    fn other(&mut self, node: Node) {
        self.seen_anything = true;
        if let Some(parent) = self.open.last_mut() {
            parent.children.push(node);
        }
    }

    fn declaration(&mut self) -> Result<()> {
        if self.seen_anything || self.declaration {
            return Err(SvgSanitizerError::Parse(
                "XML declaration is only allowed at the start of the document".into(),
            ));
        }
        self.declaration = true;
        Ok(())
    }

    fn finish(self) -> Result<Document> {
        if let Some(unclosed) = self.open.last() {
            return Err(SvgSanitizerError::Parse(format!(
                "unclosed element <{}>",
                unclosed.name
            )));
        }
        let root = self
            .root
            .ok_or_else(|| SvgSanitizerError::Parse("no root element".into()))?;

        Ok(Document {
            root,
            declaration: self.declaration,
        })
    }
}
