//! Owned document tree built by the parser and rewritten by the sanitizer.

/// A parsed SVG document.
///
/// Built fresh for every sanitize call and discarded after serialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// The single root element (normally `<svg>`).
    pub root: Element,
    /// Whether the input started with an XML declaration.
    pub declaration: bool,
}

/// A single node in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Character data, already unescaped. CDATA sections end up here too.
    Text(String),
    /// Comment body without the `<!--` and `-->` delimiters.
    Comment(String),
    /// Processing instruction content between `<?` and `?>`.
    ProcessingInstruction(String),
}

/// An attribute in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// Qualified name as written in the source, e.g. `fill` or `xlink:href`.
    pub name: String,
    /// Unescaped value.
    pub value: String,
}

impl Attribute {
    /// Create an attribute from a qualified name and an unescaped value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A tagged element with attributes and children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Qualified name as written in the source, e.g. `rect` or `svg:rect`.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<Attribute>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
    /// The element was written as `<name/>`.
    pub self_closing: bool,
}

impl Element {
    /// Create an element with no attributes or children, written with
    /// separate start and end tags.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Look up an attribute value by its qualified name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Iterate over the element children, skipping text and other nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Concatenated text of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Visit this element and every descendant element in pre-order.
    pub fn for_each_element<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        f(self);
        for child in self.child_elements() {
            child.for_each_element(f);
        }
    }
}
