//! Render a [`Document`] back to markup.
//!
//! Attribute values and text are always escaped, so nothing the walker
//! removed can be reintroduced through character data. Attributes and
//! children are written in tree order, which makes the output deterministic.

use quick_xml::escape::escape;

use crate::tree::{Document, Element, Node};

/// The declaration written when the input had one. Output is always UTF-8.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Serialize a document to a string.
pub fn serialize_document(document: &Document) -> String {
    let mut out = String::new();
    if document.declaration {
        out.push_str(XML_DECLARATION);
        out.push('\n');
    }
    serialize_element(&document.root, &mut out);
    out
}

fn serialize_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.name);
    for attr in &element.attributes {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        out.push_str(&escape(attr.value.as_str()));
        out.push('"');
    }

    if element.children.is_empty() && element.self_closing {
        out.push_str("/>");
        return;
    }
    out.push('>');

    for child in &element.children {
        match child {
            Node::Element(el) => serialize_element(el, out),
            Node::Text(text) => out.push_str(&escape(text.as_str())),
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            Node::ProcessingInstruction(pi) => {
                out.push_str("<?");
                out.push_str(pi);
                out.push_str("?>");
            }
        }
    }

    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Limits, parse_document};
    use crate::tree::Attribute;

    #[test]
    fn escapes_attribute_values_and_text() {
        let mut text = Element::new("text");
        text.attributes
            .push(Attribute::new("font-family", r#""Sans" <b> & 'x'"#));
        text.children.push(Node::Text("<script>alert(1)</script> & more".into()));
        let mut root = Element::new("svg");
        root.children.push(Node::Element(text));

        let out = serialize_document(&Document {
            root,
            declaration: false,
        });
        assert_eq!(
            out,
            concat!(
                r#"<svg><text font-family="&quot;Sans&quot; &lt;b&gt; &amp; &apos;x&apos;">"#,
                "&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</text></svg>",
            )
        );
    }

    #[test]
    fn self_closing_only_when_written_that_way_and_still_empty() {
        let doc = parse_document("<svg><g></g><rect/><g/></svg>", &Limits::default()).unwrap();
        assert_eq!(serialize_document(&doc), "<svg><g></g><rect/><g/></svg>");
    }

    #[test]
    fn writes_declaration() {
        let doc = parse_document(
            "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n\n<svg/>",
            &Limits::default(),
        )
        .unwrap();
        assert_eq!(
            serialize_document(&doc),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg/>"
        );
    }

    #[test]
    fn output_reparses_to_the_same_tree() {
        let input = concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10">"#,
            "\n  <text x=\"1\">a &lt; b &amp;&amp; c</text>\n",
            "  <style><![CDATA[a > b { fill: red }]]></style>\n",
            "</svg>",
        );
        let first = parse_document(input, &Limits::default()).unwrap();
        let reparsed = parse_document(&serialize_document(&first), &Limits::default()).unwrap();
        assert_eq!(first, reparsed);
    }
}
