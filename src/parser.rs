//! Parser module — Doxygen XML text into the owned node tree.
//!
//! The XML is read in full with `roxmltree` and copied into [`Element`]/[`Node`]
//! values. Whitespace-only text is kept: the translator renders every text leaf.

use crate::error::Result;
use crate::model::{Element, Node, DOCUMENT};

/// Parse a Doxygen XML document.
///
/// The returned element is a synthetic [`DOCUMENT`] wrapper whose only child
/// is the XML root element, so that searches from the top include the root.
pub fn parse(xml: &str) -> Result<Element> {
    let doc = roxmltree::Document::parse(xml)?;
    let root = convert_element(doc.root_element());
    tracing::debug!(root = %root.name, "parsed XML document");
    Ok(Element::new(DOCUMENT).with_child(root))
}

fn convert_element(node: roxmltree::Node<'_, '_>) -> Element {
    let mut element = Element::new(node.tag_name().name());
    for attr in node.attributes() {
        element = element.with_attr(attr.name(), attr.value());
    }
    for child in node.children() {
        if child.is_element() {
            element.children.push(Node::Element(convert_element(child)));
        } else if child.is_text() {
            if let Some(text) = child.text() {
                element.children.push(Node::Text(text.to_string()));
            }
        }
        // Comments and processing instructions carry no documentation.
    }
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn parse_wraps_root_element() {
        let doc = parse("<doxygen><compounddef id=\"c\"/></doxygen>").unwrap();
        assert_eq!(doc.name, DOCUMENT);
        assert_eq!(doc.children.len(), 1);
        assert_eq!(doc.require("compounddef").unwrap().attr("id"), Some("c"));
    }

    #[test]
    fn parse_keeps_mixed_content_in_order() {
        let doc = parse("<para>Call <computeroutput>x_y</computeroutput> now.</para>").unwrap();
        let para = doc.require("para").unwrap();
        assert_eq!(para.children.len(), 3);
        assert_eq!(para.children[0], Node::from("Call "));
        assert_eq!(para.children[2], Node::from(" now."));
        assert_eq!(para.text(), "Call x_y now.");
    }

    #[test]
    fn parse_keeps_whitespace_leaves() {
        let doc = parse("<a>\n  <b/>\n</a>").unwrap();
        let a = doc.require("a").unwrap();
        assert_eq!(a.children.len(), 3);
    }

    #[test]
    fn parse_drops_comments() {
        let doc = parse("<a><!-- note -->text</a>").unwrap();
        assert_eq!(doc.require("a").unwrap().children, vec![Node::from("text")]);
    }

    #[test]
    fn parse_decodes_entities() {
        let doc = parse("<a>x &lt; y &amp;&amp; z</a>").unwrap();
        assert_eq!(doc.text(), "x < y && z");
    }

    #[test]
    fn parse_rejects_malformed_xml() {
        assert!(matches!(parse("<a><b></a>"), Err(Error::Xml(_))));
    }
}
