//! Data model for a parsed documentation record — format-agnostic.
//!
//! The tree is owned and read-only once built: the translator, the reference
//! resolver and the extractor only ever borrow it.

use crate::error::{Error, Result};

/// Name of the synthetic element wrapping the XML root element.
pub const DOCUMENT: &str = "#document";

/// One node of the parsed input tree: a text leaf or a tagged container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

/// A tagged container with its attributes and children in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl Element {
    pub fn new(name: &str) -> Self {
        Element {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute lookup that fails on a missing attribute.
    pub fn require_attr(&self, key: &str) -> Result<&str> {
        self.attr(key).ok_or_else(|| Error::MissingAttribute {
            element: self.name.clone(),
            attribute: key.to_string(),
        })
    }

    /// Direct child elements, skipping text leaves.
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Direct child elements with the given tag.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |el| el.name == name)
    }

    /// All descendant elements in document order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.elements().rev().collect(),
        }
    }

    /// All descendant elements with the given tag, in document order.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants().filter(move |el| el.name == name)
    }

    /// First descendant element with the given tag.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.descendants().find(|el| el.name == name)
    }

    /// Like [`Element::find`], but a missing element is an error.
    pub fn require(&self, name: &str) -> Result<&Element> {
        self.find(name).ok_or_else(|| Error::MissingElement {
            parent: self.name.clone(),
            child: name.to_string(),
        })
    }

    /// Concatenated text of all descendant text leaves.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }
}

/// Pre-order walk over the element descendants of an [`Element`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        let next = self.stack.pop()?;
        self.stack.extend(next.elements().rev());
        Some(next)
    }
}

/// The closed set of markup kinds the translator understands.
///
/// Text leaves are [`Node::Text`] and never reach this dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Paragraph,
    /// `computeroutput`: the code is the element's text
    CodeSpan,
    /// `texttt`: the code is the `text` attribute
    CodeAttr,
    RefById,
    RefByName,
    ShortRef,
    ObjRef,
    AutoRef,
    ErrorPlaceholder,
    OrderedList,
    ItemizedList,
    ListItem,
    Unknown,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> NodeKind {
        match tag {
            "para" => NodeKind::Paragraph,
            "computeroutput" => NodeKind::CodeSpan,
            "texttt" => NodeKind::CodeAttr,
            "ref" => NodeKind::RefById,
            "nameref" => NodeKind::RefByName,
            "shortref" => NodeKind::ShortRef,
            "obj" => NodeKind::ObjRef,
            "autoref" => NodeKind::AutoRef,
            "errorenumdesc" => NodeKind::ErrorPlaceholder,
            "orderedlist" => NodeKind::OrderedList,
            "itemizedlist" => NodeKind::ItemizedList,
            "listitem" => NodeKind::ListItem,
            _ => NodeKind::Unknown,
        }
    }
}

/// List environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Itemized,
}

/// Heading level used for each member block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Level {
    #[default]
    Subsection,
    Subsubsection,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Subsection => "subsection",
            Level::Subsubsection => "subsubsection",
        }
    }
}

/// One documented callable (`<memberdef>`), viewed in place.
#[derive(Debug, Clone)]
pub struct MemberRecord<'a> {
    pub element: &'a Element,
    pub id: &'a str,
    /// Raw text of `<name>`
    pub name: String,
    /// Raw text of the first `<type>`
    pub return_type: String,
    pub is_inline: bool,
    pub is_static: bool,
    /// The `<manual>` element carrying the external `name` and `label`
    pub manual: &'a Element,
}

impl<'a> MemberRecord<'a> {
    pub fn from_element(element: &'a Element) -> Result<Self> {
        Ok(MemberRecord {
            element,
            id: element.require_attr("id")?,
            name: element.require("name")?.text(),
            return_type: element.require("type")?.text(),
            is_inline: element.require_attr("inline")? == "yes",
            is_static: element.require_attr("static")? == "yes",
            manual: element.require("manual")?,
        })
    }

    /// Every `<memberdef>` under `root`, in document order.
    pub fn collect(root: &'a Element) -> Result<Vec<Self>> {
        root.find_all("memberdef")
            .map(MemberRecord::from_element)
            .collect()
    }

    /// External manual label.
    pub fn label(&self) -> Result<&'a str> {
        self.manual.require_attr("label")
    }

    /// Name shown in the manual heading.
    pub fn display_name(&self) -> Result<&'a str> {
        self.manual.require_attr("name")
    }

    /// Declared types; the first one is the return type.
    pub fn types(&self) -> impl Iterator<Item = &'a Element> + 'a {
        self.element.find_all("type")
    }

    pub fn declnames(&self) -> impl Iterator<Item = &'a Element> + 'a {
        self.element.find_all("declname")
    }

    pub fn brief(&self) -> Result<&'a Element> {
        self.element.require("briefdescription")
    }

    pub fn detailed(&self) -> Result<&'a Element> {
        self.element.require("detaileddescription")
    }
}
