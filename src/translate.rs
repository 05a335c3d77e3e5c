//! Node translator — documentation markup to the output vocabulary.
//!
//! One exhaustive match over [`NodeKind`]. Markup the translator does not know
//! renders as an empty string, so new Doxygen markup degrades instead of
//! failing the document.

use crate::error::Result;
use crate::escape::Escaper;
use crate::model::{Element, ListKind, Node, NodeKind};
use crate::refs::RefTable;
use crate::style::Style;

/// Renders nodes with one style against one reference table.
#[derive(Clone, Copy)]
pub struct Translator<'a> {
    style: &'a Style,
    escaper: &'a Escaper,
    refs: &'a RefTable,
}

impl<'a> Translator<'a> {
    pub fn new(style: &'a Style, escaper: &'a Escaper, refs: &'a RefTable) -> Self {
        Translator {
            style,
            escaper,
            refs,
        }
    }

    /// Same style, different reference table.
    pub fn with_refs<'b>(&self, refs: &'b RefTable) -> Translator<'b>
    where
        'a: 'b,
    {
        Translator {
            style: self.style,
            escaper: self.escaper,
            refs,
        }
    }

    pub fn style(&self) -> &'a Style {
        self.style
    }

    pub fn escape(&self, text: &str) -> String {
        self.escaper.escape(text)
    }

    pub fn render(&self, node: &Node) -> Result<String> {
        match node {
            Node::Text(text) => Ok(self.escape(text)),
            Node::Element(el) => self.render_element(el),
        }
    }

    pub fn render_element(&self, el: &Element) -> Result<String> {
        let style = self.style;
        let out = match NodeKind::from_tag(&el.name) {
            NodeKind::Paragraph => self.render_children(el)?,
            NodeKind::CodeSpan => (style.code_span)(&self.escape(&el.text())),
            NodeKind::CodeAttr => (style.code_span)(&self.escape(el.require_attr("text")?)),
            NodeKind::RefById => self.reference(el, "refid")?,
            NodeKind::RefByName => self.reference(el, "name")?,
            NodeKind::ShortRef => (style.section_ref)(el.require_attr("sec")?),
            NodeKind::ObjRef => (style.object_ref)(el.require_attr("name")?),
            NodeKind::AutoRef => (style.auto_ref)(el.require_attr("label")?),
            NodeKind::ErrorPlaceholder => style.error_placeholder.to_string(),
            NodeKind::OrderedList => (style.list)(ListKind::Ordered, &self.render_children(el)?),
            NodeKind::ItemizedList => (style.list)(ListKind::Itemized, &self.render_children(el)?),
            NodeKind::ListItem => (style.list_item)(&self.render_element(el.require("para")?)?),
            NodeKind::Unknown => {
                tracing::trace!(tag = %el.name, "skipping unsupported markup");
                String::new()
            }
        };
        Ok(out)
    }

    fn render_children(&self, el: &Element) -> Result<String> {
        let mut out = String::new();
        for child in &el.children {
            out.push_str(&self.render(child)?);
        }
        Ok(out)
    }

    /// Cross-reference keyed by the attribute `key_attr`; empty when there is
    /// no table to resolve against.
    fn reference(&self, el: &Element, key_attr: &str) -> Result<String> {
        if self.refs.is_empty() {
            return Ok(String::new());
        }
        let target = self.refs.lookup(el.require_attr(key_attr)?)?;
        Ok((self.style.cross_ref)(target))
    }
}
