//! HTML front end.
//!
//! Parses markup with html5ever into an [`RcDom`] and exposes its handles
//! through the [`Node`] trait.

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use log::debug;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::{Attribute, Node, NodeKind, Result};

/// Parse an HTML document from a string.
pub fn parse_html(input: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(input)
}

/// Parse an HTML document from a UTF-8 byte stream.
pub fn parse_reader<R: Read>(reader: &mut R) -> Result<RcDom> {
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(reader)?;
    Ok(dom)
}

/// Parse an HTML file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<RcDom> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    debug!("parsing {}", path.display());
    parse_reader(&mut file)
}

impl Node for Handle {
    fn kind(&self) -> Option<NodeKind> {
        match self.data {
            NodeData::Document => Some(NodeKind::Document),
            NodeData::Doctype { .. } => Some(NodeKind::Doctype),
            NodeData::Text { .. } => Some(NodeKind::Text),
            NodeData::Comment { .. } => Some(NodeKind::Comment),
            NodeData::Element { .. } => Some(NodeKind::Element),
            NodeData::ProcessingInstruction { .. } => None,
        }
    }

    fn text(&self) -> Cow<'_, str> {
        match &self.data {
            NodeData::Document => Cow::Borrowed(""),
            NodeData::Doctype { name, .. } => Cow::Borrowed(name),
            NodeData::Text { contents } => Cow::Owned(contents.borrow().to_string()),
            NodeData::Comment { contents } => Cow::Borrowed(contents),
            NodeData::Element { name, .. } => Cow::Borrowed(&name.local),
            NodeData::ProcessingInstruction { target, .. } => Cow::Borrowed(target),
        }
    }

    fn attributes(&self) -> Cow<'_, [Attribute]> {
        match &self.data {
            NodeData::Element { attrs, .. } => Cow::Owned(
                attrs
                    .borrow()
                    .iter()
                    .map(|a| Attribute::new(a.name.local.to_string(), a.value.to_string()))
                    .collect(),
            ),
            _ => Cow::Borrowed(&[]),
        }
    }

    /// Template contents come first, then ordinary children.
    fn children(&self) -> Vec<Self> {
        let mut children = Vec::new();
        if let NodeData::Element { template_contents, .. } = &self.data {
            if let Some(contents) = template_contents.borrow().as_ref() {
                children.extend(contents.children.borrow().iter().cloned());
            }
        }
        children.extend(self.children.borrow().iter().cloned());
        children
    }
}
