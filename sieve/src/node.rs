//! The node capability the filter runs against.
//!
//! The filter never owns a document tree. It reads nodes through the
//! [`Node`] trait, which the HTML front end implements for parsed DOM
//! handles and [`TreeNode`] implements for trees built in memory.

use std::borrow::Cow;

use crate::NodeKind;

/// A single attribute pair on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Read access to one node of a document tree.
pub trait Node: Sized {
    /// The node's kind, or `None` if it has no counterpart in [`NodeKind`].
    fn kind(&self) -> Option<NodeKind>;

    /// Text data: tag name for elements, contents for text and comments.
    fn text(&self) -> Cow<'_, str>;

    /// Attribute pairs in document order. Keys may repeat.
    fn attributes(&self) -> Cow<'_, [Attribute]>;

    /// Child nodes, left to right.
    fn children(&self) -> Vec<Self>;
}

/// An owned document tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub kind: NodeKind,
    pub text: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn document() -> Self {
        Self::new(NodeKind::Document, "")
    }

    pub fn element(tag: impl Into<String>) -> Self {
        Self::new(NodeKind::Element, tag)
    }

    pub fn text_node(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Text, text)
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Comment, text)
    }

    /// Append an attribute pair.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attribute::new(key, value));
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }
}

impl<'a> Node for &'a TreeNode {
    fn kind(&self) -> Option<NodeKind> {
        Some(self.kind)
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn attributes(&self) -> Cow<'_, [Attribute]> {
        Cow::Borrowed(&self.attrs)
    }

    fn children(&self) -> Vec<Self> {
        let node: &'a TreeNode = *self;
        node.children.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_node_builder() {
        let tree = TreeNode::element("a")
            .with_attr("href", "/x")
            .with_attr("href", "/y")
            .with_child(TreeNode::text_node("link"));

        let node = &tree;
        assert_eq!(node.kind(), Some(NodeKind::Element));
        assert_eq!(node.text(), "a");
        assert_eq!(node.attributes().len(), 2);
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].text(), "link");
    }
}
