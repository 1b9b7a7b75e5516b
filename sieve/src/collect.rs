//! Snapshots of matched nodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Error, Node, NodeKind, Result};

/// An owned copy of a matched node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub data: String,
    /// Attributes by key. On duplicate keys the last pair wins.
    pub attr: BTreeMap<String, String>,
}

impl MatchedNode {
    /// Copy a node's kind, text and attributes.
    pub fn snapshot<N: Node>(node: &N) -> Result<Self> {
        let data = node.text().into_owned();
        let kind = node
            .kind()
            .ok_or_else(|| Error::UnknownKind(format!("node {:?}", data)))?;
        let attr = node
            .attributes()
            .iter()
            .map(|a| (a.key.clone(), a.value.clone()))
            .collect();
        Ok(Self { kind, data, attr })
    }
}

/// Matched nodes in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Matches {
    nodes: Vec<MatchedNode>,
}

impl Matches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a node and append it.
    pub fn push<N: Node>(&mut self, node: &N) -> Result<()> {
        self.nodes.push(MatchedNode::snapshot(node)?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchedNode> {
        self.nodes.iter()
    }

    pub fn as_slice(&self) -> &[MatchedNode] {
        &self.nodes
    }

    /// Fail with [`Error::NoMatches`] if nothing matched.
    pub fn non_empty(self) -> Result<Self> {
        if self.is_empty() {
            Err(Error::NoMatches)
        } else {
            Ok(self)
        }
    }

    /// Render as a JSON array indented with `indent`.
    pub fn to_json_pretty(&self, indent: &str) -> Result<String> {
        to_json_indented(self, indent)
    }
}

impl<'a> IntoIterator for &'a Matches {
    type Item = &'a MatchedNode;
    type IntoIter = std::slice::Iter<'a, MatchedNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Pretty-print `value` with `indent`, escaping HTML-sensitive characters
/// inside strings the way `encoding/json` does.
pub(crate) fn to_json_indented<T: Serialize + ?Sized>(value: &T, indent: &str) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    let json = String::from_utf8(buf)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    Ok(escape_html(&json))
}

// None of these characters can appear in JSON outside a string literal.
fn escape_html(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}
