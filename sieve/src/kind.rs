//! Node kinds and their string labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// The kind of a document tree node.
///
/// Each kind has exactly one label, used both in filter configs and in
/// matched-node output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Error,
    Text,
    Document,
    Element,
    Comment,
    Doctype,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: [NodeKind; 6] = [
        NodeKind::Error,
        NodeKind::Text,
        NodeKind::Document,
        NodeKind::Element,
        NodeKind::Comment,
        NodeKind::Doctype,
    ];

    /// The label for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Error => "error",
            NodeKind::Text => "text",
            NodeKind::Document => "document",
            NodeKind::Element => "element",
            NodeKind::Comment => "comment",
            NodeKind::Doctype => "doctype",
        }
    }
}

impl FromStr for NodeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
