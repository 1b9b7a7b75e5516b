//! Node predicates and their compiled form.
//!
//! A [`Predicate`] is plain configuration: every field is optional and an
//! absent field matches anything. Compiling it yields a [`Filter`], which
//! owns the regex matchers and does the actual node evaluation.
//!
//! JSON shape:
//!
//! ```text
//! {
//!   "type": "element",
//!   "data": "a",
//!   "attr": { "href": null, "rel": "nofollow" },
//!   "re2":  { "data": "^Read", "attr": { "href": "^https://" } }
//! }
//! ```

mod pattern;

pub use pattern::{CompiledRegex, RegexPredicate};

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::collect::Matches;
use crate::{html, walk, Attribute, Node, NodeKind, Result};

/// A declarative node filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    /// Required node kind.
    #[serde(rename = "type", default)]
    pub kind: Option<NodeKind>,

    /// Required node text, compared exactly.
    #[serde(rename = "data", default)]
    pub text: Option<String>,

    /// Required attributes. `None` means the key only has to exist.
    #[serde(rename = "attr", default, deserialize_with = "null_as_default")]
    pub attributes: BTreeMap<String, Option<String>>,

    /// Regex constraints on text and attribute values.
    #[serde(rename = "re2", default, deserialize_with = "null_as_default")]
    pub regex: RegexPredicate,
}

impl Predicate {
    /// Parse a predicate from its JSON form.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Read a predicate from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        debug!("read filter config from {}", path.as_ref().display());
        Self::from_json(&contents)
    }

    /// Render the predicate as indented JSON.
    pub fn to_json_pretty(&self, indent: &str) -> Result<String> {
        crate::collect::to_json_indented(self, indent)
    }

    /// Check if this predicate matches every node.
    pub fn is_match_all(&self) -> bool {
        self.kind.is_none()
            && self.text.is_none()
            && self.attributes.is_empty()
            && self.regex.is_empty()
    }

    /// Compile the regex patterns and produce a ready-to-run [`Filter`].
    pub fn compile(self) -> Result<Filter> {
        let regex = self.regex.compile()?;
        Ok(Filter {
            predicate: self,
            regex,
        })
    }

    /// Evaluate the non-regex constraints against a node.
    fn matches_fields<N: Node>(&self, node: &N) -> bool {
        if let Some(kind) = self.kind {
            if node.kind() != Some(kind) {
                return false;
            }
        }

        if let Some(text) = &self.text {
            if *text != node.text() {
                return false;
            }
        }

        satisfies_all(&self.attributes, &node.attributes(), |want, value| want == value)
    }
}

/// A compiled [`Predicate`].
///
/// Built once, then evaluated against any number of nodes. To change the
/// filter, edit the predicate and compile it again.
#[derive(Debug, Clone)]
pub struct Filter {
    predicate: Predicate,
    regex: CompiledRegex,
}

impl Filter {
    pub fn new(predicate: Predicate) -> Result<Self> {
        predicate.compile()
    }

    /// Parse and compile a predicate from its JSON form.
    pub fn from_json(input: &str) -> Result<Self> {
        Predicate::from_json(input)?.compile()
    }

    /// Read and compile a predicate from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Predicate::from_file(path)?.compile()
    }

    /// Parse and compile a predicate from mini-language arguments.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        crate::parse_args(args)?.compile()
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Check whether a node satisfies every constraint.
    pub fn matches<N: Node>(&self, node: &N) -> bool {
        self.predicate.matches_fields(node)
            && self.regex.match_text(&node.text())
            && self.regex.match_attributes(&node.attributes())
    }

    /// Collect every matching node under (and including) `root`.
    pub fn filter<N: Node>(&self, root: &N) -> Result<Matches> {
        let mut matches = Matches::new();
        walk(root, self, &mut matches)?;
        Ok(matches)
    }

    /// Parse an HTML string and collect its matching nodes.
    pub fn filter_html(&self, input: &str) -> Result<Matches> {
        let dom = html::parse_html(input);
        self.filter(&dom.document)
    }

    /// Parse an HTML file and collect its matching nodes.
    pub fn filter_file(&self, path: impl AsRef<Path>) -> Result<Matches> {
        let dom = html::parse_file(path)?;
        self.filter(&dom.document)
    }
}

/// Check that every constrained key is satisfied by at least one pair.
///
/// A key counts once no matter how many pairs satisfy it.
pub(crate) fn satisfies_all<C>(
    constraints: &BTreeMap<String, Option<C>>,
    attrs: &[Attribute],
    accepts: impl Fn(&C, &str) -> bool,
) -> bool {
    if constraints.is_empty() {
        return true;
    }

    let mut satisfied = HashSet::with_capacity(constraints.len());
    for attr in attrs {
        if let Some(want) = constraints.get(&attr.key) {
            if want.as_ref().map_or(true, |w| accepts(w, &attr.value)) {
                satisfied.insert(attr.key.as_str());
            }
        }
    }
    satisfied.len() == constraints.len()
}

/// Deserialize `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
