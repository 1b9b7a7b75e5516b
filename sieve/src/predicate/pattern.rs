//! Regex constraints on node text and attribute values.

use std::collections::BTreeMap;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{null_as_default, satisfies_all};
use crate::{Attribute, Error, Result};

/// Regex patterns for node text and attribute values.
///
/// Patterns are plain strings here. Call [`RegexPredicate::compile`] to get
/// the matchers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexPredicate {
    /// Pattern searched for in node text.
    #[serde(rename = "data", default)]
    pub text_pattern: Option<String>,

    /// Per-key value patterns. `None` means the key only has to exist.
    #[serde(rename = "attr", default, deserialize_with = "null_as_default")]
    pub attribute_patterns: BTreeMap<String, Option<String>>,
}

impl RegexPredicate {
    /// Check if no pattern is set.
    pub fn is_empty(&self) -> bool {
        self.text_pattern.is_none() && self.attribute_patterns.is_empty()
    }

    /// Compile every pattern, stopping at the first invalid one.
    pub fn compile(&self) -> Result<CompiledRegex> {
        let text = self.text_pattern.as_deref().map(compile_pattern).transpose()?;

        let mut attributes = BTreeMap::new();
        for (key, pattern) in &self.attribute_patterns {
            let matcher = pattern.as_deref().map(compile_pattern).transpose()?;
            attributes.insert(key.clone(), matcher);
        }

        debug!(
            "compiled regex predicate: text={}, {} attribute pattern(s)",
            text.is_some(),
            attributes.len()
        );
        Ok(CompiledRegex { text, attributes })
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::Regex {
        pattern: pattern.to_string(),
        source,
    })
}

/// Compiled matchers for a [`RegexPredicate`].
#[derive(Debug, Clone, Default)]
pub struct CompiledRegex {
    text: Option<Regex>,
    attributes: BTreeMap<String, Option<Regex>>,
}

impl CompiledRegex {
    /// True if there is no text pattern or it matches somewhere in `text`.
    pub fn match_text(&self, text: &str) -> bool {
        self.text.as_ref().map_or(true, |re| re.is_match(text))
    }

    /// True if every constrained key has a pair whose value matches.
    pub fn match_attributes(&self, attrs: &[Attribute]) -> bool {
        satisfies_all(&self.attributes, attrs, |re, value| re.is_match(value))
    }
}
