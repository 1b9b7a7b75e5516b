//! sieve: predicate filtering for parsed HTML document trees.
//!
//! A [`Predicate`] is built from a JSON object or from mini-language
//! arguments, compiled into a [`Filter`], and run over a document tree
//! to collect [`Matches`].

pub mod args;
pub mod collect;
pub mod config;
pub mod error;
pub mod html;
pub mod kind;
pub mod node;
pub mod predicate;
pub mod walk;

pub use args::parse_args;
pub use collect::{MatchedNode, Matches};
pub use config::Config;
pub use error::{Error, Result};
pub use kind::NodeKind;
pub use node::{Attribute, Node, TreeNode};
pub use predicate::{CompiledRegex, Filter, Predicate, RegexPredicate};
pub use walk::walk;
