//! Filter argument mini-language.
//!
//! # Syntax Overview
//!
//! Each argument is a dotted path, optionally followed by `=value`:
//!
//! - **Node type**: `type=element`
//! - **Exact text**: `data=a`
//! - **Attributes**: `attr.href` (present) or `attr.href=http://example.com`
//! - **Regex text**: `re2.data=^Read`
//! - **Regex attributes**: `re2.attr.href` or `re2.attr.href=^https?://`
//!
//! `"..."` quotes a segment so dots inside it do not split, and `\` escapes
//! the next character. The value after `=` is taken verbatim.

mod parser;
mod scanner;

pub use parser::parse_args;
pub use scanner::split_arg;
