//! Conversion rules for wx2tt.
//!
//! This module handles:
//! - The rule table types and the built-in WeChat to ByteDance rules
//! - Parsing alternate rule tables from TOML
//! - Matching files to rules by extension
//! - Literal byte-level substitution of file content

pub mod matcher;
pub mod parser;
pub mod rewriter;
pub mod types;

pub use matcher::file_extension;
pub use parser::parse_rules_str;
pub use rewriter::{replace_literal, rewrite_content};
pub use types::{ExtensionRule, RuleTable, TextRule};
