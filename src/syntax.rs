//! Syntax module for the variant specification mini-language
//!
//! A specification string lists variants separated by commas. Each variant is a
//! colon-separated run of attributes followed by the variant name:
//!
//! ```text
//! router:special:1.0,1.1,switch:2.0
//! ```
//!
//! Both separators can be escaped with a backslash (`\,` and `\:`). Escaping is
//! recognised for the separator being split on only; any other backslash is kept
//! verbatim.

pub mod split;
pub mod tokenize;

pub use split::{escape_segment, join_escaped, split_escaped};
pub use tokenize::{tokenize, AttrList};

/// Separates variants within one specification string.
pub const VARIANT_SEPARATOR: char = ',';

/// Separates attributes from each other and from the variant name.
pub const ATTRIBUTE_SEPARATOR: char = ':';

/// Escapes the separator that directly follows it.
pub const ESCAPE: char = '\\';
