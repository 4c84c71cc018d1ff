//! Kaleido: parse compact variant specifications into test variants.
//!
//! A specification such as `router:1.0,1.1,switch:2.0` names variants and tags
//! them with attributes. [`Variant::parse`] turns any number of such strings into
//! canonical [`Variant`] records, merging repeated names, and the
//! [`variant::query`] functions look variants up by attribute.

pub use crate::errors::{KaleidoError, Result};
pub use crate::syntax::{split_escaped, tokenize, AttrList};
pub use crate::variant::{all_attributes, select_by_attributes, Variant, VariantFilter};

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod session;
pub mod syntax;
pub mod variant;
