//! Canonical variant records.
//!
//! A [`Variant`] is one test configuration: a name plus the sorted set of
//! attributes it carries. Variants are built from raw specification strings by
//! [`Variant::parse`], which tokenizes the strings and merges every occurrence of
//! the same name into a single record whose attributes are the union of all
//! occurrences.
//!
//! ```rust
//! use kaleido::Variant;
//!
//! let variants = Variant::parse(["prod:v1,v2", "test:v1"]);
//! assert_eq!(variants.len(), 2);
//! assert_eq!(variants[0].name(), "v1");
//! assert_eq!(variants[0].attributes(), ["prod", "test"]);
//! assert_eq!(variants[1].id(), "prod:v2");
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::Serialize;

use crate::syntax::{tokenize, AttrList, ATTRIBUTE_SEPARATOR};

pub mod query;

pub use query::{all_attributes, select_by_attributes, VariantFilter};

/// A named test configuration and its attributes.
///
/// Attributes are kept sorted and free of duplicates. Instances are immutable;
/// the fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Variant {
    name: String,
    attributes: Vec<String>,
}

impl Variant {
    /// Creates a variant, sorting and deduplicating `attributes`.
    ///
    /// `name` must not be empty; debug builds panic on an empty name.
    pub fn new<N, I, S>(name: N, attributes: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        debug_assert!(!name.is_empty(), "variant name must not be empty");
        let attributes: BTreeSet<String> = attributes.into_iter().map(Into::into).collect();
        Self {
            name,
            attributes: attributes.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sorted attribute set.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.binary_search_by(|a| a.as_str().cmp(attribute)).is_ok()
    }

    /// The display identifier: attributes and name joined with `:`.
    ///
    /// Separators inside attributes or the name are not escaped; the id is meant
    /// for humans and test reports, not for re-parsing.
    pub fn id(&self) -> String {
        let mut id = String::new();
        for attribute in &self.attributes {
            id.push_str(attribute);
            id.push(ATTRIBUTE_SEPARATOR);
        }
        id.push_str(&self.name);
        id
    }

    /// Parses specification strings into merged variants.
    ///
    /// Each call starts from scratch; an empty collection (or `None`) yields no
    /// variants.
    pub fn parse<I, S>(args: I) -> Vec<Variant>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lists = tokenize(args);
        Self::from_attr_lists(lists)
    }

    /// Builds variants from attribute lists, merging lists that share a name.
    ///
    /// The last element of each list is the variant name and the rest are its
    /// attributes. Empty lists are skipped. Variants come out in the order their
    /// names were first seen.
    pub fn from_attr_lists<I>(lists: I) -> Vec<Variant>
    where
        I: IntoIterator<Item = AttrList>,
    {
        let mut order: Vec<String> = Vec::new();
        let mut merged: HashMap<String, BTreeSet<String>> = HashMap::new();

        for mut list in lists {
            let Some(name) = list.pop() else {
                continue;
            };
            match merged.get_mut(&name) {
                Some(attributes) => attributes.extend(list),
                None => {
                    order.push(name.clone());
                    merged.insert(name, list.into_iter().collect());
                }
            }
        }

        let variants: Vec<Variant> = order
            .into_iter()
            .filter_map(|name| {
                let attributes = merged.remove(&name)?;
                Some(Variant {
                    name,
                    attributes: attributes.into_iter().collect(),
                })
            })
            .collect();

        tracing::debug!(count = variants.len(), "merged variants");
        variants
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
