//! Lookups over a parsed variant list.

use std::collections::BTreeSet;

use super::Variant;

/// Returns every distinct attribute used by `variants`, sorted.
pub fn all_attributes(variants: &[Variant]) -> Vec<String> {
    let attributes: BTreeSet<&str> = variants
        .iter()
        .flat_map(|v| v.attributes().iter().map(String::as_str))
        .collect();
    attributes.into_iter().map(str::to_owned).collect()
}

/// Selects variants by attribute.
///
/// With no `attrs`, the variants that carry no attributes at all are returned.
/// Otherwise a variant matches when it carries *any* of `attrs`. The result is
/// always sorted by variant name.
///
/// ```rust
/// use kaleido::{select_by_attributes, Variant};
///
/// let variants = Variant::parse(["switch:2.0,router:1.1,router:switch:1.0", "foo"]);
/// let selected = select_by_attributes(&variants, &["router", "switch"]);
/// let names: Vec<&str> = selected.iter().map(|v| v.name()).collect();
/// assert_eq!(names, ["1.0", "1.1", "2.0"]);
/// ```
pub fn select_by_attributes<S: AsRef<str>>(variants: &[Variant], attrs: &[S]) -> Vec<Variant> {
    let mut selected: Vec<Variant> = if attrs.is_empty() {
        variants
            .iter()
            .filter(|v| v.attributes().is_empty())
            .cloned()
            .collect()
    } else {
        variants
            .iter()
            .filter(|v| attrs.iter().any(|a| v.has_attribute(a.as_ref())))
            .cloned()
            .collect()
    };
    selected.sort_by(|a, b| a.name().cmp(b.name()));

    tracing::debug!(
        requested = attrs.len(),
        selected = selected.len(),
        "selected variants by attributes"
    );
    selected
}

/// Convenience accessors over one variant list.
#[derive(Debug, Clone, Default)]
pub struct VariantFilter {
    variants: Vec<Variant>,
}

impl VariantFilter {
    pub fn new(variants: Vec<Variant>) -> Self {
        Self { variants }
    }

    /// Variants tagged with `attribute`, or the attribute-less ones for `None`.
    pub fn by_attribute(&self, attribute: Option<&str>) -> Vec<Variant> {
        match attribute {
            Some(attribute) => select_by_attributes(&self.variants, &[attribute]),
            None => select_by_attributes::<&str>(&self.variants, &[]),
        }
    }

    /// Variants tagged with any of `attributes`. See [`select_by_attributes`].
    pub fn by_attributes<S: AsRef<str>>(&self, attributes: &[S]) -> Vec<Variant> {
        select_by_attributes(&self.variants, attributes)
    }

    /// Every variant, in parse order.
    pub fn all_variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn all_variant_attributes(&self) -> Vec<String> {
        all_attributes(&self.variants)
    }
}
