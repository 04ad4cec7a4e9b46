//! Responsive property resolution.
//!
//! A lookup misses when the label has no entry, when the label has no value
//! for the property, or when the stored value is the empty string. All three
//! resolve to the caller's default. The empty-string rule is kept in
//! [`non_empty`] so there is one place to change it.

use crate::responsive::SizeLabel;

use super::{ResponsiveOverrides, StyleProp};

/// Treats an empty string the same as a missing value.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// `overrides[label][prop]`, or `default` when that lookup misses.
pub fn resolve<'a, P: StyleProp>(
    overrides: &'a ResponsiveOverrides<P>,
    label: SizeLabel,
    prop: P,
    default: &'a str,
) -> &'a str {
    non_empty(overrides.get(label, prop)).unwrap_or(default)
}

/// Like [`resolve`] but with the label and property given by name.
///
/// Unknown label or property names resolve to `default`.
pub fn resolve_by_name<'a, P: StyleProp>(
    overrides: &'a ResponsiveOverrides<P>,
    label: &str,
    prop: &str,
    default: &'a str,
) -> &'a str {
    match (label.parse::<SizeLabel>(), P::parse(prop)) {
        (Ok(label), Ok(prop)) => resolve(overrides, label, prop, default),
        (label, prop) => {
            tracing::trace!(
                label_known = label.is_ok(),
                prop_known = prop.is_ok(),
                component = P::COMPONENT,
                "unresolvable responsive lookup, using default"
            );
            default
        }
    }
}
