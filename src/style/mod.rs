//! # Style
//! Responsive style resolution and the resolved output handed to the
//! rendering layer.
//!
//! A component keeps a [`ResponsiveOverrides`] table keyed by
//! [`SizeLabel`](crate::responsive::SizeLabel) and by one of its own
//! [`StyleProp`] enums. On every render the component builds a [`StyleCx`]
//! for the current label and asks it for each responsive property, passing
//! the hard-coded default. Nothing is cached: the same inputs always
//! recompute the same [`ResolvedStyle`].
//!
//! ```rust
//! use spark_ui::responsive::SizeLabel;
//! use spark_ui::style::{ResolvedStyle, ResponsiveOverrides, StyleCx};
//! use spark_ui::views::LinkButtonProp;
//!
//! let overrides = ResponsiveOverrides::new()
//!     .set(SizeLabel::Md, LinkButtonProp::Width, "200px");
//! let cx = StyleCx::new(SizeLabel::Md, &overrides);
//!
//! let style = ResolvedStyle::new()
//!     .set("width", cx.get(LinkButtonProp::Width, "auto"))
//!     .set("height", cx.get(LinkButtonProp::Height, "auto"));
//! assert_eq!(style.to_css(), "width: 200px; height: auto");
//! ```

use indexmap::IndexMap;
use serde::Serialize;

mod cx;
mod overrides;
mod props;
mod resolve;
mod selectors;

pub use cx::{InteractionState, StyleCx};
pub use overrides::ResponsiveOverrides;
pub use props::StyleProp;
pub(crate) use props::responsive_props;
pub use resolve::{non_empty, resolve, resolve_by_name};
pub use selectors::{StyleSelector, StyleSelectors};


/// The final property values for one element, in insertion order.
///
/// Property names are camelCase (`fontSize`, `borderRadius`). A property
/// with no value is left out rather than stored empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyle {
    props: IndexMap<&'static str, String>,
}

impl ResolvedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.props.insert(name, value.into());
        self
    }

    /// Sets `name` when `value` is present, otherwise leaves it out.
    pub fn set_opt<S: Into<String>>(self, name: &'static str, value: Option<S>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    /// Applies `over` on top of this style. Properties in `over` replace
    /// existing ones in place; new properties are appended.
    pub fn apply(mut self, over: ResolvedStyle) -> Self {
        self.props.extend(over.props);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.props.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Inline CSS text: `font-size: 16px; border-radius: 5px`.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{}: {value}", css_name(name)))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn css_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
