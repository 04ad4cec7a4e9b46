//! Style context for computing component frames.
//!
//! This module contains the context types used while rendering:
//! - [`StyleCx`] - The current size label paired with a component's overrides
//! - [`InteractionState`] - Captures current user interaction state for style resolution

use crate::responsive::SizeLabel;

use super::resolve::{non_empty, resolve};
use super::{ResponsiveOverrides, StyleProp, StyleSelector, StyleSelectors};

/// Resolves a component's responsive properties for one render.
pub struct StyleCx<'a, P> {
    label: SizeLabel,
    overrides: &'a ResponsiveOverrides<P>,
}

impl<'a, P: StyleProp> StyleCx<'a, P> {
    pub fn new(label: SizeLabel, overrides: &'a ResponsiveOverrides<P>) -> Self {
        Self { label, overrides }
    }

    pub fn label(&self) -> SizeLabel {
        self.label
    }

    /// The override for `prop` at the current label, else `default`.
    pub fn get(&self, prop: P, default: &'a str) -> &'a str {
        resolve(self.overrides, self.label, prop, default)
    }

    /// The override for `prop` at the current label, for properties that
    /// have no default and are left out when unset.
    pub fn get_opt(&self, prop: P) -> Option<&'a str> {
        non_empty(self.overrides.get(self.label, prop))
    }
}

/// The interaction state of one interactive element.
///
/// Each flag is a plain set/clear boolean. Sending the same event twice
/// leaves the state where one event would.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionState {
    selectors: StyleSelectors,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hovered(&self) -> bool {
        self.selectors.has(StyleSelector::Hover)
    }

    pub fn is_focused(&self) -> bool {
        self.selectors.has(StyleSelector::Focus)
    }

    pub fn is_active(&self) -> bool {
        self.selectors.has(StyleSelector::Active)
    }

    pub fn is_open(&self) -> bool {
        self.selectors.has(StyleSelector::Open)
    }

    pub fn is_revealed(&self) -> bool {
        self.selectors.has(StyleSelector::Revealed)
    }

    pub fn selectors(&self) -> StyleSelectors {
        self.selectors
    }

    pub fn pointer_enter(&mut self) {
        self.set(StyleSelector::Hover, true);
    }

    pub fn pointer_leave(&mut self) {
        self.set(StyleSelector::Hover, false);
    }

    pub fn focus(&mut self) {
        self.set(StyleSelector::Focus, true);
    }

    pub fn blur(&mut self) {
        self.set(StyleSelector::Focus, false);
    }

    /// Flips open and active together, as a menu toggle does.
    pub fn toggle_menu(&mut self) {
        self.set(StyleSelector::Active, !self.is_active());
        self.set(StyleSelector::Open, !self.is_open());
    }

    pub fn toggle_reveal(&mut self) {
        self.set(StyleSelector::Revealed, !self.is_revealed());
    }

    fn set(&mut self, selector: StyleSelector, value: bool) {
        self.selectors = self.selectors.set(selector, value);
        tracing::trace!(
            selector = selector.name(),
            value,
            state = %self.selectors.debug_string(),
            "interaction state changed"
        );
    }
}
