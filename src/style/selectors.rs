//! Style selector types for interaction states
//!
//! This module provides the [`StyleSelector`] enum and the [`StyleSelectors`]
//! bitmask used by [`InteractionState`](super::InteractionState) to track
//! hover, focus, active, open and revealed states.

/// Interaction states a component can style against
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum StyleSelector {
    Hover = 1,
    Focus = 1 << 1,
    Active = 1 << 2,
    Open = 1 << 3,
    Revealed = 1 << 4,
}

impl StyleSelector {
    pub const fn all() -> &'static [StyleSelector] {
        &[
            StyleSelector::Hover,
            StyleSelector::Focus,
            StyleSelector::Active,
            StyleSelector::Open,
            StyleSelector::Revealed,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            StyleSelector::Hover => "Hover",
            StyleSelector::Focus => "Focus",
            StyleSelector::Active => "Active",
            StyleSelector::Open => "Open",
            StyleSelector::Revealed => "Revealed",
        }
    }
}

/// Bitmask of active style selectors
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct StyleSelectors {
    selectors: u8,
}

impl StyleSelectors {
    pub const fn new() -> Self {
        StyleSelectors { selectors: 0 }
    }

    pub const fn set(mut self, selector: StyleSelector, value: bool) -> Self {
        let v = selector as u8;
        if value {
            self.selectors |= v;
        } else {
            self.selectors &= !v;
        }
        self
    }

    pub const fn has(self, selector: StyleSelector) -> bool {
        let v = selector as u8;
        self.selectors & v == v
    }

    /// Returns a formatted string representation of the active selectors
    pub fn debug_string(&self) -> String {
        let parts = self.active_selectors();
        if parts.is_empty() {
            "None".to_string()
        } else {
            parts.join(" + ")
        }
    }

    /// Returns a vector of individual selector names
    pub fn active_selectors(&self) -> Vec<&'static str> {
        StyleSelector::all()
            .iter()
            .filter(|&&selector| self.has(selector))
            .map(|&selector| selector.name())
            .collect()
    }

    /// Returns true if no selectors are active
    pub const fn is_empty(&self) -> bool {
        self.selectors == 0
    }
}
