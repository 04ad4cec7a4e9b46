use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::responsive::{ScreenSize, SizeLabel};

use super::StyleProp;

/// Per-label style overrides for one component instance.
///
/// Both levels are sparse: a label may be missing entirely and a present
/// label may set only some properties. Serialized as
/// `{ "<label>": { "<property>": "<value>" } }`. A `null` value is
/// dropped on load, so it resolves to the default like an empty string.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent, bound(serialize = "P: Serialize"))]
pub struct ResponsiveOverrides<P> {
    map: FxHashMap<SizeLabel, FxHashMap<P, String>>,
}

impl<P> Default for ResponsiveOverrides<P> {
    fn default() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }
}

impl<P: Eq + Hash> PartialEq for ResponsiveOverrides<P> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<P: Eq + Hash> Eq for ResponsiveOverrides<P> {}

impl<'de, P: Deserialize<'de> + Eq + Hash> Deserialize<'de> for ResponsiveOverrides<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: FxHashMap<SizeLabel, FxHashMap<P, Option<String>>> =
            FxHashMap::deserialize(deserializer)?;
        let map = raw
            .into_iter()
            .map(|(label, props)| {
                let props = props
                    .into_iter()
                    .filter_map(|(prop, value)| value.map(|value| (prop, value)))
                    .collect();
                (label, props)
            })
            .collect();
        Ok(Self { map })
    }
}

impl<P: StyleProp> ResponsiveOverrides<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `prop` for a single label.
    pub fn set(mut self, label: SizeLabel, prop: P, value: impl Into<String>) -> Self {
        self.insert(label, prop, value);
        self
    }

    /// Sets `prop` for every label in `size`.
    ///
    /// ```rust
    /// use spark_ui::responsive::{range, ScreenSize, SizeLabel};
    /// use spark_ui::style::ResponsiveOverrides;
    /// use spark_ui::views::LinkButtonProp;
    ///
    /// let overrides = ResponsiveOverrides::new()
    ///     .set_for(range(..=ScreenSize::S), LinkButtonProp::FontSize, "12px");
    /// assert_eq!(overrides.get(SizeLabel::Xs, LinkButtonProp::FontSize), Some("12px"));
    /// assert_eq!(overrides.get(SizeLabel::M, LinkButtonProp::FontSize), None);
    /// ```
    pub fn set_for(
        mut self,
        size: impl Into<ScreenSize>,
        prop: P,
        value: impl Into<String>,
    ) -> Self {
        let value = value.into();
        for label in size.into().labels() {
            self.insert(label, prop, value.clone());
        }
        self
    }

    pub fn insert(&mut self, label: SizeLabel, prop: P, value: impl Into<String>) {
        self.map
            .entry(label)
            .or_default()
            .insert(prop, value.into());
    }

    /// The raw stored value, including empty strings.
    pub fn get(&self, label: SizeLabel, prop: P) -> Option<&str> {
        self.map
            .get(&label)
            .and_then(|props| props.get(&prop))
            .map(String::as_str)
    }

    pub fn has_label(&self, label: SizeLabel) -> bool {
        self.map.contains_key(&label)
    }

    /// The labels that carry at least one entry, smallest first.
    pub fn labels(&self) -> Vec<SizeLabel> {
        let mut labels: Vec<SizeLabel> = self.map.keys().copied().collect();
        labels.sort_unstable();
        labels
    }

    pub fn is_empty(&self) -> bool {
        self.map.values().all(FxHashMap::is_empty)
    }
}
