//! Size labels, breakpoint tables and width classification.
//!
//! A [`BreakpointTable`] maps a viewport width to one [`SizeLabel`]. The
//! [standard table](BreakpointTable::STANDARD) is shared by every component,
//! so there is exactly one place that defines the ordering and thresholds.
//!
//! [`ScreenSize`] is a set of labels. It is used when one override should
//! apply to several labels at once:
//!
//! ```rust
//! use spark_ui::responsive::{range, ScreenSize, SizeLabel};
//!
//! let tablets_and_up = range(ScreenSize::TABLET..);
//! assert!(tablets_and_up.contains(SizeLabel::Xl));
//! assert!(!tablets_and_up.contains(SizeLabel::Md));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::ops::{BitOr, RangeBounds};
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{EnumCount, IntoEnumIterator};

use crate::error::{Error, Result};

/// A named viewport-width bucket, in ascending width order.
///
/// The serialized names (`xxs`, `tabletSm`, `twoXl`, ...) are the keys
/// used in override tables.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
#[repr(u8)]
pub enum SizeLabel {
    Xxs,
    Xs,
    S,
    M,
    Sm,
    L,
    Md,
    Tablet,
    TabletSm,
    Lg,
    Xl,
    TwoXl,
    ThreeXl,
    FourXl,
    FiveXl,
    SixXl,
}

impl SizeLabel {
    pub const SMALLEST: SizeLabel = SizeLabel::Xxs;
    pub const LARGEST: SizeLabel = SizeLabel::SixXl;

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Position in the ascending label order.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<SizeLabel> {
        SizeLabel::iter().nth(index)
    }

    const fn flag(self) -> SizeFlags {
        SizeFlags::from_bits_truncate(1 << self as u16)
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizeLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SizeLabel::iter()
            .find(|label| label.name() == s)
            .ok_or_else(|| Error::UnknownSizeLabel(s.to_string()))
    }
}

bitflags! {
  #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
  #[must_use]
  pub struct SizeFlags: u16 {
    const XXS = 1;
    const XS = 1 << 1;
    const S = 1 << 2;
    const M = 1 << 3;
    const SM = 1 << 4;
    const L = 1 << 5;
    const MD = 1 << 6;
    const TABLET = 1 << 7;
    const TABLET_SM = 1 << 8;
    const LG = 1 << 9;
    const XL = 1 << 10;
    const TWO_XL = 1 << 11;
    const THREE_XL = 1 << 12;
    const FOUR_XL = 1 << 13;
    const FIVE_XL = 1 << 14;
    const SIX_XL = 1 << 15;
  }
}

/// A set of size labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScreenSize {
    flags: SizeFlags,
}

impl ScreenSize {
    pub const XXS: ScreenSize = ScreenSize::new(SizeFlags::XXS);
    pub const XS: ScreenSize = ScreenSize::new(SizeFlags::XS);
    pub const S: ScreenSize = ScreenSize::new(SizeFlags::S);
    pub const M: ScreenSize = ScreenSize::new(SizeFlags::M);
    pub const SM: ScreenSize = ScreenSize::new(SizeFlags::SM);
    pub const L: ScreenSize = ScreenSize::new(SizeFlags::L);
    pub const MD: ScreenSize = ScreenSize::new(SizeFlags::MD);
    pub const TABLET: ScreenSize = ScreenSize::new(SizeFlags::TABLET);
    pub const TABLET_SM: ScreenSize = ScreenSize::new(SizeFlags::TABLET_SM);
    pub const LG: ScreenSize = ScreenSize::new(SizeFlags::LG);
    pub const XL: ScreenSize = ScreenSize::new(SizeFlags::XL);
    pub const TWO_XL: ScreenSize = ScreenSize::new(SizeFlags::TWO_XL);
    pub const THREE_XL: ScreenSize = ScreenSize::new(SizeFlags::THREE_XL);
    pub const FOUR_XL: ScreenSize = ScreenSize::new(SizeFlags::FOUR_XL);
    pub const FIVE_XL: ScreenSize = ScreenSize::new(SizeFlags::FIVE_XL);
    pub const SIX_XL: ScreenSize = ScreenSize::new(SizeFlags::SIX_XL);

    pub const ALL: ScreenSize = ScreenSize::new(SizeFlags::all());

    const fn new(flags: SizeFlags) -> Self {
        Self { flags }
    }

    pub const fn of(label: SizeLabel) -> Self {
        Self::new(label.flag())
    }

    pub const fn not(size: ScreenSize) -> Self {
        let flags = SizeFlags::all().difference(size.flags);
        Self { flags }
    }

    pub const fn contains(self, label: SizeLabel) -> bool {
        self.flags.contains(label.flag())
    }

    pub const fn is_empty(self) -> bool {
        self.flags.is_empty()
    }

    /// The labels in this set, smallest first.
    pub fn labels(self) -> SmallVec<[SizeLabel; SizeLabel::COUNT]> {
        SizeLabel::iter()
            .filter(|label| self.contains(*label))
            .collect()
    }

    fn lowest(self) -> Option<SizeLabel> {
        SizeLabel::iter().find(|label| self.contains(*label))
    }

    fn highest(self) -> Option<SizeLabel> {
        SizeLabel::iter().rev().find(|label| self.contains(*label))
    }
}

impl From<SizeLabel> for ScreenSize {
    fn from(label: SizeLabel) -> Self {
        ScreenSize::of(label)
    }
}

impl BitOr for ScreenSize {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.flags | rhs.flags)
    }
}

/// Builds the set of every label between the bounds.
///
/// A bound holding several labels uses its lowest label for the start and
/// its highest label for the end, so `range(small..=big)` with overlapping
/// unions still covers everything in between.
pub fn range<R: RangeBounds<ScreenSize>>(range: R) -> ScreenSize {
    use std::ops::Bound;

    let start = match range.start_bound() {
        Bound::Included(size) => size.lowest().map(SizeLabel::index),
        Bound::Excluded(size) => size.highest().map(|label| label.index() + 1),
        Bound::Unbounded => Some(SizeLabel::SMALLEST.index()),
    };
    let end = match range.end_bound() {
        Bound::Included(size) => size.highest().map(SizeLabel::index),
        Bound::Excluded(size) => size
            .lowest()
            .and_then(|label| label.index().checked_sub(1)),
        Bound::Unbounded => Some(SizeLabel::LARGEST.index()),
    };

    let (Some(start), Some(end)) = (start, end) else {
        return ScreenSize::default();
    };

    let flags = SizeLabel::iter()
        .filter(|label| (start..=end).contains(&label.index()))
        .fold(SizeFlags::empty(), |flags, label| flags | label.flag());
    ScreenSize::new(flags)
}

/// One row of a breakpoint table: the label starts at `min_width` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub label: SizeLabel,
    pub min_width: f64,
}

impl Breakpoint {
    pub const fn new(label: SizeLabel, min_width: f64) -> Self {
        Self { label, min_width }
    }
}

const STANDARD_BREAKPOINTS: [Breakpoint; SizeLabel::COUNT] = [
    Breakpoint::new(SizeLabel::Xxs, 0.0),
    Breakpoint::new(SizeLabel::Xs, 320.0),
    Breakpoint::new(SizeLabel::S, 360.0),
    Breakpoint::new(SizeLabel::M, 375.0),
    Breakpoint::new(SizeLabel::Sm, 414.0),
    Breakpoint::new(SizeLabel::L, 480.0),
    Breakpoint::new(SizeLabel::Md, 576.0),
    Breakpoint::new(SizeLabel::Tablet, 640.0),
    Breakpoint::new(SizeLabel::TabletSm, 768.0),
    Breakpoint::new(SizeLabel::Lg, 1024.0),
    Breakpoint::new(SizeLabel::Xl, 1280.0),
    Breakpoint::new(SizeLabel::TwoXl, 1440.0),
    Breakpoint::new(SizeLabel::ThreeXl, 1600.0),
    Breakpoint::new(SizeLabel::FourXl, 1920.0),
    Breakpoint::new(SizeLabel::FiveXl, 2560.0),
    Breakpoint::new(SizeLabel::SixXl, 3840.0),
];

/// An ordered, gap-free mapping from width thresholds to labels.
///
/// Each label covers `[min_width, next.min_width)`; the last label is
/// unbounded above and the first label also absorbs everything below its
/// own threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakpointTable {
    entries: Cow<'static, [Breakpoint]>,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl BreakpointTable {
    pub const STANDARD: BreakpointTable = BreakpointTable {
        entries: Cow::Borrowed(&STANDARD_BREAKPOINTS),
    };

    /// Builds a custom table. Entries must be non-empty, with labels and
    /// finite, non-negative minimum widths both strictly ascending.
    pub fn new(entries: impl IntoIterator<Item = Breakpoint>) -> Result<Self> {
        let entries: Vec<Breakpoint> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(Error::EmptyBreakpointTable);
        }
        for bp in &entries {
            if !bp.min_width.is_finite() || bp.min_width < 0.0 {
                return Err(Error::InvalidBreakpointWidth {
                    label: bp.label.name(),
                    min_width: bp.min_width,
                });
            }
        }
        for pair in entries.windows(2) {
            let (previous, next) = (pair[0], pair[1]);
            if next.label <= previous.label || next.min_width <= previous.min_width {
                return Err(Error::UnorderedBreakpoint {
                    label: next.label.name(),
                    previous: previous.label.name(),
                });
            }
        }
        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }

    /// The label every out-of-range or unknown width falls back to.
    pub fn smallest(&self) -> SizeLabel {
        self.entries
            .first()
            .map_or(SizeLabel::SMALLEST, |bp| bp.label)
    }

    pub fn min_width(&self, label: SizeLabel) -> Option<f64> {
        self.entries
            .iter()
            .find(|bp| bp.label == label)
            .map(|bp| bp.min_width)
    }

    /// The set of labels this table can produce.
    pub fn labels(&self) -> ScreenSize {
        self.entries
            .iter()
            .fold(ScreenSize::default(), |size, bp| size | ScreenSize::of(bp.label))
    }

    pub fn classify(&self, width: f64) -> SizeLabel {
        if !width.is_finite() || width < 0.0 {
            tracing::trace!(width, "width out of range, using smallest size label");
            return self.smallest();
        }
        self.entries
            .iter()
            .rev()
            .find(|bp| bp.min_width <= width)
            .map_or_else(|| self.smallest(), |bp| bp.label)
    }

    pub fn classify_viewport(&self, width: ViewportWidth) -> SizeLabel {
        match width {
            ViewportWidth::Measured(px) => self.classify(px),
            ViewportWidth::Unmeasured => {
                tracing::trace!("viewport not measured yet, using smallest size label");
                self.smallest()
            }
        }
    }
}

/// Classifies `width` against the [standard table](BreakpointTable::STANDARD).
pub fn classify(width: f64) -> SizeLabel {
    BreakpointTable::STANDARD.classify(width)
}

/// The width reported by the host, which is unknown until the first
/// measurement arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ViewportWidth {
    #[default]
    Unmeasured,
    Measured(f64),
}

impl ViewportWidth {
    pub fn px(self) -> Option<f64> {
        match self {
            ViewportWidth::Measured(px) => Some(px),
            ViewportWidth::Unmeasured => None,
        }
    }
}

impl From<f64> for ViewportWidth {
    fn from(px: f64) -> Self {
        ViewportWidth::Measured(px)
    }
}

impl From<Option<f64>> for ViewportWidth {
    fn from(px: Option<f64>) -> Self {
        px.map_or(ViewportWidth::Unmeasured, ViewportWidth::Measured)
    }
}
