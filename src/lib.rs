//! # spark-ui
//! spark-ui is a headless library of responsive UI components: link buttons,
//! headers and form inputs that take style parameters plus a per-breakpoint
//! override table, and resolve them into plain style maps with
//! hover/focus/active states applied.
//!
//! ## Example: Responsive button
//! ```rust
//! use spark_ui::prelude::*;
//!
//! let button = LinkButton::new("Sign up", "/signup")
//!     .color("#3d9a26")
//!     .hover_color("#2b79d3")
//!     .responsive(
//!         ResponsiveOverrides::new()
//!             .set(SizeLabel::Xxs, LinkButtonProp::FontSize, "12px")
//!             .set_for(range(ScreenSize::LG..), LinkButtonProp::FontSize, "30px"),
//!     );
//!
//! let phone = button.render(&Viewport::with_width(300.0));
//! assert_eq!(phone.anchor.get("fontSize"), Some("12px"));
//!
//! let tablet = button.render(&Viewport::with_width(700.0));
//! assert_eq!(tablet.anchor.get("fontSize"), Some("16px"));
//!
//! let desktop = button.render(&Viewport::with_width(1500.0));
//! assert_eq!(desktop.anchor.get("fontSize"), Some("30px"));
//! ```
//!
//! ## Breakpoints
//! A viewport width is classified into one [`SizeLabel`](responsive::SizeLabel)
//! by a [`BreakpointTable`](responsive::BreakpointTable). Every component
//! shares the [standard table](responsive::BreakpointTable::STANDARD); a
//! [`Viewport`](viewport::Viewport) can carry a custom one. Before the host
//! has measured the window the width is
//! [unmeasured](responsive::ViewportWidth::Unmeasured), which classifies as
//! the smallest label, as do negative and non-finite widths.
//!
//! ## Resolution
//! For each responsive property a component asks its
//! [`StyleCx`](style::StyleCx) for the override at the current label,
//! passing a hard-coded default. A missing label, a missing property and an
//! empty-string value all resolve to that default
//! (see [`non_empty`](style::non_empty)).
//!
//! ## Interaction state
//! Components keep an [`InteractionState`](style::InteractionState) per
//! interactive part and update it from [`Event`](event::Event)s. Renders
//! read the state but never change it, so rendering twice with the same
//! inputs gives the same [frame](component::Component::Frame).
//!
//! ## Configuration
//! All props structs deserialize from JSON with the same camelCase keys the
//! override tables use; see [`config`].

pub mod component;
pub mod config;
pub mod error;
pub mod event;
pub mod headless;
pub mod responsive;
pub mod style;
pub mod viewport;
pub mod views;

pub use component::Component;
pub use error::{Error, Result};

pub mod prelude {
    pub use crate::component::Component;
    pub use crate::event::{Event, EventPropagation};
    pub use crate::responsive::{
        Breakpoint, BreakpointTable, ScreenSize, SizeLabel, ViewportWidth, classify, range,
    };
    pub use crate::style::{
        InteractionState, ResolvedStyle, ResponsiveOverrides, StyleCx, StyleProp,
    };
    pub use crate::viewport::Viewport;
    pub use crate::views::*;
}
