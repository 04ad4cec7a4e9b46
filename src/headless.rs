//! Headless harness for component testing and benchmarking.
//!
//! This module provides utilities for driving a component without a host
//! window. It allows simulating resizes and user interactions and then
//! inspecting the frame the component would render.
//!
//! # Example
//!
//! ```rust
//! use spark_ui::headless::HeadlessHarness;
//! use spark_ui::responsive::SizeLabel;
//! use spark_ui::views::{LinkButton, LinkButtonProp, LinkButtonTarget};
//! use spark_ui::style::ResponsiveOverrides;
//!
//! let button = LinkButton::new("Docs", "/docs")
//!     .color("black")
//!     .hover_color("blue")
//!     .responsive(ResponsiveOverrides::new().set(SizeLabel::Xl, LinkButtonProp::Width, "280px"));
//!
//! let mut harness = HeadlessHarness::new_with_width(button, 1300.0);
//! harness.pointer_enter(LinkButtonTarget::Anchor);
//!
//! let frame = harness.render();
//! assert_eq!(frame.anchor.get("width"), Some("280px"));
//! assert_eq!(frame.anchor.get("color"), Some("blue"));
//! ```

use crate::component::Component;
use crate::event::{Event, EventPropagation};
use crate::responsive::{BreakpointTable, SizeLabel};
use crate::viewport::Viewport;

/// A headless harness for component testing and benchmarking.
///
/// HeadlessHarness owns one component and a [`Viewport`], and provides
/// methods to simulate the host's resize observer and pointer/focus events.
pub struct HeadlessHarness<C> {
    component: C,
    viewport: Viewport,
}

impl<C: Component> HeadlessHarness<C> {
    /// Create a new headless harness with an unmeasured viewport.
    pub fn new(component: C) -> Self {
        Self {
            component,
            viewport: Viewport::new(),
        }
    }

    /// Create a new headless harness with the given viewport width.
    pub fn new_with_width(component: C, width: f64) -> Self {
        Self {
            component,
            viewport: Viewport::with_width(width),
        }
    }

    /// Set the viewport width, as a resize observer would.
    pub fn set_width(&mut self, width: f64) -> &mut Self {
        self.viewport.resize(width);
        self
    }

    /// Drop back to the not-yet-measured state.
    pub fn set_unmeasured(&mut self) -> &mut Self {
        self.viewport.set_unmeasured();
        self
    }

    /// Replace the breakpoint table used for classification.
    pub fn set_breakpoints(&mut self, breakpoints: BreakpointTable) -> &mut Self {
        self.viewport = std::mem::take(&mut self.viewport).breakpoints(breakpoints);
        self
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn size_label(&self) -> SizeLabel {
        self.viewport.size_label()
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    pub fn into_component(self) -> C {
        self.component
    }

    /// Dispatch an event to the component.
    pub fn dispatch_event(&mut self, event: Event<C::Target>) -> EventPropagation {
        let propagation = self.component.event(&event);
        tracing::trace!(
            event = event.name(),
            target = ?event.target(),
            processed = propagation.is_processed(),
            "dispatched event"
        );
        propagation
    }

    /// Simulate the pointer entering `target`.
    pub fn pointer_enter(&mut self, target: C::Target) -> EventPropagation {
        self.dispatch_event(Event::PointerEnter(target))
    }

    /// Simulate the pointer leaving `target`.
    pub fn pointer_leave(&mut self, target: C::Target) -> EventPropagation {
        self.dispatch_event(Event::PointerLeave(target))
    }

    /// Simulate a click on `target`.
    pub fn click(&mut self, target: C::Target) -> EventPropagation {
        self.dispatch_event(Event::Click(target))
    }

    /// Simulate `target` gaining keyboard focus.
    pub fn focus(&mut self, target: C::Target) -> EventPropagation {
        self.dispatch_event(Event::FocusGained(target))
    }

    /// Simulate `target` losing keyboard focus.
    pub fn blur(&mut self, target: C::Target) -> EventPropagation {
        self.dispatch_event(Event::FocusLost(target))
    }

    /// Render the component against the current viewport.
    pub fn render(&self) -> C::Frame {
        self.component.render(&self.viewport)
    }
}
