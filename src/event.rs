//! Interaction events delivered to components.
//!
//! Each component names its own event targets (the reveal icon of a
//! password input, one link of a header menu, ...). Viewport resizes are not
//! component events; they go through [`Viewport`](crate::viewport::Viewport).

/// Control whether an event will continue propagating or whether it should stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventPropagation {
    /// Stop event propagation and mark the event as processed
    Stop,
    /// Let event propagation continue
    Continue,
}

impl EventPropagation {
    pub fn is_continue(&self) -> bool {
        matches!(self, EventPropagation::Continue)
    }

    pub fn is_processed(&self) -> bool {
        matches!(self, EventPropagation::Stop)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event<T> {
    PointerEnter(T),
    PointerLeave(T),
    Click(T),
    FocusGained(T),
    FocusLost(T),
}

impl<T: Copy> Event<T> {
    pub fn target(&self) -> T {
        match *self {
            Event::PointerEnter(target)
            | Event::PointerLeave(target)
            | Event::Click(target)
            | Event::FocusGained(target)
            | Event::FocusLost(target) => target,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Event::PointerEnter(_) => "PointerEnter",
            Event::PointerLeave(_) => "PointerLeave",
            Event::Click(_) => "Click",
            Event::FocusGained(_) => "FocusGained",
            Event::FocusLost(_) => "FocusLost",
        }
    }
}
