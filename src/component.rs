use std::fmt::Debug;

use crate::event::{Event, EventPropagation};
use crate::style::{ResponsiveOverrides, StyleCx, StyleProp};
use crate::viewport::Viewport;

/// A styled interactive element.
///
/// A component owns its props, its override table and its interaction
/// state. [`render`](Component::render) classifies the viewport and hands
/// [`frame`](Component::frame) a [`StyleCx`] for that label.
pub trait Component {
    /// The responsive properties this component's override table accepts.
    type Prop: StyleProp;
    /// The parts of the component that receive events.
    type Target: Copy + Debug;
    /// The resolved output of one render.
    type Frame;

    fn overrides(&self) -> &ResponsiveOverrides<Self::Prop>;

    fn event(&mut self, event: &Event<Self::Target>) -> EventPropagation;

    fn frame(&self, cx: &StyleCx<'_, Self::Prop>) -> Self::Frame;

    fn render(&self, viewport: &Viewport) -> Self::Frame {
        let cx = StyleCx::new(viewport.size_label(), self.overrides());
        self.frame(&cx)
    }
}
