use serde::Deserialize;

use crate::component::Component;
use crate::error::Result;
use crate::event::{Event, EventPropagation};
use crate::style::{InteractionState, ResolvedStyle, ResponsiveOverrides, StyleCx, responsive_props};

use super::pick;

responsive_props! {
    /// Responsive properties of a [`LinkButton`].
    pub LinkButtonProp for "LinkButton" {
        Width = "width",
        Height = "height",
        FontSize = "fontSize",
        BorderRadius = "borderRadius",
        Margin = "margin",
        Padding = "padding",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkButtonProps {
    pub text: String,
    pub href: String,
    pub color: Option<String>,
    pub hover_color: Option<String>,
    pub background_color: Option<String>,
    pub hover_background_color: Option<String>,
    pub border: Option<String>,
    pub hover_border: Option<String>,
    pub font_weight: Option<String>,
    pub font_family: Option<String>,
    pub text_decoration: Option<String>,
    pub transition: Option<String>,
    pub responsive: ResponsiveOverrides<LinkButtonProp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkButtonTarget {
    Anchor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkButtonFrame {
    pub anchor: ResolvedStyle,
}

/// An anchor styled as a button, with hover variants for color,
/// background and border.
pub struct LinkButton {
    props: LinkButtonProps,
    state: InteractionState,
}

impl LinkButton {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::from_props(LinkButtonProps {
            text: text.into(),
            href: href.into(),
            ..LinkButtonProps::default()
        })
    }

    pub fn from_props(props: LinkButtonProps) -> Self {
        Self {
            props,
            state: InteractionState::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        crate::config::from_json_str(json).map(Self::from_props)
    }

    prop_setters! {
        color,
        hover_color,
        background_color,
        hover_background_color,
        border,
        hover_border,
        font_weight,
        font_family,
        text_decoration,
        transition,
    }

    pub fn responsive(mut self, overrides: ResponsiveOverrides<LinkButtonProp>) -> Self {
        self.props.responsive = overrides;
        self
    }

    pub fn props(&self) -> &LinkButtonProps {
        &self.props
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }
}

impl Component for LinkButton {
    type Prop = LinkButtonProp;
    type Target = LinkButtonTarget;
    type Frame = LinkButtonFrame;

    fn overrides(&self) -> &ResponsiveOverrides<LinkButtonProp> {
        &self.props.responsive
    }

    fn event(&mut self, event: &Event<LinkButtonTarget>) -> EventPropagation {
        match event {
            Event::PointerEnter(LinkButtonTarget::Anchor) => self.state.pointer_enter(),
            Event::PointerLeave(LinkButtonTarget::Anchor) => self.state.pointer_leave(),
            _ => return EventPropagation::Continue,
        }
        EventPropagation::Stop
    }

    fn frame(&self, cx: &StyleCx<'_, LinkButtonProp>) -> LinkButtonFrame {
        let p = &self.props;
        let hovered = self.state.is_hovered();

        let anchor = ResolvedStyle::new()
            .set_opt(
                "backgroundColor",
                pick(hovered, &p.hover_background_color, &p.background_color),
            )
            .set_opt("color", pick(hovered, &p.hover_color, &p.color))
            .set_opt("border", pick(hovered, &p.hover_border, &p.border))
            .set_opt("fontWeight", p.font_weight.as_deref())
            .set_opt("fontFamily", p.font_family.as_deref())
            .set_opt("textDecoration", p.text_decoration.as_deref())
            .set_opt("transition", p.transition.as_deref())
            .set("width", cx.get(LinkButtonProp::Width, "auto"))
            .set("height", cx.get(LinkButtonProp::Height, "auto"))
            .set("fontSize", cx.get(LinkButtonProp::FontSize, "16px"))
            .set("borderRadius", cx.get(LinkButtonProp::BorderRadius, "5px"))
            .set("margin", cx.get(LinkButtonProp::Margin, "0 10px"))
            .set("padding", cx.get(LinkButtonProp::Padding, "10px 20px"));

        LinkButtonFrame { anchor }
    }
}
