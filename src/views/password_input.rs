use serde::Deserialize;

use crate::component::Component;
use crate::error::Result;
use crate::event::{Event, EventPropagation};
use crate::style::{
    InteractionState, ResolvedStyle, ResponsiveOverrides, StyleCx, non_empty, responsive_props,
};

use super::pick;

responsive_props! {
    /// Responsive properties of a [`PasswordInput`].
    pub PasswordInputProp for "PasswordInput" {
        FontSize = "fontSize",
        Margin = "margin",
        Padding = "padding",
        Width = "width",
        Height = "height",
        BorderRadius = "borderRadius",
        IconFontSize = "iconFontSize",
        Top = "top",
        Bottom = "bottom",
        Left = "left",
        Right = "right",
    }
}

/// Border treatment of the input box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputVariant {
    /// A full border, swapped for the focus border while focused.
    #[default]
    Outlined,
    /// Only a bottom border, swapped for the focus color while focused.
    BorderBottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    Password,
    Text,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Password => "password",
            InputType::Text => "text",
        }
    }
}

/// The glyph shown on the reveal toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealIcon {
    Eye,
    EyeSlash,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordInputProps {
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub placeholder: Option<String>,

    pub color: Option<String>,
    pub background_color: Option<String>,
    pub focus_background_color: Option<String>,
    pub border: Option<String>,
    pub focus_border: Option<String>,
    pub border_bottom_color: Option<String>,
    pub focus_border_bottom_color: Option<String>,
    pub font_weight: Option<String>,
    pub font_family: Option<String>,
    pub transition: Option<String>,
    pub placeholder_color: Option<String>,
    pub focus_placeholder_color: Option<String>,
    pub icon_color: Option<String>,
    pub icon_hover_color: Option<String>,
    #[serde(rename = "inputType")]
    pub variant: InputVariant,

    pub responsive: ResponsiveOverrides<PasswordInputProp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PasswordTarget {
    Input,
    RevealIcon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PasswordInputFrame {
    pub container: ResolvedStyle,
    pub input: ResolvedStyle,
    pub input_type: InputType,
    pub placeholder: ResolvedStyle,
    pub icon: ResolvedStyle,
    pub icon_glyph: RevealIcon,
}

/// A password field with a show/hide toggle icon.
pub struct PasswordInput {
    props: PasswordInputProps,
    input: InteractionState,
    icon: InteractionState,
}

impl PasswordInput {
    pub fn new() -> Self {
        Self::from_props(PasswordInputProps::default())
    }

    pub fn from_props(props: PasswordInputProps) -> Self {
        Self {
            props,
            input: InteractionState::new(),
            icon: InteractionState::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        crate::config::from_json_str(json).map(Self::from_props)
    }

    prop_setters! {
        id,
        name,
        value,
        placeholder,
        color,
        background_color,
        focus_background_color,
        border,
        focus_border,
        border_bottom_color,
        focus_border_bottom_color,
        font_weight,
        font_family,
        transition,
        placeholder_color,
        focus_placeholder_color,
        icon_color,
        icon_hover_color,
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.props.variant = variant;
        self
    }

    pub fn responsive(mut self, overrides: ResponsiveOverrides<PasswordInputProp>) -> Self {
        self.props.responsive = overrides;
        self
    }

    pub fn props(&self) -> &PasswordInputProps {
        &self.props
    }

    pub fn is_focused(&self) -> bool {
        self.input.is_focused()
    }

    pub fn is_revealed(&self) -> bool {
        self.icon.is_revealed()
    }

    fn input_style(&self, cx: &StyleCx<'_, PasswordInputProp>) -> ResolvedStyle {
        let p = &self.props;
        let focused = self.input.is_focused();

        let (border, border_bottom) = match p.variant {
            InputVariant::Outlined => (
                pick(focused, &p.focus_border, &p.border),
                p.border.as_deref(),
            ),
            InputVariant::BorderBottom => (
                Some("none"),
                pick(focused, &p.focus_border_bottom_color, &p.border_bottom_color),
            ),
        };

        ResolvedStyle::new()
            .set("margin", cx.get(PasswordInputProp::Margin, "5px"))
            .set("padding", cx.get(PasswordInputProp::Padding, "5px"))
            .set_opt(
                "backgroundColor",
                pick(focused, &p.focus_background_color, &p.background_color),
            )
            .set("fontSize", cx.get(PasswordInputProp::FontSize, "16px"))
            .set_opt("fontWeight", p.font_weight.as_deref())
            .set_opt("fontFamily", p.font_family.as_deref())
            .set("width", cx.get(PasswordInputProp::Width, "100%"))
            .set("height", cx.get(PasswordInputProp::Height, "auto"))
            .set("borderRadius", cx.get(PasswordInputProp::BorderRadius, "5px"))
            .set_opt("color", p.color.as_deref())
            .set_opt("transition", p.transition.as_deref())
            .set("outline", "none")
            .set_opt("border", border)
            .set_opt("borderBottom", border_bottom)
    }

    fn icon_style(&self, cx: &StyleCx<'_, PasswordInputProp>) -> ResolvedStyle {
        let p = &self.props;
        ResolvedStyle::new()
            .set("position", "absolute")
            .set("top", cx.get(PasswordInputProp::Top, "50%"))
            .set("right", cx.get(PasswordInputProp::Right, "10px"))
            .set_opt("bottom", cx.get_opt(PasswordInputProp::Bottom))
            .set_opt("left", cx.get_opt(PasswordInputProp::Left))
            .set("fontSize", cx.get(PasswordInputProp::IconFontSize, "1rem"))
            .set_opt("color", pick(self.icon.is_hovered(), &p.icon_hover_color, &p.icon_color))
            .set("cursor", "pointer")
            .set_opt("transition", p.transition.as_deref())
    }

    fn resolved_placeholder_color(&self) -> Option<&str> {
        let resting = self.props.placeholder_color.as_deref();
        if self.input.is_focused() {
            non_empty(self.props.focus_placeholder_color.as_deref()).or(resting)
        } else {
            resting
        }
    }
}

impl Default for PasswordInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PasswordInput {
    type Prop = PasswordInputProp;
    type Target = PasswordTarget;
    type Frame = PasswordInputFrame;

    fn overrides(&self) -> &ResponsiveOverrides<PasswordInputProp> {
        &self.props.responsive
    }

    fn event(&mut self, event: &Event<PasswordTarget>) -> EventPropagation {
        match event {
            Event::FocusGained(PasswordTarget::Input) => self.input.focus(),
            Event::FocusLost(PasswordTarget::Input) => self.input.blur(),
            Event::PointerEnter(PasswordTarget::RevealIcon) => self.icon.pointer_enter(),
            Event::PointerLeave(PasswordTarget::RevealIcon) => self.icon.pointer_leave(),
            Event::Click(PasswordTarget::RevealIcon) => self.icon.toggle_reveal(),
            _ => return EventPropagation::Continue,
        }
        EventPropagation::Stop
    }

    fn frame(&self, cx: &StyleCx<'_, PasswordInputProp>) -> PasswordInputFrame {
        let revealed = self.icon.is_revealed();
        PasswordInputFrame {
            container: ResolvedStyle::new().set("position", "relative"),
            input: self.input_style(cx),
            input_type: if revealed {
                InputType::Text
            } else {
                InputType::Password
            },
            placeholder: ResolvedStyle::new().set_opt("color", self.resolved_placeholder_color()),
            icon: self.icon_style(cx),
            icon_glyph: if revealed {
                RevealIcon::EyeSlash
            } else {
                RevealIcon::Eye
            },
        }
    }
}
