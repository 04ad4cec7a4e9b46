use serde::Deserialize;

use crate::component::Component;
use crate::error::Result;
use crate::event::{Event, EventPropagation};
use crate::style::{InteractionState, ResolvedStyle, ResponsiveOverrides, StyleCx, responsive_props};

use super::pick;

responsive_props! {
    /// Responsive properties of a [`HeaderMobile`].
    pub HeaderProp for "HeaderMobile" {
        LogoWidth = "logoWidth",
        LogoHeight = "logoHeight",
        FontSize = "fontSize",
        ButtonWidth = "buttonWidth",
        ButtonHeight = "buttonHeight",
        ButtonFontSize = "buttonFontSize",
        BurgerLineHeight = "burgerLineHeight",
        ButtonMargin = "buttonMargin",
        NavigationGap = "navigationGap",
        NavigationPadding = "navigationPadding",
        LinkMargin = "linkMargin",
        LinkPadding = "linkPadding",
        LinkWidth = "linkWidth",
        LinkHeight = "linkHeight",
        ButtonBorderRadius = "buttonBorderRadius",
        ButtonPadding = "buttonPadding",
        BurgerContainerHeight = "burgerContainerHeight",
        BurgerContainerWidth = "burgerContainerWidth",
        BurgerContainerMargin = "burgerContainerMargin",
        ContainerWidth = "containerWidth",
        LinkBorderRadius = "linkBorderRadius",
        LinkFontSize = "linkFontSize",
        ContainerMargin = "containerMargin",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

impl NavLink {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderMobileProps {
    pub is_burger_menu: bool,
    pub logo: Option<String>,
    pub logo_href: Option<String>,
    pub links: Vec<NavLink>,

    pub link_color: Option<String>,
    pub link_hover_color: Option<String>,
    pub link_background_color: Option<String>,
    pub link_hover_background_color: Option<String>,
    pub link_border: Option<String>,
    pub link_hover_border: Option<String>,
    pub link_font_weight: Option<String>,
    pub link_font_family: Option<String>,
    pub link_text_decoration: Option<String>,
    pub link_transition: Option<String>,

    pub button_text: String,
    pub button_href: String,
    pub button_color: Option<String>,
    pub button_hover_color: Option<String>,
    pub button_background_color: Option<String>,
    pub hover_button_background_color: Option<String>,
    pub button_border: Option<String>,
    pub button_hover_border: Option<String>,
    pub button_font_weight: Option<String>,
    pub button_font_family: Option<String>,
    pub button_text_decoration: Option<String>,
    pub button_transition: Option<String>,

    pub burger_line_color: Option<String>,
    pub menu_background: Option<String>,
    pub header_position: Option<String>,
    #[serde(rename = "headerZindex")]
    pub header_z_index: Option<String>,
    pub header_top: Option<String>,

    pub responsive: ResponsiveOverrides<HeaderProp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderTarget {
    /// The call-to-action button shown when the burger menu is off.
    ContactButton,
    Burger,
    /// A navigation link in the open menu, by index.
    Link(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderMobileFrame {
    pub header: ResolvedStyle,
    pub container: ResolvedStyle,
    pub logo_link: ResolvedStyle,
    pub logo: ResolvedStyle,
    pub trailing: HeaderTrailing,
}

#[derive(Clone, Debug, PartialEq)]
pub enum HeaderTrailing {
    Burger(BurgerFrame),
    ContactButton(ResolvedStyle),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BurgerFrame {
    pub container: ResolvedStyle,
    pub lines: [ResolvedStyle; 3],
    /// Present only while the menu is open.
    pub menu: Option<MenuFrame>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuFrame {
    pub panel: ResolvedStyle,
    pub nav: ResolvedStyle,
    /// One style per [`NavLink`], in order.
    pub links: Vec<ResolvedStyle>,
}

/// A compact page header: logo on the left and either a contact button or
/// a burger icon that opens a navigation menu.
pub struct HeaderMobile {
    props: HeaderMobileProps,
    contact: InteractionState,
    burger: InteractionState,
    links: Vec<InteractionState>,
}

const BURGER_LINE_TRANSITION: &str = "0.3s ease-in-out";
const BURGER_LINE_WIDTH: &str = "27px";

impl HeaderMobile {
    pub fn new(links: impl IntoIterator<Item = NavLink>) -> Self {
        Self::from_props(HeaderMobileProps {
            links: links.into_iter().collect(),
            ..HeaderMobileProps::default()
        })
    }

    pub fn from_props(props: HeaderMobileProps) -> Self {
        let links = vec![InteractionState::new(); props.links.len()];
        Self {
            props,
            contact: InteractionState::new(),
            burger: InteractionState::new(),
            links,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        crate::config::from_json_str(json).map(Self::from_props)
    }

    pub fn burger_menu(mut self, is_burger_menu: bool) -> Self {
        self.props.is_burger_menu = is_burger_menu;
        self
    }

    pub fn contact_button(mut self, text: impl Into<String>, href: impl Into<String>) -> Self {
        self.props.button_text = text.into();
        self.props.button_href = href.into();
        self
    }

    prop_setters! {
        logo,
        logo_href,
        link_color,
        link_hover_color,
        link_background_color,
        link_hover_background_color,
        link_border,
        link_hover_border,
        link_font_weight,
        link_font_family,
        link_text_decoration,
        link_transition,
        button_color,
        button_hover_color,
        button_background_color,
        hover_button_background_color,
        button_border,
        button_hover_border,
        button_font_weight,
        button_font_family,
        button_text_decoration,
        button_transition,
        burger_line_color,
        menu_background,
        header_position,
        header_z_index,
        header_top,
    }

    pub fn responsive(mut self, overrides: ResponsiveOverrides<HeaderProp>) -> Self {
        self.props.responsive = overrides;
        self
    }

    pub fn props(&self) -> &HeaderMobileProps {
        &self.props
    }

    pub fn is_open(&self) -> bool {
        self.burger.is_open()
    }

    pub fn is_link_hovered(&self, index: usize) -> bool {
        self.links.get(index).is_some_and(InteractionState::is_hovered)
    }

    pub fn is_contact_hovered(&self) -> bool {
        self.contact.is_hovered()
    }

    fn target_state(&mut self, target: HeaderTarget) -> Option<&mut InteractionState> {
        match target {
            HeaderTarget::ContactButton => Some(&mut self.contact),
            HeaderTarget::Burger => Some(&mut self.burger),
            HeaderTarget::Link(index) => self.links.get_mut(index),
        }
    }

    fn contact_style(&self, cx: &StyleCx<'_, HeaderProp>) -> ResolvedStyle {
        let p = &self.props;
        let hovered = self.contact.is_hovered();
        ResolvedStyle::new()
            .set_opt("color", pick(hovered, &p.button_hover_color, &p.button_color))
            .set_opt("transition", p.button_transition.as_deref())
            .set_opt("textDecoration", p.button_text_decoration.as_deref())
            .set_opt("border", pick(hovered, &p.button_hover_border, &p.button_border))
            .set_opt(
                "backgroundColor",
                pick(hovered, &p.hover_button_background_color, &p.button_background_color),
            )
            .set_opt("fontWeight", p.button_font_weight.as_deref())
            .set_opt("fontFamily", p.button_font_family.as_deref())
            .set("padding", cx.get(HeaderProp::ButtonPadding, "10px 20px"))
            .set("fontSize", cx.get(HeaderProp::ButtonFontSize, "16px"))
            .set("margin", cx.get(HeaderProp::ButtonMargin, "0 10px"))
            .set("width", cx.get(HeaderProp::ButtonWidth, "auto"))
            .set("height", cx.get(HeaderProp::ButtonHeight, "auto"))
            .set("borderRadius", cx.get(HeaderProp::ButtonBorderRadius, "5px"))
    }

    fn burger_frame(&self, cx: &StyleCx<'_, HeaderProp>) -> BurgerFrame {
        let active = self.burger.is_active();

        let container = ResolvedStyle::new()
            .set("cursor", "pointer")
            .set("height", cx.get(HeaderProp::BurgerContainerHeight, "20px"))
            .set("width", cx.get(HeaderProp::BurgerContainerWidth, "20px"))
            .set("margin", cx.get(HeaderProp::BurgerContainerMargin, "auto"))
            .set("overflow", "visible")
            .set("position", "relative")
            .set("zIndex", "9999");

        let line = || {
            ResolvedStyle::new()
                .set_opt("background", self.props.burger_line_color.as_deref())
                .set("display", "block")
                .set("height", cx.get(HeaderProp::BurgerLineHeight, "2px"))
                .set("position", "absolute")
                .set("transition", BURGER_LINE_TRANSITION)
                .set("width", BURGER_LINE_WIDTH)
        };
        let lines = [
            line()
                .set("top", if active { "0px" } else { "-8px" })
                .set("transform", if active { "rotate(45deg)" } else { "none" }),
            line()
                .set("opacity", if active { "0" } else { "1" })
                .set("top", "0px"),
            line()
                .set("top", if active { "0px" } else { "8px" })
                .set("transform", if active { "rotate(-45deg)" } else { "none" }),
        ];

        let menu = self.burger.is_open().then(|| self.menu_frame(cx));

        BurgerFrame {
            container,
            lines,
            menu,
        }
    }

    fn menu_frame(&self, cx: &StyleCx<'_, HeaderProp>) -> MenuFrame {
        let p = &self.props;

        let panel = ResolvedStyle::new()
            .set("position", "absolute")
            .set_opt("background", p.menu_background.as_deref())
            .set("width", "100%")
            .set("height", "100vh")
            .set("boxShadow", "0 8px 16px rgba(0,0,0,0.2)")
            .set("zIndex", "1000")
            .set("overflow", "hidden");

        let nav = ResolvedStyle::new()
            .set("gap", cx.get(HeaderProp::NavigationGap, "20px"))
            .set("display", "flex")
            .set("flexDirection", "column")
            .set("padding", cx.get(HeaderProp::NavigationPadding, "20px"));

        let shared = ResolvedStyle::new()
            .set_opt("fontWeight", p.link_font_weight.as_deref())
            .set_opt("fontFamily", p.link_font_family.as_deref())
            .set_opt("textDecoration", p.link_text_decoration.as_deref())
            .set_opt("transition", p.link_transition.as_deref());

        let links = self
            .links
            .iter()
            .map(|state| {
                let hovered = state.is_hovered();
                shared.clone().apply(
                    ResolvedStyle::new()
                        .set("margin", cx.get(HeaderProp::LinkMargin, "0 10px"))
                        .set_opt(
                            "backgroundColor",
                            pick(hovered, &p.link_hover_background_color, &p.link_background_color),
                        )
                        .set("fontSize", cx.get(HeaderProp::LinkFontSize, "16px"))
                        .set("padding", cx.get(HeaderProp::LinkPadding, "10px 20px"))
                        .set("width", cx.get(HeaderProp::LinkWidth, "auto"))
                        .set("height", cx.get(HeaderProp::LinkHeight, "auto"))
                        .set_opt("border", pick(hovered, &p.link_hover_border, &p.link_border))
                        .set("borderRadius", cx.get(HeaderProp::LinkBorderRadius, "5px"))
                        .set_opt("color", pick(hovered, &p.link_hover_color, &p.link_color)),
                )
            })
            .collect();

        MenuFrame { panel, nav, links }
    }
}

impl Component for HeaderMobile {
    type Prop = HeaderProp;
    type Target = HeaderTarget;
    type Frame = HeaderMobileFrame;

    fn overrides(&self) -> &ResponsiveOverrides<HeaderProp> {
        &self.props.responsive
    }

    fn event(&mut self, event: &Event<HeaderTarget>) -> EventPropagation {
        let target = event.target();
        let Some(state) = self.target_state(target) else {
            tracing::debug!(?target, "event for a link that does not exist");
            return EventPropagation::Continue;
        };
        match (event, target) {
            (Event::PointerEnter(_), HeaderTarget::ContactButton | HeaderTarget::Link(_)) => {
                state.pointer_enter()
            }
            (Event::PointerLeave(_), HeaderTarget::ContactButton | HeaderTarget::Link(_)) => {
                state.pointer_leave()
            }
            (Event::Click(_), HeaderTarget::Burger) => state.toggle_menu(),
            _ => return EventPropagation::Continue,
        }
        EventPropagation::Stop
    }

    fn frame(&self, cx: &StyleCx<'_, HeaderProp>) -> HeaderMobileFrame {
        let p = &self.props;

        let header = ResolvedStyle::new()
            .set("width", "100%")
            .set_opt("position", p.header_position.as_deref())
            .set_opt("zIndex", p.header_z_index.as_deref())
            .set_opt("top", p.header_top.as_deref());

        let container = ResolvedStyle::new()
            .set("margin", cx.get(HeaderProp::ContainerMargin, "auto"))
            .set("width", cx.get(HeaderProp::ContainerWidth, "90%"))
            .set("display", "flex")
            .set("flexDirection", "row")
            .set("justifyContent", "space-between")
            .set("alignItems", "center");

        let logo_link = ResolvedStyle::new().set("scrollBehavior", "smooth");

        let logo = ResolvedStyle::new()
            .set("width", cx.get(HeaderProp::LogoWidth, "auto"))
            .set("height", cx.get(HeaderProp::LogoHeight, "auto"));

        let trailing = if p.is_burger_menu {
            HeaderTrailing::Burger(self.burger_frame(cx))
        } else {
            HeaderTrailing::ContactButton(self.contact_style(cx))
        };

        HeaderMobileFrame {
            header,
            container,
            logo_link,
            logo,
            trailing,
        }
    }
}
