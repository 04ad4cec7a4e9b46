//! Tests for the mobile header.
//!
//! These tests verify that:
//! - The burger toggle opens and closes the menu with its lines
//! - Link hover states are independent of each other
//! - Responsive overrides reach the container, logo, burger and links

use spark_ui_test::prelude::*;

fn links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("Pricing", "/pricing"),
        NavLink::new("Contact", "/contact"),
    ]
}

fn burger_header() -> HeaderMobile {
    HeaderMobile::new(links())
        .burger_menu(true)
        .logo("/logo.svg")
        .burger_line_color("#111")
        .menu_background("#fafafa")
        .link_color("#333")
        .link_hover_color("#fff")
        .link_background_color("transparent")
        .link_hover_background_color("#333")
        .link_font_weight("600")
        .responsive(
            ResponsiveOverrides::new()
                .set(SizeLabel::Xxs, HeaderProp::LogoWidth, "48px")
                .set(SizeLabel::Xxs, HeaderProp::BurgerLineHeight, "3px")
                .set(SizeLabel::Xxs, HeaderProp::NavigationGap, "8px")
                .set(SizeLabel::Xxs, HeaderProp::LinkFontSize, "")
                .set(SizeLabel::Tablet, HeaderProp::ContainerWidth, "80%"),
        )
}

fn burger(frame: HeaderMobileFrame) -> BurgerFrame {
    match frame.trailing {
        HeaderTrailing::Burger(burger) => burger,
        HeaderTrailing::ContactButton(_) => panic!("expected the burger menu"),
    }
}

#[test]
fn test_closed_menu_defaults() {
    let harness = HeadlessHarness::new_with_width(burger_header(), 700.0);
    let frame = harness.render();
    frame.header.assert_prop("width", "100%");
    frame.header.assert_missing("position");
    frame.container.assert_prop("width", "80%");
    frame.container.assert_prop("margin", "auto");
    frame.logo.assert_prop("width", "auto");
    frame.logo_link.assert_prop("scrollBehavior", "smooth");

    let burger = burger(frame);
    burger.container.assert_prop("height", "20px");
    burger.container.assert_prop("zIndex", "9999");
    burger.lines[0].assert_prop("top", "-8px");
    burger.lines[0].assert_prop("transform", "none");
    burger.lines[2].assert_prop("top", "8px");
    for line in &burger.lines {
        line.assert_prop("height", "2px");
        line.assert_prop("background", "#111");
        line.assert_prop("width", "27px");
    }
    assert!(burger.menu.is_none());
}

#[test]
fn test_toggle_opens_and_closes() {
    let mut harness = HeadlessHarness::new_with_width(burger_header(), 200.0);

    assert!(harness.click(HeaderTarget::Burger).is_processed());
    assert!(harness.component().is_open());
    let open = burger(harness.render());
    open.lines[0].assert_prop("top", "0px");
    open.lines[1].assert_prop("opacity", "0");
    open.lines[0].assert_prop("height", "3px");

    let menu = open.menu.expect("menu should be open");
    menu.panel.assert_prop("background", "#fafafa");
    menu.panel.assert_prop("height", "100vh");
    menu.nav.assert_prop("gap", "8px");
    menu.nav.assert_prop("padding", "20px");
    assert_eq!(menu.links.len(), 3);
    for link in &menu.links {
        link.assert_prop("fontWeight", "600");
        link.assert_prop("fontSize", "16px");
        link.assert_prop("color", "#333");
    }

    harness.click(HeaderTarget::Burger);
    assert!(!harness.component().is_open());
    assert!(burger(harness.render()).menu.is_none());
}

#[test]
fn test_link_hover_states_are_independent() {
    let mut harness = HeadlessHarness::new(burger_header());
    harness.click(HeaderTarget::Burger);
    harness.pointer_enter(HeaderTarget::Link(0));
    harness.pointer_enter(HeaderTarget::Link(2));
    harness.pointer_leave(HeaderTarget::Link(0));

    let links = burger(harness.render()).menu.expect("open").links;
    links[0].assert_prop("color", "#333");
    links[1].assert_prop("color", "#333");
    links[2].assert_prop("color", "#fff");
    links[2].assert_prop("backgroundColor", "#333");
}

#[test]
fn test_hover_on_burger_is_not_handled() {
    let mut harness = HeadlessHarness::new(burger_header());
    assert!(harness.pointer_enter(HeaderTarget::Burger).is_continue());
    assert!(harness.click(HeaderTarget::Link(7)).is_continue());
}

#[test]
fn test_contact_button_mode() {
    let header = HeaderMobile::new(links())
        .contact_button("Get in touch", "/contact")
        .button_background_color("navy")
        .hover_button_background_color("black")
        .button_border("1px solid navy")
        .header_position("sticky")
        .header_z_index("10")
        .header_top("0")
        .responsive(
            ResponsiveOverrides::new().set_for(
                range(ScreenSize::XL..),
                HeaderProp::ButtonFontSize,
                "20px",
            ),
        );
    let mut harness = HeadlessHarness::new_with_width(header, 1920.0);

    let frame = harness.render();
    frame.header.assert_prop("position", "sticky");
    frame.header.assert_prop("zIndex", "10");
    frame.header.assert_prop("top", "0");
    let HeaderTrailing::ContactButton(button) = frame.trailing else {
        panic!("expected the contact button");
    };
    button.assert_prop("fontSize", "20px");
    button.assert_prop("backgroundColor", "navy");
    button.assert_prop("padding", "10px 20px");

    harness.pointer_enter(HeaderTarget::ContactButton);
    assert!(harness.component().is_contact_hovered());
    let HeaderTrailing::ContactButton(button) = harness.render().trailing else {
        panic!("expected the contact button");
    };
    button.assert_prop("backgroundColor", "black");
    button.assert_missing("color");
}
