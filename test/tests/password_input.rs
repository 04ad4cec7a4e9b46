//! Tests for the password input.

use spark_ui_test::prelude::*;

fn input() -> PasswordInput {
    PasswordInput::new()
        .id("password")
        .placeholder("Password")
        .background_color("white")
        .focus_background_color("#eef")
        .border("1px solid #ccc")
        .focus_border("1px solid #33f")
        .placeholder_color("#999")
        .focus_placeholder_color("#33f")
        .icon_color("#999")
        .icon_hover_color("#333")
        .transition("0.2s")
        .responsive(
            ResponsiveOverrides::new()
                .set(SizeLabel::Xxs, PasswordInputProp::FontSize, "14px")
                .set(SizeLabel::Xxs, PasswordInputProp::Left, "8px")
                .set(SizeLabel::Lg, PasswordInputProp::Width, "420px")
                .set(SizeLabel::Lg, PasswordInputProp::IconFontSize, "1.25rem"),
        )
}

#[test]
fn test_focus_and_blur() {
    let mut harness = HeadlessHarness::new_with_width(input(), 1100.0);
    let frame = harness.render();
    frame.input.assert_prop("backgroundColor", "white");
    frame.input.assert_prop("width", "420px");
    frame.input.assert_prop("outline", "none");
    frame.placeholder.assert_prop("color", "#999");

    assert!(harness.focus(PasswordTarget::Input).is_processed());
    let focused = harness.render();
    focused.input.assert_prop("backgroundColor", "#eef");
    focused.input.assert_prop("border", "1px solid #33f");
    focused.placeholder.assert_prop("color", "#33f");

    harness.blur(PasswordTarget::Input);
    assert_eq!(harness.render(), frame);
}

#[test]
fn test_repeated_focus_is_idempotent() {
    let mut harness = HeadlessHarness::new(input());
    harness.focus(PasswordTarget::Input);
    harness.focus(PasswordTarget::Input);
    harness.blur(PasswordTarget::Input);
    assert!(!harness.component().is_focused());
}

#[test]
fn test_reveal_toggle() {
    let mut harness = HeadlessHarness::new(input());
    assert_eq!(harness.render().input_type, InputType::Password);

    harness.click(PasswordTarget::RevealIcon);
    let frame = harness.render();
    assert_eq!(frame.input_type, InputType::Text);
    assert_eq!(frame.icon_glyph, RevealIcon::EyeSlash);

    harness.click(PasswordTarget::RevealIcon);
    assert_eq!(harness.render().icon_glyph, RevealIcon::Eye);
}

#[test]
fn test_icon_is_responsive() {
    let mut harness = HeadlessHarness::new_with_width(input(), 100.0);
    let icon = harness.render().icon;
    icon.assert_prop("left", "8px");
    icon.assert_prop("fontSize", "1rem");
    icon.assert_prop("position", "absolute");
    icon.assert_missing("bottom");

    harness.set_width(1100.0);
    let icon = harness.render().icon;
    icon.assert_missing("left");
    icon.assert_prop("fontSize", "1.25rem");

    harness.pointer_enter(PasswordTarget::RevealIcon);
    harness.render().icon.assert_prop("color", "#333");
}

#[test]
fn test_border_bottom_variant_on_small_screens() {
    let input = input()
        .variant(InputVariant::BorderBottom)
        .border_bottom_color("1px solid #ccc")
        .focus_border_bottom_color("2px solid #33f");
    let mut harness = HeadlessHarness::new_with_width(input, 320.0);

    let frame = harness.render();
    frame.input.assert_prop("border", "none");
    frame.input.assert_prop("borderBottom", "1px solid #ccc");
    frame.input.assert_prop("fontSize", "16px");

    harness.focus(PasswordTarget::Input);
    harness.render().input.assert_prop("borderBottom", "2px solid #33f");
}
