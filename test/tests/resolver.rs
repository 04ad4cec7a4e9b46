//! Tests for responsive property resolution.
//!
//! These tests verify that:
//! - An override wins only at its own label
//! - Missing labels, missing properties and empty strings all fall back
//! - Resolution is recomputed on every render and never cached

use spark_ui::style::{non_empty, resolve, resolve_by_name};
use spark_ui_test::prelude::*;

#[test]
fn test_empty_overrides_fall_back_for_every_label() {
    let overrides = ResponsiveOverrides::<LinkButtonProp>::new();
    for label in ScreenSize::ALL.labels() {
        assert_eq!(resolve(&overrides, label, LinkButtonProp::Width, "D"), "D");
    }
}

#[test]
fn test_present_override_wins() {
    let overrides = ResponsiveOverrides::new().set(SizeLabel::M, LinkButtonProp::Width, "5px");
    assert_eq!(resolve(&overrides, SizeLabel::M, LinkButtonProp::Width, "D"), "5px");
}

#[test]
fn test_empty_string_override_reverts_to_default() {
    let overrides = ResponsiveOverrides::new().set(SizeLabel::M, LinkButtonProp::Width, "");
    assert_eq!(resolve(&overrides, SizeLabel::M, LinkButtonProp::Width, "D"), "D");
    assert_eq!(non_empty(Some("")), None);
}

#[test]
fn test_outer_and_inner_misses_are_equivalent() {
    let overrides = ResponsiveOverrides::new().set(SizeLabel::M, LinkButtonProp::Height, "9px");
    let missing_label = resolve(&overrides, SizeLabel::L, LinkButtonProp::Width, "D");
    let missing_prop = resolve(&overrides, SizeLabel::M, LinkButtonProp::Width, "D");
    assert_eq!(missing_label, missing_prop);
}

#[test]
fn test_resolve_by_name_defaults_on_unknown_names() {
    let overrides =
        ResponsiveOverrides::new().set(SizeLabel::TabletSm, HeaderProp::LogoWidth, "64px");
    assert_eq!(resolve_by_name(&overrides, "tabletSm", "logoWidth", "auto"), "64px");
    assert_eq!(resolve_by_name(&overrides, "tablet-sm", "logoWidth", "auto"), "auto");
    assert_eq!(resolve_by_name(&overrides, "tabletSm", "logo_width", "auto"), "auto");
}

#[test]
fn test_rerender_recomputes_after_resize() {
    let button = LinkButton::new("x", "/").responsive(
        ResponsiveOverrides::new()
            .set(SizeLabel::Xxs, LinkButtonProp::Padding, "5px 10px")
            .set(SizeLabel::SixXl, LinkButtonProp::Padding, "20px 40px"),
    );
    let mut harness = HeadlessHarness::new_with_width(button, 100.0);
    let first = harness.render();
    let again = harness.render();
    assert_eq!(first, again);
    first.anchor.assert_prop("padding", "5px 10px");

    harness.set_width(4000.0);
    harness.render().anchor.assert_prop("padding", "20px 40px");

    harness.set_width(1000.0);
    harness.render().anchor.assert_prop("padding", "10px 20px");
}

#[test]
fn test_range_overrides_apply_to_each_label() {
    let overrides = ResponsiveOverrides::new().set_for(
        range(ScreenSize::TABLET..=ScreenSize::LG),
        LinkButtonProp::Margin,
        "12px",
    );
    let button = LinkButton::new("x", "/").responsive(overrides);
    let mut harness = HeadlessHarness::new(button);
    for (width, label) in sample_widths(&BreakpointTable::STANDARD) {
        harness.set_width(width);
        let expected = if (SizeLabel::Tablet..=SizeLabel::Lg).contains(&label) {
            "12px"
        } else {
            "0 10px"
        };
        harness.render().anchor.assert_prop("margin", expected);
    }
}
