//! Tests for breakpoint classification.
//!
//! These tests verify that:
//! - Every width maps to exactly one label, with no gaps or overlaps
//! - Classification is monotonic in width
//! - Unknown and out-of-range widths classify as the smallest label

use spark_ui_test::prelude::*;

fn three_step_table() -> BreakpointTable {
    BreakpointTable::new([
        Breakpoint::new(SizeLabel::Xxs, 0.0),
        Breakpoint::new(SizeLabel::S, 480.0),
        Breakpoint::new(SizeLabel::M, 768.0),
    ])
    .unwrap()
}

#[test]
fn test_three_step_scenario() {
    let table = three_step_table();
    assert_eq!(table.classify(0.0), SizeLabel::Xxs);
    assert_eq!(table.classify(479.0), SizeLabel::Xxs);
    assert_eq!(table.classify(480.0), SizeLabel::S);
    assert_eq!(table.classify(1000.0), SizeLabel::M);
}

#[test]
fn test_standard_table_samples() {
    for (width, label) in sample_widths(&BreakpointTable::STANDARD) {
        assert_eq!(classify(width), label, "width {width}");
    }
}

#[test]
fn test_standard_table_covers_every_label_in_order() {
    let spans = label_spans(&BreakpointTable::STANDARD);
    assert_eq!(spans.len(), ScreenSize::ALL.labels().len());
    for pair in spans.windows(2) {
        let (_, _, end) = pair[0];
        let (_, start, _) = pair[1];
        assert_eq!(end, start, "spans must be contiguous");
        assert!(pair[0].0 < pair[1].0, "labels must ascend");
    }
    assert_eq!(spans[0].1, 0.0);
}

#[test]
fn test_unknown_widths_use_smallest_label() {
    init_tracing();
    let mut harness = HeadlessHarness::new(LinkButton::new("x", "/"));
    assert_eq!(harness.size_label(), SizeLabel::Xxs);

    harness.set_width(2000.0);
    assert_eq!(harness.size_label(), SizeLabel::FourXl);

    harness.set_width(-5.0);
    assert_eq!(harness.size_label(), SizeLabel::Xxs);

    harness.set_width(f64::NAN);
    assert_eq!(harness.size_label(), SizeLabel::Xxs);

    harness.set_width(900.0).set_unmeasured();
    assert_eq!(harness.size_label(), SizeLabel::Xxs);
}

#[test]
fn test_custom_table_in_harness() {
    let mut harness = HeadlessHarness::new_with_width(LinkButton::new("x", "/"), 500.0);
    assert_eq!(harness.size_label(), SizeLabel::L);

    harness.set_breakpoints(three_step_table());
    assert_eq!(harness.size_label(), SizeLabel::S);
}

proptest::proptest! {
    /// Wider never means a smaller label.
    #[test]
    fn classify_is_monotonic(a in 0.0f64..5000.0, b in 0.0f64..5000.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        assert!(classify(lo).index() <= classify(hi).index(),
            "classify({lo}) = {} but classify({hi}) = {}", classify(lo), classify(hi));
    }

    /// A width lands in the span of exactly the label it classifies to.
    #[test]
    fn classify_matches_span(width in 0.0f64..10_000.0) {
        let label = classify(width);
        let spans = label_spans(&BreakpointTable::STANDARD);
        let matching: Vec<_> = spans
            .iter()
            .filter(|(_, start, end)| *start <= width && width < *end)
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].0, label);
    }

    /// Below a threshold is never that threshold's label.
    #[test]
    fn below_threshold_is_a_smaller_label(index in 1usize..16, gap in 0.01f64..300.0) {
        let bp = BreakpointTable::STANDARD.entries()[index];
        let below = (bp.min_width - gap).max(0.0);
        assert!(classify(below) < bp.label);
    }

    /// Classification is a pure function of its input.
    #[test]
    fn classify_is_deterministic(width in proptest::num::f64::ANY) {
        assert_eq!(classify(width), classify(width));
    }
}
