use super::*;

use crate::geometry::{self, Point, TriangleAnalysis};

fn sample_metrics() -> TriangleMetrics {
    match geometry::analyze(
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 3.0),
    ) {
        TriangleAnalysis::Valid(metrics) => metrics,
        TriangleAnalysis::Degenerate(reason) => panic!("expected a valid triangle, got: {reason}"),
    }
}

// =============================================================
// format_value
// =============================================================

#[test]
fn format_value_uses_two_decimals() {
    assert_eq!(format_value(5.0), "5.00");
    assert_eq!(format_value(3.14159), "3.14");
}

#[test]
fn format_value_rounds() {
    assert_eq!(format_value(2.675), "2.67");
    assert_eq!(format_value(2.996), "3.00");
}

#[test]
fn format_value_placeholder_for_non_finite() {
    assert_eq!(format_value(f64::INFINITY), "—");
    assert_eq!(format_value(f64::NEG_INFINITY), "—");
    assert_eq!(format_value(f64::NAN), "—");
}

// =============================================================
// status_text
// =============================================================

#[test]
fn status_prompts_for_each_point() {
    assert_eq!(status_text(0, None), "Click to place point A.");
    assert_eq!(status_text(1, None), "Click to place point B.");
    assert_eq!(status_text(2, None), "Click to place point C.");
}

#[test]
fn status_for_valid_triangle_mentions_completion() {
    let analysis = geometry::analyze(
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 3.0),
    );
    let text = status_text(3, Some(&analysis));
    assert!(text.contains("complete"));
}

#[test]
fn status_for_degenerate_carries_reason() {
    let analysis = geometry::analyze(
        Point::new(0.0, 0.0),
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
    );
    let text = status_text(3, Some(&analysis));
    assert!(text.contains("coincident points"));
}

// =============================================================
// summary_lines
// =============================================================

#[test]
fn summary_has_four_lines() {
    assert_eq!(summary_lines(&sample_metrics()).len(), 4);
}

#[test]
fn summary_labels_sides_at_display_precision() {
    let lines = summary_lines(&sample_metrics());
    assert_eq!(lines[0], "a = 5.00   b = 3.00   c = 4.00");
}

#[test]
fn summary_angles_carry_degree_sign() {
    let lines = summary_lines(&sample_metrics());
    assert!(lines[1].contains("A = 90.00°"), "unexpected line: {}", lines[1]);
}

#[test]
fn summary_reports_perimeter_and_area() {
    let lines = summary_lines(&sample_metrics());
    assert_eq!(lines[2], "perimeter = 12.00");
    assert_eq!(lines[3], "area = 6.00");
}
