//! Display formatting: status prompts and the measurement summary.
//!
//! Pure string shaping with no rendering dependency, so everything the user
//! reads is testable without a browser. The renderer draws these strings
//! verbatim; hosts embedding the engine elsewhere can reuse them.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use crate::consts::{DISPLAY_DECIMALS, VALUE_PLACEHOLDER};
use crate::geometry::{TriangleAnalysis, TriangleMetrics};

/// Format a measured value at display precision.
///
/// Non-finite values render as the placeholder rather than `inf`/`NaN`.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.prec$}", prec = DISPLAY_DECIMALS)
    } else {
        VALUE_PLACEHOLDER.to_owned()
    }
}

/// One-line status for the current interaction state.
#[must_use]
pub fn status_text(points_placed: usize, analysis: Option<&TriangleAnalysis>) -> String {
    match analysis {
        Some(TriangleAnalysis::Degenerate(reason)) => {
            format!("Not a triangle: {reason}. Click to start over.")
        }
        Some(TriangleAnalysis::Valid(_)) => {
            "Triangle complete. Click to start a new one, or press Escape to clear.".to_owned()
        }
        None => {
            let next = match points_placed {
                0 => "A",
                1 => "B",
                _ => "C",
            };
            format!("Click to place point {next}.")
        }
    }
}

/// Labeled measurement lines for a valid triangle, at display precision.
#[must_use]
pub fn summary_lines(metrics: &TriangleMetrics) -> Vec<String> {
    vec![
        format!(
            "a = {}   b = {}   c = {}",
            format_value(metrics.sides.a),
            format_value(metrics.sides.b),
            format_value(metrics.sides.c),
        ),
        format!(
            "A = {}°   B = {}°   C = {}°",
            format_value(metrics.angles.a),
            format_value(metrics.angles.b),
            format_value(metrics.angles.c),
        ),
        format!("perimeter = {}", format_value(metrics.perimeter)),
        format!("area = {}", format_value(metrics.area)),
    ]
}
