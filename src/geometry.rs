//! Triangle analysis: the pure measurement core.
//!
//! Given three labeled points this module classifies the construction and,
//! when it encloses real area, measures it: side lengths, interior angles
//! via the Law of Cosines, perimeter, area via the shoelace formula, and
//! side midpoints. Everything here is referentially transparent — no host
//! environment, no rendering surface, no hidden state. Callers get a tagged
//! [`TriangleAnalysis`] back; degenerate input is classified, never thrown.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::EPS;

/// A point on the drawing surface, in CSS-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint of the segment from `self` to `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Why three placed points fail to form a measurable triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateKind {
    /// Two or more points are numerically identical within [`EPS`].
    #[error("coincident points")]
    CoincidentPoints,
    /// A computed side length is not a finite number.
    #[error("non-finite side length")]
    NonFiniteSide,
    /// The points enclose (numerically) zero area.
    #[error("degenerate/collinear")]
    DegenerateCollinear,
}

/// Side lengths keyed by the opposite vertex: `a` spans B–C, `b` spans A–C,
/// `c` spans A–B.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Interior angles in degrees at each vertex, each in (0, 180).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Midpoint of each side, keyed like [`Sides`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Midpoints {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

/// Full measurement of a non-degenerate triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleMetrics {
    pub sides: Sides,
    pub angles: Angles,
    /// Sum of the three side lengths.
    pub perimeter: f64,
    /// Unsigned enclosed area.
    pub area: f64,
    pub midpoints: Midpoints,
}

/// Outcome of analyzing three placed points.
///
/// A tagged outcome rather than a flag-plus-optional-fields struct, so a
/// "valid but unmeasured" state cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangleAnalysis {
    /// The points do not form a measurable triangle.
    Degenerate(DegenerateKind),
    /// A measurable triangle and its derived properties.
    Valid(TriangleMetrics),
}

impl TriangleAnalysis {
    /// Whether the construction produced a measurable triangle.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The measurements, when valid.
    #[must_use]
    pub fn metrics(&self) -> Option<&TriangleMetrics> {
        match self {
            Self::Valid(metrics) => Some(metrics),
            Self::Degenerate(_) => None,
        }
    }

    /// The degenerate classification, when invalid.
    #[must_use]
    pub fn reason(&self) -> Option<DegenerateKind> {
        match self {
            Self::Degenerate(kind) => Some(*kind),
            Self::Valid(_) => None,
        }
    }
}

/// Classify and measure the triangle formed by three labeled points.
///
/// Points are labeled positionally: `a` was placed first, then `b`, then
/// `c`; input order carries through to side and angle labels and is never
/// canonicalized. Checks run in a fixed order — coincidence, side
/// finiteness, area degeneracy — and the first failure determines the
/// reported reason. Never panics for numeric input, and identical inputs
/// produce bit-identical output.
#[must_use]
pub fn analyze(a: Point, b: Point, c: Point) -> TriangleAnalysis {
    if coincident(a, b) || coincident(a, c) || coincident(b, c) {
        return TriangleAnalysis::Degenerate(DegenerateKind::CoincidentPoints);
    }

    let side_a = b.distance(c);
    let side_b = a.distance(c);
    let side_c = a.distance(b);
    if !side_a.is_finite() || !side_b.is_finite() || !side_c.is_finite() {
        return TriangleAnalysis::Degenerate(DegenerateKind::NonFiniteSide);
    }

    // Shoelace formula: the sign carries winding order, half the magnitude
    // is the enclosed area. Catches near-collinear triples that pass the
    // coincidence check.
    let doubled_signed_area = a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y);
    let area = doubled_signed_area.abs() / 2.0;
    if area <= EPS {
        return TriangleAnalysis::Degenerate(DegenerateKind::DegenerateCollinear);
    }

    let angles = Angles {
        a: vertex_angle(side_a, side_b, side_c),
        b: vertex_angle(side_b, side_a, side_c),
        c: vertex_angle(side_c, side_a, side_b),
    };

    TriangleAnalysis::Valid(TriangleMetrics {
        sides: Sides { a: side_a, b: side_b, c: side_c },
        angles,
        perimeter: side_a + side_b + side_c,
        area,
        midpoints: Midpoints {
            a: b.midpoint(c),
            b: a.midpoint(c),
            c: a.midpoint(b),
        },
    })
}

/// Both coordinate deltas within [`EPS`].
fn coincident(p: Point, q: Point) -> bool {
    (p.x - q.x).abs() <= EPS && (p.y - q.y).abs() <= EPS
}

/// Interior angle in degrees opposite the side of length `opposite`,
/// enclosed by sides of length `s` and `t`.
///
/// The Law of Cosines argument is clamped into [-1, 1] before `acos`:
/// rounding on near-degenerate triangles can push it fractionally outside
/// the domain, which would yield NaN instead of an angle near 0° or 180°.
fn vertex_angle(opposite: f64, s: f64, t: f64) -> f64 {
    let cos = (s * s + t * t - opposite * opposite) / (2.0 * s * t);
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}
