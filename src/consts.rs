//! Shared numeric constants for the explorer.

// ── Geometry ────────────────────────────────────────────────────

/// Absolute tolerance for coincidence and zero-area detection.
///
/// Fixed design constant, not user-configurable.
pub const EPS: f64 = 1e-9;

// ── Display ─────────────────────────────────────────────────────

/// Decimal digits shown for every measured value.
pub const DISPLAY_DECIMALS: usize = 2;

/// Placeholder shown in place of a non-finite value.
pub const VALUE_PLACEHOLDER: &str = "—";

// ── Markers ─────────────────────────────────────────────────────

/// Radius of a placed-point marker, in CSS pixels.
pub const POINT_RADIUS_PX: f64 = 4.0;

/// Offset from a vertex to its letter label, in CSS pixels.
pub const LABEL_OFFSET_PX: f64 = 10.0;

/// Radius of a midpoint marker, in CSS pixels.
pub const MIDPOINT_RADIUS_PX: f64 = 2.5;

/// Dash segment length for the in-progress construction outline, in CSS pixels.
pub const PENDING_DASH_PX: f64 = 4.0;

// ── Panel ───────────────────────────────────────────────────────

/// Top-left origin of the status/summary panel, in CSS pixels.
pub const PANEL_ORIGIN_PX: f64 = 12.0;

/// Line height of panel text, in CSS pixels.
pub const PANEL_LINE_HEIGHT_PX: f64 = 18.0;
