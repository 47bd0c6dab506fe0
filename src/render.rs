//! Rendering: draws the construction and summary panel to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view of
//! the engine state and produces pixels — it does not mutate any
//! application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    LABEL_OFFSET_PX, MIDPOINT_RADIUS_PX, PANEL_LINE_HEIGHT_PX, PANEL_ORIGIN_PX, PENDING_DASH_PX,
    POINT_RADIUS_PX,
};
use crate::engine::EngineCore;
use crate::geometry::{Point, TriangleAnalysis, TriangleMetrics};
use crate::input::Vertex;
use crate::report;

/// Canvas background fill.
const BACKGROUND: &str = "#FBF7F0";
/// Vertex markers and triangle edges.
const STROKE: &str = "#1F1A17";
/// Triangle interior fill.
const FILL: &str = "rgba(217, 75, 75, 0.15)";
/// Midpoint markers, side labels, and the in-progress outline.
const ACCENT: &str = "#1E6FD9";
/// Status and summary text.
const TEXT: &str = "#1F1A17";

/// Fraction of the vertex-to-centroid distance at which angle readouts sit.
const ANGLE_LABEL_INSET: f64 = 0.25;

/// Draw the full scene: the triangle (when valid), placed points with their
/// labels, and the status/summary panel.
///
/// `core.viewport_width` / `core.viewport_height` are in CSS pixels;
/// `core.dpr` is the device pixel ratio applied to the backing store.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    // Layer 1: reset the transform to backing-store pixels scaled by DPR,
    // then clear.
    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, core.viewport_width, core.viewport_height);

    // Layer 2: the figure beneath its vertex markers.
    match core.analysis() {
        Some(TriangleAnalysis::Valid(metrics)) => {
            if let Some([a, b, c]) = core.points.points() {
                draw_triangle(ctx, a, b, c, metrics)?;
            }
        }
        _ => draw_pending_outline(ctx, core)?,
    }

    // Layer 3: placed points with labels.
    for (label, pt) in core.points.placed() {
        draw_point_marker(ctx, label, pt)?;
    }

    // Layer 4: status and summary text.
    draw_panel(ctx, core)?;

    Ok(())
}

// =============================================================
// Construction
// =============================================================

fn draw_point_marker(ctx: &CanvasRenderingContext2d, label: Vertex, pt: Point) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_fill_style_str(STROKE);
    ctx.begin_path();
    ctx.arc(pt.x, pt.y, POINT_RADIUS_PX, 0.0, 2.0 * PI)?;
    ctx.fill();

    ctx.set_fill_style_str(TEXT);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("left");
    ctx.set_text_baseline("bottom");
    ctx.fill_text(
        label.letter(),
        pt.x + LABEL_OFFSET_PX * 0.5,
        pt.y - LABEL_OFFSET_PX * 0.5,
    )?;
    ctx.restore();
    Ok(())
}

/// Dashed polyline through the placed points while the construction is
/// incomplete or degenerate.
fn draw_pending_outline(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let placed: Vec<Point> = core.points.placed().map(|(_, pt)| pt).collect();
    if placed.len() < 2 {
        return Ok(());
    }

    ctx.save();
    let dash_array = js_sys::Array::new();
    dash_array.push(&PENDING_DASH_PX.into());
    dash_array.push(&PENDING_DASH_PX.into());
    ctx.set_line_dash(&dash_array)?;
    ctx.set_stroke_style_str(ACCENT);
    ctx.set_line_width(1.0);

    ctx.begin_path();
    ctx.move_to(placed[0].x, placed[0].y);
    for pt in &placed[1..] {
        ctx.line_to(pt.x, pt.y);
    }
    ctx.stroke();

    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();
    Ok(())
}

fn draw_triangle(
    ctx: &CanvasRenderingContext2d,
    a: Point,
    b: Point,
    c: Point,
    metrics: &TriangleMetrics,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.begin_path();
    ctx.move_to(a.x, a.y);
    ctx.line_to(b.x, b.y);
    ctx.line_to(c.x, c.y);
    ctx.close_path();

    ctx.set_fill_style_str(FILL);
    ctx.fill();

    ctx.set_stroke_style_str(STROKE);
    ctx.set_line_width(1.5);
    ctx.stroke();
    ctx.restore();

    draw_midpoints(ctx, metrics)?;
    draw_angle_readouts(ctx, a, b, c, metrics)?;
    Ok(())
}

fn draw_midpoints(ctx: &CanvasRenderingContext2d, metrics: &TriangleMetrics) -> Result<(), JsValue> {
    let midpoints = [
        ("a", metrics.midpoints.a),
        ("b", metrics.midpoints.b),
        ("c", metrics.midpoints.c),
    ];

    ctx.save();
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    for (name, mid) in midpoints {
        ctx.set_fill_style_str(ACCENT);
        ctx.begin_path();
        ctx.arc(mid.x, mid.y, MIDPOINT_RADIUS_PX, 0.0, 2.0 * PI)?;
        ctx.fill();
        ctx.fill_text(name, mid.x + LABEL_OFFSET_PX * 0.4, mid.y + LABEL_OFFSET_PX * 0.4)?;
    }
    ctx.restore();
    Ok(())
}

fn draw_angle_readouts(
    ctx: &CanvasRenderingContext2d,
    a: Point,
    b: Point,
    c: Point,
    metrics: &TriangleMetrics,
) -> Result<(), JsValue> {
    let centroid = Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
    let readouts = [
        (a, metrics.angles.a),
        (b, metrics.angles.b),
        (c, metrics.angles.c),
    ];

    ctx.save();
    ctx.set_fill_style_str(TEXT);
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for (vertex, angle) in readouts {
        // Nudge the readout toward the centroid so it sits inside the figure.
        let x = vertex.x + (centroid.x - vertex.x) * ANGLE_LABEL_INSET;
        let y = vertex.y + (centroid.y - vertex.y) * ANGLE_LABEL_INSET;
        ctx.fill_text(&format!("{}°", report::format_value(angle)), x, y)?;
    }
    ctx.restore();
    Ok(())
}

// =============================================================
// Panel
// =============================================================

fn draw_panel(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_fill_style_str(TEXT);
    ctx.set_font("13px sans-serif");
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");

    let mut y = PANEL_ORIGIN_PX;
    ctx.fill_text(&core.status_text(), PANEL_ORIGIN_PX, y)?;

    if let Some(TriangleAnalysis::Valid(metrics)) = core.analysis() {
        for line in report::summary_lines(metrics) {
            y += PANEL_LINE_HEIGHT_PX;
            ctx.fill_text(&line, PANEL_ORIGIN_PX, y)?;
        }
    }

    ctx.restore();
    Ok(())
}
