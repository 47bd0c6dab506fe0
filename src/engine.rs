//! Engine: turns pointer and key events into constructions and analyses.
//!
//! [`EngineCore`] holds all state and logic with no browser dependency so it
//! can be tested natively. [`Engine`] wraps it together with the
//! [`web_sys::HtmlCanvasElement`] it draws to, handling backing-store sizing
//! for high-density displays and delegating everything else.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::geometry::{self, Point, TriangleAnalysis};
use crate::input::{Button, Key, PointBuffer, Vertex};
use crate::render;
use crate::report;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// A point was placed and received this label.
    PointPlaced(Vertex),
    /// The third point completed a construction, which was analyzed.
    TriangleAnalyzed(TriangleAnalysis),
    /// The construction was cleared.
    Cleared,
    /// The scene changed and should be redrawn.
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug)]
pub struct EngineCore {
    pub points: PointBuffer,
    pub analysis: Option<TriangleAnalysis>,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            points: PointBuffer::new(),
            analysis: None,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Input events ---

    /// Handle a pointer-down at `pt` (CSS pixels).
    ///
    /// A primary press places the next point; the third placement runs the
    /// analysis. A press on a completed construction clears it and places
    /// `pt` as the first point of a new one. Other buttons are ignored.
    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }

        let mut actions = Vec::new();
        if self.points.is_full() {
            self.analysis = None;
            actions.push(Action::Cleared);
        }

        let label = self.points.push(pt);
        actions.push(Action::PointPlaced(label));

        if let Some([a, b, c]) = self.points.points() {
            let analysis = geometry::analyze(a, b, c);
            self.analysis = Some(analysis);
            actions.push(Action::TriangleAnalyzed(analysis));
        }

        actions.push(Action::RenderNeeded);
        actions
    }

    /// Handle a key-down. `Escape` and `c` clear the construction.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        match key.0.as_str() {
            "Escape" | "c" | "C" => self.clear(),
            _ => Vec::new(),
        }
    }

    /// Drop all placed points and any analysis.
    pub fn clear(&mut self) -> Vec<Action> {
        if self.points.is_empty() && self.analysis.is_none() {
            return Vec::new();
        }
        self.points.clear();
        self.analysis = None;
        vec![Action::Cleared, Action::RenderNeeded]
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Queries ---

    /// The latest analysis, if a construction is complete.
    #[must_use]
    pub fn analysis(&self) -> Option<&TriangleAnalysis> {
        self.analysis.as_ref()
    }

    /// Number of points currently placed.
    #[must_use]
    pub fn points_placed(&self) -> usize {
        self.points.len()
    }

    /// User-facing status line for the current state.
    #[must_use]
    pub fn status_text(&self) -> String {
        report::status_text(self.points.len(), self.analysis.as_ref())
    }

    /// The latest analysis serialized as JSON for host-side consumers.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn analysis_json(&self) -> Result<Option<String>, serde_json::Error> {
        self.analysis.as_ref().map(serde_json::to_string).transpose()
    }
}

/// The full explorer engine. Wraps [`EngineCore`] and owns the browser
/// canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(pt, button)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_down(key)
    }

    pub fn clear(&mut self) -> Vec<Action> {
        self.core.clear()
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio.
    ///
    /// Resizes the canvas backing store to CSS size times `dpr` so strokes
    /// stay crisp on high-density displays; the render pass applies the
    /// matching transform.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr).max(0.0) as u32);
        self.canvas.set_height((height_css * dpr).max(0.0) as u32);
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2d context is unavailable or any `Canvas2D`
    /// call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, &self.core)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn analysis(&self) -> Option<&TriangleAnalysis> {
        self.core.analysis()
    }

    #[must_use]
    pub fn status_text(&self) -> String {
        self.core.status_text()
    }
}
