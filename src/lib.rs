//! Interactive triangle explorer for the browser canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The user
//! clicks three points on the canvas; the engine labels them A, B, C in
//! placement order, measures the resulting triangle (side lengths, interior
//! angles, perimeter, area, side midpoints) or classifies why the points do
//! not form one, and renders the construction with a formatted summary. The
//! host JavaScript layer is responsible only for wiring DOM events to the
//! engine and sizing the canvas element.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Pure triangle analysis: classification and measurement |
//! | [`input`] | Input event types and the three-point placement buffer |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`report`] | Display formatting of measurements and status text |
//! | [`render`] | Scene rendering to the 2D canvas context |
//! | [`consts`] | Shared numeric constants (tolerances, marker sizes, etc.) |

pub mod consts;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod render;
pub mod report;
