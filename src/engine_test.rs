#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::DegenerateKind;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn has_action<F>(actions: &[Action], pred: F) -> bool
where
    F: Fn(&Action) -> bool,
{
    actions.iter().any(pred)
}

fn has_render_needed(actions: &[Action]) -> bool {
    has_action(actions, |a| matches!(a, Action::RenderNeeded))
}

fn has_cleared(actions: &[Action]) -> bool {
    has_action(actions, |a| matches!(a, Action::Cleared))
}

fn placed_label(actions: &[Action]) -> Option<Vertex> {
    actions.iter().find_map(|a| match a {
        Action::PointPlaced(label) => Some(*label),
        _ => None,
    })
}

fn analyzed(actions: &[Action]) -> Option<TriangleAnalysis> {
    actions.iter().find_map(|a| match a {
        Action::TriangleAnalyzed(analysis) => Some(*analysis),
        _ => None,
    })
}

/// Place the classic 3-4-5 right triangle.
fn place_triangle(core: &mut EngineCore) -> Vec<Action> {
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_down(pt(4.0, 0.0), Button::Primary);
    core.on_pointer_down(pt(0.0, 3.0), Button::Primary)
}

// =============================================================
// EngineCore: construction and defaults
// =============================================================

#[test]
fn core_new_has_no_points() {
    let core = EngineCore::new();
    assert_eq!(core.points_placed(), 0);
}

#[test]
fn core_new_has_no_analysis() {
    let core = EngineCore::new();
    assert!(core.analysis().is_none());
}

#[test]
fn core_default_viewport_is_zero() {
    let core = EngineCore::new();
    assert_eq!(core.viewport_width, 0.0);
    assert_eq!(core.viewport_height, 0.0);
    assert_eq!(core.dpr, 1.0);
}

// =============================================================
// EngineCore: point placement
// =============================================================

#[test]
fn primary_press_places_first_point() {
    let mut core = EngineCore::new();
    let actions = core.on_pointer_down(pt(10.0, 20.0), Button::Primary);
    assert_eq!(placed_label(&actions), Some(Vertex::A));
    assert!(has_render_needed(&actions));
    assert_eq!(core.points_placed(), 1);
    assert!(core.analysis().is_none());
}

#[test]
fn points_are_labeled_in_click_order() {
    let mut core = EngineCore::new();
    let first = core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    let second = core.on_pointer_down(pt(4.0, 0.0), Button::Primary);
    let third = core.on_pointer_down(pt(0.0, 3.0), Button::Primary);
    assert_eq!(placed_label(&first), Some(Vertex::A));
    assert_eq!(placed_label(&second), Some(Vertex::B));
    assert_eq!(placed_label(&third), Some(Vertex::C));
}

#[test]
fn non_primary_buttons_are_ignored() {
    let mut core = EngineCore::new();
    assert!(core.on_pointer_down(pt(1.0, 1.0), Button::Middle).is_empty());
    assert!(core.on_pointer_down(pt(1.0, 1.0), Button::Secondary).is_empty());
    assert_eq!(core.points_placed(), 0);
}

#[test]
fn two_points_do_not_trigger_analysis() {
    let mut core = EngineCore::new();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    let actions = core.on_pointer_down(pt(4.0, 0.0), Button::Primary);
    assert!(analyzed(&actions).is_none());
    assert!(core.analysis().is_none());
}

// =============================================================
// EngineCore: third point completes the construction
// =============================================================

#[test]
fn third_point_analyzes_the_triangle() {
    let mut core = EngineCore::new();
    let actions = place_triangle(&mut core);

    let analysis = analyzed(&actions).unwrap();
    assert!(analysis.is_valid());
    let metrics = analysis.metrics().unwrap();
    assert_eq!(metrics.sides.a, 5.0);
    assert_eq!(metrics.area, 6.0);
    assert_eq!(core.analysis(), Some(&analysis));
}

#[test]
fn collinear_clicks_report_degenerate() {
    let mut core = EngineCore::new();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_down(pt(1.0, 1.0), Button::Primary);
    let actions = core.on_pointer_down(pt(2.0, 2.0), Button::Primary);

    let analysis = analyzed(&actions).unwrap();
    assert_eq!(analysis.reason(), Some(DegenerateKind::DegenerateCollinear));
}

#[test]
fn repeated_click_on_same_spot_reports_coincident() {
    let mut core = EngineCore::new();
    core.on_pointer_down(pt(5.0, 5.0), Button::Primary);
    core.on_pointer_down(pt(5.0, 5.0), Button::Primary);
    let actions = core.on_pointer_down(pt(9.0, 1.0), Button::Primary);

    let analysis = analyzed(&actions).unwrap();
    assert_eq!(analysis.reason(), Some(DegenerateKind::CoincidentPoints));
}

// =============================================================
// EngineCore: restart after a completed construction
// =============================================================

#[test]
fn click_after_completion_starts_new_construction() {
    let mut core = EngineCore::new();
    place_triangle(&mut core);

    let actions = core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    assert!(has_cleared(&actions));
    assert_eq!(placed_label(&actions), Some(Vertex::A));
    assert_eq!(core.points_placed(), 1);
    assert!(core.analysis().is_none());
}

#[test]
fn restart_also_follows_degenerate_constructions() {
    let mut core = EngineCore::new();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_down(pt(1.0, 1.0), Button::Primary);
    core.on_pointer_down(pt(2.0, 2.0), Button::Primary);

    let actions = core.on_pointer_down(pt(7.0, 0.5), Button::Primary);
    assert!(has_cleared(&actions));
    assert_eq!(core.points_placed(), 1);
    assert!(core.analysis().is_none());
}

// =============================================================
// EngineCore: clearing
// =============================================================

#[test]
fn escape_clears_the_construction() {
    let mut core = EngineCore::new();
    place_triangle(&mut core);

    let actions = core.on_key_down(&Key("Escape".into()));
    assert!(has_cleared(&actions));
    assert!(has_render_needed(&actions));
    assert_eq!(core.points_placed(), 0);
    assert!(core.analysis().is_none());
}

#[test]
fn c_key_clears_the_construction() {
    let mut core = EngineCore::new();
    core.on_pointer_down(pt(1.0, 1.0), Button::Primary);
    let actions = core.on_key_down(&Key("c".into()));
    assert!(has_cleared(&actions));
    assert_eq!(core.points_placed(), 0);
}

#[test]
fn other_keys_are_ignored() {
    let mut core = EngineCore::new();
    core.on_pointer_down(pt(1.0, 1.0), Button::Primary);
    let actions = core.on_key_down(&Key("x".into()));
    assert!(actions.is_empty());
    assert_eq!(core.points_placed(), 1);
}

#[test]
fn clear_on_empty_engine_is_a_no_op() {
    let mut core = EngineCore::new();
    assert!(core.clear().is_empty());
}

// =============================================================
// EngineCore: viewport
// =============================================================

#[test]
fn set_viewport_stores_dimensions_and_dpr() {
    let mut core = EngineCore::new();
    core.set_viewport(800.0, 600.0, 2.0);
    assert_eq!(core.viewport_width, 800.0);
    assert_eq!(core.viewport_height, 600.0);
    assert_eq!(core.dpr, 2.0);
}

// =============================================================
// EngineCore: status and wire queries
// =============================================================

#[test]
fn status_prompts_follow_placement() {
    let mut core = EngineCore::new();
    assert!(core.status_text().contains("point A"));
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    assert!(core.status_text().contains("point B"));
    core.on_pointer_down(pt(4.0, 0.0), Button::Primary);
    assert!(core.status_text().contains("point C"));
}

#[test]
fn status_reports_completion() {
    let mut core = EngineCore::new();
    place_triangle(&mut core);
    assert!(core.status_text().contains("complete"));
}

#[test]
fn status_reports_degenerate_reason() {
    let mut core = EngineCore::new();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_down(pt(1.0, 1.0), Button::Primary);
    core.on_pointer_down(pt(2.0, 2.0), Button::Primary);
    assert!(core.status_text().contains("degenerate/collinear"));
}

#[test]
fn analysis_json_is_none_before_completion() {
    let core = EngineCore::new();
    assert_eq!(core.analysis_json().unwrap(), None);
}

#[test]
fn analysis_json_carries_measurements() {
    let mut core = EngineCore::new();
    place_triangle(&mut core);
    let json = core.analysis_json().unwrap().unwrap();
    assert!(json.contains("perimeter"), "unexpected wire form: {json}");
}
