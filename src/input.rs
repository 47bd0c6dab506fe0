//! Input model: pointer/keyboard event types and the point placement buffer.
//!
//! `Button` and `Key` mirror the raw browser events the host forwards to the
//! engine. `Vertex` names the positional label a placed point receives.
//! `PointBuffer` is the accumulator between clicks: a fixed three-slot store
//! whose full-buffer transition is explicit, so a fourth click starts a new
//! construction rather than silently shifting the old one.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;

use crate::geometry::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key, holding the name as reported by the browser
/// (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Positional label of a placed point: first, second, or third placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertex {
    A,
    B,
    C,
}

impl Vertex {
    /// The display letter for this label.
    #[must_use]
    pub fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Fixed three-slot accumulator for placed points.
///
/// Slots fill in placement order A, B, C. Pushing into a full buffer is an
/// explicit transition: all slots reset first, then the pushed point is
/// stored as the new A.
#[derive(Debug, Clone, Default)]
pub struct PointBuffer {
    slots: [Option<Point>; 3],
}

impl PointBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `point` in the next free slot and return the label it received.
    ///
    /// On a full buffer this clears all three slots before storing, so the
    /// returned label is [`Vertex::A`] of a fresh construction.
    pub fn push(&mut self, point: Point) -> Vertex {
        if self.is_full() {
            self.clear();
        }
        let index = self.len();
        self.slots[index] = Some(point);
        match index {
            0 => Vertex::A,
            1 => Vertex::B,
            _ => Vertex::C,
        }
    }

    /// Empty all slots.
    pub fn clear(&mut self) {
        self.slots = [None; 3];
    }

    /// Number of points currently placed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` if no points are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns `true` if all three points are placed.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The three points in placement order, once all are placed.
    #[must_use]
    pub fn points(&self) -> Option<[Point; 3]> {
        match self.slots {
            [Some(a), Some(b), Some(c)] => Some([a, b, c]),
            _ => None,
        }
    }

    /// Placed points with their labels, in placement order.
    pub fn placed(&self) -> impl Iterator<Item = (Vertex, Point)> + '_ {
        const LABELS: [Vertex; 3] = [Vertex::A, Vertex::B, Vertex::C];
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|point| (LABELS[index], point)))
    }
}
