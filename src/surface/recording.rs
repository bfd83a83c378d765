use std::collections::BTreeMap;

use crate::foundation::core::{CurveId, Point, Rgb};
use crate::surface::DrawingSurface;

/// Polyline drawn with one pen-down, one color.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgb,
    /// Visited points in order; always at least two.
    pub points: Vec<Point>,
}

/// Observable pen and cursor state of one curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenState {
    /// Current pen position.
    pub position: Point,
    /// Whether moves currently draw.
    pub down: bool,
    /// Whether the cursor is shown.
    pub visible: bool,
    /// Color of the next stroke.
    pub color: Rgb,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            down: true,
            visible: true,
            color: Rgb::BLACK,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct PenRecord {
    pen: PenState,
    strokes: Vec<Stroke>,
    // Whether the last stroke is still being extended by moves.
    open: bool,
}

/// In-memory [`DrawingSurface`] that keeps every stroke per curve.
///
/// Pens start down, visible and black at the origin, like a fresh turtle.
/// Lifting the pen, lowering it again or changing color starts a new stroke.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pens: BTreeMap<CurveId, PenRecord>,
}

impl RecordingSurface {
    /// Empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, id: CurveId) -> &mut PenRecord {
        self.pens.entry(id).or_default()
    }

    /// Pen state of `id`, if it ever touched this surface.
    pub fn pen(&self, id: CurveId) -> Option<PenState> {
        self.pens.get(&id).map(|r| r.pen)
    }

    /// Strokes currently on the surface for `id`.
    pub fn strokes(&self, id: CurveId) -> &[Stroke] {
        self.pens.get(&id).map(|r| r.strokes.as_slice()).unwrap_or(&[])
    }

    /// Number of line segments currently drawn by `id`.
    pub fn segment_count(&self, id: CurveId) -> usize {
        self.strokes(id)
            .iter()
            .map(|s| s.points.len().saturating_sub(1))
            .sum()
    }

    /// Every stroke on the surface in curve order.
    pub fn all_strokes(&self) -> impl Iterator<Item = (CurveId, &Stroke)> + '_ {
        self.pens
            .iter()
            .flat_map(|(id, r)| r.strokes.iter().map(move |s| (*id, s)))
    }

    /// Curves that have touched this surface.
    pub fn curve_ids(&self) -> impl Iterator<Item = CurveId> + '_ {
        self.pens.keys().copied()
    }
}

impl DrawingSurface for RecordingSurface {
    fn move_to(&mut self, id: CurveId, to: Point) {
        let rec = self.record(id);
        if rec.pen.down {
            if rec.open {
                if let Some(stroke) = rec.strokes.last_mut() {
                    stroke.points.push(to);
                }
            } else {
                rec.strokes.push(Stroke {
                    color: rec.pen.color,
                    points: vec![rec.pen.position, to],
                });
                rec.open = true;
            }
        }
        rec.pen.position = to;
    }

    fn pen_up(&mut self, id: CurveId) {
        let rec = self.record(id);
        rec.pen.down = false;
        rec.open = false;
    }

    fn pen_down(&mut self, id: CurveId) {
        let rec = self.record(id);
        rec.pen.down = true;
        rec.open = false;
    }

    fn set_color(&mut self, id: CurveId, color: Rgb) {
        let rec = self.record(id);
        rec.pen.color = color;
        rec.open = false;
    }

    fn show(&mut self, id: CurveId) {
        self.record(id).pen.visible = true;
    }

    fn hide(&mut self, id: CurveId) {
        self.record(id).pen.visible = false;
    }

    fn is_visible(&self, id: CurveId) -> bool {
        self.pens.get(&id).is_none_or(|r| r.pen.visible)
    }

    fn clear_strokes_of(&mut self, id: CurveId) {
        let rec = self.record(id);
        rec.strokes.clear();
        rec.open = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/recording.rs"]
mod tests;
