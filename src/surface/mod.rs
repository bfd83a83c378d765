pub(crate) mod raster;
pub(crate) mod recording;

use crate::foundation::core::{CurveId, Point, Rgb};

/// Pen-plotter style drawing capability consumed by curves.
///
/// Each curve owns one pen and one cursor on the surface, addressed by its
/// [`CurveId`]. Moving with the pen down draws a segment from the previous
/// position; moving with the pen up only repositions.
pub trait DrawingSurface {
    /// Move the pen of `id` to `to`.
    fn move_to(&mut self, id: CurveId, to: Point);

    /// Lift the pen so subsequent moves do not draw.
    fn pen_up(&mut self, id: CurveId);

    /// Lower the pen so subsequent moves draw.
    fn pen_down(&mut self, id: CurveId);

    /// Set the color used for subsequent strokes.
    fn set_color(&mut self, id: CurveId, color: Rgb);

    /// Show the cursor of `id`.
    fn show(&mut self, id: CurveId);

    /// Hide the cursor of `id`.
    fn hide(&mut self, id: CurveId);

    /// Whether the cursor of `id` is currently shown.
    fn is_visible(&self, id: CurveId) -> bool;

    /// Erase every stroke drawn by `id`, leaving its pen where it is.
    fn clear_strokes_of(&mut self, id: CurveId);
}
