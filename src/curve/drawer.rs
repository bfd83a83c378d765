use crate::curve::model::{CurveModel, CurveParams};
use crate::foundation::core::{CurveId, Point, Rgb};
use crate::foundation::error::{SpiroError, SpiroResult};
use crate::surface::DrawingSurface;

/// Degrees advanced per animation step unless configured otherwise.
pub const DEFAULT_STEP_DEGREES: u32 = 5;

/// Where a curve is in its drawing pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveState {
    /// Parameters set, pen not yet positioned.
    Created,
    /// Pen placed on the angle-0 point, nothing drawn yet.
    Positioned,
    /// At least one step drawn, period not reached.
    Drawing,
    /// Period reached; only [`Curve::restart`] leaves this state.
    Complete,
}

/// One animated spirograph: a [`CurveModel`] plus pen position and progress.
///
/// The curve never owns the surface it draws on; every drawing operation
/// borrows it for the duration of the call.
#[derive(Clone, Debug)]
pub struct Curve {
    id: CurveId,
    center: Point,
    color: Rgb,
    model: CurveModel,
    step_degrees: u32,
    angle_degrees: u64,
    state: CurveState,
}

impl Curve {
    /// Build a curve in the [`CurveState::Created`] state.
    pub fn new(id: CurveId, params: &CurveParams, step_degrees: u32) -> SpiroResult<Self> {
        if step_degrees == 0 {
            return Err(SpiroError::degenerate("step must be at least one degree"));
        }
        let model = params.model()?;
        Ok(Self {
            id,
            center: params.center,
            color: params.color,
            model,
            step_degrees,
            angle_degrees: 0,
            state: CurveState::Created,
        })
    }

    /// Surface identity of this curve.
    pub fn id(&self) -> CurveId {
        self.id
    }

    /// Curve center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Pen color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Geometry in use.
    pub fn model(&self) -> &CurveModel {
        &self.model
    }

    /// Degrees advanced per step.
    pub fn step_degrees(&self) -> u32 {
        self.step_degrees
    }

    /// Angle reached in the current pass.
    pub fn angle_degrees(&self) -> u64 {
        self.angle_degrees
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CurveState {
        self.state
    }

    /// Whether the current pass reached the rotation period.
    pub fn is_complete(&self) -> bool {
        self.state == CurveState::Complete
    }

    /// Parameters currently in use.
    pub fn params(&self) -> CurveParams {
        CurveParams {
            center: self.center,
            color: self.color,
            outer_radius: self.model.outer_radius(),
            inner_radius: self.model.inner_radius(),
            hole_ratio: self.model.hole_ratio(),
        }
    }

    /// Replace geometry, center and color.
    ///
    /// The pen and the angle are untouched until the next [`restart`](Self::restart).
    /// On error the curve keeps its previous parameters.
    pub fn set_parameters(&mut self, params: &CurveParams) -> SpiroResult<()> {
        self.model = params.model()?;
        self.center = params.center;
        self.color = params.color;
        Ok(())
    }

    fn point_at(&self, angle_degrees: u64) -> Point {
        self.center + self.model.point_at(angle_degrees as f64).to_vec2()
    }

    /// Reset to angle 0 and place the pen on the starting point without drawing.
    ///
    /// Valid from any state; strokes from earlier passes stay on the surface.
    pub fn restart<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
        self.angle_degrees = 0;
        self.state = CurveState::Positioned;

        surface.show(self.id);
        surface.pen_up(self.id);
        surface.set_color(self.id, self.color);
        surface.move_to(self.id, self.point_at(0));
        surface.pen_down(self.id);
    }

    /// Advance by one step, drawing a segment. Returns whether the curve is complete.
    ///
    /// A complete curve ignores further steps. A curve that was never
    /// positioned is restarted first.
    pub fn step<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        match self.state {
            CurveState::Complete => return true,
            CurveState::Created => self.restart(surface),
            CurveState::Positioned | CurveState::Drawing => {}
        }

        self.angle_degrees += u64::from(self.step_degrees);
        surface.move_to(self.id, self.point_at(self.angle_degrees));

        if self.angle_degrees >= self.model.rotation_period_degrees() {
            self.state = CurveState::Complete;
            surface.hide(self.id);
            tracing::debug!(
                curve = self.id.0,
                angle = self.angle_degrees,
                "curve complete"
            );
        } else {
            self.state = CurveState::Drawing;
        }
        self.is_complete()
    }

    /// Draw the whole curve at once, without per-step scheduling.
    ///
    /// Visits every step multiple up to and including the rotation period, so
    /// the drawn curve is closed even when the step does not divide the period.
    pub fn render_full<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
        self.restart(surface);
        let period = self.model.rotation_period_degrees();
        while self.angle_degrees < period {
            let next = (self.angle_degrees + u64::from(self.step_degrees)).min(period);
            self.angle_degrees = next;
            surface.move_to(self.id, self.point_at(next));
        }
        self.state = CurveState::Complete;
        surface.hide(self.id);
    }

    /// Erase this curve's strokes; parameters and progress are kept.
    pub fn clear<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear_strokes_of(self.id);
    }

    /// Flip the cursor between shown and hidden.
    pub fn toggle_cursor<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        if surface.is_visible(self.id) {
            surface.hide(self.id);
        } else {
            surface.show(self.id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/drawer.rs"]
mod tests;
