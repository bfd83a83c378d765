use crate::foundation::core::{Point, Rgb};
use crate::foundation::error::{SpiroError, SpiroResult};
use crate::foundation::math::gcd;

/// Full parameter set for one spirograph drawing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveParams {
    /// Curve center in surface coordinates.
    pub center: Point,
    /// Pen color.
    pub color: Rgb,
    /// Radius of the fixed outer circle (`R`).
    pub outer_radius: u32,
    /// Radius of the rolling inner circle (`r`).
    pub inner_radius: u32,
    /// Distance of the pen from the inner circle's center, as a fraction of `r` (`l`).
    pub hole_ratio: f64,
}

impl CurveParams {
    /// Validate the geometry and build the matching [`CurveModel`].
    pub fn model(&self) -> SpiroResult<CurveModel> {
        Rgb::new(self.color.r, self.color.g, self.color.b)?;
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(SpiroError::degenerate(format!(
                "center must be finite, got ({}, {})",
                self.center.x, self.center.y
            )));
        }
        CurveModel::new(self.outer_radius, self.inner_radius, self.hole_ratio)
    }
}

/// Hypotrochoid geometry for one `(R, r, l)` triple.
///
/// Points are relative to the curve center. The curve closes after
/// [`rotation_period_degrees`](Self::rotation_period_degrees) of rotation,
/// which is `360 * r / gcd(r, R)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveModel {
    outer_radius: u32,
    inner_radius: u32,
    hole_ratio: f64,
    ratio: f64,
    period_degrees: u64,
}

impl CurveModel {
    /// Build a model, rejecting radii that cannot form a hypotrochoid.
    pub fn new(outer_radius: u32, inner_radius: u32, hole_ratio: f64) -> SpiroResult<Self> {
        if outer_radius == 0 || inner_radius == 0 {
            return Err(SpiroError::geometry(format!(
                "radii must be positive, got R={outer_radius} r={inner_radius}"
            )));
        }
        if inner_radius >= outer_radius {
            return Err(SpiroError::geometry(format!(
                "inner radius must be smaller than outer radius, got R={outer_radius} r={inner_radius}"
            )));
        }
        if !hole_ratio.is_finite() || hole_ratio <= 0.0 || hole_ratio > 1.0 {
            return Err(SpiroError::degenerate(format!(
                "hole ratio must be within (0, 1], got {hole_ratio}"
            )));
        }

        let turns = u64::from(inner_radius / gcd(inner_radius, outer_radius));
        Ok(Self {
            outer_radius,
            inner_radius,
            hole_ratio,
            ratio: f64::from(inner_radius) / f64::from(outer_radius),
            period_degrees: 360 * turns,
        })
    }

    /// Outer circle radius.
    pub fn outer_radius(&self) -> u32 {
        self.outer_radius
    }

    /// Inner circle radius.
    pub fn inner_radius(&self) -> u32 {
        self.inner_radius
    }

    /// Pen offset as a fraction of the inner radius.
    pub fn hole_ratio(&self) -> f64 {
        self.hole_ratio
    }

    /// `r / R`.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Degrees of rotation after which the curve closes on itself.
    pub fn rotation_period_degrees(&self) -> u64 {
        self.period_degrees
    }

    /// Point on the curve at `angle_degrees`, relative to the curve center.
    pub fn point_at(&self, angle_degrees: f64) -> Point {
        let a = angle_degrees.to_radians();
        let k = self.ratio;
        let l = self.hole_ratio;
        let big_r = f64::from(self.outer_radius);
        let inner_a = ((1.0 - k) / k) * a;

        Point::new(
            big_r * ((1.0 - k) * a.cos() + l * k * inner_a.cos()),
            big_r * ((1.0 - k) * a.sin() - l * k * inner_a.sin()),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/model.rs"]
mod tests;
