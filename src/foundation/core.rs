use crate::foundation::error::{SpiroError, SpiroResult};

pub use kurbo::Point;

/// Identifies one curve's pen, cursor and strokes on a drawing surface.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CurveId(pub u32);

/// Straight RGB color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
}

impl Rgb {
    /// Opaque black, used for explicitly parameterized one-shot drawings.
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Build a color, rejecting components outside `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64) -> SpiroResult<Self> {
        for (name, c) in [("r", r), ("g", g), ("b", b)] {
            if !c.is_finite() || !(0.0..=1.0).contains(&c) {
                return Err(SpiroError::degenerate(format!(
                    "color component {name}={c} must be within [0, 1]"
                )));
            }
        }
        Ok(Self { r, g, b })
    }

    /// Quantize to opaque RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn q(c: f64) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b), 255]
    }
}

/// Size of the drawing surface in surface units (pixels for raster export).
///
/// The surface origin is its center, so valid coordinates span
/// `[-width/2, width/2] x [-height/2, height/2]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceBounds {
    /// Surface width.
    pub width: u32,
    /// Surface height.
    pub height: u32,
}

impl SurfaceBounds {
    /// Build bounds, rejecting empty surfaces.
    pub fn new(width: u32, height: u32) -> SpiroResult<Self> {
        if width == 0 || height == 0 {
            return Err(SpiroError::surface_bounds(format!(
                "surface must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Length of the shorter side.
    pub fn min_dimension(self) -> u32 {
        self.width.min(self.height)
    }

    /// Half extents `(width / 2, height / 2)` using integer division.
    pub fn half_extents(self) -> (i64, i64) {
        (i64::from(self.width / 2), i64::from(self.height / 2))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
