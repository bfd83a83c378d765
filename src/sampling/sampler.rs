use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::curve::model::CurveParams;
use crate::foundation::core::{Point, Rgb, SurfaceBounds};
use crate::foundation::error::{SpiroError, SpiroResult};

/// Smallest sampled outer radius.
pub const MIN_OUTER_RADIUS: u32 = 50;
/// Smallest sampled inner radius.
pub const MIN_INNER_RADIUS: u32 = 10;
/// Smallest surface side that can hold a [`MIN_OUTER_RADIUS`] curve.
pub const MIN_SURFACE_SIDE: u32 = 2 * MIN_OUTER_RADIUS;
/// Inclusive range of sampled hole ratios.
pub const HOLE_RATIO_RANGE: std::ops::RangeInclusive<f64> = 0.1..=0.9;

/// Anything that can hand out parameters for the next drawing pass.
pub trait ParamSource {
    /// Produce a parameter set that fits inside `bounds`.
    fn sample(&mut self, bounds: SurfaceBounds) -> SpiroResult<CurveParams>;
}

/// Reject surfaces too small for the minimum outer radius.
pub fn check_bounds(bounds: SurfaceBounds) -> SpiroResult<()> {
    if bounds.min_dimension() < MIN_SURFACE_SIDE {
        return Err(SpiroError::surface_bounds(format!(
            "surface {}x{} is too small: both sides must be at least {MIN_SURFACE_SIDE}",
            bounds.width, bounds.height
        )));
    }
    Ok(())
}

/// Random, always-valid curve parameters drawn from an injected RNG.
///
/// - `R` in `[50, min(w, h) / 2]`
/// - `r` in `[10, 9 * R / 10]`, so `r < R`
/// - `l` in `[0.1, 0.9]`
/// - center anywhere on the surface, color uniform per channel
#[derive(Clone, Debug)]
pub struct ParameterSampler<R = StdRng> {
    rng: R,
}

impl ParameterSampler<StdRng> {
    /// Deterministic sampler for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Sampler seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ParameterSampler<R> {
    /// Wrap an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ParamSource for ParameterSampler<R> {
    fn sample(&mut self, bounds: SurfaceBounds) -> SpiroResult<CurveParams> {
        check_bounds(bounds)?;

        let rng = &mut self.rng;
        let outer_radius = rng.gen_range(MIN_OUTER_RADIUS..=bounds.min_dimension() / 2);
        let inner_max = (u64::from(outer_radius) * 9 / 10) as u32;
        let inner_radius = rng.gen_range(MIN_INNER_RADIUS..=inner_max);
        let hole_ratio = rng.gen_range(HOLE_RATIO_RANGE);

        let (hw, hh) = bounds.half_extents();
        let center = Point::new(
            rng.gen_range(-hw..=hw) as f64,
            rng.gen_range(-hh..=hh) as f64,
        );
        let color = Rgb {
            r: rng.gen_range(0.0..1.0),
            g: rng.gen_range(0.0..1.0),
            b: rng.gen_range(0.0..1.0),
        };

        Ok(CurveParams {
            center,
            color,
            outer_radius,
            inner_radius,
            hole_ratio,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/sampler.rs"]
mod tests;
