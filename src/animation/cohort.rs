use std::time::Duration;

use crate::curve::drawer::{Curve, DEFAULT_STEP_DEGREES};
use crate::foundation::core::{CurveId, SurfaceBounds};
use crate::foundation::error::{SpiroError, SpiroResult};
use crate::sampling::sampler::{ParamSource, ParameterSampler, check_bounds};
use crate::surface::DrawingSurface;

/// Shape of a cohort: how many curves, where, and how fast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CohortSettings {
    /// Number of curves animated in lockstep.
    pub curves: usize,
    /// Surface the curves are sampled for.
    pub bounds: SurfaceBounds,
    /// Delay between ticks in milliseconds.
    pub tick_interval_ms: u64,
    /// Degrees each curve advances per tick.
    pub step_degrees: u32,
}

impl Default for CohortSettings {
    fn default() -> Self {
        Self {
            curves: 4,
            bounds: SurfaceBounds {
                width: 800,
                height: 800,
            },
            tick_interval_ms: 10,
            step_degrees: DEFAULT_STEP_DEGREES,
        }
    }
}

/// Result of one [`Cohort::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Curves complete after this tick; zero when `restarted`, since every
    /// curve is back at angle 0.
    pub completed: usize,
    /// Whether this tick restarted the whole cohort.
    pub restarted: bool,
    /// Delay after which the cohort wants to be ticked again.
    pub next_in: Duration,
}

/// Fixed-size group of curves animated and restarted in lockstep.
///
/// The cohort never schedules itself: its owner calls [`tick`](Self::tick)
/// and waits [`Tick::next_in`] before calling again. Stopping the animation
/// is simply not calling `tick` anymore.
#[derive(Debug)]
pub struct Cohort<P = ParameterSampler> {
    curves: Vec<Curve>,
    source: P,
    bounds: SurfaceBounds,
    tick_interval: Duration,
    generation: u64,
    ticks: u64,
}

impl<P: ParamSource> Cohort<P> {
    /// Sample and position `settings.curves` curves.
    ///
    /// Everything is validated and sampled before the surface is touched.
    #[tracing::instrument(skip(source, surface))]
    pub fn new<S: DrawingSurface + ?Sized>(
        settings: CohortSettings,
        mut source: P,
        surface: &mut S,
    ) -> SpiroResult<Self> {
        if settings.curves == 0 {
            return Err(SpiroError::config("a cohort needs at least one curve"));
        }
        if settings.tick_interval_ms == 0 {
            return Err(SpiroError::config("tick interval must be at least 1 ms"));
        }
        check_bounds(settings.bounds)?;

        let mut curves = Vec::with_capacity(settings.curves);
        for idx in 0..settings.curves {
            let id = u32::try_from(idx)
                .map_err(|_| SpiroError::config("too many curves in one cohort"))?;
            let params = source.sample(settings.bounds)?;
            curves.push(Curve::new(CurveId(id), &params, settings.step_degrees)?);
        }
        for curve in &mut curves {
            curve.restart(surface);
        }
        tracing::info!(curves = curves.len(), "cohort ready");

        Ok(Self {
            curves,
            source,
            bounds: settings.bounds,
            tick_interval: Duration::from_millis(settings.tick_interval_ms),
            generation: 0,
            ticks: 0,
        })
    }

    /// Curves in creation order.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Number of curves.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Surface bounds used for resampling.
    pub fn bounds(&self) -> SurfaceBounds {
        self.bounds
    }

    /// Delay between ticks.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Completed restart cycles.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ticks processed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether every curve finished its current pass.
    pub fn all_complete(&self) -> bool {
        self.curves.iter().all(Curve::is_complete)
    }

    /// Advance the animation by one tick.
    ///
    /// Steps every curve once. A tick that starts with every curve already
    /// complete restarts the whole cohort instead.
    ///
    /// A finished cohort stays visible for exactly one tick interval before restarting.
    pub fn tick<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> Tick {
        self.ticks += 1;

        if self.all_complete() {
            self.restart_all(surface);
            return Tick {
                completed: 0,
                restarted: true,
                next_in: self.tick_interval,
            };
        }

        let completed = self
            .curves
            .iter_mut()
            .map(|c| c.step(surface))
            .filter(|&done| done)
            .count();

        Tick {
            completed,
            restarted: false,
            next_in: self.tick_interval,
        }
    }

    /// Clear, resample and restart every curve.
    ///
    /// A curve whose new parameters cannot be sampled keeps its previous ones,
    /// so restarting never fails.
    pub fn restart_all<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
        for curve in &mut self.curves {
            curve.clear(surface);
            let resampled = self
                .source
                .sample(self.bounds)
                .and_then(|params| curve.set_parameters(&params));
            if let Err(err) = resampled {
                tracing::warn!(curve = curve.id().0, %err, "keeping previous parameters");
            }
            curve.restart(surface);
        }
        self.generation += 1;
        tracing::info!(generation = self.generation, "cohort restarted");
    }

    /// Show hidden cursors and hide shown ones; drawing state is unaffected.
    pub fn toggle_visibility<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for curve in &self.curves {
            curve.toggle_cursor(surface);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/cohort.rs"]
mod tests;
