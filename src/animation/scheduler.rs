use std::time::Duration;

use crate::animation::cohort::{Cohort, Tick};
use crate::foundation::error::SpiroResult;
use crate::sampling::sampler::ParamSource;
use crate::surface::DrawingSurface;

/// Timer capability: arranges for the next tick.
pub trait Scheduler {
    /// Wait until the next tick is due. Returns `false` to stop the animation.
    fn after(&mut self, delay: Duration) -> bool;
}

/// Sleeps the calling thread between ticks, optionally for a bounded number of ticks.
#[derive(Clone, Debug, Default)]
pub struct RealTimeScheduler {
    remaining: Option<u64>,
}

impl RealTimeScheduler {
    /// Tick forever.
    pub fn unbounded() -> Self {
        Self { remaining: None }
    }

    /// Stop after `ticks` ticks.
    pub fn with_budget(ticks: u64) -> Self {
        Self {
            remaining: Some(ticks),
        }
    }
}

impl Scheduler for RealTimeScheduler {
    fn after(&mut self, delay: Duration) -> bool {
        if let Some(remaining) = &mut self.remaining {
            if *remaining == 0 {
                return false;
            }
            *remaining -= 1;
        }
        std::thread::sleep(delay);
        true
    }
}

/// Never sleeps; grants a fixed number of ticks and records the delays asked for.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    remaining: u64,
    requested: Vec<Duration>,
}

impl ManualScheduler {
    /// Grant exactly `ticks` ticks.
    pub fn new(ticks: u64) -> Self {
        Self {
            remaining: ticks,
            requested: Vec::new(),
        }
    }

    /// Every delay passed to [`Scheduler::after`], including the refused one.
    pub fn requested(&self) -> &[Duration] {
        &self.requested
    }
}

impl Scheduler for ManualScheduler {
    fn after(&mut self, delay: Duration) -> bool {
        self.requested.push(delay);
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Drive `cohort` until `scheduler` declines, returning the number of ticks run.
///
/// The first tick waits one interval, like every later one. The cohort is
/// re-armed only after its tick and `on_tick` have finished, so ticks never
/// overlap. An `on_tick` error stops the loop after the current tick.
pub fn run<P, S, Sch, F>(
    cohort: &mut Cohort<P>,
    surface: &mut S,
    scheduler: &mut Sch,
    mut on_tick: F,
) -> SpiroResult<u64>
where
    P: ParamSource,
    S: DrawingSurface + ?Sized,
    Sch: Scheduler + ?Sized,
    F: FnMut(&Cohort<P>, &S, &Tick) -> SpiroResult<()>,
{
    let mut ticks = 0u64;
    let mut delay = cohort.tick_interval();
    while scheduler.after(delay) {
        let tick = cohort.tick(surface);
        ticks += 1;
        on_tick(cohort, surface, &tick)?;
        delay = tick.next_in;
    }
    tracing::debug!(ticks, generation = cohort.generation(), "animation stopped");
    Ok(ticks)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
