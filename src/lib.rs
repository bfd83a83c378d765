//! Spirograph is an animation engine for hypotrochoid curves.
//!
//! A [`Cohort`] owns a fixed number of [`Curve`]s. Every [`Cohort::tick`]
//! advances each curve by one step on a [`DrawingSurface`]; once every curve
//! has closed, the next tick clears them and restarts the cohort with fresh
//! parameters from a [`ParamSource`] (normally a seeded [`ParameterSampler`]).
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `SurfaceBounds -> CurveParams` (random but always valid geometry)
//! 2. **Model**: `CurveParams -> CurveModel` (point on the curve, rotation period)
//! 3. **Draw**: `Curve` moves a pen on a borrowed [`DrawingSurface`], step by step
//!    or all at once with [`Curve::render_full`]
//! 4. **Drive**: an external loop (or [`run`] with a [`Scheduler`]) calls
//!    [`Cohort::tick`] and waits [`Tick::next_in`] between calls
//! 5. **Export** (optional): [`rasterize`] a [`RecordingSurface`] into a PNG
//!
//! The design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No globals**: surfaces, schedulers and RNGs are always passed in.
//! - **Fail early**: all validation happens at construction; stepping and
//!   ticking cannot fail.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod curve;
mod foundation;
mod sampling;
mod surface;

pub use animation::cohort::{Cohort, CohortSettings, Tick};
pub use animation::scheduler::{ManualScheduler, RealTimeScheduler, Scheduler, run};
pub use config::animation::AnimationConfig;
pub use curve::drawer::{Curve, CurveState, DEFAULT_STEP_DEGREES};
pub use curve::model::{CurveModel, CurveParams};
pub use foundation::core::{CurveId, Point, Rgb, SurfaceBounds};
pub use foundation::error::{SpiroError, SpiroResult};
pub use sampling::sampler::{
    HOLE_RATIO_RANGE, MIN_INNER_RADIUS, MIN_OUTER_RADIUS, MIN_SURFACE_SIDE, ParamSource,
    ParameterSampler, check_bounds,
};
pub use surface::DrawingSurface;
pub use surface::raster::{FrameRGBA, RasterStyle, ensure_parent_dir, rasterize};
pub use surface::recording::{PenState, RecordingSurface, Stroke};
