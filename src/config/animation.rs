use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::animation::cohort::CohortSettings;
use crate::curve::drawer::DEFAULT_STEP_DEGREES;
use crate::foundation::core::SurfaceBounds;
use crate::foundation::error::{SpiroError, SpiroResult};
use crate::sampling::sampler::{ParameterSampler, check_bounds};

/// User-facing animation configuration, loadable from JSON.
///
/// Missing fields take their defaults, unknown fields are rejected:
///
/// ```json
/// { "curves": 6, "width": 1024, "height": 768, "seed": 7 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Number of curves in the cohort.
    pub curves: usize,
    /// Surface width.
    pub width: u32,
    /// Surface height.
    pub height: u32,
    /// Delay between ticks in milliseconds.
    pub tick_interval_ms: u64,
    /// Degrees each curve advances per tick.
    pub step_degrees: u32,
    /// RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            curves: 4,
            width: 800,
            height: 800,
            tick_interval_ms: 10,
            step_degrees: DEFAULT_STEP_DEGREES,
            seed: None,
        }
    }
}

impl AnimationConfig {
    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> SpiroResult<Self> {
        serde_json::from_str(s).map_err(|e| SpiroError::config(format!("parse config JSON: {e}")))
    }

    /// Read and parse a JSON file.
    pub fn load(path: &Path) -> SpiroResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            SpiroError::config(format!("parse config '{}': {e}", path.display()))
        })
    }

    /// Surface bounds described by `width` and `height`.
    pub fn bounds(&self) -> SpiroResult<SurfaceBounds> {
        SurfaceBounds::new(self.width, self.height)
    }

    /// Check every field without building anything.
    pub fn validate(&self) -> SpiroResult<()> {
        if self.curves == 0 {
            return Err(SpiroError::config("curves must be at least 1"));
        }
        if self.tick_interval_ms == 0 {
            return Err(SpiroError::config("tick_interval_ms must be at least 1"));
        }
        if self.step_degrees == 0 {
            return Err(SpiroError::degenerate("step_degrees must be at least 1"));
        }
        check_bounds(self.bounds()?)
    }

    /// Validated cohort settings.
    pub fn settings(&self) -> SpiroResult<CohortSettings> {
        self.validate()?;
        Ok(CohortSettings {
            curves: self.curves,
            bounds: self.bounds()?,
            tick_interval_ms: self.tick_interval_ms,
            step_degrees: self.step_degrees,
        })
    }

    /// Sampler honoring `seed`.
    pub fn sampler(&self) -> ParameterSampler {
        match self.seed {
            Some(seed) => ParameterSampler::seeded(seed),
            None => ParameterSampler::from_entropy(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/animation.rs"]
mod tests;
