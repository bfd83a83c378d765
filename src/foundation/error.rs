/// Convenience result type used across the engine.
pub type SpiroResult<T> = Result<T, SpiroError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is raised while building or configuring something. Once a
/// curve or cohort exists, stepping and ticking cannot fail.
#[derive(thiserror::Error, Debug)]
pub enum SpiroError {
    /// Non-positive radius, or an inner circle that does not fit inside the outer one.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Drawing surface too small to hold the smallest sampled curve.
    #[error("invalid surface bounds: {0}")]
    InvalidSurfaceBounds(String),

    /// Hole ratio, step size or coordinates that would make the curve meaningless.
    #[error("degenerate parameters: {0}")]
    DegenerateParameters(String),

    /// Invalid cohort or animation configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Errors while rasterizing or writing an image.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpiroError {
    /// Build a [`SpiroError::InvalidGeometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    /// Build a [`SpiroError::InvalidSurfaceBounds`] value.
    pub fn surface_bounds(msg: impl Into<String>) -> Self {
        Self::InvalidSurfaceBounds(msg.into())
    }

    /// Build a [`SpiroError::DegenerateParameters`] value.
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateParameters(msg.into())
    }

    /// Build a [`SpiroError::InvalidConfiguration`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`SpiroError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
