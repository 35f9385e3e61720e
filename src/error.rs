//! Error types returned by body construction and world configuration.

/// Why a body could not be built from its [`BodySpec`](crate::objects::BodySpec).
///
/// The simulation is unaffected by a rejected construction; the caller simply
/// never receives a body.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstructionError {
    #[error("{name} must be finite and positive, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("polygon vertices do not form a convex hull")]
    NotConvex,

    #[error("area {area} is below the minimum body size {min}")]
    AreaTooSmall { area: f64, min: f64 },

    #[error("area {area} is above the maximum body size {max}")]
    AreaTooLarge { area: f64, max: f64 },

    #[error("density {density} is below the minimum density {min}")]
    DensityTooSmall { density: f64, min: f64 },

    #[error("density {density} is above the maximum density {max}")]
    DensityTooLarge { density: f64, max: f64 },
}

/// Rejected [`WorldConfig`](crate::config::WorldConfig).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("min_iterations must be at least 1")]
    ZeroIterations,
}
