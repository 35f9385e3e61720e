//! World configuration injected at construction time.
//!
//! Units are SI (metres, seconds, kilograms per square metre) with Y pointing up.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Gravitational acceleration magnitude, applied along -Y.
pub const DEFAULT_GRAVITY: f64 = 9.8;

/// Smallest accepted body area (a 1 cm square).
pub const DEFAULT_MIN_BODY_SIZE: f64 = 0.01 * 0.01;

/// Largest accepted body area.
pub const DEFAULT_MAX_BODY_SIZE: f64 = 1_000_000.0;

pub const DEFAULT_MIN_DENSITY: f64 = 0.5;

/// Roughly the density of platinum.
pub const DEFAULT_MAX_DENSITY: f64 = 21.4;

pub const DEFAULT_MIN_ITERATIONS: u32 = 1;
pub const DEFAULT_MAX_ITERATIONS: u32 = 128;

/// Restitution used when a body spec does not override it.
pub const DEFAULT_RESTITUTION: f64 = 0.4;

/// Bodies whose bounding box lies entirely below this height are culled.
pub const DEFAULT_VIEW_BOTTOM: f64 = -100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub gravity: f64,
    pub min_body_size: f64,
    pub max_body_size: f64,
    pub min_density: f64,
    pub max_density: f64,
    pub min_iterations: u32,
    pub max_iterations: u32,
    pub default_restitution: f64,
    pub view_bottom: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            min_body_size: DEFAULT_MIN_BODY_SIZE,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            min_density: DEFAULT_MIN_DENSITY,
            max_density: DEFAULT_MAX_DENSITY,
            min_iterations: DEFAULT_MIN_ITERATIONS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            default_restitution: DEFAULT_RESTITUTION,
            view_bottom: DEFAULT_VIEW_BOTTOM,
        }
    }
}

impl WorldConfig {
    /// Checks that every range is ordered and every bound is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("min_body_size", self.min_body_size),
            ("max_body_size", self.max_body_size),
            ("min_density", self.min_density),
            ("max_density", self.max_density),
            ("default_restitution", self.default_restitution),
            ("view_bottom", self.view_bottom),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        check_range("body size", self.min_body_size, self.max_body_size)?;
        check_range("density", self.min_density, self.max_density)?;
        check_range(
            "iterations",
            f64::from(self.min_iterations),
            f64::from(self.max_iterations),
        )?;

        if self.min_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }

    /// Clamps a requested substep count into `[min_iterations, max_iterations]`.
    pub fn clamp_substeps(&self, substeps: u32) -> u32 {
        substeps.max(self.min_iterations).min(self.max_iterations)
    }

    /// Clamps a restitution override into `[0, 1]`, falling back to the default.
    pub fn resolve_restitution(&self, restitution: Option<f64>) -> f64 {
        match restitution {
            Some(e) if e.is_finite() => e.clamp(0.0, 1.0),
            _ => self.default_restitution.clamp(0.0, 1.0),
        }
    }
}

fn check_range(name: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min > max {
        Err(ConfigError::InvertedRange { name, min, max })
    } else {
        Ok(())
    }
}
