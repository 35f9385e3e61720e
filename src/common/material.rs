//! Surface and bulk properties of a body.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Mass per unit area (kg/m²).
    pub density: f64,
    /// Coefficient of restitution in [0, 1].
    /// 0 = perfectly inelastic (no bounce), 1 = perfectly elastic.
    pub restitution: f64,
}

impl Material {
    /// Restitution is clamped into [0, 1]; density is taken as given.
    pub fn new(density: f64, restitution: f64) -> Self {
        Material {
            density,
            restitution: restitution.clamp(0.0, 1.0),
        }
    }

    /// Restitution used for a contact pair: the less bouncy of the two wins.
    pub fn combined_restitution(&self, other: &Material) -> f64 {
        self.restitution.min(other.restitution)
    }
}
