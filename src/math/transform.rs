use super::vec2::Vec2;

/// Rigid pose (rotation then translation) with the trig terms precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    sin: f64,
    cos: f64,
}

impl Transform {
    pub fn new(position: Vec2, rotation: f64) -> Self {
        let (sin, cos) = rotation.sin_cos();
        Self { position, sin, cos }
    }

    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }

    /// Maps a local-space point into world space.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            self.cos * point.x - self.sin * point.y + self.position.x,
            self.sin * point.x + self.cos * point.y + self.position.y,
        )
    }
}
