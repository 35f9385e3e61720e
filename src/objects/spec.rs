use crate::error::ConstructionError;
use crate::math::vec2::Vec2;
use crate::shapes::{Circle, Polygon, ShapeKind};

use super::rigid_body::MotionClass;

/// Shape request for a new body, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeSpec {
    Circle { radius: f64 },
    Box { width: f64, height: f64 },
    /// Convex hull in any winding; re-centred on its vertex mean.
    Polygon { vertices: Vec<Vec2> },
}

impl ShapeSpec {
    /// Validates the dimensions and builds the local-space shape.
    pub fn build(&self) -> Result<ShapeKind, ConstructionError> {
        match self {
            ShapeSpec::Circle { radius } => {
                positive("radius", *radius)?;
                Ok(ShapeKind::Circle(Circle::new(*radius)))
            }
            ShapeSpec::Box { width, height } => {
                positive("width", *width)?;
                positive("height", *height)?;
                Ok(ShapeKind::Polygon(Polygon::rectangle(*width, *height)))
            }
            ShapeSpec::Polygon { vertices } => {
                if let Some(bad) = vertices.iter().find(|v| !v.x.is_finite() || !v.y.is_finite()) {
                    let value = if bad.x.is_finite() { bad.y } else { bad.x };
                    return Err(ConstructionError::InvalidDimension {
                        name: "vertex",
                        value,
                    });
                }
                Ok(ShapeKind::Polygon(Polygon::new(vertices.clone())?))
            }
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConstructionError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConstructionError::InvalidDimension { name, value })
    }
}

/// Everything needed to spawn a body. Built with the chained setters below and
/// handed to [`PhysicsWorld::add_body`](crate::world::PhysicsWorld::add_body).
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub shape: ShapeSpec,
    pub position: Vec2,
    pub rotation: f64,
    pub linear_velocity: Vec2,
    pub angular_velocity: f64,
    pub density: f64,
    pub motion: MotionClass,
    /// Overrides the world's default restitution when set.
    pub restitution: Option<f64>,
    /// Opaque renderer tag (colour, sprite id, ...).
    pub tag: u32,
}

impl BodySpec {
    fn with_shape(shape: ShapeSpec) -> Self {
        Self {
            shape,
            position: Vec2::ZERO,
            rotation: 0.0,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            density: 1.0,
            motion: MotionClass::Dynamic,
            restitution: None,
            tag: 0,
        }
    }

    /// Dynamic circle at the origin with unit density.
    pub fn circle(radius: f64) -> Self {
        Self::with_shape(ShapeSpec::Circle { radius })
    }

    /// Dynamic box at the origin with unit density.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::with_shape(ShapeSpec::Box { width, height })
    }

    /// Dynamic convex polygon with unit density.
    pub fn polygon(vertices: Vec<Vec2>) -> Self {
        Self::with_shape(ShapeSpec::Polygon { vertices })
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn rotated(mut self, angle: f64) -> Self {
        self.rotation = angle;
        self
    }

    pub fn with_velocity(mut self, x: f64, y: f64) -> Self {
        self.linear_velocity = Vec2::new(x, y);
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn motion(mut self, motion: MotionClass) -> Self {
        self.motion = motion;
        self
    }

    /// Shorthand for `motion(MotionClass::Static)`.
    pub fn fixed(self) -> Self {
        self.motion(MotionClass::Static)
    }

    /// Shorthand for `motion(MotionClass::Kinematic)`.
    pub fn kinematic(self) -> Self {
        self.motion(MotionClass::Kinematic)
    }

    pub fn restitution(mut self, restitution: f64) -> Self {
        self.restitution = Some(restitution);
        self
    }

    pub fn tag(mut self, tag: u32) -> Self {
        self.tag = tag;
        self
    }
}
