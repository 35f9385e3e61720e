use serde::{Deserialize, Serialize};

use crate::collision::AABB;
use crate::common::Material;
use crate::config::WorldConfig;
use crate::error::ConstructionError;
use crate::math::{Transform, Vec2};
use crate::shapes::ShapeKind;

use super::spec::BodySpec;

/// How a body takes part in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MotionClass {
    /// Never moves; infinite mass.
    Static,
    /// Gravity, forces, impulses and positional correction all apply.
    #[default]
    Dynamic,
    /// Moves only by its own velocity and is never pushed by contacts.
    Kinematic,
}

/// A simulated body: shape, pose, velocity and mass properties, plus the
/// world-space geometry derived from the pose.
///
/// The transformed vertices and the bounding box are cached and tagged with
/// dirty flags. Every pose mutation sets both flags; the next query recomputes.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    shape: ShapeKind,
    material: Material,
    motion: MotionClass,
    tag: u32,

    position: Vec2,
    rotation: f64,
    linear_velocity: Vec2,
    angular_velocity: f64,

    // Accumulated until the next integration substep
    force: Vec2,

    area: f64,
    mass: f64,
    inv_mass: f64,

    transformed_vertices: Vec<Vec2>,
    aabb: AABB,
    transform_dirty: bool,
    aabb_dirty: bool,
}

impl RigidBody {
    /// Validated factory. Rejects bad dimensions, areas outside
    /// `[min_body_size, max_body_size]` and densities outside
    /// `[min_density, max_density]`.
    pub fn from_spec(spec: &BodySpec, config: &WorldConfig) -> Result<Self, ConstructionError> {
        let shape = spec.shape.build()?;
        let area = shape.area();

        if area < config.min_body_size {
            return Err(ConstructionError::AreaTooSmall {
                area,
                min: config.min_body_size,
            });
        }
        if area > config.max_body_size {
            return Err(ConstructionError::AreaTooLarge {
                area,
                max: config.max_body_size,
            });
        }
        if !spec.density.is_finite() {
            return Err(ConstructionError::InvalidDimension {
                name: "density",
                value: spec.density,
            });
        }
        if spec.density < config.min_density {
            return Err(ConstructionError::DensityTooSmall {
                density: spec.density,
                min: config.min_density,
            });
        }
        if spec.density > config.max_density {
            return Err(ConstructionError::DensityTooLarge {
                density: spec.density,
                max: config.max_density,
            });
        }

        let mass = area * spec.density;
        let inv_mass = match spec.motion {
            MotionClass::Static => 0.0,
            MotionClass::Dynamic | MotionClass::Kinematic => 1.0 / mass,
        };
        let (linear_velocity, angular_velocity) = match spec.motion {
            MotionClass::Static => (Vec2::ZERO, 0.0),
            _ => (spec.linear_velocity, spec.angular_velocity),
        };
        let vertex_count = match &shape {
            ShapeKind::Polygon(polygon) => polygon.len(),
            ShapeKind::Circle(_) => 0,
        };

        Ok(Self {
            shape,
            material: Material::new(spec.density, config.resolve_restitution(spec.restitution)),
            motion: spec.motion,
            tag: spec.tag,
            position: spec.position,
            rotation: spec.rotation,
            linear_velocity,
            angular_velocity,
            force: Vec2::ZERO,
            area,
            mass,
            inv_mass,
            transformed_vertices: Vec::with_capacity(vertex_count),
            aabb: AABB::new(spec.position, spec.position),
            transform_dirty: true,
            aabb_dirty: true,
        })
    }

    pub fn shape(&self) -> &ShapeKind {
        &self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn motion(&self) -> MotionClass {
        self.motion
    }

    pub fn tag(&self) -> u32 {
        self.tag
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn linear_velocity(&self) -> Vec2 {
        self.linear_velocity
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// `1 / mass`, or exactly 0 for static bodies.
    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    pub fn restitution(&self) -> f64 {
        self.material.restitution
    }

    pub fn is_static(&self) -> bool {
        self.motion == MotionClass::Static
    }

    pub fn is_dynamic(&self) -> bool {
        self.motion == MotionClass::Dynamic
    }

    /// Inverse mass seen by contact resolution. Only dynamic bodies yield to contacts.
    pub fn response_inv_mass(&self) -> f64 {
        match self.motion {
            MotionClass::Dynamic => self.inv_mass,
            MotionClass::Static | MotionClass::Kinematic => 0.0,
        }
    }

    /// Radius when the body is a circle.
    pub fn radius(&self) -> Option<f64> {
        match &self.shape {
            ShapeKind::Circle(circle) => Some(circle.radius),
            ShapeKind::Polygon(_) => None,
        }
    }

    pub fn set_linear_velocity(&mut self, velocity: Vec2) {
        self.linear_velocity = velocity;
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: f64) {
        self.angular_velocity = angular_velocity;
    }

    /// Accumulates a force at the centre of mass; consumed by the next integration substep.
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    pub(crate) fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        self.mark_dirty();
    }

    pub fn translate_to(&mut self, position: Vec2) {
        self.position = position;
        self.mark_dirty();
    }

    pub fn rotate(&mut self, angle: f64) {
        self.rotation += angle;
        self.mark_dirty();
    }

    pub fn set_pose(&mut self, position: Vec2, rotation: f64) {
        self.position = position;
        self.rotation = rotation;
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.transform_dirty = true;
        self.aabb_dirty = true;
    }

    pub fn is_transform_dirty(&self) -> bool {
        self.transform_dirty
    }

    pub fn is_aabb_dirty(&self) -> bool {
        self.aabb_dirty
    }

    /// World-space polygon vertices (empty for circles), recomputed if the pose changed.
    pub fn world_vertices(&mut self) -> &[Vec2] {
        if self.transform_dirty {
            self.transformed_vertices.clear();
            if let ShapeKind::Polygon(polygon) = &self.shape {
                let transform = Transform::new(self.position, self.rotation);
                self.transformed_vertices
                    .extend(polygon.vertices().iter().map(|&v| transform.apply(v)));
            }
            self.transform_dirty = false;
        }
        &self.transformed_vertices
    }

    /// World-space bounding box, recomputed if the pose changed.
    pub fn aabb(&mut self) -> AABB {
        if self.aabb_dirty {
            let position = self.position;
            self.aabb = match self.radius() {
                Some(radius) => AABB::from_circle(position, radius),
                None => AABB::from_points(self.world_vertices())
                    .unwrap_or_else(|| AABB::new(position, position)),
            };
            self.aabb_dirty = false;
        }
        self.aabb
    }
}
