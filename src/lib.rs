pub mod collision;
pub mod common;
pub mod config;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{CollisionManifold, Penetration, AABB};
pub use common::Material;
pub use config::WorldConfig;
pub use error::{ConfigError, ConstructionError};
pub use math::vec2::Vec2;
pub use objects::{BodySpec, MotionClass, RigidBody, ShapeSpec};
pub use shapes::{Circle, Polygon, ShapeKind};
pub use world::{BodyHandle, BodyView, PhysicsWorld, RenderShape};
