pub mod rigid_body;
pub mod spec;

pub use rigid_body::{MotionClass, RigidBody};
pub use spec::{BodySpec, ShapeSpec};
