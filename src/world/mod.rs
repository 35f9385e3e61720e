pub mod body_set;
pub mod physics_world;
pub mod resolver;
pub mod snapshot;

pub use body_set::{BodyHandle, BodySet};
pub use physics_world::PhysicsWorld;
pub use snapshot::{BodyView, RenderShape};
