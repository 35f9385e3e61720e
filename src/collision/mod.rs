pub mod aabb;
pub mod broad_phase;
pub mod detection;
pub mod manifold;

// Re-export key types
pub use aabb::AABB;
pub use broad_phase::{candidate_pairs, BroadPhaseProxy};
pub use detection::{collide, Penetration};
pub use manifold::CollisionManifold;
