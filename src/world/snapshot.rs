use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

use super::body_set::BodyHandle;

/// World-space geometry a renderer needs to draw one body.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderShape {
    Circle { center: Vec2, radius: f64 },
    Polygon { vertices: Vec<Vec2> },
}

/// Read-only view of one body, detached from the world.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub handle: BodyHandle,
    /// Opaque tag from the body's spec.
    pub tag: u32,
    pub position: Vec2,
    pub rotation: f64,
    pub shape: RenderShape,
}

impl BodyView {
    /// Takes `&mut` so stale vertex caches are refreshed before copying.
    pub fn capture(handle: BodyHandle, body: &mut RigidBody) -> Self {
        let shape = match body.radius() {
            Some(radius) => RenderShape::Circle {
                center: body.position(),
                radius,
            },
            None => RenderShape::Polygon {
                vertices: body.world_vertices().to_vec(),
            },
        };
        Self {
            handle,
            tag: body.tag(),
            position: body.position(),
            rotation: body.rotation(),
            shape,
        }
    }
}
