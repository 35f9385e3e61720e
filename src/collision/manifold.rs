use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::world::BodyHandle;

use super::aabb::AABB;
use super::detection::Penetration;

/// Contact tie tolerance, relative to the size of the smaller polygon.
const CONTACT_TOLERANCE: f64 = 1e-4;

/// Stores information about a collision between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    /// Handle of the first body involved in the collision.
    pub body_a: BodyHandle,
    /// Handle of the second body involved in the collision.
    pub body_b: BodyHandle,
    /// The collision normal, pointing from body A towards body B.
    pub normal: Vec2,
    /// The amount of penetration between the shapes.
    pub depth: f64,
    /// World-space contact points; only the first `contact_count` are meaningful.
    pub contact_points: [Vec2; 2],
    /// 0, 1 or 2.
    pub contact_count: usize,
}

impl CollisionManifold {
    /// Assembles the manifold for an already detected overlap between `a` and `b`.
    pub fn new(
        handle_a: BodyHandle,
        a: &mut RigidBody,
        handle_b: BodyHandle,
        b: &mut RigidBody,
        penetration: Penetration,
    ) -> Self {
        let (contact_points, contact_count) = find_contact_points(a, b, &penetration);
        Self {
            body_a: handle_a,
            body_b: handle_b,
            normal: penetration.normal,
            depth: penetration.depth,
            contact_points,
            contact_count,
        }
    }

    /// The meaningful contact points.
    pub fn contacts(&self) -> &[Vec2] {
        &self.contact_points[..self.contact_count]
    }
}

/// Finds the closest point on segment `ab` to `p`.
/// Returns the closest point and the squared distance to it.
pub fn closest_point_on_segment(a: Vec2, b: Vec2, p: Vec2) -> (Vec2, f64) {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.magnitude_squared();

    if len_sq < 1e-12 {
        // Segment is effectively a point
        return (a, ap.magnitude_squared());
    }

    let t = (ap.dot(ab) / len_sq).clamp(0.0, 1.0);
    let closest_point = a + ab * t;
    (closest_point, p.distance_squared(closest_point))
}

/// Contact points for an overlapping pair. `penetration` must come from
/// [`collide`](super::detection::collide) on the same `(a, b)` order.
pub fn find_contact_points(
    a: &mut RigidBody,
    b: &mut RigidBody,
    penetration: &Penetration,
) -> ([Vec2; 2], usize) {
    match (a.radius(), b.radius()) {
        (Some(radius_a), Some(_)) => {
            let point = a.position() + penetration.normal * radius_a;
            ([point, Vec2::ZERO], 1)
        }
        (Some(_), None) => circle_polygon_contact(a.position(), b.world_vertices()),
        (None, Some(_)) => circle_polygon_contact(b.position(), a.world_vertices()),
        (None, None) => polygon_polygon_contacts(a.world_vertices(), b.world_vertices()),
    }
}

fn circle_polygon_contact(center: Vec2, vertices: &[Vec2]) -> ([Vec2; 2], usize) {
    let n = vertices.len();
    let mut best: Option<(Vec2, f64)> = None;
    for i in 0..n {
        let (point, dist_sq) = closest_point_on_segment(vertices[i], vertices[(i + 1) % n], center);
        if best.map_or(true, |(_, min)| dist_sq < min) {
            best = Some((point, dist_sq));
        }
    }
    match best {
        Some((point, _)) => ([point, Vec2::ZERO], 1),
        None => ([Vec2::ZERO; 2], 0),
    }
}

/// Every vertex of each polygon against every edge of the other. The nearest
/// vertex/edge pair gives the first contact; a second pair tying it within
/// tolerance at a distinct location gives the second.
///
/// Both tolerances scale with the smaller polygon, so tiny bodies do not see
/// every candidate as a tie.
fn polygon_polygon_contacts(vertices_a: &[Vec2], vertices_b: &[Vec2]) -> ([Vec2; 2], usize) {
    let scale = extent(vertices_a).min(extent(vertices_b));
    let same_point = CONTACT_TOLERANCE * scale;
    let tie = CONTACT_TOLERANCE * scale * scale;

    let mut points = [Vec2::ZERO; 2];
    let mut count = 0;
    let mut min_dist_sq = f64::INFINITY;

    for (points_from, edges_of) in [(vertices_a, vertices_b), (vertices_b, vertices_a)] {
        let n = edges_of.len();
        for &p in points_from {
            for i in 0..n {
                let (closest, dist_sq) = closest_point_on_segment(edges_of[i], edges_of[(i + 1) % n], p);

                if dist_sq < min_dist_sq - tie {
                    min_dist_sq = dist_sq;
                    points[0] = closest;
                    count = 1;
                } else if dist_sq <= min_dist_sq + tie {
                    let distinct = !closest.nearly_equal(points[0], same_point);
                    if dist_sq < min_dist_sq {
                        // keep contact 1 the closest; the old one becomes the tie
                        min_dist_sq = dist_sq;
                        if distinct {
                            points[1] = points[0];
                            count = 2;
                        }
                        points[0] = closest;
                    } else if count == 1 && distinct {
                        points[1] = closest;
                        count = 2;
                    }
                }
            }
        }
    }

    (points, count)
}

/// Diagonal of the hull's bounding box.
fn extent(vertices: &[Vec2]) -> f64 {
    AABB::from_points(vertices)
        .map(|aabb| (aabb.max - aabb.min).magnitude())
        .unwrap_or(0.0)
}
