//! Narrow-phase tests (Separating Axis Theorem family).
//!
//! Every test returns `None` when the shapes are apart (touching counts as
//! apart) or a [`Penetration`] whose normal is unit length and points from the
//! first shape toward the second.

use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Minimum separation axis and overlap along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit normal pointing from body A toward body B.
    pub normal: Vec2,
    /// Overlap along `normal`; never negative.
    pub depth: f64,
}

impl Penetration {
    /// Same contact seen from the other body.
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            depth: self.depth,
        }
    }
}

/// Running minimum-overlap search over candidate axes.
struct AxisSearch {
    normal: Vec2,
    depth: f64,
}

impl AxisSearch {
    fn new() -> Self {
        Self {
            normal: Vec2::ZERO,
            depth: f64::INFINITY,
        }
    }

    /// Records the overlap on `axis`. Returns `false` if the axis separates the intervals.
    fn test(&mut self, axis: Vec2, (min_a, max_a): (f64, f64), (min_b, max_b): (f64, f64)) -> bool {
        if max_a <= min_b || max_b <= min_a {
            return false;
        }
        let overlap = (max_b - min_a).min(max_a - min_b);
        if overlap < self.depth {
            self.depth = overlap;
            self.normal = axis;
        }
        true
    }

    /// Orients the winning axis along `to - from`.
    fn finish(self, from: Vec2, to: Vec2) -> Option<Penetration> {
        if !self.depth.is_finite() {
            // every candidate axis was degenerate
            return None;
        }
        let normal = if (to - from).dot(self.normal) < 0.0 {
            -self.normal
        } else {
            self.normal
        };
        Some(Penetration {
            normal,
            depth: self.depth.max(0.0),
        })
    }
}

/// Outward-or-inward edge normals of a hull, skipping zero-length edges.
fn edge_axes(vertices: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    let n = vertices.len();
    (0..n).filter_map(move |i| {
        let edge = vertices[(i + 1) % n] - vertices[i];
        if edge.magnitude_squared() < 1e-24 {
            None
        } else {
            Some(edge.perpendicular().normalize())
        }
    })
}

fn project_vertices(vertices: &[Vec2], axis: Vec2) -> (f64, f64) {
    vertices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            let p = v.dot(axis);
            (min.min(p), max.max(p))
        })
}

/// `axis` must be unit length.
fn project_circle(center: Vec2, radius: f64, axis: Vec2) -> (f64, f64) {
    let c = center.dot(axis);
    (c - radius, c + radius)
}

fn closest_vertex(point: Vec2, vertices: &[Vec2]) -> Option<Vec2> {
    vertices.iter().copied().min_by(|a, b| {
        a.distance_squared(point)
            .total_cmp(&b.distance_squared(point))
    })
}

/// Closed-form circle test.
pub fn intersect_circles(
    center_a: Vec2,
    radius_a: f64,
    center_b: Vec2,
    radius_b: f64,
) -> Option<Penetration> {
    let delta = center_b - center_a;
    let distance = delta.magnitude();
    let radii = radius_a + radius_b;
    if distance >= radii {
        return None;
    }

    let normal = if distance > 1e-10 {
        delta * (1.0 / distance)
    } else {
        // concentric: any unit vector will do
        Vec2::UP
    };
    Some(Penetration {
        normal,
        depth: radii - distance,
    })
}

/// Circle (A) against convex polygon (B, world-space vertices).
///
/// Tests every polygon edge normal plus the axis toward the polygon vertex
/// nearest the circle centre, which edge normals alone miss near corners.
pub fn intersect_circle_polygon(
    circle_center: Vec2,
    radius: f64,
    vertices: &[Vec2],
) -> Option<Penetration> {
    let mut search = AxisSearch::new();

    for axis in edge_axes(vertices) {
        let polygon = project_vertices(vertices, axis);
        let circle = project_circle(circle_center, radius, axis);
        if !search.test(axis, circle, polygon) {
            return None;
        }
    }

    let nearest = closest_vertex(circle_center, vertices)?;
    let axis = (nearest - circle_center).normalize();
    if axis != Vec2::ZERO {
        let polygon = project_vertices(vertices, axis);
        let circle = project_circle(circle_center, radius, axis);
        if !search.test(axis, circle, polygon) {
            return None;
        }
    }

    search.finish(circle_center, Vec2::mean(vertices))
}

/// Convex polygon (A) against convex polygon (B), both in world space.
pub fn intersect_polygons(vertices_a: &[Vec2], vertices_b: &[Vec2]) -> Option<Penetration> {
    let mut search = AxisSearch::new();

    for axis in edge_axes(vertices_a).chain(edge_axes(vertices_b)) {
        let a = project_vertices(vertices_a, axis);
        let b = project_vertices(vertices_b, axis);
        if !search.test(axis, a, b) {
            return None;
        }
    }

    search.finish(Vec2::mean(vertices_a), Vec2::mean(vertices_b))
}

/// Dispatches on the shape pair. The normal always points from `body_a` to
/// `body_b`, whichever order the specialised test ran in.
pub fn collide(body_a: &mut RigidBody, body_b: &mut RigidBody) -> Option<Penetration> {
    // circles report a radius; polygons report world vertices
    match (body_a.radius(), body_b.radius()) {
        (Some(radius_a), Some(radius_b)) => {
            intersect_circles(body_a.position(), radius_a, body_b.position(), radius_b)
        }
        (Some(radius_a), None) => {
            intersect_circle_polygon(body_a.position(), radius_a, body_b.world_vertices())
        }
        (None, Some(radius_b)) => {
            intersect_circle_polygon(body_b.position(), radius_b, body_a.world_vertices())
                .map(Penetration::flipped)
        }
        (None, None) => intersect_polygons(body_a.world_vertices(), body_b.world_vertices()),
    }
}
