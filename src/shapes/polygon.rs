use std::f64::consts::TAU;

use crate::error::ConstructionError;
use crate::math::vec2::Vec2;

/// Convex polygon with its vertices in local space, centred on the body origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Builds a polygon from a convex hull, shifting it so the vertex mean sits at the origin.
    ///
    /// Either winding is accepted. Concave and self-intersecting outlines are rejected.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, ConstructionError> {
        if vertices.len() < 3 {
            return Err(ConstructionError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if !is_convex(&vertices) {
            return Err(ConstructionError::NotConvex);
        }
        let center = Vec2::mean(&vertices);
        let vertices = vertices.into_iter().map(|v| v - center).collect();
        Ok(Self { vertices })
    }

    /// Axis-aligned rectangle: top-left, top-right, bottom-right, bottom-left.
    pub fn rectangle(width: f64, height: f64) -> Self {
        let left = -width / 2.0;
        let right = left + width;
        let bottom = -height / 2.0;
        let top = bottom + height;
        Self {
            vertices: vec![
                Vec2::new(left, top),
                Vec2::new(right, top),
                Vec2::new(right, bottom),
                Vec2::new(left, bottom),
            ],
        }
    }

    /// Regular polygon inscribed in a circle of `radius`, counter-clockwise.
    /// Fewer than 3 sides are raised to 3.
    pub fn regular(sides: usize, radius: f64) -> Result<Self, ConstructionError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConstructionError::InvalidDimension {
                name: "radius",
                value: radius,
            });
        }
        let sides = sides.max(3);
        let step = TAU / sides as f64;
        let vertices = (0..sides)
            .map(|i| {
                let angle = step * i as f64;
                Vec2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Shoelace area; independent of winding.
    pub fn calculate_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut area = 0.0;
        for i in 0..n {
            area += self.vertices[i].cross(self.vertices[(i + 1) % n]);
        }
        (area / 2.0).abs()
    }
}

/// Every turn bends the same way and the outline winds around exactly once.
/// Zero-length edges are skipped.
fn is_convex(vertices: &[Vec2]) -> bool {
    let n = vertices.len();
    let edges: Vec<Vec2> = (0..n)
        .map(|i| vertices[(i + 1) % n] - vertices[i])
        .filter(|edge| edge.magnitude_squared() > 1e-24)
        .collect();
    if edges.len() < 3 {
        return false;
    }

    let mut sign = 0.0;
    let mut winding = 0.0;
    for (i, &edge) in edges.iter().enumerate() {
        let next = edges[(i + 1) % edges.len()];
        let cross = edge.cross(next);
        let dot = edge.dot(next);
        let tolerance = 1e-12 * edge.magnitude() * next.magnitude();

        if cross.abs() <= tolerance {
            // straight on is fine, doubling back is not
            if dot < 0.0 {
                return false;
            }
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
        winding += cross.atan2(dot);
    }

    // a star polygon turns the same way throughout but winds twice
    (winding.abs() - TAU).abs() < 1e-6
}
