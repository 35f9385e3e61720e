use crate::math::vec2::Vec2;

/// World-space axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a box, reordering the corners so `min <= max` on both axes.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        AABB {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Box of a circle: `center ± radius` on each axis.
    pub fn from_circle(center: Vec2, radius: f64) -> Self {
        let extent = Vec2::new(radius, radius);
        AABB {
            min: center - extent,
            max: center + extent,
        }
    }

    /// Tightest box around a point set, or `None` for an empty set.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest.iter().fold((*first, *first), |(min, max), p| {
            (
                Vec2::new(min.x.min(p.x), min.y.min(p.y)),
                Vec2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(AABB { min, max })
    }

    /// Open-boundary overlap test: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &AABB) -> bool {
        !(self.max.x <= other.min.x
            || other.max.x <= self.min.x
            || self.max.y <= other.min.y
            || other.max.y <= self.min.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> AABB {
        AABB::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    #[test]
    fn test_new_orders_corners() {
        let b = AABB::new(Vec2::new(2.0, -1.0), Vec2::new(-2.0, 1.0));
        assert_eq!(b.min, Vec2::new(-2.0, -1.0));
        assert_eq!(b.max, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_from_circle() {
        let b = AABB::from_circle(Vec2::new(1.0, 2.0), 0.5);
        assert_eq!(b.min, Vec2::new(0.5, 1.5));
        assert_eq!(b.max, Vec2::new(1.5, 2.5));
    }

    #[test]
    fn test_from_points() {
        assert!(AABB::from_points(&[]).is_none());
        let b = AABB::from_points(&[
            Vec2::new(1.0, 5.0),
            Vec2::new(-3.0, 2.0),
            Vec2::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(b.min, Vec2::new(-3.0, -1.0));
        assert_eq!(b.max, Vec2::new(4.0, 5.0));
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = aabb(0.0, 0.0, 2.0, 2.0);
        let b = aabb(1.0, 1.0, 3.0, 3.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = aabb(0.0, 0.0, 2.0, 2.0);
        let right = aabb(3.0, 0.0, 4.0, 2.0);
        let above = aabb(0.0, 5.0, 2.0, 6.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&above));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = aabb(0.0, 0.0, 1.0, 1.0);
        let side = aabb(1.0, 0.0, 2.0, 1.0);
        let top = aabb(0.0, 1.0, 1.0, 2.0);
        assert!(!a.overlaps(&side));
        assert!(!side.overlaps(&a));
        assert!(!a.overlaps(&top));
        assert!(!top.overlaps(&a));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let boxes = [
            aabb(0.0, 0.0, 1.0, 1.0),
            aabb(0.5, 0.5, 1.5, 1.5),
            aabb(1.0, -1.0, 2.0, 0.0),
            aabb(-5.0, -5.0, 5.0, 5.0),
            aabb(3.0, 3.0, 3.5, 3.5),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(a.overlaps(b), b.overlaps(a));
            }
        }
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = aabb(-5.0, -5.0, 5.0, 5.0);
        let inner = aabb(-1.0, -1.0, 1.0, 1.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
