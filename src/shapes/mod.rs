pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

/// Closed set of collision shapes a body can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Circle(Circle),
    Polygon(Polygon),
}

impl ShapeKind {
    pub fn area(&self) -> f64 {
        match self {
            ShapeKind::Circle(circle) => circle.area(),
            ShapeKind::Polygon(polygon) => polygon.calculate_area(),
        }
    }
}
