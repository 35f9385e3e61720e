use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_circle_area() {
        let c = Circle::new(2.0);
        assert_eq!(c.radius, 2.0);
        assert!((c.area() - 4.0 * PI).abs() < EPSILON);
    }
}
