use crate::math::vec2::Vec2;
use crate::objects::rigid_body::{MotionClass, RigidBody};

/// Advances one body by `dt` using Semi-Implicit Euler.
///
/// Dynamic bodies take `gravity` plus their accumulated force; kinematic bodies
/// coast on their own velocity; static bodies never move. The force
/// accumulator is cleared in every case.
pub fn integrate(body: &mut RigidBody, gravity: Vec2, dt: f64) {
    match body.motion() {
        MotionClass::Static => {
            body.clear_force();
            return;
        }
        MotionClass::Kinematic => {}
        MotionClass::Dynamic => {
            // a = F/m + g
            let acceleration = body.force() * body.inv_mass() + gravity;
            body.set_linear_velocity(body.linear_velocity() + acceleration * dt);
        }
    }

    // Velocity is already updated, so position uses the new value
    let position = body.position() + body.linear_velocity() * dt;
    let rotation = wrap_angle(body.rotation() + body.angular_velocity() * dt);
    body.set_pose(position, rotation);

    body.clear_force();
}

/// Wraps an angle in radians to the range [-PI, PI].
pub fn wrap_angle(angle: f64) -> f64 {
    angle.sin().atan2(angle.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::objects::BodySpec;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-9;

    const NO_GRAVITY: Vec2 = Vec2::ZERO;
    const GRAVITY: Vec2 = Vec2::new(0.0, -10.0);

    fn body(spec: BodySpec) -> RigidBody {
        RigidBody::from_spec(&spec, &WorldConfig::default()).unwrap()
    }

    #[test]
    fn test_integrate_linear_motion_no_force() {
        let mut rb = body(BodySpec::circle(1.0).with_velocity(10.0, -5.0));
        integrate(&mut rb, NO_GRAVITY, 0.1);

        assert!((rb.position().x - 1.0).abs() < EPSILON);
        assert!((rb.position().y - -0.5).abs() < EPSILON);
        assert_eq!(rb.linear_velocity(), Vec2::new(10.0, -5.0));
        assert_eq!(rb.force(), Vec2::ZERO);
    }

    #[test]
    fn test_integrate_linear_motion_constant_force() {
        // 2x1 box of density 1: mass 2
        let mut rb = body(BodySpec::rectangle(2.0, 1.0));
        rb.add_force(Vec2::new(10.0, 0.0));
        integrate(&mut rb, NO_GRAVITY, 0.1);

        // v = (10 / 2) * 0.1, p = v * 0.1
        assert!((rb.linear_velocity().x - 0.5).abs() < EPSILON);
        assert!((rb.position().x - 0.05).abs() < EPSILON);
        assert_eq!(rb.force(), Vec2::ZERO);
    }

    #[test]
    fn test_integrate_gravity_semi_implicit() {
        let mut rb = body(BodySpec::circle(1.0));
        integrate(&mut rb, GRAVITY, 0.1);
        assert!((rb.linear_velocity().y - -1.0).abs() < EPSILON);
        assert!((rb.position().y - -0.1).abs() < EPSILON);
    }

    #[test]
    fn test_integrate_angular_motion() {
        let mut rb = body(BodySpec::rectangle(1.0, 1.0).with_angular_velocity(2.0));
        integrate(&mut rb, NO_GRAVITY, 0.25);
        assert!((rb.rotation() - 0.5).abs() < EPSILON);
        assert!(rb.is_transform_dirty());
    }

    #[test]
    fn test_integrate_kinematic_ignores_gravity_and_force() {
        let mut rb = body(BodySpec::rectangle(1.0, 1.0).with_velocity(1.0, 0.0).kinematic());
        rb.add_force(Vec2::new(0.0, 100.0));
        integrate(&mut rb, GRAVITY, 0.5);

        assert_eq!(rb.linear_velocity(), Vec2::new(1.0, 0.0));
        assert!((rb.position().x - 0.5).abs() < EPSILON);
        assert!(rb.position().y.abs() < EPSILON);
        assert_eq!(rb.force(), Vec2::ZERO);
    }

    #[test]
    fn test_integrate_static_object() {
        let mut rb = body(BodySpec::circle(1.0).at(1.0, 1.0).rotated(1.0).fixed());
        rb.add_force(Vec2::new(10.0, 10.0));
        integrate(&mut rb, GRAVITY, 0.1);

        assert_eq!(rb.position(), Vec2::new(1.0, 1.0));
        assert_eq!(rb.rotation(), 1.0);
        assert_eq!(rb.linear_velocity(), Vec2::ZERO);
        assert_eq!(rb.force(), Vec2::ZERO);
    }

    #[test]
    fn test_rotation_is_wrapped() {
        let mut rb = body(BodySpec::rectangle(1.0, 1.0).rotated(PI - 0.05).with_angular_velocity(1.0));
        integrate(&mut rb, NO_GRAVITY, 0.1);
        assert!((rb.rotation() - (-PI + 0.05)).abs() < EPSILON);
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(0.0) - 0.0).abs() < EPSILON);
        assert!((wrap_angle(PI) - PI).abs() < EPSILON);
        assert!((wrap_angle(-PI) - -PI).abs() < EPSILON); // Should stay -PI, not wrap to PI
        assert!((wrap_angle(PI + 0.1) - (-PI + 0.1)).abs() < EPSILON);
        assert!((wrap_angle(-PI - 0.1) - (PI - 0.1)).abs() < EPSILON);
        assert!((wrap_angle(3.0 * PI) - PI).abs() < EPSILON);
        assert!((wrap_angle(-3.0 * PI) - -PI).abs() < EPSILON);
        assert!((wrap_angle(2.0 * PI) - 0.0).abs() < EPSILON);
    }
}
