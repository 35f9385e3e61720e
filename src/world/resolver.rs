//! Contact response: penetration removal followed by a restitution impulse
//! along the contact normal. No friction.

use log::trace;

use crate::collision::CollisionManifold;
use crate::objects::rigid_body::RigidBody;

/// Runs both resolution passes for one manifold.
pub fn resolve_collision(a: &mut RigidBody, b: &mut RigidBody, manifold: &CollisionManifold) {
    apply_positional_correction(a, b, manifold);
    apply_collision_impulse(a, b, manifold);
}

/// Pushes the bodies apart along the normal by the full penetration depth.
///
/// An immovable side stays put and the other side takes the whole correction;
/// otherwise the depth is split by inverse mass.
pub fn apply_positional_correction(a: &mut RigidBody, b: &mut RigidBody, manifold: &CollisionManifold) {
    let inv_mass_a = a.response_inv_mass();
    let inv_mass_b = b.response_inv_mass();
    let total_inv_mass = inv_mass_a + inv_mass_b;
    if total_inv_mass <= 0.0 {
        return;
    }

    let correction = manifold.normal * manifold.depth;
    if inv_mass_a == 0.0 {
        b.translate(correction);
    } else if inv_mass_b == 0.0 {
        a.translate(-correction);
    } else {
        a.translate(-correction * (inv_mass_a / total_inv_mass));
        b.translate(correction * (inv_mass_b / total_inv_mass));
    }
}

/// Applies the normal impulse `j = -(1 + e) (v_rel . n) / (1/m_a + 1/m_b)`.
/// Bodies already separating are left alone.
pub fn apply_collision_impulse(a: &mut RigidBody, b: &mut RigidBody, manifold: &CollisionManifold) {
    let inv_mass_a = a.response_inv_mass();
    let inv_mass_b = b.response_inv_mass();
    let total_inv_mass = inv_mass_a + inv_mass_b;
    if total_inv_mass <= 0.0 {
        return;
    }

    let relative_velocity = b.linear_velocity() - a.linear_velocity();
    let velocity_along_normal = relative_velocity.dot(manifold.normal);
    if velocity_along_normal > 0.0 {
        return;
    }

    let e = a.material().combined_restitution(b.material());
    let j = -(1.0 + e) * velocity_along_normal / total_inv_mass;
    let impulse = manifold.normal * j;

    a.set_linear_velocity(a.linear_velocity() - impulse * inv_mass_a);
    b.set_linear_velocity(b.linear_velocity() + impulse * inv_mass_b);

    trace!(
        "impulse {:.4} between {:?} and {:?} (e = {:.2})",
        j,
        manifold.body_a,
        manifold.body_b,
        e
    );
}
