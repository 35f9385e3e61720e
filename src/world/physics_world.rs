use log::{debug, trace, warn};

use crate::collision::{self, BroadPhaseProxy, CollisionManifold};
use crate::config::WorldConfig;
use crate::error::{ConfigError, ConstructionError};
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::objects::spec::BodySpec;

use super::body_set::{BodyHandle, BodySet};
use super::resolver;
use super::snapshot::BodyView;

/// Owns every body and advances them in fixed substeps.
///
/// Each call to [`step`](Self::step) runs `integrate -> broad phase -> narrow
/// phase + manifolds -> resolve` once per substep, then removes bodies that
/// have fallen below the configured view bottom.
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    bodies: BodySet<RigidBody>,
    gravity: Vec2,
    config: WorldConfig,
}

impl PhysicsWorld {
    /// Creates a new, empty physics world with default settings.
    pub fn new() -> Self {
        Self::from_valid_config(WorldConfig::default())
    }

    /// Creates an empty world after validating `config`.
    pub fn with_config(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: WorldConfig) -> Self {
        Self {
            bodies: BodySet::new(),
            gravity: Vec2::new(0.0, -config.gravity),
            config,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Overrides the gravity vector derived from the config.
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    /// Validates `spec` against the world's limits and inserts the body.
    pub fn add_body(&mut self, spec: BodySpec) -> Result<BodyHandle, ConstructionError> {
        let body = RigidBody::from_spec(&spec, &self.config).map_err(|err| {
            debug!("rejected body spec: {err}");
            err
        })?;
        let motion = body.motion();
        let handle = self.bodies.insert(body);
        debug!("added {motion:?} body {handle:?}");
        Ok(handle)
    }

    /// Returns `false` if the handle is stale or was never issued by this world.
    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        let removed = self.bodies.remove(handle).is_some();
        if removed {
            debug!("removed body {handle:?}");
        }
        removed
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    /// Body at `index` in insertion order.
    pub fn body_at(&self, index: usize) -> Option<&RigidBody> {
        let handle = *self.bodies.handles().get(index)?;
        self.bodies.get(handle)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Live handles in insertion order.
    pub fn handles(&self) -> &[BodyHandle] {
        self.bodies.handles()
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle)
    }

    /// Advances the simulation by `dt` seconds split into `substeps` equal parts.
    ///
    /// `substeps` is clamped into the configured iteration range. A non-finite
    /// or non-positive `dt` leaves the world untouched.
    pub fn step(&mut self, dt: f64, substeps: u32) {
        if !dt.is_finite() || dt <= 0.0 {
            warn!("ignoring step with invalid dt {dt}");
            return;
        }

        let iterations = self.config.clamp_substeps(substeps);
        if iterations != substeps {
            warn!("substep count {substeps} clamped to {iterations}");
        }
        let dt_sub = dt / f64::from(iterations);
        trace!("step dt={dt} substeps={iterations} bodies={}", self.bodies.len());

        for substep in 0..iterations {
            let gravity = self.gravity;
            for body in self.bodies.values_mut() {
                integrator::integrate(body, gravity, dt_sub);
            }

            let manifolds = self.collect_contacts();
            trace!("substep {substep}: {} contacts", manifolds.len());

            for manifold in &manifolds {
                if let Some((a, b)) = self.bodies.get2_mut(manifold.body_a, manifold.body_b) {
                    resolver::resolve_collision(a, b, manifold);
                }
            }
        }

        self.cull_below_view();
    }

    /// Detects every current contact without resolving anything.
    ///
    /// Returns a fresh list in insertion order of the first body of each pair.
    pub fn collect_contacts(&mut self) -> Vec<CollisionManifold> {
        let mut proxies = Vec::with_capacity(self.bodies.len());
        for handle in self.bodies.handles().to_vec() {
            if let Some(body) = self.bodies.get_mut(handle) {
                proxies.push(BroadPhaseProxy {
                    handle,
                    aabb: body.aabb(),
                    movable: body.is_dynamic(),
                });
            }
        }

        let mut manifolds = Vec::new();
        for (handle_a, handle_b) in collision::candidate_pairs(&proxies) {
            let Some((a, b)) = self.bodies.get2_mut(handle_a, handle_b) else {
                continue;
            };
            if let Some(penetration) = collision::collide(a, b) {
                manifolds.push(CollisionManifold::new(handle_a, a, handle_b, b, penetration));
            }
        }
        manifolds
    }

    /// Current geometry of every body in insertion order, for drawing.
    pub fn render_views(&mut self) -> Vec<BodyView> {
        let mut views = Vec::with_capacity(self.bodies.len());
        for handle in self.bodies.handles().to_vec() {
            if let Some(body) = self.bodies.get_mut(handle) {
                views.push(BodyView::capture(handle, body));
            }
        }
        views
    }

    fn cull_below_view(&mut self) {
        let view_bottom = self.config.view_bottom;
        let culled = self
            .bodies
            .retain(|_, body| {
                let below = body.aabb().max.y < view_bottom;
                !below
            });
        for handle in culled {
            debug!("culled body {handle:?} below {view_bottom}");
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
