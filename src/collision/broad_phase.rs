//! Brute-force broad phase: every ordered pair of live bodies, filtered by AABB.

use crate::collision::AABB;
use crate::world::BodyHandle;

/// What the broad phase needs to know about one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BroadPhaseProxy {
    pub handle: BodyHandle,
    pub aabb: AABB,
    /// `true` for bodies that respond to contacts (dynamic ones).
    pub movable: bool,
}

/// Candidate pairs `(a, b)` with `a` listed before `b` in `proxies`.
///
/// A pair is skipped when neither side can move, or when the boxes do not
/// overlap (touching boxes do not overlap).
pub fn candidate_pairs(proxies: &[BroadPhaseProxy]) -> Vec<(BodyHandle, BodyHandle)> {
    let mut pairs = Vec::new();
    for (i, a) in proxies.iter().enumerate() {
        for b in &proxies[i + 1..] {
            if !a.movable && !b.movable {
                continue;
            }
            if a.aabb.overlaps(&b.aabb) {
                pairs.push((a.handle, b.handle));
            }
        }
    }
    pairs
}
