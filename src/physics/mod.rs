//! Narrow-phase collision between convex shapes
//!
//! GJK answers "do these overlap", EPA answers "by how much and which way".
//! Candidate pairs come from the caller; there is no broad phase here.

pub mod collider;
pub mod epa;
pub mod gjk;

pub use collider::{Aabb, Circle, Collider, Neighbours};
pub use epa::{Penetration, Winding, resolve};
pub use gjk::{GjkResult, Simplex, intersect};

use glam::Vec2;

/// Result of a full collision test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the shapes overlap
    pub has_collision: bool,
    /// Unit vector from shape A toward shape B (zero without a collision)
    pub normal: Vec2,
    /// Penetration depth along `normal`
    pub depth: f32,
}

impl CollisionResult {
    pub fn none() -> Self {
        Self {
            has_collision: false,
            normal: Vec2::ZERO,
            depth: 0.0,
        }
    }

    /// Offset that pushes shape A out of shape B
    #[inline]
    pub fn separation(&self) -> Vec2 {
        -self.normal * self.depth
    }
}

impl From<Penetration> for CollisionResult {
    fn from(p: Penetration) -> Self {
        Self {
            has_collision: true,
            normal: p.normal,
            depth: p.depth,
        }
    }
}

/// Run GJK and, on overlap, EPA between `a` and `b`
pub fn test_collision(a: &Collider, b: &Collider) -> CollisionResult {
    match intersect(a, b) {
        GjkResult::Collision(simplex) => resolve(simplex, a, b).into(),
        GjkResult::NoCollision => CollisionResult::none(),
    }
}
