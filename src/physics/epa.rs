//! Expanding Polytope Algorithm
//!
//! Grows the enclosing GJK triangle outward, one support point at a time,
//! until the polytope edge closest to the origin lies on the boundary of the
//! Minkowski difference. That edge's normal and distance are the minimum
//! translation needed to separate the shapes.

use glam::Vec2;

use super::collider::Collider;
use super::gjk::Simplex;
use crate::consts::{EPA_MAX_ITERATIONS, EPA_TOLERANCE};
use crate::vectors::shoelace_sum;

/// Minimum translation separating two overlapping shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit vector from shape A toward shape B
    pub normal: Vec2,
    /// Distance to move along `normal` to separate
    pub depth: f32,
}

/// Vertex order of the polytope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    /// Winding of a polygon from its shoelace sum. Degenerate (zero area)
    /// polygons count as clockwise.
    pub fn of(points: &[Vec2]) -> Self {
        if shoelace_sum(points) >= 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Unit normal of edge `ab` pointing out of the polygon
    #[inline]
    fn outward_normal(self, ab: Vec2) -> Vec2 {
        match self {
            Winding::Clockwise => Vec2::new(-ab.y, ab.x),
            Winding::CounterClockwise => Vec2::new(ab.y, -ab.x),
        }
        .normalize_or_zero()
    }
}

/// Polytope edge closest to the origin
#[derive(Debug, Clone, Copy)]
struct Edge {
    normal: Vec2,
    distance: f32,
    /// Where a new vertex splitting this edge goes
    insert_at: usize,
}

/// Compute the penetration of two shapes GJK found overlapping.
///
/// `polytope` is the collision simplex from GJK and must hold at least three
/// points. If the iteration cap runs out before the polytope settles, the
/// closest edge of the last round is returned as an approximation.
///
/// # Panics
///
/// Panics when `polytope` has fewer than three points.
pub fn resolve(polytope: Simplex, a: &Collider, b: &Collider) -> Penetration {
    resolve_capped(polytope, a, b, EPA_MAX_ITERATIONS)
}

/// `resolve` with an explicit expansion cap
pub(crate) fn resolve_capped(
    polytope: Simplex,
    a: &Collider,
    b: &Collider,
    max_iterations: usize,
) -> Penetration {
    let mut polytope = polytope.into_points();
    if polytope.len() < 3 {
        log::error!("EPA called with a {}-point polytope", polytope.len());
        panic!(
            "EPA needs a polytope of at least 3 points, got {}",
            polytope.len()
        );
    }

    // Expansion keeps the polygon convex, so the seed triangle fixes the winding
    let winding = Winding::of(&polytope[..3]);

    let mut best = Penetration {
        normal: Vec2::ZERO,
        depth: 0.0,
    };

    for _ in 0..max_iterations {
        let edge = closest_edge(&polytope, winding);
        let support = a.support_point(b, edge.normal);
        let distance = support.dot(edge.normal);

        best = Penetration {
            normal: edge.normal,
            depth: distance + EPA_TOLERANCE,
        };

        if (distance - edge.distance).abs() <= EPA_TOLERANCE {
            // Edge already lies on the Minkowski boundary
            return best;
        }

        polytope.insert(edge.insert_at, support);
    }

    log::debug!(
        "EPA hit its {} iteration cap with {} vertices",
        max_iterations,
        polytope.len()
    );
    best
}

fn closest_edge(polytope: &[Vec2], winding: Winding) -> Edge {
    let mut closest = Edge {
        normal: Vec2::ZERO,
        distance: f32::INFINITY,
        insert_at: 0,
    };

    for i in 0..polytope.len() {
        let j = (i + 1) % polytope.len();
        let a = polytope[i];
        let b = polytope[j];

        let normal = winding.outward_normal(b - a);
        let distance = normal.dot(a);

        if distance < closest.distance {
            closest = Edge {
                normal,
                distance,
                insert_at: i + 1,
            };
        }
    }

    closest
}
