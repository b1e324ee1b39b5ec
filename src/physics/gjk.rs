//! GJK intersection test
//!
//! Two convex shapes overlap exactly when their Minkowski difference
//! contains the origin. GJK walks support points of that difference toward
//! the origin, keeping a simplex of at most three points, until the
//! simplex encloses the origin or a support point fails to get past it.

use glam::Vec2;

use super::collider::Collider;
use crate::consts::GJK_MAX_ITERATIONS;
use crate::vectors::triple_product;

/// Ordered support points in Minkowski-difference space, oldest first.
///
/// GJK keeps at most three; EPA grows the same list into a polytope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Simplex {
    points: Vec<Vec2>,
}

impl Simplex {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(3),
        }
    }

    pub fn from_points(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn push(&mut self, point: Vec2) {
        self.points.push(point);
    }

    pub fn into_points(self) -> Vec<Vec2> {
        self.points
    }
}

/// Outcome of a GJK test
#[derive(Debug, Clone, PartialEq)]
pub enum GjkResult {
    NoCollision,
    /// Shapes overlap; the triangle encloses the origin
    Collision(Simplex),
}

impl GjkResult {
    #[inline]
    pub fn collided(&self) -> bool {
        matches!(self, GjkResult::Collision(_))
    }

    pub fn simplex(&self) -> Option<&Simplex> {
        match self {
            GjkResult::Collision(simplex) => Some(simplex),
            GjkResult::NoCollision => None,
        }
    }
}

/// Test whether `a` and `b` overlap
pub fn intersect(a: &Collider, b: &Collider) -> GjkResult {
    intersect_capped(a, b, GJK_MAX_ITERATIONS)
}

/// `intersect` with an explicit evolution cap. Running out of evolutions
/// counts as no collision.
pub(crate) fn intersect_capped(a: &Collider, b: &Collider, max_iterations: usize) -> GjkResult {
    let mut direction = b.position() - a.position();

    // Coincident centres would give a zero first direction
    if direction == Vec2::ZERO {
        direction = Vec2::ONE;
    }

    let support = a.support_point(b, direction);
    let mut simplex = Simplex::new();
    simplex.push(support);

    // Search from the first support point back toward the origin
    direction = -support;

    for _ in 0..max_iterations {
        let support = a.support_point(b, direction);
        if !same_direction(support, direction) {
            // The difference never reaches past the origin this way
            return GjkResult::NoCollision;
        }

        simplex.push(support);
        if next_simplex(&mut simplex, &mut direction) {
            return GjkResult::Collision(simplex);
        }
    }

    log::debug!("GJK gave up after {} iterations", max_iterations);
    GjkResult::NoCollision
}

/// Evolve the simplex after a push. Returns true once the origin is enclosed.
fn next_simplex(simplex: &mut Simplex, direction: &mut Vec2) -> bool {
    match simplex.len() {
        2 => line(simplex, direction),
        3 => triangle(simplex, direction),
        _ => false,
    }
}

fn line(simplex: &Simplex, direction: &mut Vec2) -> bool {
    let a = simplex.points[1];
    let b = simplex.points[0];

    let ab = b - a;
    let ao = -a;

    // Perpendicular to ab, toward the origin
    *direction = triple_product(ab, ao, ab);

    // Origin on the line itself: either perpendicular will do
    if direction.length_squared() == 0.0 {
        *direction = Vec2::new(ab.y, -ab.x);
    }

    false
}

fn triangle(simplex: &mut Simplex, direction: &mut Vec2) -> bool {
    let a = simplex.points[2];
    let b = simplex.points[1];
    let c = simplex.points[0];

    let ab = b - a;
    let ac = c - a;
    let ao = -a;

    let ab_perp = triple_product(ac, ab, ab);
    let ac_perp = triple_product(ab, ac, ac);

    if same_direction(ab_perp, ao) {
        // Outside ab: drop c
        simplex.points.remove(0);
        *direction = ab_perp;
        false
    } else if same_direction(ac_perp, ao) {
        // Outside ac: drop b
        simplex.points.remove(1);
        *direction = ac_perp;
        false
    } else {
        true
    }
}

#[inline]
fn same_direction(a: Vec2, b: Vec2) -> bool {
    a.dot(b) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{Aabb, Circle};
    use proptest::prelude::*;

    fn boxed(min: (f32, f32), max: (f32, f32)) -> Collider {
        Collider::Box(Aabb::new(Vec2::new(min.0, min.1), Vec2::new(max.0, max.1)))
    }

    #[test]
    fn test_separated_boxes() {
        let a = boxed((0.0, 0.0), (1.0, 1.0));
        let b = boxed((1.5, 0.0), (2.5, 1.0));
        assert_eq!(intersect(&a, &b), GjkResult::NoCollision);
        assert_eq!(intersect(&b, &a), GjkResult::NoCollision);
    }

    #[test]
    fn test_overlapping_boxes_simplex() {
        let a = boxed((0.0, 0.0), (1.0, 1.0));
        let b = boxed((0.7, 0.0), (1.7, 1.0));

        let result = intersect(&a, &b);
        let simplex = result.simplex().expect("boxes overlap");
        assert_eq!(simplex.len(), 3);

        let expected = [
            Vec2::new(0.3, 0.0),
            Vec2::new(-1.7, 0.0),
            Vec2::new(-0.7, -1.0),
        ];
        for (p, e) in simplex.points().iter().zip(expected) {
            assert!((*p - e).length() < 1e-5, "{:?} vs {:?}", p, e);
        }
    }

    #[test]
    fn test_coincident_positions() {
        let a = boxed((0.0, 0.0), (1.0, 1.0));
        let b = boxed((0.25, 0.25), (0.75, 0.75));
        assert_eq!(a.position(), b.position());
        assert!(intersect(&a, &b).collided());
    }

    #[test]
    fn test_circles() {
        let a = Collider::Circle(Circle::new(Vec2::ZERO, 1.0));
        let near = Collider::Circle(Circle::new(Vec2::new(1.5, 0.0), 1.0));
        let far = Collider::Circle(Circle::new(Vec2::new(2.5, 0.5), 1.0));
        assert!(intersect(&a, &near).collided());
        assert!(!intersect(&a, &far).collided());
    }

    #[test]
    fn test_circle_against_box() {
        let circle = Collider::Circle(Circle::new(Vec2::new(0.0, 0.5), 0.5));
        let wall = boxed((0.3, 0.0), (1.3, 1.0));
        let gap = boxed((0.6, 0.0), (1.6, 1.0));
        assert!(intersect(&circle, &wall).collided());
        assert!(!intersect(&circle, &gap).collided());
    }

    #[test]
    fn test_cap_exhaustion_is_no_collision() {
        // Needs a line step then a triangle step to enclose the origin
        let a = boxed((0.0, 0.0), (1.0, 1.0));
        let b = boxed((0.7, 0.0), (1.7, 1.0));

        assert_eq!(intersect_capped(&a, &b, 1), GjkResult::NoCollision);
        assert!(intersect_capped(&a, &b, 2).collided());
        assert_eq!(intersect_capped(&a, &b, 0), GjkResult::NoCollision);
    }

    proptest! {
        #[test]
        fn prop_gjk_is_symmetric(
            ax in -3.0f32..3.0,
            ay in -3.0f32..3.0,
            bx in -3.0f32..3.0,
            by in -3.0f32..3.0,
            r in 0.25f32..1.5,
        ) {
            let a = boxed((ax, ay), (ax + 1.0, ay + 1.0));
            let b = Collider::Circle(Circle::new(Vec2::new(bx, by), r));

            // Keep clear of grazing contact where float noise decides
            let closest = Vec2::new(bx, by).clamp(Vec2::new(ax, ay), Vec2::new(ax + 1.0, ay + 1.0));
            let gap = (closest - Vec2::new(bx, by)).length() - r;
            prop_assume!(gap.abs() > 0.1);

            prop_assert_eq!(intersect(&a, &b).collided(), intersect(&b, &a).collided());
            prop_assert_eq!(intersect(&a, &b).collided(), gap < 0.0);
        }
    }
}
