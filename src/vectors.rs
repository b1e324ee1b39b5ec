//! 2D vector helpers on top of glam
//!
//! glam covers dot products, normalization and perpendiculars. The few
//! operations GJK and EPA need beyond that live here.

use glam::{Vec2, Vec3};

/// Triple product `(a × b) × c` of three 2D vectors.
///
/// Each vector is lifted into 3D with `z = 0`. The first cross product is
/// purely along z; crossing that with `c` lands back in the plane,
/// perpendicular to `c` and leaning toward `b`.
#[inline]
pub fn triple_product(a: Vec2, b: Vec2, c: Vec2) -> Vec2 {
    Vec3::new(0.0, 0.0, cross_2d(a, b))
        .cross(c.extend(0.0))
        .truncate()
}

/// Z component of the 3D cross product of two planar vectors
#[inline]
pub fn cross_2d(a: Vec2, b: Vec2) -> f32 {
    Vec3::new(a.x, a.y, 0.0).cross(Vec3::new(b.x, b.y, 0.0)).z
}

/// Rotate `point` counter-clockwise about `center` by `angle` radians
#[inline]
pub fn rotate_about(point: Vec2, center: Vec2, angle: f32) -> Vec2 {
    center + Vec2::from_angle(angle).rotate(point - center)
}

/// Point halfway between `a` and `b`
#[inline]
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Shoelace trapezoid sum over a closed polygon.
///
/// Twice the signed area with the sign flipped: positive means the vertices
/// run clockwise in a y-up frame, negative counter-clockwise.
pub fn shoelace_sum(points: &[Vec2]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            (b.x - a.x) * (b.y + a.y)
        })
        .sum()
}
