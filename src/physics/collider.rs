//! Convex collider shapes
//!
//! GJK and EPA only ever talk to shapes through their support queries, so a
//! new shape is one more enum arm plus those queries.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::CIRCLE_NEIGHBOUR_ANGLE;
use crate::vectors::{midpoint, rotate_about};

/// Furthest point of a shape along a direction, with the boundary points on
/// either side of it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbours {
    pub furthest: Vec2,
    pub left: Vec2,
    pub right: Vec2,
}

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Bottom-left corner
    pub min: Vec2,
    /// Top-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of the given size centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    /// Corners in a fixed order. Ties in support queries go to the earliest
    /// corner, so this order is part of the collision results.
    #[inline]
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            Vec2::new(self.min.x, self.max.y),
            self.max,
        ]
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        midpoint(self.min, self.max)
    }

    /// Index of the first corner with the greatest projection on `direction`
    fn furthest_index(&self, direction: Vec2) -> usize {
        let mut best = 0;
        let mut best_dist = f32::NEG_INFINITY;
        for (i, corner) in self.corners().iter().enumerate() {
            let dist = corner.dot(direction);
            if dist > best_dist {
                best_dist = dist;
                best = i;
            }
        }
        best
    }

    pub fn furthest_point(&self, direction: Vec2) -> Vec2 {
        self.corners()[self.furthest_index(direction)]
    }

    /// Furthest corner plus the corners after and before it in `corners()`
    /// order (wrapping)
    pub fn furthest_neighbours(&self, direction: Vec2) -> Neighbours {
        let corners = self.corners();
        let i = self.furthest_index(direction);
        let n = corners.len();
        Neighbours {
            furthest: corners[i],
            left: corners[(i + 1) % n],
            right: corners[(i + n - 1) % n],
        }
    }
}

/// Circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn furthest_point(&self, direction: Vec2) -> Vec2 {
        self.center + direction.normalize_or_zero() * self.radius
    }

    /// A circle has no vertices; neighbours are the support point swung 4°
    /// either way around the centre.
    pub fn furthest_neighbours(&self, direction: Vec2) -> Neighbours {
        let furthest = self.furthest_point(direction);
        Neighbours {
            furthest,
            left: rotate_about(furthest, self.center, -CIRCLE_NEIGHBOUR_ANGLE),
            right: rotate_about(furthest, self.center, CIRCLE_NEIGHBOUR_ANGLE),
        }
    }
}

/// Any convex shape GJK/EPA can test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    Box(Aabb),
    Circle(Circle),
}

impl Collider {
    /// Reference position used to seed the GJK search direction
    pub fn position(&self) -> Vec2 {
        match self {
            Collider::Box(aabb) => aabb.center(),
            Collider::Circle(circle) => circle.center,
        }
    }

    /// Point on the shape with the greatest projection on `direction`
    pub fn furthest_point(&self, direction: Vec2) -> Vec2 {
        match self {
            Collider::Box(aabb) => aabb.furthest_point(direction),
            Collider::Circle(circle) => circle.furthest_point(direction),
        }
    }

    pub fn furthest_neighbours(&self, direction: Vec2) -> Neighbours {
        match self {
            Collider::Box(aabb) => aabb.furthest_neighbours(direction),
            Collider::Circle(circle) => circle.furthest_neighbours(direction),
        }
    }

    /// Support point of the Minkowski difference `self - other`
    #[inline]
    pub fn support_point(&self, other: &Collider, direction: Vec2) -> Vec2 {
        self.furthest_point(direction) - other.furthest_point(-direction)
    }

    /// Move the shape by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Collider::Box(aabb) => {
                aabb.min += delta;
                aabb.max += delta;
            }
            Collider::Circle(circle) => circle.center += delta,
        }
    }

    /// Copy of the shape moved by `delta`
    pub fn translated(mut self, delta: Vec2) -> Self {
        self.translate(delta);
        self
    }
}

impl From<Aabb> for Collider {
    fn from(aabb: Aabb) -> Self {
        Collider::Box(aabb)
    }
}

impl From<Circle> for Collider {
    fn from(circle: Circle) -> Self {
        Collider::Circle(circle)
    }
}
