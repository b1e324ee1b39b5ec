//! DDA grid raycasting
//!
//! Amanatides–Woo traversal: the ray is walked one grid line at a time,
//! always crossing whichever axis boundary is closer along the ray, until it
//! lands in a wall cell, leaves the grid or runs past its maximum distance.
//!
//! All distances are in cell units measured along the ray.

use glam::{IVec2, Vec2};

use crate::map::GridMap;

/// Which family of grid lines the ray crossed to enter the hit cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Crossed a vertical line `x = k` (east/west face)
    X,
    /// Crossed a horizontal line `y = k` (north/south face)
    Y,
}

/// First wall cell hit by a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastResult {
    /// Material id of the wall
    pub cell: u32,
    /// Grid index of the wall cell
    pub cell_index: IVec2,
    /// World-space point where the ray enters the cell
    pub hit: Vec2,
    /// Distance from the ray origin to `hit`
    pub distance: f32,
    /// Grid line family crossed at `hit`
    pub axis: Axis,
    /// Fractional position of `hit` along the face, in `[0, 1)`
    pub face_offset: f32,
}

impl CastResult {
    /// Texture column to sample for this hit
    pub fn texture_column(&self, texture_width: u32) -> u32 {
        let column = (self.face_offset * texture_width as f32) as u32;
        column.min(texture_width.saturating_sub(1))
    }
}

/// A ray in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    /// Any non-zero length; normalized before marching
    pub direction: Vec2,
    /// Hits further than this are ignored (a hit exactly at it counts)
    pub max_distance: f32,
}

impl Ray {
    pub fn new(origin: Vec2, direction: Vec2, max_distance: f32) -> Self {
        Self {
            origin,
            direction,
            max_distance,
        }
    }

    /// March through `map` and return the first wall hit.
    ///
    /// The cell containing the origin is never tested. `None` means the ray
    /// left the grid or ran out of distance before meeting a wall.
    pub fn cast(&self, map: &GridMap) -> Option<CastResult> {
        let dir = self.direction.normalize_or_zero();
        if dir == Vec2::ZERO {
            return None;
        }

        // Ray length needed to move one full cell along each axis
        let step_len = Vec2::new(unit_step(dir.x, dir.y), unit_step(dir.y, dir.x));

        let step = IVec2::new(
            if dir.x < 0.0 { -1 } else { 1 },
            if dir.y < 0.0 { -1 } else { 1 },
        );

        let mut cell = self.origin.floor().as_ivec2();

        // Ray length at which the next grid line is crossed on each axis
        let mut ray_len = Vec2::new(
            first_crossing(self.origin.x, cell.x, dir.x, step_len.x),
            first_crossing(self.origin.y, cell.y, dir.y, step_len.y),
        );

        loop {
            let (distance, axis) = if ray_len.x < ray_len.y {
                cell.x += step.x;
                let d = ray_len.x;
                ray_len.x += step_len.x;
                (d, Axis::X)
            } else {
                cell.y += step.y;
                let d = ray_len.y;
                ray_len.y += step_len.y;
                (d, Axis::Y)
            };

            if distance > self.max_distance {
                return None;
            }

            let index = cell + map.origin();
            let value = map.get(index)?;
            if value != 0 {
                let hit = self.origin + dir * distance;
                let along = match axis {
                    Axis::X => hit.y,
                    Axis::Y => hit.x,
                };
                return Some(CastResult {
                    cell: value,
                    cell_index: index,
                    hit,
                    distance,
                    axis,
                    face_offset: along - along.floor(),
                });
            }
        }
    }
}

/// Cast `ray` through `map`
#[inline]
pub fn cast(ray: &Ray, map: &GridMap) -> Option<CastResult> {
    ray.cast(map)
}

/// Ray length per unit of travel along an axis whose direction component is
/// `along`. A zero component never crosses a grid line on that axis.
#[inline]
fn unit_step(along: f32, across: f32) -> f32 {
    if along == 0.0 {
        return f32::INFINITY;
    }
    (1.0 + (across / along).powi(2)).sqrt()
}

/// Ray length to the first grid line crossed on one axis
#[inline]
fn first_crossing(origin: f32, cell: i32, dir: f32, step_len: f32) -> f32 {
    if dir == 0.0 {
        f32::INFINITY
    } else if dir < 0.0 {
        (origin - cell as f32) * step_len
    } else {
        (cell as f32 + 1.0 - origin) * step_len
    }
}
