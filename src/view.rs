//! Per-column view rays and wall projection
//!
//! One ray per screen column, fanned across the field of view around the
//! camera direction. Only the geometry lives here; drawing the resulting
//! wall slices is the host's job.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::map::GridMap;
use crate::ray::{CastResult, Ray};
use crate::settings::Settings;
use crate::vectors::rotate_about;

/// Screen dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width as f32 / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height as f32 / 2.0
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

/// Wall slice seen through one screen column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnHit {
    pub column: u32,
    /// Ray angle relative to the camera direction (radians)
    pub angle: f32,
    pub cast: CastResult,
    /// Distance used for projection (perpendicular when fisheye correction is on)
    pub corrected_distance: f32,
    /// Half the wall slice height in pixels, capped at the viewport height
    pub line_half_height: u32,
}

/// First-person camera on the grid plane
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    /// Unit view direction
    pub direction: Vec2,
    /// Horizontal field of view in radians
    fov: f32,
    pub viewport: Viewport,
}

impl Camera {
    pub fn new(fov: f32, viewport: Viewport, direction: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            direction: direction.normalize_or_zero(),
            fov,
            viewport,
        }
    }

    pub fn from_settings(
        settings: &Settings,
        viewport: Viewport,
        position: Vec2,
        direction: Vec2,
    ) -> Self {
        Self {
            position,
            ..Self::new(settings.fov_radians(), viewport, direction)
        }
    }

    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    #[inline]
    pub fn half_fov(&self) -> f32 {
        self.fov / 2.0
    }

    /// Turn the view direction counter-clockwise by `angle` radians
    pub fn rotate(&mut self, angle: f32) {
        self.direction = rotate_about(self.direction, Vec2::ZERO, angle);
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Angle between neighbouring column rays
    #[inline]
    pub fn increment_angle(&self) -> f32 {
        self.fov / self.viewport.width as f32
    }

    /// Angle of a column's ray relative to the view direction
    #[inline]
    pub fn column_angle(&self, column: u32) -> f32 {
        let inc = self.increment_angle();
        inc * column as f32 - inc * self.viewport.half_width()
    }

    pub fn column_ray(&self, column: u32, max_distance: f32) -> Ray {
        let dir = rotate_about(self.direction, Vec2::ZERO, self.column_angle(column));
        Ray::new(self.position, dir, max_distance)
    }

    /// Cast a single column and project the hit
    pub fn cast_column(
        &self,
        map: &GridMap,
        column: u32,
        settings: &Settings,
    ) -> Option<ColumnHit> {
        let angle = self.column_angle(column);
        let cast = self
            .column_ray(column, settings.view_distance_for(map))
            .cast(map)?;

        let corrected_distance = if settings.fisheye_correction {
            cast.distance * angle.cos()
        } else {
            cast.distance
        };

        // Saturating float casts take care of a zero distance
        let half = (self.viewport.half_height() / corrected_distance).floor() as u32;

        Some(ColumnHit {
            column,
            angle,
            cast,
            corrected_distance,
            line_half_height: half.min(self.viewport.height),
        })
    }

    /// Cast every screen column, left to right
    #[cfg(feature = "parallel")]
    pub fn cast_columns(&self, map: &GridMap, settings: &Settings) -> Vec<Option<ColumnHit>> {
        use rayon::prelude::*;

        (0..self.viewport.width)
            .into_par_iter()
            .map(|column| self.cast_column(map, column, settings))
            .collect()
    }

    /// Cast every screen column, left to right
    #[cfg(not(feature = "parallel"))]
    pub fn cast_columns(&self, map: &GridMap, settings: &Settings) -> Vec<Option<ColumnHit>> {
        (0..self.viewport.width)
            .map(|column| self.cast_column(map, column, settings))
            .collect()
    }
}
