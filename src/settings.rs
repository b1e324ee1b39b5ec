//! View settings
//!
//! Kept separate from level data so a host can persist them however it
//! likes; JSON helpers are provided.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FOV_DEGREES;
use crate::map::GridMap;

/// Camera and projection preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Horizontal field of view in degrees
    pub fov_degrees: f32,
    /// Project distances onto the view direction to remove fisheye bulge
    pub fisheye_correction: bool,
    /// Maximum ray length; `None` uses the map size
    pub view_distance: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            fisheye_correction: true,
            view_distance: None,
        }
    }
}

impl Settings {
    #[inline]
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    /// Ray length to use on `map`
    pub fn view_distance_for(&self, map: &GridMap) -> f32 {
        self.view_distance.unwrap_or(map.size() as f32)
    }

    /// Parse settings, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        log::info!("Loaded view settings (fov {}°)", settings.fov_degrees);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
