use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::Float;
use crate::error::Result;

pub const DEFAULT_ARROW_LENGTH: Float = 0.1;

/**
 * Display settings shared by every renderer.
 * Missing fields in a YAML file fall back to the defaults below.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Length of the viewing direction arrow in world units
    pub arrow_length: Float,
    /// Center marker size in pixels (image output)
    pub marker_size: u32,
    /// Center marker side length in world units (window output)
    pub window_marker_size: Float,
    pub image_width: u32,
    pub image_height: u32,
    pub yaw: Float,
    pub pitch: Float,
    pub title: String
}

impl Default for DisplayConfig {
    fn default() -> DisplayConfig {
        DisplayConfig {
            arrow_length: DEFAULT_ARROW_LENGTH,
            marker_size: 6,
            window_marker_size: 0.02,
            image_width: 1024,
            image_height: 768,
            yaw: 0.5,
            pitch: 0.3,
            title: String::from("Camera Pose Visualization (COLMAP)")
        }
    }
}

impl DisplayConfig {
    pub fn load(path: &Path) -> Result<DisplayConfig> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<DisplayConfig> {
        let config: DisplayConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }
}
