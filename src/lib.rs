extern crate nalgebra as na;

use log::info;
use std::path::Path;

use crate::config::DisplayConfig;
use crate::io::{colmap_loader, loading_parameters::LoadingParameters};
use crate::sensors::camera::camera_poses;
use crate::visualize::{PoseRenderer, PoseScene};

pub mod config;
pub mod error;
pub mod io;
pub mod numerics;
pub mod sensors;
pub mod visualize;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

pub use error::{PoseError, Result};

/**
 * Loads images.txt from input_dir, recovers every camera pose and hands the scene to the renderer.
 * Returns the number of poses. The renderer is not called when the file holds none.
 */
pub fn display_poses<R: PoseRenderer + ?Sized>(input_dir: &Path, parameters: &LoadingParameters, config: DisplayConfig, renderer: &mut R) -> Result<usize> {
    let images_txt = colmap_loader::images_txt_path(input_dir);
    let records = colmap_loader::load_images_txt(&images_txt, parameters)?;
    let poses = camera_poses(&records)?;

    if poses.is_empty() {
        return Ok(0);
    }
    info!("recovered {} camera poses", poses.len());

    let scene = PoseScene::new(poses, config);
    renderer.render(&scene)?;
    Ok(scene.poses.len())
}
