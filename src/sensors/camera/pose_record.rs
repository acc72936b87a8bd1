extern crate nalgebra as na;

use na::{Vector3, Quaternion};
use crate::Float;

/**
 * One data line of images.txt: the world to camera transform of a single image.
 * The rotation is kept exactly as read, normalization happens in the transform.
 */
#[derive(Debug,Clone,PartialEq)]
pub struct PoseRecord {
    /// 1-based line number in the source file
    pub line: usize,
    /// First token of the line (COLMAP IMAGE_ID)
    pub label: String,
    pub rotation: Quaternion<Float>,
    pub translation: Vector3<Float>
}
