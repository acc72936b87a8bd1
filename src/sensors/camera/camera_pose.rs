extern crate nalgebra as na;

use log::{debug,warn};
use na::Vector3;
use crate::error::{PoseError, Result};
use crate::numerics::pose;
use crate::sensors::camera::PoseRecord;
use crate::Float;

/**
 * Camera center and unit viewing direction, both in world coordinates.
 */
#[derive(Debug,Clone,PartialEq)]
pub struct CameraPose {
    pub label: String,
    pub center: Vector3<Float>,
    pub view_direction: Vector3<Float>
}

impl CameraPose {
    pub fn from_record(record: &PoseRecord) -> Result<CameraPose> {
        let rotation = pose::normalized_rotation(&record.rotation).ok_or(PoseError::DegenerateRotation { line: record.line })?;
        if !pose::is_unit(&record.rotation) {
            warn!("line {}: quaternion norm {} is not 1, normalizing", record.line, record.rotation.norm());
        }

        let world_to_camera = pose::from_parts(&record.translation, &rotation);
        let camera_pose = CameraPose {
            label: record.label.clone(),
            center: pose::camera_center(&world_to_camera),
            view_direction: pose::viewing_direction(&world_to_camera)
        };
        debug!("{}: center {:?} direction {:?}", camera_pose.label, camera_pose.center.as_slice(), camera_pose.view_direction.as_slice());
        Ok(camera_pose)
    }

    /**
     * End point of the viewing direction drawn with the given length.
     */
    pub fn arrow_tip(&self, arrow_length: Float) -> Vector3<Float> {
        self.center + arrow_length*self.view_direction
    }
}
