use crate::error::Result;

pub mod camera_pose;
pub mod pose_record;

pub use camera_pose::CameraPose;
pub use pose_record::PoseRecord;

/**
 * Transforms every record in order. The first degenerate rotation aborts the run.
 */
pub fn camera_poses(records: &[PoseRecord]) -> Result<Vec<CameraPose>> {
    records.iter().map(CameraPose::from_record).collect()
}
