extern crate nalgebra as na;

use na::{Vector3,Matrix3,Quaternion,UnitQuaternion,Isometry3,Translation3};
use crate::Float;

/// Quaternions with a norm below this cannot be turned into a rotation.
pub const MIN_QUATERNION_NORM: Float = 1e-12;
/// Allowed deviation from unit norm before a quaternion counts as non-unit.
pub const UNIT_NORM_TOLERANCE: Float = 1e-6;

/**
 * The file stores quaternions scalar first (qw,qx,qy,qz), nalgebra keeps the
 * coefficients scalar last (i,j,k,w). Quaternion::new takes the scalar first and
 * does the reordering, so this is the only place the file order is interpreted.
 */
pub fn quaternion_from_wxyz(wxyz: &[Float;4]) -> Quaternion<Float> {
    Quaternion::<Float>::new(wxyz[0],wxyz[1],wxyz[2],wxyz[3])
}

pub fn is_unit(quat: &Quaternion<Float>) -> bool {
    (quat.norm() - 1.0).abs() <= UNIT_NORM_TOLERANCE
}

/**
 * None if the quaternion has no direction to normalize.
 */
pub fn normalized_rotation(quat: &Quaternion<Float>) -> Option<UnitQuaternion<Float>> {
    UnitQuaternion::<Float>::try_new(*quat, MIN_QUATERNION_NORM)
}

pub fn from_parts(t: &Vector3<Float>, quat: &UnitQuaternion<Float>) -> Isometry3<Float> {
    Isometry3::<Float>::from_parts(Translation3::from(*t), *quat)
}

pub fn decomp(pose:&Isometry3<Float>) -> (Vector3<Float>,Matrix3<Float>) {
    (pose.translation.vector,pose.rotation.to_rotation_matrix().matrix().into_owned())
}

/**
 * Camera center in world coordinates for a world to camera transform.
 * t = -R_wc * C  =>  C = -R_wc^T * t
 */
pub fn camera_center(world_to_camera: &Isometry3<Float>) -> Vector3<Float> {
    let (t, r_wc) = decomp(world_to_camera);
    -(r_wc.transpose()*t)
}

/**
 * The optical axis (+Z in the camera frame) rotated into the world frame.
 */
pub fn viewing_direction(world_to_camera: &Isometry3<Float>) -> Vector3<Float> {
    let (_, r_wc) = decomp(world_to_camera);
    r_wc.transpose()*Vector3::<Float>::z()
}
