//! Placement angles and orientation matrices.
//!
//! Angles are stored as `(pitch, yaw, roll)` in degrees, the order used by
//! level documents. Yaw turns around +Z, pitch around +Y and roll around +X,
//! applied roll first, then pitch, then yaw.

use crate::core::types::{IVec3, Mat3, Vec3};

/// Build the rotation matrix for a `(pitch, yaw, roll)` angle triple in degrees.
pub fn orientation(angles: Vec3) -> Mat3 {
    let pitch = angles.x.to_radians();
    let yaw = angles.y.to_radians();
    let roll = angles.z.to_radians();
    Mat3::from_rotation_z(yaw) * Mat3::from_rotation_y(pitch) * Mat3::from_rotation_x(roll)
}

/// Rotate a local grid offset by `angles` and translate it to `origin`.
///
/// The rotated offset is rounded to the nearest cell, so 90 degree
/// rotations land exactly on grid positions.
pub fn localise(offset: IVec3, origin: IVec3, angles: Vec3) -> IVec3 {
    let rotated = orientation(angles) * offset.as_vec3();
    origin + rotated.round().as_ivec3()
}
