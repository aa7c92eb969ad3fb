//! Axis-aligned bounding box

use serde::{Deserialize, Serialize};

use crate::core::types::Vec3;

/// Axis-aligned bounding box defined by min and max corners, in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Get center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get size (max - min)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// True if the box is a cube with the given edge length.
    pub fn is_cube(&self, edge: f32) -> bool {
        self.size() == Vec3::splat(edge)
    }
}
