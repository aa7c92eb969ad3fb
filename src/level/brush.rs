//! World brushes.

use serde::{Deserialize, Serialize};

use crate::math::Aabb;

/// A convex world brush, reduced to what classification needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    pub id: u32,
    pub bbox: Aabb,
    /// Surface material of every side.
    #[serde(default)]
    pub materials: Vec<String>,
}

impl Brush {
    pub fn new(id: u32, bbox: Aabb, materials: Vec<String>) -> Self {
        Self { id, bbox, materials }
    }

    /// Case-insensitive check for a side material.
    pub fn has_material(&self, material: &str) -> bool {
        self.materials.iter().any(|m| m.eq_ignore_ascii_case(material))
    }
}
