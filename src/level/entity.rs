//! Point entities and placed instances.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::types::{Mat3, Vec3};
use crate::math::orientation;

/// Class name of placed item instances.
pub const INSTANCE_CLASS: &str = "func_instance";

/// A point entity in a level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    pub classname: String,
    pub targetname: String,
    /// Instance file, the type identifier of placed items.
    pub file: String,
    pub origin: Option<Vec3>,
    /// `(pitch, yaw, roll)` in degrees.
    pub angles: Vec3,
    /// Remaining key-values.
    pub keys: BTreeMap<String, String>,
}

impl Entity {
    /// A placed item instance.
    pub fn instance(name: impl Into<String>, file: impl Into<String>, origin: Vec3, angles: Vec3) -> Self {
        Self {
            classname: INSTANCE_CLASS.to_string(),
            targetname: name.into(),
            file: file.into(),
            origin: Some(origin),
            angles,
            keys: BTreeMap::new(),
        }
    }

    pub fn is_instance(&self) -> bool {
        self.classname.eq_ignore_ascii_case(INSTANCE_CLASS)
    }

    /// Lower-cased instance file, used as a lookup key.
    pub fn file_key(&self) -> String {
        self.file.to_ascii_lowercase()
    }

    /// Rotation matrix for this entity's placement.
    pub fn orientation(&self) -> Mat3 {
        orientation(self.angles)
    }
}
