//! Classifier configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::IVec3;
use crate::core::Result;
use crate::grid::GridBounds;

/// Liquid surface used by the bridge intro maps.
pub const LIQUID_BRIDGE_INTRO: &str = "nature/toxicslime_a2_bridge_intro";
/// Liquid surface used by generated maps.
pub const LIQUID_PUZZLEMAKER: &str = "nature/toxicslime_puzzlemaker_cheap";

/// Tunable bounds and materials for level classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Entities inside this box seed the air fill. Elevators and other
    /// entities outside the main area are excluded so the border is never
    /// set to air.
    pub play_area: GridBounds,
    /// The fill reports a leak when it tries to leave this box.
    pub fill_envelope: GridBounds,
    /// Side materials marking a brush as a liquid column (case-insensitive).
    pub liquid_materials: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            play_area: GridBounds::new(IVec3::ZERO, IVec3::splat(25)),
            fill_envelope: GridBounds::new(IVec3::splat(-15), IVec3::splat(40)),
            liquid_materials: vec![
                LIQUID_BRIDGE_INTRO.to_string(),
                LIQUID_PUZZLEMAKER.to_string(),
            ],
        }
    }
}

impl ClassifierConfig {
    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClassifierConfig::default();
        assert!(config.play_area.contains(IVec3::splat(25)));
        assert!(!config.play_area.contains(IVec3::splat(26)));
        assert!(config.fill_envelope.contains(IVec3::splat(-15)));
        assert_eq!(config.liquid_materials.len(), 2);
    }

    #[test]
    fn test_load_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classify.json");
        std::fs::write(&path, r#"{ "fill_envelope": { "min": [-4, -4, -4], "max": [10, 10, 10] } }"#).unwrap();

        let config = ClassifierConfig::load(&path).unwrap();
        assert_eq!(config.fill_envelope.max, IVec3::splat(10));
        assert_eq!(config.play_area, ClassifierConfig::default().play_area);
        assert_eq!(config.liquid_materials, ClassifierConfig::default().liquid_materials);
    }

    #[test]
    fn test_load_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(ClassifierConfig::load(&path), Err(crate::core::Error::Json(_))));
    }
}
