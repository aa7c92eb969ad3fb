//! Level geometry: brushes and entities from one compiled map.
//!
//! Levels are read from a JSON document. Parsing the raw map format is
//! done upstream; this is the reduced form the analysis passes consume.

pub mod brush;
pub mod entity;

pub use brush::Brush;
pub use entity::{Entity, INSTANCE_CLASS};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Result;

/// Brushes and entities of one level.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    pub brushes: Vec<Brush>,
    pub entities: Vec<Entity>,
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a level document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write the level back out as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn add_brush(&mut self, brush: Brush) {
        self.brushes.push(brush);
    }

    /// Remove the brushes at the given positions in `brushes`.
    ///
    /// Brush ids are not guaranteed unique, so removal goes by position.
    pub fn remove_brushes_at(&mut self, indices: &[usize]) -> Vec<Brush> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.brushes)
            .into_iter()
            .enumerate()
            .partition(|(index, _)| indices.contains(index));
        self.brushes = kept.into_iter().map(|(_, brush)| brush).collect();
        removed.into_iter().map(|(_, brush)| brush).collect()
    }

    pub fn create_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Placed item instances.
    pub fn instances(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_instance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec3;
    use crate::math::Aabb;

    fn cube(id: u32) -> Brush {
        Brush::new(id, Aabb::new(Vec3::ZERO, Vec3::splat(128.0)), vec!["tools/toolsnodraw".into()])
    }

    #[test]
    fn test_remove_brushes_at() {
        let mut level = Level::new();
        level.add_brush(cube(1));
        level.add_brush(cube(2));
        level.add_brush(cube(3));

        let removed = level.remove_brushes_at(&[0, 2]);
        assert_eq!(removed.iter().map(|b| b.id).collect::<Vec<_>>(), [1, 3]);
        assert_eq!(level.brushes.iter().map(|b| b.id).collect::<Vec<_>>(), [2]);

        assert!(level.remove_brushes_at(&[5]).is_empty());
        assert_eq!(level.brushes.len(), 1);
    }

    #[test]
    fn test_remove_brushes_with_shared_id() {
        let mut level = Level::new();
        level.add_brush(cube(4));
        level.add_brush(Brush::new(4, Aabb::default(), vec!["nature/water".into()]));

        level.remove_brushes_at(&[1]);
        assert_eq!(level.brushes.len(), 1);
        assert!(level.brushes[0].has_material("tools/toolsnodraw"));
    }

    #[test]
    fn test_has_material_ignores_case() {
        let brush = Brush::new(1, Aabb::default(), vec!["Nature/ToxicSlime_Puzzlemaker_Cheap".into()]);
        assert!(brush.has_material("nature/toxicslime_puzzlemaker_cheap"));
        assert!(!brush.has_material("nature/water"));
    }

    #[test]
    fn test_instances() {
        let mut level = Level::new();
        level.create_entity(Entity::instance("track_1", "instances/track.vmf", Vec3::ZERO, Vec3::ZERO));
        level.create_entity(Entity { classname: "info_null".into(), ..Default::default() });
        assert_eq!(level.instances().count(), 1);
    }

    #[test]
    fn test_load_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.json");
        std::fs::write(&path, r#"{
            "brushes": [{"id": 7, "bbox": {"min": [0, 0, 0], "max": [128, 128, 128]}}],
            "entities": [{"classname": "func_instance", "targetname": "a", "file": "x.vmf",
                          "origin": [64, 64, 64], "angles": [0, 90, 0]}]
        }"#).unwrap();

        let level = Level::load(&path).unwrap();
        assert_eq!(level.brushes[0].id, 7);
        assert!(level.brushes[0].materials.is_empty());
        assert_eq!(level.entities[0].origin, Some(Vec3::splat(64.0)));
        assert_eq!(level.entities[0].angles.y, 90.0);

        let out = dir.path().join("out.json");
        level.save(&out).unwrap();
        assert_eq!(Level::load(&out).unwrap().entities.len(), 1);
    }
}
