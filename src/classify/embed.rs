//! Embedded voxel definitions and the post-fill reconciliation pass.
//!
//! Some items are partly sunk into the walls ("embedded"). Their definitions
//! list cells, in the item's local frame, that are open inside even though
//! the fill sees them as ordinary air. After the fill those cells are
//! upgraded to [`Block::EmbedOccupied`].

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::IVec3;
use crate::core::Result;
use crate::grid::{Block, Grid};
use crate::level::Entity;
use crate::math::localise;

/// Item id -> embedded cells, plus instance file -> item id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedTable {
    /// Local-frame cell offsets per item id.
    pub items: HashMap<String, Vec<IVec3>>,
    /// Instance file (lower-case) to item id.
    pub instances: HashMap<String, String>,
}

impl EmbedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let table: EmbedTable = serde_json::from_str(&json)?;
        Ok(table.normalized())
    }

    fn normalized(self) -> Self {
        let instances = self
            .instances
            .into_iter()
            .map(|(file, id)| (file.to_ascii_lowercase(), id))
            .collect();
        Self { items: self.items, instances }
    }

    /// Define the embedded cells of an item.
    pub fn define(&mut self, item_id: impl Into<String>, offsets: Vec<IVec3>) {
        self.items.insert(item_id.into(), offsets);
    }

    /// Register the instance file used to place an item.
    pub fn register_instance(&mut self, file: &str, item_id: impl Into<String>) {
        self.instances.insert(file.to_ascii_lowercase(), item_id.into());
    }

    /// Embedded offsets for an instance file, or for an item id used directly.
    pub fn offsets_for(&self, file: &str) -> Option<&[IVec3]> {
        let key = file.to_ascii_lowercase();
        let item_id = self.instances.get(&key).map(String::as_str).unwrap_or(file);
        self.items.get(item_id).map(Vec::as_slice)
    }

    /// Embedded cells of a placed entity whose origin is in cell `origin`.
    pub fn candidates(&self, entity: &Entity, origin: IVec3) -> Vec<IVec3> {
        self.offsets_for(&entity.file)
            .map(|offsets| {
                offsets
                    .iter()
                    .map(|offset| localise(*offset, origin, entity.angles))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Upgrade candidate cells still holding air to `EmbedOccupied`.
///
/// Candidates on any other tag are left alone; an embed may overlap solid
/// structure. Returns the number of upgraded cells.
pub fn reconcile(grid: &mut Grid, candidates: &[IVec3]) -> usize {
    let mut upgraded = 0;
    for pos in candidates {
        if grid.get(*pos) == Block::Air {
            grid.set(*pos, Block::EmbedOccupied);
            upgraded += 1;
        }
    }
    upgraded
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn table() -> EmbedTable {
        let mut table = EmbedTable::new();
        table.define("ITEM_OBS_ROOM", vec![IVec3::new(-1, 0, 0), IVec3::new(-2, 0, 0)]);
        table.register_instance("Instances/Obs_Room.vmf", "ITEM_OBS_ROOM");
        table
    }

    #[test]
    fn test_offsets_lookup() {
        let table = table();
        assert_eq!(table.offsets_for("instances/obs_room.vmf").map(|o| o.len()), Some(2));
        assert!(table.offsets_for("ITEM_OBS_ROOM").is_some());
        assert!(table.offsets_for("instances/other.vmf").is_none());
    }

    #[test]
    fn test_candidates_rotate_with_entity() {
        let table = table();
        let entity = Entity::instance("obs", "instances/obs_room.vmf", Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0));

        let cells = table.candidates(&entity, IVec3::new(10, 10, 2));
        assert_eq!(cells, vec![IVec3::new(10, 9, 2), IVec3::new(10, 8, 2)]);
    }

    #[test]
    fn test_reconcile_only_upgrades_air() {
        let mut grid = Grid::new();
        grid.set(IVec3::ZERO, Block::Air);
        grid.set(IVec3::X, Block::Solid);

        let upgraded = reconcile(&mut grid, &[IVec3::ZERO, IVec3::X, IVec3::Y, IVec3::ZERO]);

        assert_eq!(upgraded, 1);
        assert_eq!(grid.get(IVec3::ZERO), Block::EmbedOccupied);
        assert_eq!(grid.get(IVec3::X), Block::Solid);
        assert_eq!(grid.get(IVec3::Y), Block::Void);
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("embeds.json");
        std::fs::write(&path, r#"{
            "items": { "ITEM_LIGHT_BRIDGE": [[0, 0, -1]] },
            "instances": { "Instances/Bridge.VMF": "ITEM_LIGHT_BRIDGE" }
        }"#).unwrap();

        let table = EmbedTable::load(&path).unwrap();
        assert_eq!(table.offsets_for("instances/bridge.vmf"), Some(&[IVec3::new(0, 0, -1)][..]));
    }
}
