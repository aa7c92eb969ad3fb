//! Grid - sparse map from cell position to block tag.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::{IVec3, Vec3};
use crate::core::Result;
use crate::grid::block::Block;
use crate::grid::coord::{grid_to_world, world_to_grid};
use crate::level::{Entity, Level};

/// Sparse classification grid.
///
/// Unset cells read as [`Block::Void`] and are never iterated. Every accessor
/// comes in a grid-space form and a `_world` form that first converts a world
/// position to the cell containing it.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    cells: HashMap<IVec3, Block>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag at a grid position, `Void` if unset.
    pub fn get(&self, pos: IVec3) -> Block {
        self.cells.get(&pos).copied().unwrap_or_default()
    }

    /// Tag of the cell containing a world position.
    pub fn get_world(&self, pos: Vec3) -> Block {
        self.get(world_to_grid(pos))
    }

    /// Store a tag. Setting `Void` clears the cell, so void is never stored.
    pub fn set(&mut self, pos: IVec3, block: Block) {
        if block == Block::Void {
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, block);
        }
    }

    pub fn set_world(&mut self, pos: Vec3, block: Block) {
        self.set(world_to_grid(pos), block);
    }

    /// Store a tag given by numeric id, rejecting unknown ids.
    pub fn set_raw(&mut self, pos: IVec3, id: u8) -> Result<()> {
        let block = Block::from_id(id)?;
        self.set(pos, block);
        Ok(())
    }

    /// True if the cell was explicitly set.
    pub fn contains(&self, pos: IVec3) -> bool {
        self.cells.contains_key(&pos)
    }

    pub fn contains_world(&self, pos: Vec3) -> bool {
        self.contains(world_to_grid(pos))
    }

    /// Iterate explicitly set cells.
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, Block)> + '_ {
        self.cells.iter().map(|(pos, block)| (*pos, *block))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells holding `block`.
    pub fn count(&self, block: Block) -> usize {
        self.cells.values().filter(|b| **b == block).count()
    }

    /// Debug: write a marker entity into the level for every set cell.
    ///
    /// This makes the level uncompilable; it exists to inspect the
    /// classification in an editor.
    pub fn dump_to_level(&self, level: &mut Level) {
        let mut cells: Vec<_> = self.iter().collect();
        cells.sort_by_key(|(pos, _)| (pos.x, pos.y, pos.z));

        for (pos, block) in cells {
            let mut entity = Entity {
                classname: marker_class(block).to_string(),
                targetname: block.name().to_string(),
                origin: Some(grid_to_world(pos)),
                ..Default::default()
            };
            entity.keys.insert("pos".to_string(), format!("{} {} {}", pos.x, pos.y, pos.z));
            level.create_entity(entity);
        }
    }

    /// Snapshot for serialization, sorted by position.
    pub fn snapshot(&self) -> GridSnapshot {
        let mut cells: Vec<_> = self
            .iter()
            .map(|(pos, block)| SnapshotCell { pos: pos.to_array(), block: block.id() })
            .collect();
        cells.sort_by_key(|c| c.pos);
        GridSnapshot { cells }
    }

    /// Rebuild a grid from a snapshot. Fails on unknown tag ids.
    pub fn from_snapshot(snapshot: &GridSnapshot) -> Result<Self> {
        let mut grid = Grid::new();
        for cell in &snapshot.cells {
            grid.set_raw(IVec3::from_array(cell.pos), cell.block)?;
        }
        Ok(grid)
    }
}

/// Editor icon used for each tag family when dumping.
fn marker_class(block: Block) -> &'static str {
    match block {
        Block::Void => "env_global",
        Block::Solid => "env_cubemap",
        Block::Embed | Block::EmbedOccupied => "func_instance_parms",
        Block::Occupied => "info_target",
        Block::Air => "info_null",
        Block::Liquid(_) => "water_lod_control",
        Block::Pit(_) => "logic_autosave",
    }
}

/// One cell of a [`GridSnapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCell {
    pub pos: [i32; 3],
    pub block: u8,
}

/// Serializable form of a [`Grid`], with numeric tag ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub cells: Vec<SnapshotCell>,
}

impl GridSnapshot {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, serde_json::to_string(self)?)?;
        Ok(())
    }
}
