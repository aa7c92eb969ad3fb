//! Level classification: brushes and entities -> block grid.
//!
//! The pipeline runs in three passes over one level:
//! 1. Tag every brush cell as solid, embed or liquid/pit column, and collect
//!    air seeds from entity origins and submerged column neighbours.
//! 2. Flood-fill air from the seeds (`Grid::fill_air`).
//! 3. Upgrade air cells declared hollow by embed definitions.

pub mod config;
pub mod embed;
pub mod pit;

pub use config::ClassifierConfig;
pub use embed::{reconcile, EmbedTable};
pub use pit::{NoPits, PitRules, PitSettings};

use std::collections::BTreeMap;

use crate::core::types::IVec3;
use crate::grid::coord::neighbors4;
use crate::grid::{world_to_grid, Block, FillReport, Grid, CELL_SIZE, HALF_CELL};
use crate::level::{Brush, Level};

/// Attribute set when the level contains toxic liquid.
pub const ATTR_LIQUID: &str = "goo";
/// Attribute set when the level contains a bottomless pit.
pub const ATTR_PIT: &str = "bottomless_pit";

/// Hazards found while classifying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HazardFlags {
    pub liquid: bool,
    pub pit: bool,
}

impl HazardFlags {
    /// Set the matching attributes. Existing attributes are never cleared.
    pub fn merge_into(&self, attrs: &mut BTreeMap<String, bool>) {
        if self.liquid {
            attrs.insert(ATTR_LIQUID.to_string(), true);
        }
        if self.pit {
            attrs.insert(ATTR_PIT.to_string(), true);
        }
    }
}

/// Result of classifying one level.
#[derive(Clone, Debug, Default)]
pub struct Classification {
    pub grid: Grid,
    pub hazards: HazardFlags,
    /// Number of air seeds, duplicates included.
    pub seeds: usize,
    pub fill: FillReport,
    /// Cells upgraded to `EmbedOccupied`.
    pub embedded: usize,
}

/// Classifies the brushes and entities of a level into a [`Grid`].
pub struct Classifier<'a> {
    config: &'a ClassifierConfig,
    embeds: &'a EmbedTable,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a ClassifierConfig, embeds: &'a EmbedTable) -> Self {
        Self { config, embeds }
    }

    /// Run all passes over `level`.
    ///
    /// Liquid brushes that become pits are removed from the level.
    pub fn classify(&self, level: &mut Level, pits: &dyn PitRules) -> Classification {
        let mut grid = Grid::new();
        let mut hazards = HazardFlags::default();
        let mut seeds = Vec::new();
        let mut embed_cells = Vec::new();

        for entity in &level.entities {
            let Some(origin) = entity.origin else {
                continue;
            };
            let origin = world_to_grid(origin);

            if self.config.play_area.contains(origin) {
                seeds.push(origin);
            }
            embed_cells.extend(self.embeds.candidates(entity, origin));
        }

        let pits_allowed = pits.pits_allowed();
        let mut removed = Vec::new();

        for (index, brush) in level.brushes.iter().enumerate() {
            if self.is_liquid(brush) {
                let is_pit = pits_allowed && pits.is_pit(&brush.bbox);
                classify_column(&mut grid, brush, is_pit, &mut seeds);

                if is_pit {
                    // Pits don't use the liquid brush.
                    removed.push(index);
                    hazards.pit = true;
                } else {
                    hazards.liquid = true;
                }
                continue;
            }

            let pos = world_to_grid(brush.bbox.center());
            let block = if brush.bbox.is_cube(CELL_SIZE) {
                Block::Solid
            } else {
                Block::Embed
            };
            set_once(&mut grid, pos, block);
        }

        level.remove_brushes_at(&removed);

        log::info!("Analysed level, filling air... ({} starting positions)", seeds.len());
        let seed_count = seeds.len();
        let fill = grid.fill_air(seeds, &self.config.fill_envelope);
        if fill.leaked() {
            log::warn!("Level is not sealed: {} leak positions", fill.leaks.len());
        }
        log::info!("Air filled! ({} cells)", fill.filled);

        let embedded = reconcile(&mut grid, &embed_cells);
        log::debug!("{} of {} embed cells occupied", embedded, embed_cells.len());

        Classification {
            grid,
            hazards,
            seeds: seed_count,
            fill,
            embedded,
        }
    }

    fn is_liquid(&self, brush: &Brush) -> bool {
        self.config.liquid_materials.iter().any(|m| brush.has_material(m))
    }
}

/// Tag every cell of a liquid column, bottom to top.
fn classify_column(grid: &mut Grid, brush: &Brush, is_pit: bool, seeds: &mut Vec<IVec3>) {
    let min = brush.bbox.min;
    let g_x = ((min.x + HALF_CELL) / CELL_SIZE).floor() as i32;
    let g_y = ((min.y + HALF_CELL) / CELL_SIZE).floor() as i32;

    let cell = CELL_SIZE as i32;
    let z_start = min.z as i32 + cell / 2;
    let z_end = brush.bbox.max.z as i32;
    let heights: Vec<i32> = (z_start..z_end).step_by(cell as usize).collect();
    let Some(top) = heights.len().checked_sub(1) else {
        return;
    };

    for (index, z) in heights.into_iter().enumerate() {
        let pos = IVec3::new(g_x, g_y, z.div_euclid(cell));
        set_once(grid, pos, Block::from_column(is_pit, index == top, index == 0));

        // Fully submerged tunnels are never reached from above, so seed
        // the neighbours of every cell below the surface.
        if index != top {
            seeds.extend(neighbors4(pos));
        }
    }
}

/// Tag a cell unless an earlier brush already classified it.
fn set_once(grid: &mut Grid, pos: IVec3, block: Block) {
    if grid.contains(pos) {
        log::debug!("Cell ({}, {}, {}) already {}, skipping {}", pos.x, pos.y, pos.z, grid.get(pos).name(), block.name());
        return;
    }
    grid.set(pos, block);
}
