//! Classification grid: block tags, the sparse grid store and air fill.

pub mod block;
pub mod coord;
pub mod fill;
pub mod store;

pub use block::{Block, Layer};
pub use coord::{grid_to_world, world_to_grid, GridBounds, CELL_SIZE, HALF_CELL};
pub use fill::FillReport;
pub use store::{Grid, GridSnapshot, SnapshotCell};
