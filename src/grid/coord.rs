//! Grid coordinate constants and conversions.
//!
//! Grid cells are cubes of `CELL_SIZE` world units. Cell `(0, 0, 0)` spans
//! world `[0, 128)` on every axis.

use serde::{Deserialize, Serialize};

use crate::core::types::{IVec3, Vec3};

/// Edge length of one grid cell in world units.
pub const CELL_SIZE: f32 = 128.0;

/// Half a cell, the offset from a cell's corner to its center.
pub const HALF_CELL: f32 = CELL_SIZE / 2.0;

/// Convert a world position to the grid cell containing it.
pub fn world_to_grid(pos: Vec3) -> IVec3 {
    (pos / CELL_SIZE).floor().as_ivec3()
}

/// Convert a grid cell to the world position of its center.
pub fn grid_to_world(pos: IVec3) -> Vec3 {
    pos.as_vec3() * CELL_SIZE + Vec3::splat(HALF_CELL)
}

/// The six axis-aligned neighbours of a cell.
#[inline]
pub fn neighbors6(c: IVec3) -> [IVec3; 6] {
    [
        IVec3::new(c.x, c.y + 1, c.z),
        IVec3::new(c.x, c.y - 1, c.z),
        IVec3::new(c.x + 1, c.y, c.z),
        IVec3::new(c.x - 1, c.y, c.z),
        IVec3::new(c.x, c.y, c.z + 1),
        IVec3::new(c.x, c.y, c.z - 1),
    ]
}

/// The four horizontal neighbours of a cell.
#[inline]
pub fn neighbors4(c: IVec3) -> [IVec3; 4] {
    [
        IVec3::new(c.x - 1, c.y, c.z),
        IVec3::new(c.x + 1, c.y, c.z),
        IVec3::new(c.x, c.y + 1, c.z),
        IVec3::new(c.x, c.y - 1, c.z),
    ]
}

/// Inclusive box of grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min: IVec3,
    pub max: IVec3,
}

impl GridBounds {
    pub fn new(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    /// Componentwise inclusive containment.
    pub fn contains(&self, pos: IVec3) -> bool {
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_grid() {
        assert_eq!(world_to_grid(Vec3::ZERO), IVec3::ZERO);
        assert_eq!(world_to_grid(Vec3::new(127.9, 128.0, 300.0)), IVec3::new(0, 1, 2));
        assert_eq!(world_to_grid(Vec3::new(-0.5, -128.0, -129.0)), IVec3::new(-1, -1, -2));
    }

    #[test]
    fn test_grid_to_world_is_cell_center() {
        assert_eq!(grid_to_world(IVec3::ZERO), Vec3::splat(64.0));
        assert_eq!(grid_to_world(IVec3::new(1, -1, 2)), Vec3::new(192.0, -64.0, 320.0));
    }

    #[test]
    fn test_conversions_are_inverse() {
        for x in -3..3 {
            for z in -3..3 {
                let cell = IVec3::new(x, 7, z);
                assert_eq!(world_to_grid(grid_to_world(cell)), cell);
            }
        }
        // Any point in a cell maps back to the same cell center.
        let p = Vec3::new(130.0, 250.0, 5.0);
        assert_eq!(grid_to_world(world_to_grid(p)), Vec3::new(192.0, 192.0, 64.0));
    }

    #[test]
    fn test_bounds_are_componentwise() {
        let b = GridBounds::new(IVec3::ZERO, IVec3::splat(25));
        assert!(b.contains(IVec3::new(0, 25, 12)));
        assert!(!b.contains(IVec3::new(3, -1, 3)));
        assert!(!b.contains(IVec3::new(26, 0, 0)));
    }

    #[test]
    fn test_neighbors() {
        let n = neighbors6(IVec3::ZERO);
        assert_eq!(n.len(), 6);
        assert!(n.contains(&IVec3::new(0, 0, -1)));
        assert!(neighbors4(IVec3::ZERO).iter().all(|p| p.z == 0));
    }
}
