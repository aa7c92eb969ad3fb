//! Air flood fill.
//!
//! Starting from cells known to be inside the map, every reachable
//! unclassified cell is marked [`Block::Air`]. This assumes the map is
//! sealed: cells outside `envelope` are reported as leaks and left unset.

use std::collections::VecDeque;

use crate::core::types::IVec3;
use crate::grid::block::Block;
use crate::grid::coord::{neighbors6, GridBounds};
use crate::grid::store::Grid;

/// Outcome of one flood fill.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Cells newly marked as air.
    pub filled: usize,
    /// Positions the fill tried to enter outside the envelope.
    pub leaks: Vec<IVec3>,
}

impl FillReport {
    pub fn leaked(&self) -> bool {
        !self.leaks.is_empty()
    }
}

impl Grid {
    /// Flood-fill air from `seeds`, never leaving `envelope`.
    ///
    /// Duplicate or already-classified seeds are skipped.
    pub fn fill_air(
        &mut self,
        seeds: impl IntoIterator<Item = IVec3>,
        envelope: &GridBounds,
    ) -> FillReport {
        let mut queue: VecDeque<IVec3> = seeds.into_iter().collect();
        let mut report = FillReport::default();

        while let Some(pos) = queue.pop_front() {
            if self.contains(pos) {
                continue;
            }

            // Large embedded areas can look like small air pockets, so the
            // envelope is wider than the play area.
            if !envelope.contains(pos) {
                log::warn!("Attempted leak at ({}, {}, {})", pos.x, pos.y, pos.z);
                report.leaks.push(pos);
                continue;
            }

            self.set(pos, Block::Air);
            report.filled += 1;
            queue.extend(neighbors6(pos));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope() -> GridBounds {
        GridBounds::new(IVec3::splat(-15), IVec3::splat(40))
    }

    /// Solid shell around the cube `[lo, hi]`, leaving the inside and `gap` unset.
    fn shell(grid: &mut Grid, lo: i32, hi: i32, gap: Option<IVec3>) {
        for x in lo - 1..=hi + 1 {
            for y in lo - 1..=hi + 1 {
                for z in lo - 1..=hi + 1 {
                    let pos = IVec3::new(x, y, z);
                    let inside = (lo..=hi).contains(&x) && (lo..=hi).contains(&y) && (lo..=hi).contains(&z);
                    if !inside && Some(pos) != gap {
                        grid.set(pos, Block::Solid);
                    }
                }
            }
        }
    }

    #[test]
    fn test_sealed_cube() {
        let mut grid = Grid::new();
        shell(&mut grid, 1, 3, None);
        let solid_before = grid.count(Block::Solid);

        let report = grid.fill_air([IVec3::splat(2)], &envelope());

        assert_eq!(report.filled, 27);
        assert!(!report.leaked());
        assert_eq!(grid.count(Block::Air), 27);
        assert_eq!(grid.count(Block::Solid), solid_before);
        for x in 1..=3 {
            for y in 1..=3 {
                for z in 1..=3 {
                    assert_eq!(grid.get(IVec3::new(x, y, z)), Block::Air);
                }
            }
        }
        assert_eq!(grid.get(IVec3::splat(5)), Block::Void);
    }

    #[test]
    fn test_duplicate_seeds_are_harmless() {
        let mut grid = Grid::new();
        shell(&mut grid, 0, 1, None);
        let seeds = [IVec3::ZERO, IVec3::ZERO, IVec3::ONE, IVec3::new(-1, 0, 0)];

        let report = grid.fill_air(seeds, &envelope());
        assert_eq!(report.filled, 8);
    }

    #[test]
    fn test_gap_in_shell_leaks() {
        let mut grid = Grid::new();
        shell(&mut grid, 1, 3, Some(IVec3::new(4, 2, 2)));

        let small = GridBounds::new(IVec3::splat(-2), IVec3::splat(8));
        let report = grid.fill_air([IVec3::splat(2)], &small);

        assert!(report.leaked());
        assert!(report.leaks.iter().all(|p| !small.contains(*p)));
        // The pass still completes: everything inside the envelope is air.
        assert_eq!(grid.get(IVec3::new(8, 8, 8)), Block::Air);
        assert_eq!(grid.get(IVec3::new(9, 0, 0)), Block::Void);
    }

    #[test]
    fn test_no_seeds() {
        let mut grid = Grid::new();
        let report = grid.fill_air(std::iter::empty::<IVec3>(), &envelope());
        assert_eq!(report, FillReport::default());
        assert!(grid.is_empty());
    }
}
