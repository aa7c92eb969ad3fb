//! Bottomless pit eligibility.

use crate::math::Aabb;

/// Decides whether a liquid column is turned into a bottomless pit.
///
/// Pits are a level-wide setting: `pits_allowed` is asked once per level,
/// and `is_pit` only for liquid brushes when it returned true.
pub trait PitRules {
    fn pits_allowed(&self) -> bool;

    fn is_pit(&self, bbox: &Aabb) -> bool;
}

/// Level without pits: every column is liquid.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPits;

impl PitRules for NoPits {
    fn pits_allowed(&self) -> bool {
        false
    }

    fn is_pit(&self, _bbox: &Aabb) -> bool {
        false
    }
}

/// Pits enabled for columns reaching down to the level floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PitSettings {
    pub enabled: bool,
    /// Columns whose bottom is at or below this height become pits.
    pub floor_z: f32,
}

impl PitRules for PitSettings {
    fn pits_allowed(&self) -> bool {
        self.enabled
    }

    fn is_pit(&self, bbox: &Aabb) -> bool {
        bbox.min.z <= self.floor_z
    }
}
