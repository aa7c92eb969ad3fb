//! Levelscan - level grid classification and item chain linking
//!
//! Two passes run over a compiled level before item generation:
//! - `classify` tags every grid cell (solid, embed, air, liquid, pit...)
//!   and flood-fills the playable space.
//! - `chain` links instances placed as tracks into ordered node lists.

pub mod core;
pub mod math;
pub mod grid;
pub mod level;
pub mod classify;
pub mod chain;
