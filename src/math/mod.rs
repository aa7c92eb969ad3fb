//! Mathematical utilities and data structures

pub mod aabb;
pub mod angles;

pub use aabb::Aabb;
pub use angles::{localise, orientation};
