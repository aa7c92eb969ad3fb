//! Chained items: tracks of instances linked point to point.

pub mod linker;
pub mod node;
pub mod wiring;

pub use linker::{chain, Chains};
pub use node::{Node, NodeId};
pub use wiring::{ConnectionGraph, Item, Wiring};
