//! Chain nodes.

use crate::core::types::Mat3;
use crate::level::Entity;

/// Stable index of a node in the linker's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A single placed item in a chain.
///
/// `prev`/`next` refer to neighbours by [`NodeId`]; in a yielded track they
/// point at other nodes of the same track.
#[derive(Clone, Debug)]
pub struct Node<C> {
    pub id: NodeId,
    instance: Entity,
    /// Per-chain configuration for this instance type.
    pub conf: C,
    /// Rotation of the instance, derived once from its angles.
    pub orient: Mat3,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
}

impl<C> Node<C> {
    pub fn new(id: NodeId, instance: Entity, conf: C) -> Self {
        let orient = instance.orientation();
        Self {
            id,
            instance,
            conf,
            orient,
            prev: None,
            next: None,
        }
    }

    /// The placed instance this node wraps.
    pub fn instance(&self) -> &Entity {
        &self.instance
    }

    pub fn name(&self) -> &str {
        &self.instance.targetname
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_new_node() {
        let inst = Entity::instance("scaffold_1", "instances/scaffold.vmf", Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0));
        let node = Node::new(NodeId(3), inst, 12u32);

        assert_eq!(node.name(), "scaffold_1");
        assert_eq!(node.conf, 12);
        assert!(node.prev.is_none() && node.next.is_none());
        assert!((node.orient * Vec3::X - Vec3::Y).length() < 1e-5);
    }
}
