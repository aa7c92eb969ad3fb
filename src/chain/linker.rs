//! Reconstruct tracks from linked item instances.
//!
//! Items placed as a chain (scaffolds, vactubes) are wired to each other to
//! record their order. Those connections are not real game logic: the linker
//! consumes them from the connection graph, links nodes forwards/backwards,
//! and yields every maximal track as an ordered list of nodes.

use std::collections::HashMap;

use crate::chain::node::{Node, NodeId};
use crate::chain::wiring::ConnectionGraph;
use crate::core::{Error, Result};
use crate::level::Level;

/// Link all instances of the given files into tracks.
///
/// `inst_files` maps a lower-case instance file to the configuration stored
/// on each of its nodes. Structural connections are removed from `graph`,
/// and nodes left with no other wiring lose their antlines. Link errors are
/// returned immediately; loops are only detected while iterating.
///
/// Instance names are unique per item; if a name repeats, the last instance
/// with that name replaces the earlier ones.
pub fn chain<C, G>(
    level: &Level,
    graph: &mut G,
    inst_files: &HashMap<String, C>,
    allow_loop: bool,
) -> Result<Chains<C>>
where
    C: Clone,
    G: ConnectionGraph + ?Sized,
{
    let mut nodes: Vec<Node<C>> = Vec::new();
    let mut by_name: HashMap<String, NodeId> = HashMap::new();

    for inst in level.instances() {
        let Some(conf) = inst_files.get(&inst.file_key()) else {
            continue;
        };
        let name = inst.targetname.clone();
        if !graph.has_item(&name) {
            return Err(Error::MissingItem(name));
        }
        if let Some(&id) = by_name.get(&name) {
            log::warn!("Duplicate chain instance \"{}\", using the last one", name);
            nodes[id.0] = Node::new(id, inst.clone(), conf.clone());
            continue;
        }
        let id = NodeId(nodes.len());
        by_name.insert(name, id);
        nodes.push(Node::new(id, inst.clone(), conf.clone()));
    }

    link(&mut nodes, &by_name, graph)?;
    log::debug!("Linked {} chain nodes", nodes.len());

    Ok(Chains {
        slots: nodes.into_iter().map(Some).collect(),
        cursor: 0,
        allow_loop,
        failed: false,
    })
}

/// Consume structural connections and set `prev`/`next` pairs.
fn link<C, G>(nodes: &mut [Node<C>], by_name: &HashMap<String, NodeId>, graph: &mut G) -> Result<()>
where
    G: ConnectionGraph + ?Sized,
{
    for index in 0..nodes.len() {
        let name = nodes[index].name().to_string();
        let mut has_other_io = false;

        for target in graph.outputs(&name) {
            let Some(&next) = by_name.get(&target) else {
                // Not one of ours - real wiring.
                has_other_io = true;
                continue;
            };
            graph.remove_connection(&name, &target);

            if nodes[index].next.is_some() {
                return Err(Error::MultipleOutputs(name));
            }
            if nodes[next.0].prev.is_some() {
                return Err(Error::MultipleInputs(target));
            }
            nodes[index].next = Some(next);
            nodes[next.0].prev = Some(NodeId(index));
        }

        if !has_other_io {
            graph.delete_antlines(&name);
        }
    }
    Ok(())
}

/// Lazily yields each track, start to end.
///
/// Nodes are moved out of the arena as their track is yielded. Tracks come
/// out in no particular order. After an error the iterator is exhausted.
pub struct Chains<C> {
    slots: Vec<Option<Node<C>>>,
    cursor: usize,
    allow_loop: bool,
    failed: bool,
}

impl<C> Chains<C> {
    /// Nodes not yet yielded.
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    fn node(&self, id: NodeId) -> Option<&Node<C>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Walk backwards from `pop` to the first node of its track.
    fn find_start(&self, pop: NodeId) -> Result<NodeId> {
        let mut start = pop;
        loop {
            match self.node(start).and_then(|n| n.prev) {
                None => return Ok(start),
                Some(prev) if prev == pop => {
                    if !self.allow_loop {
                        let name = self.node(pop).map(|n| n.name().to_string()).unwrap_or_default();
                        return Err(Error::LoopDetected(name));
                    }
                    return Ok(pop);
                }
                Some(prev) => start = prev,
            }
        }
    }
}

impl<C> Iterator for Chains<C> {
    type Item = Result<Vec<Node<C>>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while self.cursor < self.slots.len() && self.slots[self.cursor].is_none() {
            self.cursor += 1;
        }
        if self.cursor >= self.slots.len() {
            return None;
        }

        let start = match self.find_start(NodeId(self.cursor)) {
            Ok(start) => start,
            Err(err) => {
                self.failed = true;
                return Some(Err(err));
            }
        };

        let mut track = Vec::new();
        let mut current = start;
        while let Some(node) = self.slots.get_mut(current.0).and_then(Option::take) {
            let next = node.next;
            track.push(node);
            match next {
                Some(next) if next != start => current = next,
                _ => break,
            }
        }
        Some(Ok(track))
    }
}
