//! Item connection graph.
//!
//! The linker only needs a narrow view of the wiring: an item's outputs,
//! removing a single connection and deleting an item's antlines. Any
//! wiring subsystem can provide that through [`ConnectionGraph`];
//! [`Wiring`] is a plain in-memory implementation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Result;

/// Named items with outgoing connections.
pub trait ConnectionGraph {
    fn has_item(&self, name: &str) -> bool;

    /// Target names of the item's outputs.
    fn outputs(&self, name: &str) -> Vec<String>;

    /// Remove the connection `from -> to`. Returns false if absent.
    fn remove_connection(&mut self, from: &str, to: &str) -> bool;

    /// Delete the indicator antline geometry of an item.
    fn delete_antlines(&mut self, name: &str);
}

/// One item in the wiring graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub name: String,
    /// Names of the items this one outputs to.
    pub outputs: Vec<String>,
    /// Antline geometry groups attached to this item.
    pub antlines: Vec<String>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn with_output(mut self, target: impl Into<String>) -> Self {
        self.outputs.push(target.into());
        self
    }

    pub fn with_antline(mut self, group: impl Into<String>) -> Self {
        self.antlines.push(group.into());
        self
    }
}

#[derive(Deserialize)]
struct WiringFile {
    items: Vec<Item>,
}

/// In-memory connection graph.
#[derive(Clone, Debug, Default)]
pub struct Wiring {
    items: BTreeMap<String, Item>,
    deleted_antlines: Vec<String>,
}

impl Wiring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file of the form `{ "items": [ ... ] }`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let file: WiringFile = serde_json::from_str(&json)?;
        let mut wiring = Wiring::new();
        for item in file.items {
            wiring.add_item(item);
        }
        Ok(wiring)
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.insert(item.name.clone(), item);
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Antline groups deleted so far, in deletion order.
    pub fn deleted_antlines(&self) -> &[String] {
        &self.deleted_antlines
    }
}

impl ConnectionGraph for Wiring {
    fn has_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    fn outputs(&self, name: &str) -> Vec<String> {
        self.items.get(name).map(|i| i.outputs.clone()).unwrap_or_default()
    }

    fn remove_connection(&mut self, from: &str, to: &str) -> bool {
        let Some(item) = self.items.get_mut(from) else {
            return false;
        };
        match item.outputs.iter().position(|t| t == to) {
            Some(index) => {
                item.outputs.remove(index);
                true
            }
            None => false,
        }
    }

    fn delete_antlines(&mut self, name: &str) {
        if let Some(item) = self.items.get_mut(name) {
            self.deleted_antlines.append(&mut item.antlines);
        }
    }
}
