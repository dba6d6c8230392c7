//! The in-memory map store.
//!
//! Each entity kind is held in two parallel structures: an arrival-ordered
//! list (position-based access) and an id-keyed map of list positions
//! (identity-based access). The map always points at live list entries.
//! Duplicate ids are last-write-wins in the map while every occurrence
//! stays enumerable through the list.

use std::collections::HashMap;

use crate::{Node, NodeId, Way, WayId};

/// The immutable-after-build collection of all parsed nodes and ways.
///
/// Entities are registered during the single-pass construction phase and
/// never mutated or removed afterwards; the completed store is plain owned
/// data and safe for unlimited concurrent reads.
///
/// # Examples
/// ```
/// use streetmap_core::{Node, StreetMap, TagSet};
///
/// let mut map = StreetMap::new();
/// map.insert_node(Node::new(1, None, TagSet::new()));
///
/// assert_eq!(map.node_count(), 1);
/// assert_eq!(map.node_by_id(1).map(|node| node.id), Some(1));
/// assert!(map.node_by_id(2).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreetMap {
    nodes: Vec<Node>,
    node_positions: HashMap<NodeId, usize>,
    ways: Vec<Way>,
    way_positions: HashMap<WayId, usize>,
}

impl StreetMap {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a finished node.
    ///
    /// The node is appended to the arrival-order list unconditionally; if
    /// its id was already registered, the id lookup moves to this newer
    /// occurrence.
    pub fn insert_node(&mut self, node: Node) {
        self.node_positions.insert(node.id, self.nodes.len());
        self.nodes.push(node);
    }

    /// Register a finished way. Same duplicate-id policy as nodes.
    pub fn insert_way(&mut self, way: Way) {
        self.way_positions.insert(way.id, self.ways.len());
        self.ways.push(way);
    }

    /// Number of registered nodes, duplicates included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of registered ways, duplicates included.
    #[must_use]
    pub fn way_count(&self) -> usize {
        self.ways.len()
    }

    /// Node at `index` in arrival order, or `None` out of range.
    #[must_use]
    pub fn node_by_index(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Node with the given id, or `None` if absent.
    ///
    /// When several nodes shared an id, this returns the last one
    /// registered.
    #[must_use]
    pub fn node_by_id(&self, id: NodeId) -> Option<&Node> {
        self.node_positions
            .get(&id)
            .and_then(|&position| self.nodes.get(position))
    }

    /// Way at `index` in arrival order, or `None` out of range.
    #[must_use]
    pub fn way_by_index(&self, index: usize) -> Option<&Way> {
        self.ways.get(index)
    }

    /// Way with the given id, or `None` if absent.
    #[must_use]
    pub fn way_by_id(&self, id: WayId) -> Option<&Way> {
        self.way_positions
            .get(&id)
            .and_then(|&position| self.ways.get(position))
    }

    /// Iterate over nodes in arrival order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate over ways in arrival order.
    pub fn ways(&self) -> impl Iterator<Item = &Way> {
        self.ways.iter()
    }
}
