use crate::{NodeId, TagSet, WayId};

/// An ordered-reference entity: a sequence of node ids plus tags.
///
/// Node references are kept as raw ids rather than resolved [`crate::Node`]
/// records. A way may legally reference an id that was never registered as
/// a node; resolution is the caller's concern.
///
/// # Examples
/// ```
/// use streetmap_core::{TagSet, Way};
///
/// let way = Way::new(10, vec![1, 2, 999], TagSet::new());
///
/// assert_eq!(way.node_ref_count(), 3);
/// assert_eq!(way.node_ref_at(2), Some(999));
/// assert_eq!(way.node_ref_at(3), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Way {
    /// Unique identifier among ways.
    pub id: WayId,
    /// Referenced node ids in source order. May dangle.
    pub node_refs: Vec<NodeId>,
    /// OpenStreetMap-style tags in first-insertion order.
    pub tags: TagSet,
}

impl Way {
    /// Construct a way record.
    #[must_use]
    pub fn new(id: WayId, node_refs: Vec<NodeId>, tags: TagSet) -> Self {
        Self { id, node_refs, tags }
    }

    /// Number of node references.
    #[must_use]
    pub fn node_ref_count(&self) -> usize {
        self.node_refs.len()
    }

    /// Node id at `index` in source order, or `None` out of range.
    #[must_use]
    pub fn node_ref_at(&self, index: usize) -> Option<NodeId> {
        self.node_refs.get(index).copied()
    }

    /// Number of tags on this way.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Tag key at `index` in stable insertion order, or `None` out of range.
    #[must_use]
    pub fn tag_key_at(&self, index: usize) -> Option<&str> {
        self.tags.key_at(index)
    }

    /// Whether this way carries a tag with the given key.
    #[must_use]
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    /// Tag value for `key`, or `None` if absent.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key)
    }
}
