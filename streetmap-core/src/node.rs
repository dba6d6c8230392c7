use geo::Coord;

use crate::{NodeId, TagSet};

/// A point entity with identity, optional location, and ordered tags.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`, matching
/// the convention used throughout the workspace. The location is `None`
/// when the source element carried no parsable `lat`/`lon` pair; such nodes
/// are still valid map entries.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use streetmap_core::{Node, TagSet};
///
/// let node = Node::new(
///     1,
///     Some(Coord { x: -122.4194, y: 37.7749 }),
///     TagSet::from_iter([(String::from("name"), String::from("SF"))]),
/// );
///
/// assert_eq!(node.id, 1);
/// assert_eq!(node.tag("name"), Some("SF"));
/// assert_eq!(node.tag("amenity"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Unique identifier among nodes.
    pub id: NodeId,
    /// Geospatial position, if the source supplied one.
    pub location: Option<Coord<f64>>,
    /// OpenStreetMap-style tags in first-insertion order.
    pub tags: TagSet,
}

impl Node {
    /// Construct a node record.
    #[must_use]
    pub fn new(id: NodeId, location: Option<Coord<f64>>, tags: TagSet) -> Self {
        Self { id, location, tags }
    }

    /// Number of tags on this node.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Tag key at `index` in stable insertion order, or `None` out of range.
    #[must_use]
    pub fn tag_key_at(&self, index: usize) -> Option<&str> {
        self.tags.key_at(index)
    }

    /// Whether this node carries a tag with the given key.
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accessors_mirror_tag_set() {
        let node = Node::new(
            7,
            None,
            TagSet::from_iter([
                (String::from("name"), String::from("Library")),
                (String::from("amenity"), String::from("library")),
            ]),
        );
        assert_eq!(node.tag_count(), 2);
        assert_eq!(node.tag_key_at(0), Some("name"));
        assert_eq!(node.tag_key_at(2), None);
        assert!(node.has_tag("amenity"));
        assert_eq!(node.tag("amenity"), Some("library"));
        assert_eq!(node.tag("shop"), None);
        assert_eq!(node.location, None);
    }
}
