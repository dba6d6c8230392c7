//! Internal state machine for OpenStreetMap-style markup ingestion.
//!
//! Consumes one event at a time, keeps at most one entity under
//! construction, and registers completed entities into the store when
//! their closing event arrives. Schema irregularities are handled by the
//! drop/default/skip policies documented on each handler.

use std::mem;
use std::str::FromStr;

use geo::Coord;
use log::warn;
use streetmap_core::{Node, StreetMap, TagSet, Way};

use crate::event::MarkupEvent;

/// The single "currently parsing" slot.
///
/// Node and way contexts are mutually exclusive; a new `node`/`way` start
/// displaces whatever was open, mirroring the flat structure of the source
/// schema.
#[derive(Debug, Default)]
enum OpenElement {
    #[default]
    None,
    Node(Node),
    Way(Way),
}

#[derive(Debug, Default)]
pub(super) struct MapBuilder {
    map: StreetMap,
    open: OpenElement,
}

impl MapBuilder {
    pub(super) fn handle_event(&mut self, event: MarkupEvent) {
        match event {
            MarkupEvent::Start { name, attributes } => match name.as_str() {
                "node" => self.open_node(attributes),
                "way" => self.open_way(attributes),
                "nd" => self.append_node_ref(&attributes),
                "tag" => self.upsert_tag(attributes),
                // Unknown elements (relation, bounds, ...) are skipped so
                // newer schema extensions pass through harmlessly.
                _ => {}
            },
            MarkupEvent::End { name } => match name.as_str() {
                "node" => self.close_node(),
                "way" => self.close_way(),
                _ => {}
            },
            // OSM carries no meaningful character data at this level.
            MarkupEvent::Text(_) => {}
        }
    }

    /// Hand over the store. An entity still open at exhaustion was never
    /// closed and is discarded, so only fully-closed entities are visible.
    pub(super) fn into_street_map(self) -> StreetMap {
        self.map
    }

    fn open_node(&mut self, attributes: Vec<(String, String)>) {
        let mut id = None;
        let mut lat = None;
        let mut lon = None;
        let mut tags = TagSet::new();
        for (key, value) in attributes {
            match key.as_str() {
                "id" => id = parse_attr("node", "id", &value),
                "lat" => lat = parse_attr("node", "lat", &value),
                "lon" => lon = parse_attr("node", "lon", &value),
                // Non-standard producers put extra attributes on the
                // element itself; fold them into the tags.
                _ => tags.insert(key, value),
            }
        }
        self.open = match id {
            Some(id) => {
                let location = lat.zip(lon).map(|(lat, lon)| Coord { x: lon, y: lat });
                OpenElement::Node(Node::new(id, location, tags))
            }
            None => {
                warn!("skipped node element without a parsable id attribute");
                OpenElement::None
            }
        };
    }

    fn open_way(&mut self, attributes: Vec<(String, String)>) {
        let mut id = None;
        let mut tags = TagSet::new();
        for (key, value) in attributes {
            match key.as_str() {
                "id" => id = parse_attr("way", "id", &value),
                _ => tags.insert(key, value),
            }
        }
        self.open = match id {
            Some(id) => OpenElement::Way(Way::new(id, Vec::new(), tags)),
            None => {
                warn!("skipped way element without a parsable id attribute");
                OpenElement::None
            }
        };
    }

    /// `nd` outside an open way is ignored, as is a missing `ref`.
    fn append_node_ref(&mut self, attributes: &[(String, String)]) {
        let OpenElement::Way(way) = &mut self.open else {
            return;
        };
        let Some(value) = attribute_value(attributes, "ref") else {
            return;
        };
        if let Some(node_ref) = parse_attr("nd", "ref", value) {
            way.node_refs.push(node_ref);
        }
    }

    /// `tag` needs an open node or way and a non-empty `k` with a `v`;
    /// anything else is ignored.
    fn upsert_tag(&mut self, attributes: Vec<(String, String)>) {
        let tags = match &mut self.open {
            OpenElement::Node(node) => &mut node.tags,
            OpenElement::Way(way) => &mut way.tags,
            OpenElement::None => return,
        };
        let mut key = None;
        let mut value = None;
        for (name, attribute) in attributes {
            match name.as_str() {
                "k" => key = Some(attribute),
                "v" => value = Some(attribute),
                _ => {}
            }
        }
        if let (Some(key), Some(value)) = (key, value) {
            if !key.is_empty() {
                tags.insert(key, value);
            }
        }
    }

    /// Register the open node, if any. An unbalanced `</node>` must not
    /// disturb an open way, so a mismatching context is put back.
    fn close_node(&mut self) {
        match mem::take(&mut self.open) {
            OpenElement::Node(node) => self.map.insert_node(node),
            other => self.open = other,
        }
    }

    fn close_way(&mut self) {
        match mem::take(&mut self.open) {
            OpenElement::Way(way) => self.map.insert_way(way),
            other => self.open = other,
        }
    }
}

fn attribute_value<'a>(attributes: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Numeric attribute parses are non-fatal; failures skip the value.
fn parse_attr<T: FromStr>(element: &str, attribute: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("ignored unparsable {attribute}={value:?} on <{element}> element");
            None
        }
    }
}
