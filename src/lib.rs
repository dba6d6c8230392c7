//! Facade crate for the streetmap pipeline.
//!
//! Re-exports the core domain types and the ingestion entry points so
//! callers can depend on a single crate.

#![forbid(unsafe_code)]

pub use streetmap_core::{Node, NodeId, StreetMap, TagSet, Way, WayId};
pub use streetmap_data::{
    build_street_map, ingest_osm_xml, EventSource, MapBuildError, MarkupError, MarkupEvent,
    XmlEventSource,
};
