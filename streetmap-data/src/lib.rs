//! Ingestion pipeline for the streetmap store.
//!
//! Responsibilities:
//! - Define the markup event-source contract consumed by the builder.
//! - Drive the single-pass parsing state machine that assembles a
//!   [`streetmap_core::StreetMap`] from the event stream.
//! - Adapt the quick-xml tokenizer to the event-source contract.
//!
//! Boundaries:
//! - Domain types and query accessors live in `streetmap-core`.
//! - No persistence, geometry, or transport concerns.
//!
//! Invariants:
//! - Construction is single-threaded and single-pass; a store is only
//!   handed out once the stream is exhausted, never on failure.
//! - Schema-level irregularities (bad ids, orphan children, unknown
//!   elements) are skipped; only structural tokenizer failures abort.

mod event;
mod ingest;
mod xml;

pub use event::{EventSource, MarkupError, MarkupEvent};
pub use ingest::{build_street_map, ingest_osm_xml, MapBuildError};
pub use xml::XmlEventSource;
