//! Core domain types for the streetmap store.
//!
//! Defines the entity records ([`Node`], [`Way`]), the insertion-ordered
//! tag collection ([`TagSet`]), and the queryable [`StreetMap`] store they
//! are registered into. Everything here is plain data: ingestion lives in
//! `streetmap-data`, and the store is immutable once construction finishes.
//!
//! All query accessors are total. Out-of-range indices, unknown ids, and
//! absent tag keys return `None` rather than panicking, so the store is
//! safe to probe from arbitrary callers without defensive checks.

mod node;
mod store;
mod tags;
mod way;

pub use node::Node;
pub use store::StreetMap;
pub use tags::TagSet;
pub use way::Way;

/// Identifier of a point node. Any `u64` value is a valid id.
pub type NodeId = u64;

/// Identifier of a way. Node and way ids live in separate namespaces.
pub type WayId = u64;
