//! Construction entry points for the streetmap store.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use streetmap_core::StreetMap;
use thiserror::Error;

use crate::event::{EventSource, MarkupError};
use crate::xml::XmlEventSource;

mod builder;

use builder::MapBuilder;

/// Errors returned when building a street map.
#[derive(Debug, Error)]
pub enum MapBuildError {
    /// The markup file could not be opened.
    #[error("failed to open OSM markup file at {path:?}")]
    Open {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
        /// The path that failed to open.
        path: PathBuf,
    },
    /// The event source failed mid-stream; no store is produced.
    #[error("markup stream failed before the map was complete")]
    Stream {
        /// The structural tokenizer failure.
        #[source]
        source: MarkupError,
    },
}

/// Consume an event source to exhaustion and return the populated store.
///
/// Construction is strictly phase-separated from querying: the store is
/// only returned once the stream has ended, and a structural source
/// failure yields an error instead of a partial store. Schema-level
/// irregularities in the events themselves never fail the build.
///
/// # Examples
/// ```
/// use streetmap_data::{build_street_map, MarkupEvent};
///
/// # fn main() -> Result<(), streetmap_data::MapBuildError> {
/// let events = vec![
///     MarkupEvent::start("node", [("id", "1"), ("lat", "37.7749"), ("lon", "-122.4194")]),
///     MarkupEvent::start("tag", [("k", "name"), ("v", "SF")]),
///     MarkupEvent::end("tag"),
///     MarkupEvent::end("node"),
/// ];
/// let map = build_street_map(events.into_iter())?;
/// assert_eq!(map.node_count(), 1);
/// assert_eq!(map.node_by_id(1).and_then(|node| node.tag("name")), Some("SF"));
/// # Ok(())
/// # }
/// ```
pub fn build_street_map<S: EventSource>(mut source: S) -> Result<StreetMap, MapBuildError> {
    let mut builder = MapBuilder::default();
    while let Some(event) = source
        .next_event()
        .map_err(|source| MapBuildError::Stream { source })?
    {
        builder.handle_event(event);
    }
    Ok(builder.into_street_map())
}

/// Build a street map from an OSM XML file.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use streetmap_data::ingest_osm_xml;
///
/// # fn main() -> Result<(), streetmap_data::MapBuildError> {
/// let map = ingest_osm_xml(Path::new("city.osm"))?;
/// println!("Nodes: {}", map.node_count());
/// # Ok(())
/// # }
/// ```
pub fn ingest_osm_xml(path: &Path) -> Result<StreetMap, MapBuildError> {
    let file = File::open(path).map_err(|source| MapBuildError::Open {
        source,
        path: path.to_path_buf(),
    })?;
    build_street_map(XmlEventSource::new(BufReader::new(file)))
}
