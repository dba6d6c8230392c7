//! Behavioural tests for the ingestion entry points.

use std::io::Write;
use std::path::PathBuf;

use geo::Coord;
use rstest::{fixture, rstest};
use streetmap_data::{build_street_map, ingest_osm_xml, MapBuildError, MarkupEvent};
use tempfile::{NamedTempFile, TempPath};

const CITY_OSM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <node id="1" lat="37.7749" lon="-122.4194">
    <tag k="name" v="SF"/>
    <tag k="population" v="800000"/>
  </node>
  <node id="2"/>
  <way id="10">
    <nd ref="1"/>
    <nd ref="2"/>
    <nd ref="999"/>
    <tag k="highway" v="residential"/>
  </way>
</osm>
"#;

fn write_fixture(contents: &str) -> TempPath {
    let mut file = NamedTempFile::new().expect("failed to create fixture file");
    file.write_all(contents.as_bytes())
        .expect("failed to write fixture file");
    file.into_temp_path()
}

#[fixture]
fn city_osm() -> TempPath {
    write_fixture(CITY_OSM)
}

#[rstest]
fn ingests_nodes_ways_and_tags(city_osm: TempPath) -> Result<(), MapBuildError> {
    let map = ingest_osm_xml(city_osm.as_ref())?;

    assert_eq!(map.node_count(), 2);
    assert_eq!(map.way_count(), 1);

    let city = map.node_by_id(1).expect("node 1 should be registered");
    assert_eq!(city.location, Some(Coord { x: -122.4194, y: 37.7749 }));
    assert_eq!(city.tag_count(), 2);
    assert_eq!(city.tag_key_at(0), Some("name"));
    assert_eq!(city.tag_key_at(1), Some("population"));
    assert_eq!(city.tag("name"), Some("SF"));

    let bare = map.node_by_id(2).expect("node 2 should be registered");
    assert_eq!(bare.location, None);

    let way = map.way_by_id(10).expect("way 10 should be registered");
    assert_eq!(way.node_ref_count(), 3);
    assert_eq!(way.node_ref_at(2), Some(999));
    assert!(map.node_by_id(999).is_none());
    assert_eq!(way.tag("highway"), Some("residential"));
    Ok(())
}

#[rstest]
fn index_and_id_access_agree(city_osm: TempPath) -> Result<(), MapBuildError> {
    let map = ingest_osm_xml(city_osm.as_ref())?;

    for index in 0..map.node_count() {
        let node = map.node_by_index(index).expect("index within node count");
        assert_eq!(map.node_by_id(node.id).map(|n| n.id), Some(node.id));
    }
    assert!(map.node_by_index(map.node_count()).is_none());
    assert!(map.way_by_index(map.way_count()).is_none());
    Ok(())
}

#[rstest]
fn reports_missing_files_as_open_errors() {
    let missing = PathBuf::from("does-not-exist.osm");
    let err = ingest_osm_xml(&missing).expect_err("expected failure for missing file");
    match err {
        MapBuildError::Open { path, .. } => assert_eq!(path, missing),
        other => panic!("expected an open error, got {other:?}"),
    }
}

#[rstest]
fn rejects_structurally_malformed_markup() {
    let fixture = write_fixture("<osm><node id=\"1\"></way></osm>");
    let err = ingest_osm_xml(fixture.as_ref())
        .expect_err("expected failure for malformed markup");
    assert!(matches!(err, MapBuildError::Stream { .. }));
}

#[rstest]
fn builds_from_a_synthetic_event_stream() -> Result<(), MapBuildError> {
    let events = vec![
        MarkupEvent::start("node", [("id", "1"), ("lat", "37.7749"), ("lon", "-122.4194")]),
        MarkupEvent::start("tag", [("k", "name"), ("v", "SF")]),
        MarkupEvent::end("tag"),
        MarkupEvent::end("node"),
    ];
    let map = build_street_map(events.into_iter())?;

    assert_eq!(map.node_count(), 1);
    let node = map.node_by_id(1).expect("node 1 should be registered");
    assert_eq!(node.location, Some(Coord { x: -122.4194, y: 37.7749 }));
    assert_eq!(node.tag_count(), 1);
    assert_eq!(node.tag("name"), Some("SF"));
    Ok(())
}

#[rstest]
fn empty_document_builds_an_empty_store() -> Result<(), MapBuildError> {
    let fixture = write_fixture("<osm></osm>");
    let map = ingest_osm_xml(fixture.as_ref())?;
    assert_eq!(map.node_count(), 0);
    assert_eq!(map.way_count(), 0);
    assert!(map.node_by_id(1).is_none());
    Ok(())
}
