//! Unit tests for sb-io.

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use sb_core::{NodeId, Team};

    use crate::{load_snapshot, load_snapshot_reader};

    const SNAPSHOT: &str = r#"{
        "portals": [
            { "guid": "t", "title": "Town Hall", "team": "R", "latE6": 50000000, "lngE6": 14000000 },
            { "guid": "a", "title": "Fountain", "team": "N", "latE6": 50010000, "lngE6": 14000000, "level": 8 }
        ],
        "links": [
            { "guid": "l1", "team": "E",
              "orig": { "guid": "a", "latE6": 50010000, "lngE6": 14000000 },
              "dest": { "guid": "t", "latE6": 50000000, "lngE6": 14000000 } },
            { "guid": "l2", "team": "R",
              "orig": { "guid": "t", "latE6": 50000000, "lngE6": 14000000 },
              "dest": { "guid": "offmap", "latE6": 51000000, "lngE6": 14000000 } }
        ]
    }"#;

    #[test]
    fn parses_portals_and_links() {
        let map = load_snapshot_reader(Cursor::new(SNAPSHOT), "E").unwrap();
        assert_eq!(map.node_count(), 2);
        assert_eq!(map.edge_count(), 2);

        let t = map.node_by_guid("t").unwrap();
        assert_eq!(map.title(t), "Town Hall");
        assert_eq!(map.pos(t).lat(), 50.0);
        assert_eq!(map.pos(t).lng(), 14.0);
    }

    #[test]
    fn team_is_relative_to_the_opposing_code() {
        let map = load_snapshot_reader(Cursor::new(SNAPSHOT), "E").unwrap();
        assert_eq!(map.edge_team[0], Team::Opposing);
        assert_eq!(map.edge_team[1], Team::Friendly);

        // Planning for the other side flips the view.
        let map = load_snapshot_reader(Cursor::new(SNAPSHOT), "R").unwrap();
        assert_eq!(map.edge_team[0], Team::Friendly);
        assert_eq!(map.edge_team[1], Team::Opposing);
    }

    #[test]
    fn unresolved_endpoint_keeps_coordinates() {
        let map = load_snapshot_reader(Cursor::new(SNAPSHOT), "E").unwrap();
        assert_eq!(map.edge_dest[1], NodeId::INVALID);
        assert_eq!(map.edge_dest_pos[1].lat(), 51.0);
    }

    #[test]
    fn resolved_endpoints_point_into_the_arena() {
        let map = load_snapshot_reader(Cursor::new(SNAPSHOT), "E").unwrap();
        let a = map.node_by_guid("a").unwrap();
        let t = map.node_by_guid("t").unwrap();
        assert_eq!(map.edge_orig[0], a);
        assert_eq!(map.edge_dest[0], t);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let map = load_snapshot_reader(Cursor::new("{}"), "E").unwrap();
        assert!(map.is_empty());
        assert_eq!(map.edge_count(), 0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(load_snapshot_reader(Cursor::new("{ nope"), "E").is_err());
    }

    #[test]
    fn loads_from_a_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, SNAPSHOT).unwrap();

        let map = load_snapshot(&path, "E").unwrap();
        assert_eq!(map.node_count(), 2);
    }
}

#[cfg(test)]
mod export {
    use sb_core::{GeoPoint, NodeId, Team};
    use sb_map::{PortalMap, PortalMapBuilder};

    use crate::{DRAW_COLOR, write_drawtools_json, write_plan_csv};

    fn two_portal_map() -> PortalMap {
        let mut b = PortalMapBuilder::new();
        let t = b.add_node("t", "Target", GeoPoint::from_degrees(50.0, 14.0));
        let a = b.add_node("a", "Alpha", GeoPoint::from_degrees(50.01, 14.0));
        let (tp, ap) = (b.pos(t), b.pos(a));
        b.add_edge(Team::Opposing, a, ap, t, tp);
        b.build()
    }

    #[test]
    fn drawtools_output_shape() {
        let map = two_portal_map();
        let t = map.node_by_guid("t").unwrap();
        let a = map.node_by_guid("a").unwrap();

        let mut buf = Vec::new();
        write_drawtools_json(&mut buf, &map, t, &[a]).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let lines = value.as_array().unwrap();
        assert_eq!(lines.len(), 1);

        let line = &lines[0];
        assert_eq!(line["type"], "polyline");
        assert_eq!(line["color"], DRAW_COLOR);
        let lat_lngs = line["latLngs"].as_array().unwrap();
        assert_eq!(lat_lngs.len(), 2);
        assert_eq!(lat_lngs[0]["lat"], 50.01);
        assert_eq!(lat_lngs[1]["lat"], 50.0);
        assert_eq!(lat_lngs[1]["lng"], 14.0);
    }

    #[test]
    fn empty_plan_is_an_empty_array() {
        let map = two_portal_map();
        let t = map.node_by_guid("t").unwrap();
        let mut buf = Vec::new();
        write_drawtools_json(&mut buf, &map, t, &[]).unwrap();
        assert_eq!(buf, b"[]");
    }

    #[test]
    fn csv_rows_carry_roles() {
        let map = two_portal_map();
        let a = map.node_by_guid("a").unwrap();
        let t = map.node_by_guid("t").unwrap();

        let mut buf = Vec::new();
        write_plan_csv(&mut buf, &map, &[a], &[t]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("role,guid,title,lat,lng"));
        assert_eq!(lines.next(), Some("link,a,Alpha,50.01,14"));
        assert_eq!(lines.next(), Some("neutralize,t,Target,50,14"));
        assert_eq!(lines.next(), None);
    }
}
