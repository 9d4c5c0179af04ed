//! Unit tests for sb-map.

#[cfg(test)]
mod helpers {
    use sb_core::{GeoPoint, Team};
    use crate::{PortalMap, PortalMapBuilder};

    /// Small city-scale fixture around a target at (50.0, 14.0):
    ///
    ///   T  "t"    (50.000, 14.000)   target
    ///   A  "a"    (50.010, 14.000)   ~1.1 km north
    ///   B  "b"    (50.000, 14.020)   ~1.4 km east
    ///   F  "far"  (51.000, 14.000)   ~111 km north
    ///
    /// Links:
    ///   e0  opposing  a → b
    ///   e1  friendly  b → a
    ///   e2  opposing  far → far2(unresolved, outside)
    pub fn city_map() -> PortalMap {
        let mut b = PortalMapBuilder::new();
        let _t = b.add_node("t", "Target", GeoPoint::from_degrees(50.0, 14.0));
        let a = b.add_node("a", "Alpha", GeoPoint::from_degrees(50.01, 14.0));
        let bb = b.add_node("b", "Bravo", GeoPoint::from_degrees(50.0, 14.02));
        let far = b.add_node("far", "Faraway", GeoPoint::from_degrees(51.0, 14.0));

        let (a_pos, bb_pos, far_pos) = (b.pos(a), b.pos(bb), b.pos(far));
        b.add_edge(Team::Opposing, a, a_pos, bb, bb_pos);
        b.add_edge(Team::Friendly, bb, bb_pos, a, a_pos);
        b.add_edge(
            Team::Opposing,
            far,
            far_pos,
            sb_core::NodeId::INVALID,
            GeoPoint::from_degrees(51.5, 14.0),
        );
        b.build()
    }
}

// ── Builder & arena structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use sb_core::{GeoPoint, NodeId, Team};
    use crate::{PortalMap, PortalMapBuilder};

    #[test]
    fn empty_build() {
        let map = PortalMap::empty();
        assert_eq!(map.node_count(), 0);
        assert_eq!(map.edge_count(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn sequential_ids_and_lookup() {
        let map = super::helpers::city_map();
        assert_eq!(map.node_count(), 4);
        assert_eq!(map.edge_count(), 3);
        assert_eq!(map.node_by_guid("t"), Some(NodeId(0)));
        assert_eq!(map.node_by_guid("far"), Some(NodeId(3)));
        assert_eq!(map.node_by_guid("missing"), None);
        assert_eq!(map.title(NodeId(1)), "Alpha");
        assert_eq!(map.guid(NodeId(2)), "b");
    }

    #[test]
    fn duplicate_guid_keeps_first() {
        let mut b = PortalMapBuilder::new();
        let first = b.add_node("dup", "First", GeoPoint::from_degrees(1.0, 1.0));
        let second = b.add_node("dup", "Second", GeoPoint::from_degrees(2.0, 2.0));
        assert_eq!(first, second);
        let map = b.build();
        assert_eq!(map.node_count(), 1);
        assert_eq!(map.title(first), "First");
    }

    #[test]
    fn unresolved_endpoint_is_invalid() {
        let map = super::helpers::city_map();
        assert_eq!(map.edge_dest[2], NodeId::INVALID);
        // Its position is still carried by the edge itself.
        assert_eq!(map.edge_dest_pos[2], GeoPoint::from_degrees(51.5, 14.0));
    }

    #[test]
    fn edge_touches() {
        let map = super::helpers::city_map();
        let e0 = sb_core::EdgeId(0);
        assert!(map.edge_touches(e0, NodeId(1)));
        assert!(map.edge_touches(e0, NodeId(2)));
        assert!(!map.edge_touches(e0, NodeId(0)));
        assert_eq!(map.edge_team[0], Team::Opposing);
    }
}

// ── Radius queries ────────────────────────────────────────────────────────────

#[cfg(test)]
mod radius {
    use sb_core::GeoPoint;

    #[test]
    fn within_radius_excludes_far_portal() {
        let map = super::helpers::city_map();
        let center = GeoPoint::from_degrees(50.0, 14.0);
        let mut near = map.within_radius_km(center, 6.0);
        near.sort_unstable();
        let guids: Vec<&str> = near.iter().map(|&n| map.guid(n)).collect();
        assert_eq!(guids, ["t", "a", "b"]);
    }

    #[test]
    fn radius_is_exact_haversine() {
        let map = super::helpers::city_map();
        let center = GeoPoint::from_degrees(50.0, 14.0);
        // "a" is ~1.11 km away: inside 1.2 km, outside 1.0 km.
        let within = map.within_radius_km(center, 1.2);
        assert!(within.iter().any(|&n| map.guid(n) == "a"));
        let within = map.within_radius_km(center, 1.0);
        assert!(!within.iter().any(|&n| map.guid(n) == "a"));
    }
}

// ── Radius pre-filter ─────────────────────────────────────────────────────────

#[cfg(test)]
mod filter {
    use sb_core::{NodeId, SbError, Team};
    use crate::filter_by_radius;

    #[test]
    fn compacts_to_radius() {
        let map = super::helpers::city_map();
        let filtered = filter_by_radius(&map, "t", 6.0).unwrap();
        assert_eq!(filtered.node_count(), 3); // t, a, b — far dropped
        assert!(filtered.node_by_guid("far").is_none());
        // Target survives and relative order is preserved.
        assert_eq!(filtered.node_by_guid("t"), Some(NodeId(0)));
        assert_eq!(filtered.node_by_guid("a"), Some(NodeId(1)));
        assert_eq!(filtered.node_by_guid("b"), Some(NodeId(2)));
    }

    #[test]
    fn drops_fully_outside_links() {
        let map = super::helpers::city_map();
        let filtered = filter_by_radius(&map, "t", 6.0).unwrap();
        // e2 (far → far2) has both endpoints outside the circle.
        assert_eq!(filtered.edge_count(), 2);
        assert_eq!(filtered.edge_team[0], Team::Opposing);
        assert_eq!(filtered.edge_team[1], Team::Friendly);
    }

    #[test]
    fn reresolves_endpoints_to_new_arena() {
        let map = super::helpers::city_map();
        let filtered = filter_by_radius(&map, "t", 6.0).unwrap();
        let a = filtered.node_by_guid("a").unwrap();
        let b = filtered.node_by_guid("b").unwrap();
        assert_eq!(filtered.edge_orig[0], a);
        assert_eq!(filtered.edge_dest[0], b);
    }

    #[test]
    fn dropped_endpoint_becomes_invalid() {
        let map = super::helpers::city_map();
        // Radius that keeps t and a but drops b (~1.4 km east).
        let filtered = filter_by_radius(&map, "t", 1.2).unwrap();
        assert!(filtered.node_by_guid("b").is_none());
        // e0 (a → b) survives via its "a" endpoint; "b" side unresolved.
        assert_eq!(filtered.edge_count(), 2);
        let a = filtered.node_by_guid("a").unwrap();
        assert_eq!(filtered.edge_orig[0], a);
        assert_eq!(filtered.edge_dest[0], NodeId::INVALID);
    }

    #[test]
    fn missing_target_is_fatal() {
        let map = super::helpers::city_map();
        let err = filter_by_radius(&map, "nope", 6.0).unwrap_err();
        assert!(matches!(err, SbError::TargetNotFound(g) if g == "nope"));
    }
}
