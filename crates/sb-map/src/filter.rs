//! Geographic radius pre-filter.
//!
//! Bounds the dataset before the blocking scan runs: only portals within
//! `radius_km` of the target can realistically be starburst candidates, and
//! only links with at least one endpoint inside the circle can cross a
//! candidate's segment to the target.  The filter is a dataset-size bound,
//! not part of the blocking computation itself.

use sb_core::{NodeId, SbError, SbResult};

use crate::map::{PortalMap, PortalMapBuilder};

/// Produce a compacted [`PortalMap`] limited to `radius_km` around the
/// target portal.
///
/// - Portals: kept iff within the haversine radius of the target (the
///   target itself is at distance 0 and always survives).
/// - Links: kept iff at least one **embedded endpoint position** is within
///   the radius.  A kept link whose endpoint portal was dropped keeps its
///   coordinates but gets [`NodeId::INVALID`] as the endpoint id.
/// - Surviving portals keep their relative arena order, so downstream
///   iteration order (and therefore greedy tie-breaking) matches the
///   snapshot order of the original map.
///
/// Fails with [`SbError::TargetNotFound`] when `target_guid` is absent.
pub fn filter_by_radius(map: &PortalMap, target_guid: &str, radius_km: f64) -> SbResult<PortalMap> {
    let target = map
        .node_by_guid(target_guid)
        .ok_or_else(|| SbError::TargetNotFound(target_guid.to_string()))?;
    let center = map.pos(target);

    let mut keep = map.within_radius_km(center, radius_km);
    keep.sort_unstable();

    let mut b = PortalMapBuilder::with_capacity(keep.len(), map.edge_count());

    // Old arena index → new arena index; INVALID for dropped portals.
    let mut remap = vec![NodeId::INVALID; map.node_count()];
    for &n in &keep {
        remap[n.index()] = b.add_node(map.guid(n), map.title(n), map.pos(n));
    }

    for e in 0..map.edge_count() {
        let orig_pos = map.edge_orig_pos[e];
        let dest_pos = map.edge_dest_pos[e];
        if center.distance_km(orig_pos) > radius_km && center.distance_km(dest_pos) > radius_km {
            continue;
        }
        b.add_edge(
            map.edge_team[e],
            remap_endpoint(&remap, map.edge_orig[e]),
            orig_pos,
            remap_endpoint(&remap, map.edge_dest[e]),
            dest_pos,
        );
    }

    Ok(b.build())
}

fn remap_endpoint(remap: &[NodeId], old: NodeId) -> NodeId {
    if old == NodeId::INVALID {
        NodeId::INVALID
    } else {
        remap[old.index()]
    }
}
