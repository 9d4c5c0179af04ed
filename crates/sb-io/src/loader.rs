//! JSON map snapshot loader.
//!
//! # Snapshot format
//!
//! An intel-style export: portals and links in one JSON object, coordinates
//! in fixed-point micro-degrees, link records embedding their endpoint
//! portals:
//!
//! ```json
//! {
//!   "portals": [
//!     { "guid": "p1", "title": "Fountain", "team": "E", "latE6": 50080000, "lngE6": 14430000 }
//!   ],
//!   "links": [
//!     { "guid": "l1", "team": "E",
//!       "orig": { "guid": "p1", "latE6": 50080000, "lngE6": 14430000 },
//!       "dest": { "guid": "p2", "latE6": 50090000, "lngE6": 14440000 } }
//!   ]
//! }
//! ```
//!
//! Unknown fields (timestamps, ornaments, levels, …) are ignored.  A link
//! endpoint whose guid does not resolve against the portal list keeps its
//! embedded coordinates and gets [`NodeId::INVALID`] — the link still
//! participates in blocking geometry.
//!
//! Teams are collapsed to the two-valued [`Team`] here: a link whose raw
//! faction code equals `opposing` blocks, everything else is friendly.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sb_core::{GeoPoint, NodeId, Team};
use sb_map::{PortalMap, PortalMapBuilder};

use crate::IoResult;

// ── Snapshot records ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    portals: Vec<RawPortal>,
    #[serde(default)]
    links: Vec<RawLink>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPortal {
    guid: String,
    #[serde(default)]
    title: String,
    lat_e6: i32,
    lng_e6: i32,
}

#[derive(Deserialize)]
struct RawLink {
    team: String,
    orig: RawEndpoint,
    dest: RawEndpoint,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEndpoint {
    guid: String,
    lat_e6: i32,
    lng_e6: i32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a map snapshot from a JSON file.
///
/// `opposing` is the raw faction code of the enemy side (the side whose
/// links block).
pub fn load_snapshot(path: &Path, opposing: &str) -> IoResult<PortalMap> {
    let file = std::fs::File::open(path)?;
    load_snapshot_reader(std::io::BufReader::new(file), opposing)
}

/// Like [`load_snapshot`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_snapshot_reader<R: Read>(reader: R, opposing: &str) -> IoResult<PortalMap> {
    let raw: RawSnapshot = serde_json::from_reader(reader)?;

    let mut b = PortalMapBuilder::with_capacity(raw.portals.len(), raw.links.len());
    for p in raw.portals {
        b.add_node(p.guid, p.title, GeoPoint::new(p.lat_e6, p.lng_e6));
    }

    for l in raw.links {
        let team = if l.team == opposing { Team::Opposing } else { Team::Friendly };
        let orig = b.resolve(&l.orig.guid).unwrap_or(NodeId::INVALID);
        let dest = b.resolve(&l.dest.guid).unwrap_or(NodeId::INVALID);
        b.add_edge(
            team,
            orig,
            GeoPoint::new(l.orig.lat_e6, l.orig.lng_e6),
            dest,
            GeoPoint::new(l.dest.lat_e6, l.dest.lng_e6),
        );
    }

    Ok(b.build())
}
