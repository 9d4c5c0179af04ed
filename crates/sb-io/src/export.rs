//! Plan exporters.
//!
//! Two formats:
//!
//! - **drawtools JSON**: an array of polyline objects, one per planned
//!   link, each running from a selected portal to the target.  Importable
//!   by map overlay tools.
//! - **CSV**: one row per portal in the plan, linkable portals first, then
//!   the neutralization list in selection order.

use std::io::Write;

use serde::Serialize;

use sb_core::NodeId;
use sb_map::PortalMap;

use crate::IoResult;

/// Default polyline color for exported plans.
pub const DRAW_COLOR: &str = "#a24ac3";

// ── drawtools JSON ────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Serialize)]
struct Polyline<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "latLngs")]
    lat_lngs: [LatLng; 2],
    color: &'a str,
}

/// Write the planned links as a drawtools-style JSON array: one
/// `"polyline"` from each linkable portal to the target.
pub fn write_drawtools_json<W: Write>(
    writer:   W,
    map:      &PortalMap,
    target:   NodeId,
    linkable: &[NodeId],
) -> IoResult<()> {
    let target_pos = map.pos(target);
    let lines: Vec<Polyline<'_>> = linkable
        .iter()
        .map(|&n| {
            let pos = map.pos(n);
            Polyline {
                kind: "polyline",
                lat_lngs: [
                    LatLng { lat: pos.lat(), lng: pos.lng() },
                    LatLng { lat: target_pos.lat(), lng: target_pos.lng() },
                ],
                color: DRAW_COLOR,
            }
        })
        .collect();

    serde_json::to_writer(writer, &lines)?;
    Ok(())
}

// ── CSV ───────────────────────────────────────────────────────────────────────

/// Write the plan as CSV: `role,guid,title,lat,lng` with role `link` for
/// linkable portals and `neutralize` for the portals to take down first.
pub fn write_plan_csv<W: Write>(
    writer:      W,
    map:         &PortalMap,
    linkable:    &[NodeId],
    neutralized: &[NodeId],
) -> IoResult<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(["role", "guid", "title", "lat", "lng"])?;

    for (role, nodes) in [("link", linkable), ("neutralize", neutralized)] {
        for &n in nodes {
            let pos = map.pos(n);
            w.write_record([
                role.to_string(),
                map.guid(n).to_string(),
                map.title(n).to_string(),
                pos.lat().to_string(),
                pos.lng().to_string(),
            ])?;
        }
    }

    w.flush()?;
    Ok(())
}
