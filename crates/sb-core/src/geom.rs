//! Planar segment-intersection tests.
//!
//! Coordinates are treated as planar (lat = x, lng = y) — at the few-km
//! scale of a starburst field the projection error is irrelevant to a
//! crosses/doesn't-cross decision.  This is not a robust-geometry kernel:
//! parallel and collinear-overlapping segments are reported as
//! non-intersecting, a deliberate simplification.

use crate::GeoPoint;

/// Parametric line-segment intersection (cross-product/denominator method).
///
/// Segments are `p1→p2` and `p3→p4`.  Returns `false` when the denominator
/// is zero (parallel or coincident lines); otherwise both parameters must
/// fall in `[0, 1]`.
pub fn segments_intersect(p1: GeoPoint, p2: GeoPoint, p3: GeoPoint, p4: GeoPoint) -> bool {
    let (x1, y1) = (p1.lat(), p1.lng());
    let (x2, y2) = (p2.lat(), p2.lng());
    let (x3, y3) = (p3.lat(), p3.lng());
    let (x4, y4) = (p4.lat(), p4.lng());

    let denominator = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if denominator == 0.0 {
        return false; // parallel
    }

    let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denominator;
    let ub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denominator;

    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

/// Does the edge `orig→dest` cross the candidate's straight link to the
/// target?
///
/// A candidate located exactly at either edge endpoint is never blocked by
/// that edge — the edge terminates at the candidate's own position.  The
/// coincidence check compares fixed-point coordinates, so it is exact.
pub fn edge_blocks_link(
    candidate: GeoPoint,
    target:    GeoPoint,
    orig:      GeoPoint,
    dest:      GeoPoint,
) -> bool {
    if candidate == orig || candidate == dest {
        return false;
    }
    segments_intersect(candidate, target, orig, dest)
}
