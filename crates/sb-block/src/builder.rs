//! One-time blocking scan: which opposing links cross which candidate
//! segments.
//!
//! The scan is embarrassingly parallel across portals — each portal's
//! `blocked_by` bucket depends only on its own position, the target, and
//! the immutable link arenas.  With the `parallel` feature the buckets are
//! computed on Rayon's thread pool; either way the reverse `blocks`
//! relation is populated in a single-threaded finalize step, so no shared
//! state is ever mutated concurrently.

use std::sync::atomic::{AtomicUsize, Ordering};

use rustc_hash::FxHashSet;

use sb_core::{EdgeId, NodeId, edge_blocks_link};
use sb_map::PortalMap;

use crate::BlockingGraph;

/// Build the blocking graph for `map` against `target`.
pub fn build_blocking_graph(map: &PortalMap, target: NodeId) -> BlockingGraph {
    build_blocking_graph_with_progress(map, target, &|_, _| {})
}

/// Like [`build_blocking_graph`], reporting scan progress roughly every 5%
/// of portals.  The hook must be `Sync`: with the `parallel` feature it is
/// called from worker threads.
pub fn build_blocking_graph_with_progress(
    map:      &PortalMap,
    target:   NodeId,
    progress: &(dyn Fn(usize, usize) + Sync),
) -> BlockingGraph {
    let total = map.node_count();
    let target_pos = map.pos(target);

    // Opposing links only.  A link whose destination is the target is the
    // very connection being evaluated and never counts as a blocker.
    let blockers: Vec<EdgeId> = (0..map.edge_count())
        .map(|i| EdgeId(i as u32))
        .filter(|&e| {
            map.edge_team[e.index()].is_opposing() && map.edge_dest[e.index()] != target
        })
        .collect();

    let done = AtomicUsize::new(0);
    let step = (total / 20).max(1);

    let scan_node = |n: NodeId| -> FxHashSet<EdgeId> {
        let mut blocked = FxHashSet::default();
        if n != target {
            let pos = map.pos(n);
            for &e in &blockers {
                if edge_blocks_link(
                    pos,
                    target_pos,
                    map.edge_orig_pos[e.index()],
                    map.edge_dest_pos[e.index()],
                ) {
                    blocked.insert(e);
                }
            }
        }
        let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
        if finished % step == 0 || finished == total {
            progress(finished, total);
        }
        blocked
    };

    #[cfg(feature = "parallel")]
    let per_node: Vec<FxHashSet<EdgeId>> = {
        use rayon::prelude::*;
        (0..total)
            .into_par_iter()
            .map(|i| scan_node(NodeId(i as u32)))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let per_node: Vec<FxHashSet<EdgeId>> =
        (0..total).map(|i| scan_node(NodeId(i as u32))).collect();

    // Single-threaded finalize: install the buckets and populate the
    // reverse relation.  Link endpoints absent from the active node set
    // contribute nothing (the missing-reference policy).
    let mut graph = BlockingGraph::with_node_count(total);
    for (i, blocked) in per_node.into_iter().enumerate() {
        let n = NodeId(i as u32);
        for &e in &blocked {
            let orig = map.edge_orig[e.index()];
            let dest = map.edge_dest[e.index()];
            if orig != NodeId::INVALID {
                graph.blocks[orig.index()].insert(n);
            }
            if dest != NodeId::INVALID {
                graph.blocks[dest.index()].insert(n);
            }
        }
        graph.blocked_by[i] = blocked;
    }
    graph
}
