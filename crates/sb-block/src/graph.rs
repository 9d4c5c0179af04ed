//! The blocking graph and its mutation.
//!
//! Per portal, two index sets over the map arenas:
//!
//! - `blocked_by[n]`: opposing links currently crossing `n`'s segment to
//!   the target.  **Sole source of truth for linkability** — a portal is
//!   linkable iff this set is empty.
//! - `blocks[n]`: portals for which `n` is an endpoint of at least one link
//!   in their `blocked_by`.  Populated once at build time and allowed to go
//!   stale as neutralizations remove blocking links elsewhere; it is only
//!   used to enumerate neutralization candidates, never to decide
//!   linkability.
//!
//! Both sets only shrink after the build.  Neutralization is O(affected
//! entries) — the graph is never rebuilt from scratch between planner
//! iterations.

use rustc_hash::FxHashSet;

use sb_core::{EdgeId, NodeId};
use sb_map::PortalMap;

/// The bipartite blocking relation, indexed by `NodeId`.
pub struct BlockingGraph {
    /// Links crossing each portal's segment to the target.
    pub blocked_by: Vec<FxHashSet<EdgeId>>,

    /// Portals each portal blocks (as a link endpoint).
    pub blocks: Vec<FxHashSet<NodeId>>,
}

impl BlockingGraph {
    /// An empty graph over `node_count` portals.
    pub fn with_node_count(node_count: usize) -> Self {
        Self {
            blocked_by: vec![FxHashSet::default(); node_count],
            blocks:     vec![FxHashSet::default(); node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.blocked_by.len()
    }

    /// A portal is linkable iff nothing blocks its segment to the target.
    #[inline]
    pub fn is_linkable(&self, node: NodeId) -> bool {
        self.blocked_by[node.index()].is_empty()
    }

    /// All linkable portals in ascending arena order, excluding the target
    /// (the target never links to itself).
    pub fn linkable_nodes(&self, target: NodeId) -> Vec<NodeId> {
        (0..self.blocked_by.len())
            .map(|i| NodeId(i as u32))
            .filter(|&n| n != target && self.is_linkable(n))
            .collect()
    }

    /// Total blocking-link entries across all portals.  Strictly decreases
    /// with every effective neutralization — the planner's termination
    /// potential.
    pub fn total_blocking_edges(&self) -> usize {
        self.blocked_by.iter().map(|s| s.len()).sum()
    }

    /// Neutralize `node`: purge every blocking link that has it as an
    /// endpoint from every portal's `blocked_by`, and clear the node's own
    /// `blocks`.  Returns the number of entries removed.
    ///
    /// Other portals' `blocks` sets are left untouched; they go stale
    /// naturally and are never consulted for linkability.
    pub fn neutralize(&mut self, map: &PortalMap, node: NodeId) -> usize {
        let mut removed = 0;
        for set in &mut self.blocked_by {
            let before = set.len();
            set.retain(|&e| !map.edge_touches(e, node));
            removed += before - set.len();
        }
        self.blocks[node.index()].clear();
        removed
    }
}
