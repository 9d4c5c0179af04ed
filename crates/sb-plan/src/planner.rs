//! The greedy neutralization loop.
//!
//! State machine: `Scanning → Selecting → Mutating → (loop) → Done`.  Every
//! exit is a normal terminal state — reaching the requested link count and
//! running out of neutralization candidates are both expressed in the shape
//! of the returned plan, never as errors.  The only failure is an unknown
//! target guid, raised before any computation.
//!
//! Termination: every iteration either strictly shrinks the total
//! `blocked_by` size or permanently empties the selected node's (stale)
//! `blocks` set, and the loop is additionally capped at the number of
//! portals that held `blocks` entries at build time.

use sb_block::{BlockingGraph, build_blocking_graph_with_progress};
use sb_core::{NodeId, SbError, SbResult};
use sb_map::PortalMap;

use crate::PlanObserver;

/// The planner's result: which portals to link and which opposing portals
/// to neutralize first.
#[derive(Debug)]
pub struct StarburstPlan {
    /// Linkable portals in ascending arena order, target excluded.  May be
    /// shorter than the requested count when candidates ran out.
    pub linkable: Vec<NodeId>,

    /// Neutralized portals in selection order.
    pub neutralized: Vec<NodeId>,

    /// Number of neutralization iterations performed.
    pub iterations: usize,
}

impl StarburstPlan {
    /// Did the plan reach the requested link count?
    pub fn reached(&self, target_links: usize) -> bool {
        self.linkable.len() >= target_links
    }
}

/// Plan a starburst of up to `target_links` connections to the portal
/// identified by `target_guid`.
///
/// Builds the blocking graph once, then greedily neutralizes the opposing
/// portal that fully unblocks the most candidates until the link count is
/// reached or no further progress is possible.
pub fn plan_starburst<O: PlanObserver>(
    map:          &PortalMap,
    target_guid:  &str,
    target_links: usize,
    observer:     &mut O,
) -> SbResult<StarburstPlan> {
    let target = map
        .node_by_guid(target_guid)
        .ok_or_else(|| SbError::TargetNotFound(target_guid.to_string()))?;

    let obs_ref: &O = observer;
    let mut graph = build_blocking_graph_with_progress(map, target, &|done, total| {
        obs_ref.on_scan_progress(done, total);
    });

    let mut linkable = graph.linkable_nodes(target);
    observer.on_scan_complete(linkable.len());

    // Hard cap: each blocker portal can be neutralized at most once.
    let max_iterations = graph.blocks.iter().filter(|b| !b.is_empty()).count();

    let mut neutralized = Vec::new();
    let mut iteration = 0;

    while linkable.len() < target_links && iteration < max_iterations {
        let Some(victim) = select_neutralization(map, &graph, target) else {
            break; // no portal blocks anything — no further progress possible
        };

        iteration += 1;
        graph.neutralize(map, victim);
        linkable = graph.linkable_nodes(target);
        neutralized.push(victim);
        observer.on_iteration(iteration, victim, linkable.len());
    }

    observer.on_done(linkable.len());
    Ok(StarburstPlan { linkable, neutralized, iterations: iteration })
}

/// Pick the portal whose neutralization fully clears the most
/// currently-blocked candidates.
///
/// Candidates are portals with a non-empty `blocks` set, excluding the
/// target (it is never neutralized).  Score = number of blocked portals
/// whose *entire* `blocked_by` consists of links touching the candidate —
/// portals it would merely partially unblock don't count.  Ties go to the
/// first maximal candidate in ascending arena order (strict `>` during a
/// single ascending scan), the snapshot's natural iteration order.
fn select_neutralization(
    map:    &PortalMap,
    graph:  &BlockingGraph,
    target: NodeId,
) -> Option<NodeId> {
    let mut best: Option<(NodeId, usize)> = None;

    for i in 0..graph.node_count() {
        let candidate = NodeId(i as u32);
        if candidate == target || graph.blocks[i].is_empty() {
            continue;
        }

        let score = (0..graph.node_count())
            .filter(|&m| {
                let blocked = &graph.blocked_by[m];
                !blocked.is_empty() && blocked.iter().all(|&e| map.edge_touches(e, candidate))
            })
            .count();

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best.map(|(node, _)| node)
}
