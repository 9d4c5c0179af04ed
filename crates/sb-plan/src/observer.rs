//! Planner observer trait for progress reporting.

use sb_core::NodeId;

/// Callbacks invoked by [`plan_starburst`][crate::plan_starburst] at key
/// points of the run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The trait requires `Sync` and
/// [`on_scan_progress`](Self::on_scan_progress) takes `&self` because the
/// blocking scan may call it from parallel workers; the per-iteration hooks
/// run on the sequential planner loop and take `&mut self`.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl PlanObserver for ProgressPrinter {
///     fn on_iteration(&mut self, iteration: usize, _node: NodeId, linkable: usize) {
///         println!("iteration #{iteration}: {linkable} linkable portals");
///     }
/// }
/// ```
pub trait PlanObserver: Sync {
    /// Called roughly every 5% of portals during the blocking scan.
    fn on_scan_progress(&self, _done: usize, _total: usize) {}

    /// Called once when the blocking graph is built, with the initial
    /// linkable-portal count.
    fn on_scan_complete(&mut self, _linkable: usize) {}

    /// Called after each neutralization with the 1-based iteration number,
    /// the neutralized portal, and the new linkable-portal count.
    fn on_iteration(&mut self, _iteration: usize, _neutralized: NodeId, _linkable: usize) {}

    /// Called once when the planner terminates.
    fn on_done(&mut self, _linkable: usize) {}
}

/// A [`PlanObserver`] that does nothing.  Use when you need to call
/// `plan_starburst` but don't want progress callbacks.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
