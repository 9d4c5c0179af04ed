//! `sb-block` — the derived blocking relation between portals and links.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`graph`]   | `BlockingGraph` (`blocked_by`/`blocks` sets), mutation    |
//! | [`builder`] | one-time node × edge scan populating the graph            |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Runs the builder scan on Rayon's thread pool.              |

pub mod builder;
pub mod graph;


pub use builder::{build_blocking_graph, build_blocking_graph_with_progress};
pub use graph::BlockingGraph;
