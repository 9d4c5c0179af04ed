//! `sb-core` — foundational types for the starburst link planner.
//!
//! This crate is a dependency of every other `sb-*` crate.  It intentionally
//! has no `sb-*` dependencies and only `thiserror` externally.
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`ids`]   | `NodeId`, `EdgeId`                                      |
//! | [`geo`]   | `GeoPoint` (fixed-point E6), haversine distance         |
//! | [`geom`]  | `segments_intersect`, `edge_blocks_link`                |
//! | [`team`]  | `Team` enum (friendly vs opposing)                      |
//! | [`error`] | `SbError`, `SbResult`                                   |

pub mod error;
pub mod geo;
pub mod geom;
pub mod ids;
pub mod team;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SbError, SbResult};
pub use geo::GeoPoint;
pub use geom::{edge_blocks_link, segments_intersect};
pub use ids::{EdgeId, NodeId};
pub use team::Team;
