//! `sb-map` — the portal/link map arena and its radius pre-filter.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`map`]    | `PortalMap` (SoA arenas + R-tree), `PortalMapBuilder`    |
//! | [`filter`] | geographic radius pre-filter producing a compacted map   |

pub mod filter;
pub mod map;

#[cfg(test)]
mod tests;

pub use filter::filter_by_radius;
pub use map::{PortalMap, PortalMapBuilder};
