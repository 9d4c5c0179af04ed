//! `sb-io` — the I/O shims around the planner core.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`loader`] | JSON map snapshot → [`sb_map::PortalMap`]                 |
//! | [`export`] | drawtools-JSON and CSV plan writers                       |
//! | [`error`]  | `IoError`, `IoResult<T>`                                  |

pub mod error;
pub mod export;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{IoError, IoResult};
pub use export::{DRAW_COLOR, write_drawtools_json, write_plan_csv};
pub use loader::{load_snapshot, load_snapshot_reader};
