//! Planner error type.
//!
//! `sb-io` defines its own error enum for file-format concerns; everything
//! that flows through the map and planner uses `SbError`.

use thiserror::Error;

/// The top-level error type for the starburst planner crates.
///
/// The core computation has exactly one failure mode: an unknown target.
/// Every other irregular input (a link referencing a portal outside the
/// active set, neutralization candidates running out) is handled by policy
/// and reflected in the shape of the result instead.
#[derive(Debug, Error)]
pub enum SbError {
    /// The requested target portal guid is absent from the map.  Fatal;
    /// raised before any blocking computation starts.
    #[error("target portal {0:?} not found in the map")]
    TargetNotFound(String),
}

/// Shorthand result type for all `sb-*` crates.
pub type SbResult<T> = Result<T, SbError>;
