//! `sb-plan` — the greedy neutralization planner.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`planner`]  | `plan_starburst`, `StarburstPlan`                      |
//! | [`observer`] | `PlanObserver` trait, `NoopObserver`                   |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Parallel blocking scan (forwarded to `sb-block`).        |

pub mod observer;
pub mod planner;


pub use observer::{NoopObserver, PlanObserver};
pub use planner::{StarburstPlan, plan_starburst};
