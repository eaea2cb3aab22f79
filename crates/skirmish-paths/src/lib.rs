//! Movement, threat and path queries for tile-grid tactics.
//!
//! All queries run through [`Planner`], which borrows a
//! [`skirmish_core::Grid`] and allocates fresh search state per call:
//!
//! - **Movement and attack range** ([`Planner::compute_range`]): a
//!   cost-bounded Dijkstra flood fill with a diagonal surcharge, followed by
//!   a cardinal breadth-first threat spread from every reachable tile
//! - **A\*** walking paths ([`Planner::find_path`])
//! - **Staging tiles** for an attack ([`Planner::closest_staging_tile`],
//!   [`Planner::approach_path`])
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | threat spread |
//! | [`WeightedPather`] : [`Pather`] | movement range |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! The board adaptors in [`pathers`] implement these with the engine's cost
//! rules; [`Planner::find_path_with`] accepts any other [`AstarPather`].

mod astar;
mod combat;
pub mod pathers;
mod planner;
mod range;
mod scratch;
mod traits;

#[cfg(test)]
mod testutil;

pub use pathers::{MovePather, ThreatPather, WalkPather};
pub use planner::Planner;
pub use range::{Highlight, RangeResult};
pub use scratch::{PathNode, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
