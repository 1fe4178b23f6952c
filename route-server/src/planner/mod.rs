//! Route planner over the transit network.
//!
//! This module implements the core planning algorithms: exhaustive
//! enumeration of simple paths between two stops (with accumulated cost
//! and per-hop line tracking), ranking of the found candidates by cost
//! and transfer count, and an independent single-source shortest-distance
//! query.

mod config;
mod distance;
mod rank;
mod search;

pub use config::SearchConfig;
pub use distance::{DistanceMap, shortest_distances};
pub use rank::rank_candidates;
pub use search::{PlanResult, Planner, find_all_paths};
