//! Transit route planning server.
//!
//! A web application that answers: "what are the best ways to get from
//! this stop to that one, and how many line changes does each take?"
//!
//! The core is a pure planning engine over a directed, weighted,
//! multi-line transit graph: exhaustive enumeration of simple paths
//! with per-hop line tracking, ranking by (cost, transfers), and an
//! independent shortest-distance solver.

pub mod cache;
pub mod domain;
pub mod loader;
pub mod network;
pub mod planner;
pub mod render;
pub mod web;
