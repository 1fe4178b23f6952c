//! Exhaustive path enumeration.
//!
//! Finds every simple path (no stop visited twice) from a start stop to
//! a goal stop, up to a depth cutoff, tracking the accumulated weight
//! and the line taken for each hop.
//!
//! The traversal is an explicit depth-first stack where every frame
//! owns its complete state: path so far, line sequence, accumulated
//! weight and visited set. Nothing is shared or rolled back between
//! branches, so a single query never aliases mutable state. Edges are
//! pushed in reverse adjacency order, which makes the LIFO stack visit
//! them in adjacency order: candidates are discovered in the same order
//! a recursive DFS would find them, and that order is deterministic.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{LineId, RouteCandidate, StopId};
use crate::network::TransitNetwork;

use super::config::SearchConfig;
use super::rank::rank_candidates;

/// One pending depth-first visit. Owns all of its search state.
#[derive(Debug, Clone)]
struct SearchFrame {
    /// Stop being visited.
    stop: StopId,

    /// Path from the start up to and including `stop`.
    path: Vec<StopId>,

    /// Line taken for each hop of `path`.
    lines: Vec<LineId>,

    /// Sum of edge weights along `path`.
    weight: u32,

    /// Stops on `path`, for O(1) revisit checks.
    visited: HashSet<StopId>,
}

/// Outcome of a raw enumeration pass.
struct Enumeration {
    candidates: Vec<RouteCandidate>,
    expansions: usize,
}

/// Enumerate every simple path from `start` to `goal` whose stop count
/// does not exceed `max_depth`.
///
/// Candidates are returned in discovery order (adjacency order, DFS
/// branch order), unranked. If `start` or `goal` is not in the network,
/// or no path exists within the cutoff, the result is empty; neither is
/// an error. `start == goal` yields the single-stop path with zero
/// weight and zero transfers (provided `max_depth >= 1`).
///
/// Repeated calls with identical inputs yield identical output,
/// including order.
pub fn find_all_paths(
    network: &TransitNetwork,
    start: &StopId,
    goal: &StopId,
    max_depth: usize,
) -> Vec<RouteCandidate> {
    enumerate(network, start, goal, max_depth, None).candidates
}

/// The raw search. `budget` bounds the number of frames expanded.
fn enumerate(
    network: &TransitNetwork,
    start: &StopId,
    goal: &StopId,
    max_depth: usize,
    budget: Option<usize>,
) -> Enumeration {
    let mut candidates = Vec::new();
    let mut expansions = 0;

    if !network.contains(start) || !network.contains(goal) {
        return Enumeration {
            candidates,
            expansions,
        };
    }

    let mut stack = vec![SearchFrame {
        stop: start.clone(),
        path: vec![start.clone()],
        lines: Vec::new(),
        weight: 0,
        visited: HashSet::from([start.clone()]),
    }];

    while let Some(frame) = stack.pop() {
        expansions += 1;

        if budget.is_some_and(|limit| expansions > limit) {
            debug!(expansions, "expansion budget exhausted, truncating search");
            break;
        }

        // Depth cutoff: a hard truncation, checked before the goal test.
        if frame.path.len() > max_depth {
            continue;
        }

        // A reached goal is a leaf of this branch, even if it has
        // outgoing edges: the passenger has arrived.
        if &frame.stop == goal {
            trace!(weight = frame.weight, hops = frame.path.len() - 1, "found candidate");
            // Safe: frames hold one line per hop and never revisit a stop
            let candidate = RouteCandidate::new(frame.path, frame.lines, frame.weight)
                .expect("search frames uphold candidate invariants");
            candidates.push(candidate);
            continue;
        }

        // Reverse push order so the LIFO stack explores edges in
        // adjacency order.
        for edge in network.neighbors(&frame.stop).iter().rev() {
            if frame.visited.contains(&edge.to) {
                continue;
            }

            let mut path = frame.path.clone();
            path.push(edge.to.clone());

            let mut lines = frame.lines.clone();
            lines.push(edge.line.clone());

            let mut visited = frame.visited.clone();
            visited.insert(edge.to.clone());

            stack.push(SearchFrame {
                stop: edge.to.clone(),
                path,
                lines,
                weight: frame.weight + edge.weight,
                visited,
            });
        }
    }

    debug!(
        found = candidates.len(),
        expansions, "path enumeration finished"
    );

    Enumeration {
        candidates,
        expansions,
    }
}

/// Result of a planning query.
#[derive(Debug)]
pub struct PlanResult {
    /// Found routes, ranked best-first and truncated to the configured
    /// result limit.
    pub routes: Vec<RouteCandidate>,

    /// Number of search states expanded while enumerating.
    pub routes_explored: usize,
}

/// Route planner over an immutable network.
///
/// Composes enumeration and ranking; holds only shared references, so
/// independent queries can run against the same network concurrently.
pub struct Planner<'a> {
    network: &'a TransitNetwork,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a TransitNetwork, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Find and rank routes from `start` to `goal`.
    ///
    /// Unknown endpoints and unreachable goals produce an empty route
    /// list, never an error; callers must check for emptiness before
    /// taking "the best route".
    pub fn plan(&self, start: &StopId, goal: &StopId) -> PlanResult {
        let enumeration = enumerate(
            self.network,
            start,
            goal,
            self.config.max_depth,
            self.config.max_expansions,
        );

        let mut routes = rank_candidates(enumeration.candidates);
        routes.truncate(self.config.max_results);

        PlanResult {
            routes,
            routes_explored: enumeration.expansions,
        }
    }

    /// Minimal travel cost from `source` to every reachable stop.
    pub fn shortest_distances(&self, source: &StopId) -> super::DistanceMap {
        super::shortest_distances(self.network, source)
    }
}
