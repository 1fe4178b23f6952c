//! Candidate ranking for search results.
//!
//! Orders enumerated route candidates so the most useful option comes
//! first.

use crate::domain::RouteCandidate;

/// Rank candidates by preference.
///
/// Candidates are ranked ascending by:
/// 1. Total weight (cheaper is better)
/// 2. Number of transfers (fewer is better)
///
/// The sort is stable, so candidates with identical weight and transfer
/// count keep their discovery order (which is itself deterministic:
/// adjacency order and DFS branch order). This ordering is the system's
/// definition of "optimal".
pub fn rank_candidates(mut candidates: Vec<RouteCandidate>) -> Vec<RouteCandidate> {
    candidates.sort_by(|a, b| {
        // Primary: total weight
        let weight_cmp = a.total_weight().cmp(&b.total_weight());
        if weight_cmp != std::cmp::Ordering::Equal {
            return weight_cmp;
        }

        // Secondary: fewer transfers
        a.transfers().cmp(&b.transfers())
    });

    candidates
}
