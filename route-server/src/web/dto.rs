//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::RouteCandidate;
use crate::render::{LineMarkers, format_path_with_lines};

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Origin stop id
    pub start: String,

    /// Destination stop id
    pub goal: String,

    /// Optional depth cutoff override (maximum stops per route)
    pub max_depth: Option<usize>,
}

/// One route option in a plan response.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Visited stops, origin first
    pub stops: Vec<String>,

    /// Line taken for each hop
    pub lines: Vec<String>,

    /// Sum of edge weights
    pub total_weight: u32,

    /// Number of line changes
    pub transfers: usize,

    /// Human-readable trace with line annotations
    pub display: String,
}

impl RouteResult {
    /// Create from a domain candidate.
    pub fn from_candidate(candidate: &RouteCandidate, markers: &LineMarkers) -> Self {
        Self {
            stops: candidate.stops().iter().map(|s| s.to_string()).collect(),
            lines: candidate.lines().iter().map(|l| l.to_string()).collect(),
            total_weight: candidate.total_weight(),
            transfers: candidate.transfers(),
            display: format_path_with_lines(candidate.stops(), candidate.lines(), markers),
        }
    }
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    /// Found route options, best first. Empty when the endpoints are
    /// unknown or no route exists within the depth cutoff.
    pub routes: Vec<RouteResult>,

    /// Number of search states explored
    pub routes_explored: usize,
}

/// Query for shortest distances from a stop.
#[derive(Debug, Deserialize)]
pub struct DistancesRequest {
    /// Source stop id
    pub from: String,
}

/// Response for a shortest-distance query.
#[derive(Debug, Serialize)]
pub struct DistancesResponse {
    /// The source stop
    pub from: String,

    /// Minimal travel cost per reachable stop; unreachable stops are
    /// omitted
    pub distances: BTreeMap<String, u32>,
}

/// Response listing the network's stops.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    /// All stop ids, sorted
    pub stops: Vec<String>,

    /// Number of stops
    pub stop_count: usize,

    /// Number of directed edges
    pub edge_count: usize,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
