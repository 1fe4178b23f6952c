//! Edge types for the transit network.

use super::{LineId, StopId};

/// A directed, weighted, line-labelled connection between two stops.
///
/// This is the input record from which a network is built. Parallel
/// connections between the same stop pair on different lines are
/// meaningful and must each be supplied separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Origin stop
    pub from: StopId,

    /// Destination stop
    pub to: StopId,

    /// Travel cost along this connection
    pub weight: u32,

    /// Line operating this connection
    pub line: LineId,
}

impl Connection {
    /// Create a new connection.
    pub fn new(from: StopId, to: StopId, weight: u32, line: LineId) -> Self {
        Self {
            from,
            to,
            weight,
            line,
        }
    }
}

/// An outgoing adjacency entry: the origin stop is implicit in where the
/// edge is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Destination stop
    pub to: StopId,

    /// Travel cost along this edge
    pub weight: u32,

    /// Line operating this edge
    pub line: LineId,
}
