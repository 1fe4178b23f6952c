//! The transit network graph.
//!
//! Adjacency representation: each stop maps to its ordered list of
//! outgoing edges. The network is built once from connection records
//! and is read-only afterwards, so it can be shared freely across
//! concurrent queries.

use std::collections::HashMap;

use crate::domain::{Connection, Edge, StopId};

/// A directed, weighted, multi-line transit graph.
///
/// Per-stop edge order is the order the connections were supplied in;
/// this is what makes path enumeration deterministic, so it is part of
/// the contract. Every stop referenced as an edge destination has its
/// own entry, even when it has no outgoing edges of its own.
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    adjacency: HashMap<StopId, Vec<Edge>>,
}

impl TransitNetwork {
    /// Build a network from connection records.
    ///
    /// Connections are grouped by origin stop, preserving input order
    /// within each group. Parallel connections (same stop pair,
    /// different lines) are all retained.
    pub fn build(connections: impl IntoIterator<Item = Connection>) -> Self {
        let mut adjacency: HashMap<StopId, Vec<Edge>> = HashMap::new();

        for connection in connections {
            adjacency.entry(connection.to.clone()).or_default();
            adjacency
                .entry(connection.from)
                .or_default()
                .push(Edge {
                    to: connection.to,
                    weight: connection.weight,
                    line: connection.line,
                });
        }

        Self { adjacency }
    }

    /// The outgoing edges of a stop, in insertion order.
    ///
    /// Returns an empty slice both for stops with no outgoing edges and
    /// for stops absent from the network entirely: an unknown stop is
    /// treated as isolated, never as an error.
    pub fn neighbors(&self, stop: &StopId) -> &[Edge] {
        self.adjacency.get(stop).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if the stop is part of the network.
    pub fn contains(&self, stop: &StopId) -> bool {
        self.adjacency.contains_key(stop)
    }

    /// Iterate over all stops, in no particular order.
    pub fn stops(&self) -> impl Iterator<Item = &StopId> {
        self.adjacency.keys()
    }

    /// Number of stops in the network.
    pub fn stop_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// True if the network has no stops.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
