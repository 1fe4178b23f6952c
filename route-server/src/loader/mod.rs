//! Network data loading.
//!
//! The network arrives as a JSON edge-set document, the normalized
//! output of the upstream data pipeline:
//!
//! ```json
//! {
//!   "edges": [
//!     { "from": "A", "to": "B", "weight": 5, "line": "L1" }
//!   ]
//! }
//! ```
//!
//! Loading fails fast on malformed records: negative weights and
//! invalid identifiers are rejected with the offending record named,
//! before they can reach the solver.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{Connection, InvalidLineId, InvalidStopId, LineId, StopId};
use crate::network::TransitNetwork;

/// Error loading a network document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to read the file
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid JSON
    #[error("failed to parse network document: {0}")]
    Json(#[from] serde_json::Error),

    /// A record's stop id is invalid
    #[error("edge {index}: bad stop id {value:?}: {source}")]
    InvalidStop {
        /// Position of the record in the document
        index: usize,
        /// The rejected value
        value: String,
        source: InvalidStopId,
    },

    /// A record's line id is invalid
    #[error("edge {index}: bad line id {value:?}: {source}")]
    InvalidLine {
        index: usize,
        value: String,
        source: InvalidLineId,
    },

    /// A record carries a negative weight
    #[error("edge {index} ({from} -> {to}): negative weight {weight}")]
    NegativeWeight {
        index: usize,
        from: String,
        to: String,
        weight: i64,
    },

    /// A record's weight exceeds the supported range
    #[error("edge {index} ({from} -> {to}): weight {weight} out of range")]
    WeightOutOfRange {
        index: usize,
        from: String,
        to: String,
        weight: i64,
    },
}

/// Raw edge record as found in the document.
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    from: String,
    to: String,
    weight: i64,
    line: String,
}

/// The top-level network document.
#[derive(Debug, Deserialize)]
struct NetworkDoc {
    edges: Vec<EdgeRecord>,
}

/// Parse a network from a JSON document string.
pub fn parse_network(json: &str) -> Result<TransitNetwork, LoadError> {
    let doc: NetworkDoc = serde_json::from_str(json)?;

    let mut connections = Vec::with_capacity(doc.edges.len());
    for (index, record) in doc.edges.into_iter().enumerate() {
        if record.weight < 0 {
            return Err(LoadError::NegativeWeight {
                index,
                from: record.from,
                to: record.to,
                weight: record.weight,
            });
        }

        let weight =
            u32::try_from(record.weight).map_err(|_| LoadError::WeightOutOfRange {
                index,
                from: record.from.clone(),
                to: record.to.clone(),
                weight: record.weight,
            })?;

        let from = StopId::parse(&record.from).map_err(|source| LoadError::InvalidStop {
            index,
            value: record.from.clone(),
            source,
        })?;
        let to = StopId::parse(&record.to).map_err(|source| LoadError::InvalidStop {
            index,
            value: record.to.clone(),
            source,
        })?;
        let line = LineId::parse(&record.line).map_err(|source| LoadError::InvalidLine {
            index,
            value: record.line.clone(),
            source,
        })?;

        connections.push(Connection::new(from, to, weight, line));
    }

    Ok(TransitNetwork::build(connections))
}

/// Load a network from a JSON file.
pub fn load_network(path: impl AsRef<Path>) -> Result<TransitNetwork, LoadError> {
    let json = std::fs::read_to_string(path)?;
    parse_network(&json)
}

/// The built-in demo network: ten stops on six lines, including
/// parallel edges (A-D on L2 and L6, D-F on L2 and L4) and a sink stop
/// J with no outgoing edges.
pub fn sample_network() -> TransitNetwork {
    const EDGES: &[(&str, &str, u32, &str)] = &[
        ("A", "B", 5, "L1"),
        ("A", "D", 5, "L2"),
        ("A", "D", 5, "L6"),
        ("A", "E", 5, "L3"),
        ("A", "E", 5, "L5"),
        ("B", "C", 6, "L1"),
        ("B", "A", 5, "L1"),
        ("C", "F", 5, "L1"),
        ("C", "B", 5, "L1"),
        ("D", "F", 6, "L2"),
        ("D", "F", 6, "L4"),
        ("E", "G", 4, "L3"),
        ("E", "F", 8, "L5"),
        ("F", "H", 6, "L2"),
        ("F", "I", 3, "L3"),
        ("F", "I", 3, "L4"),
        ("F", "C", 5, "L1"),
        ("G", "H", 2, "L3"),
        ("H", "J", 3, "L3"),
        ("H", "F", 3, "L2"),
        ("I", "F", 3, "L3"),
        ("I", "F", 3, "L4"),
    ];

    let connections = EDGES
        .iter()
        .map(|(from, to, weight, line)| {
            // Safe: the table above only holds valid identifiers
            Connection::new(
                StopId::parse(from).expect("sample stop id"),
                StopId::parse(to).expect("sample stop id"),
                *weight,
                LineId::parse(line).expect("sample line id"),
            )
        })
        .collect::<Vec<_>>();

    TransitNetwork::build(connections)
}
