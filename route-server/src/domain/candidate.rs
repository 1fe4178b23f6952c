//! Route candidate type.
//!
//! A `RouteCandidate` is one possible way of travelling from an origin
//! stop to a destination stop: a simple path (no stop visited twice)
//! together with the line taken for each hop, the accumulated travel
//! cost, and the derived number of line transfers.

use super::{DomainError, LineId, StopId};

/// Count the line changes in a sequence of per-hop line ids.
///
/// A route using lines `[L1, L1, L2, L2, L1]` has 2 transfers: one
/// L1→L2 and one L2→L1. An empty sequence has zero transfers.
pub fn count_transfers(lines: &[LineId]) -> usize {
    lines.windows(2).filter(|pair| pair[0] != pair[1]).count()
}

/// A candidate route between two stops.
///
/// # Invariants
///
/// - At least one stop
/// - No stop is visited twice (simple path)
/// - Exactly one line entry per hop (`lines.len() == stops.len() - 1`)
/// - `transfers` is derived from `lines` at construction
///
/// A candidate owns its data outright; it holds no references into the
/// network it was found on and may outlive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCandidate {
    stops: Vec<StopId>,
    lines: Vec<LineId>,
    total_weight: u32,
    transfers: usize,
}

impl RouteCandidate {
    /// Construct a candidate, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the stop sequence is empty, a stop repeats, or
    /// the line sequence length doesn't match the hop count.
    pub fn new(
        stops: Vec<StopId>,
        lines: Vec<LineId>,
        total_weight: u32,
    ) -> Result<Self, DomainError> {
        if stops.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        if lines.len() != stops.len() - 1 {
            return Err(DomainError::LinesMismatch {
                stops: stops.len(),
                lines: lines.len(),
            });
        }

        for (i, stop) in stops.iter().enumerate() {
            if stops[..i].contains(stop) {
                return Err(DomainError::RepeatedStop(stop.clone()));
            }
        }

        let transfers = count_transfers(&lines);

        Ok(Self {
            stops,
            lines,
            total_weight,
            transfers,
        })
    }

    /// The visited stops, origin first.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    /// The line taken for each hop (one entry per hop).
    pub fn lines(&self) -> &[LineId] {
        &self.lines
    }

    /// Sum of edge weights along the route.
    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Number of line changes along the route.
    pub fn transfers(&self) -> usize {
        self.transfers
    }

    /// The origin stop.
    pub fn origin(&self) -> &StopId {
        // Safe: validated non-empty at construction
        self.stops.first().unwrap()
    }

    /// The destination stop.
    pub fn destination(&self) -> &StopId {
        // Safe: validated non-empty at construction
        self.stops.last().unwrap()
    }

    /// Number of stops visited.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// True if the route never changes line.
    pub fn is_direct(&self) -> bool {
        self.transfers == 0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn line_seq() -> impl Strategy<Value = Vec<LineId>> {
        prop::collection::vec((1u8..=6).prop_map(|n| LineId::parse(&format!("L{n}")).unwrap()), 0..12)
    }

    proptest! {
        /// Transfers equal a reference fold over adjacent pairs.
        #[test]
        fn transfers_match_reference(lines in line_seq()) {
            let mut expected = 0;
            for i in 1..lines.len() {
                if lines[i] != lines[i - 1] {
                    expected += 1;
                }
            }
            prop_assert_eq!(count_transfers(&lines), expected);
        }

        /// A constant sequence always has zero transfers.
        #[test]
        fn constant_sequence_no_transfers(n in 0usize..12) {
            let lines = vec![LineId::parse("L1").unwrap(); n];
            prop_assert_eq!(count_transfers(&lines), 0);
        }

        /// Transfers are bounded by the number of hops minus one.
        #[test]
        fn transfers_bounded(lines in line_seq()) {
            prop_assert!(count_transfers(&lines) <= lines.len().saturating_sub(1));
        }
    }
}
