//! Single-source shortest distances.
//!
//! Classic priority-queue relaxation (Dijkstra) over the weighted
//! network. This is an independent query against the network, usable on
//! its own or as a cross-check for path enumeration; it is not coupled
//! to the enumerator.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::domain::StopId;
use crate::network::TransitNetwork;

/// Minimal travel cost from a fixed source to each reachable stop.
///
/// Unreachable stops are simply absent: [`distance`](Self::distance)
/// returns `None` for them, which is this crate's rendition of the
/// "infinite" sentinel. That way an unreachable stop can never be
/// confused with a merely expensive one.
#[derive(Debug, Clone, Default)]
pub struct DistanceMap {
    distances: HashMap<StopId, u32>,
}

impl DistanceMap {
    /// The minimal cost to reach `stop`, or `None` if unreachable.
    pub fn distance(&self, stop: &StopId) -> Option<u32> {
        self.distances.get(stop).copied()
    }

    /// Iterate over reachable stops and their distances.
    pub fn reachable(&self) -> impl Iterator<Item = (&StopId, u32)> {
        self.distances.iter().map(|(stop, &d)| (stop, d))
    }

    /// Number of reachable stops (the source counts as reachable).
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// True if nothing is reachable (source absent from the network).
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Compute minimal total edge weight from `source` to every reachable
/// stop.
///
/// Non-negative weights are guaranteed by the `u32` edge type; the
/// negative-weight precondition is enforced at the data boundary (see
/// the loader). If `source` is absent from the network the result is
/// empty: an unknown source reaches nothing.
pub fn shortest_distances(network: &TransitNetwork, source: &StopId) -> DistanceMap {
    let mut distances: HashMap<StopId, u32> = HashMap::new();

    if !network.contains(source) {
        return DistanceMap { distances };
    }

    let mut frontier: BinaryHeap<Reverse<(u32, StopId)>> = BinaryHeap::new();
    distances.insert(source.clone(), 0);
    frontier.push(Reverse((0, source.clone())));

    while let Some(Reverse((cost, stop))) = frontier.pop() {
        // Skip stale entries superseded by a better relaxation.
        if distances.get(&stop).is_some_and(|&best| cost > best) {
            continue;
        }

        for edge in network.neighbors(&stop) {
            let next_cost = cost + edge.weight;
            let improved = distances
                .get(&edge.to)
                .is_none_or(|&best| next_cost < best);

            if improved {
                distances.insert(edge.to.clone(), next_cost);
                frontier.push(Reverse((next_cost, edge.to.clone())));
            }
        }
    }

    DistanceMap { distances }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::sample_network;

    fn stop(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    #[test]
    fn source_is_zero() {
        let network = sample_network();
        let distances = shortest_distances(&network, &stop("A"));

        assert_eq!(distances.distance(&stop("A")), Some(0));
    }

    #[test]
    fn sample_network_from_a() {
        let network = sample_network();
        let distances = shortest_distances(&network, &stop("A"));

        assert_eq!(distances.distance(&stop("B")), Some(5));
        assert_eq!(distances.distance(&stop("C")), Some(11));
        assert_eq!(distances.distance(&stop("D")), Some(5));
        assert_eq!(distances.distance(&stop("E")), Some(5));
        assert_eq!(distances.distance(&stop("F")), Some(11));
        assert_eq!(distances.distance(&stop("G")), Some(9));
        assert_eq!(distances.distance(&stop("H")), Some(11));
        assert_eq!(distances.distance(&stop("I")), Some(14));
        assert_eq!(distances.distance(&stop("J")), Some(14));
    }

    #[test]
    fn unreachable_stop_is_none() {
        let network = sample_network();

        // J has no outgoing edges, so nothing but J itself is reachable.
        let distances = shortest_distances(&network, &stop("J"));
        assert_eq!(distances.distance(&stop("J")), Some(0));
        assert_eq!(distances.distance(&stop("A")), None);
        assert_eq!(distances.len(), 1);
    }

    #[test]
    fn absent_source_reaches_nothing() {
        let network = sample_network();
        let distances = shortest_distances(&network, &stop("Z"));

        assert!(distances.is_empty());
        assert_eq!(distances.distance(&stop("A")), None);
    }

    #[test]
    fn picks_cheaper_of_parallel_edges() {
        use crate::domain::{Connection, LineId};
        use crate::network::TransitNetwork;

        let line = |s: &str| LineId::parse(s).unwrap();
        let network = TransitNetwork::build(vec![
            Connection::new(stop("A"), stop("B"), 9, line("L1")),
            Connection::new(stop("A"), stop("B"), 4, line("L2")),
        ]);

        let distances = shortest_distances(&network, &stop("A"));
        assert_eq!(distances.distance(&stop("B")), Some(4));
    }
}
