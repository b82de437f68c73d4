//! Flight connection graph and path enumeration.
//!
//! The graph owns the full segment multiset and exposes a depth-first
//! trip enumeration parameterized by a caller-supplied predicate. The
//! predicate decides, at every partial trip, whether a branch is worth
//! extending; it is the only thing standing between a cyclic graph and
//! non-termination, so callers that allow loops must supply a predicate
//! that eventually becomes false as the trip grows.

use std::collections::HashSet;

use tracing::trace;

use crate::domain::{Airport, FlightSegment, Trip};

/// A directed multigraph of airports connected by priced flight segments.
///
/// Nodes are deduplicated; edges are not, and their insertion order is
/// preserved. Edge order is observable: it determines the order in which
/// the depth-first search visits segments and therefore the order of
/// enumerated trips.
#[derive(Debug, Clone, Default)]
pub struct ConnectionGraph {
    nodes: HashSet<Airport>,
    edges: Vec<FlightSegment>,
}

impl ConnectionGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all airports registered in this graph.
    pub fn nodes(&self) -> &HashSet<Airport> {
        &self.nodes
    }

    /// Returns all segments in insertion order.
    pub fn edges(&self) -> &[FlightSegment] {
        &self.edges
    }

    /// Registers an airport as a node.
    pub fn add_node(&mut self, airport: Airport) {
        self.nodes.insert(airport);
    }

    /// Adds a segment, registering both of its endpoints as nodes.
    pub fn add_edge(&mut self, segment: FlightSegment) {
        self.nodes.insert(segment.source());
        self.nodes.insert(segment.destination());
        self.edges.push(segment);
    }

    /// Enumerates every trip from `from` to `to` accepted by the search
    /// predicate.
    ///
    /// The search walks segments depth-first in edge insertion order,
    /// reusing one mutable trip buffer with explicit push/pop around
    /// each descent. After each tentative extension the partial trip is
    /// checked against `continue_search`; branches it rejects are
    /// abandoned. An accepted partial whose destination equals `to` is
    /// cloned into the results, and the search still recurses past it,
    /// since longer trips through the same airport may also match.
    ///
    /// `from` and `to` may be equal: that is how round trips back to the
    /// origin are requested. A length-0 trip is never emitted; the
    /// search always takes at least one segment.
    ///
    /// When `loops_allowed` is false, segments leading to an airport
    /// already on the partial trip are skipped. When it is true,
    /// termination on a cyclic graph rests entirely on the predicate
    /// becoming false as trips grow (a price ceiling or a stop bound);
    /// the engine itself enforces no depth cap.
    ///
    /// An empty result is a normal outcome: no path exists.
    pub fn all_trips<F>(
        &self,
        from: Airport,
        to: Airport,
        loops_allowed: bool,
        continue_search: F,
    ) -> Vec<Trip>
    where
        F: Fn(&Trip) -> bool,
    {
        let mut found = Vec::new();
        let mut buffer = Trip::new();
        self.search_from(from, to, loops_allowed, &continue_search, &mut buffer, &mut found);
        found
    }

    fn search_from<F>(
        &self,
        frontier: Airport,
        to: Airport,
        loops_allowed: bool,
        continue_search: &F,
        buffer: &mut Trip,
        found: &mut Vec<Trip>,
    ) where
        F: Fn(&Trip) -> bool,
    {
        for edge in &self.edges {
            if edge.source() != frontier {
                continue;
            }
            if !loops_allowed && buffer.contains_airport(edge.destination()) {
                continue;
            }

            buffer
                .push(*edge)
                .expect("edge departs from the search frontier");

            if continue_search(buffer) {
                if edge.destination() == to {
                    trace!(trip = %buffer, "found matching trip");
                    // Clone out of the shared buffer; later backtracking
                    // must not touch recorded results.
                    found.push(buffer.clone());
                }
                self.search_from(edge.destination(), to, loops_allowed, continue_search, buffer, found);
            }

            buffer.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(source: Airport, destination: Airport, price: u32) -> FlightSegment {
        FlightSegment::new(source, destination, price)
    }

    /// AMS-LHR(300), AMS-FRA(400), FRA-NUE(500), NUE-LHR(600), LHR-NUE(500).
    fn sample_graph() -> ConnectionGraph {
        let mut graph = ConnectionGraph::new();
        graph.add_edge(seg(Airport::Ams, Airport::Lhr, 300));
        graph.add_edge(seg(Airport::Ams, Airport::Fra, 400));
        graph.add_edge(seg(Airport::Fra, Airport::Nue, 500));
        graph.add_edge(seg(Airport::Nue, Airport::Lhr, 600));
        graph.add_edge(seg(Airport::Lhr, Airport::Nue, 500));
        graph
    }

    #[test]
    fn add_edge_registers_nodes() {
        let mut graph = ConnectionGraph::new();
        graph.add_edge(seg(Airport::Ams, Airport::Bos, 500));
        graph.add_edge(seg(Airport::Ams, Airport::Pdx, 600));
        graph.add_edge(seg(Airport::Bos, Airport::Pdx, 700));
        graph.add_edge(seg(Airport::Pdx, Airport::Hkg, 800));

        assert_eq!(graph.nodes().len(), 4);
        assert_eq!(graph.edges().len(), 4);
    }

    #[test]
    fn edge_order_is_insertion_order() {
        let mut graph = ConnectionGraph::new();
        graph.add_edge(seg(Airport::Ams, Airport::Lhr, 300));
        graph.add_edge(seg(Airport::Ams, Airport::Lhr, 250));
        graph.add_edge(seg(Airport::Ams, Airport::Fra, 400));

        let prices: Vec<u32> = graph.edges().iter().map(FlightSegment::price).collect();
        assert_eq!(prices, vec![300, 250, 400]);
    }

    #[test]
    fn simple_paths_without_loops() {
        let mut graph = ConnectionGraph::new();
        graph.add_edge(seg(Airport::Ams, Airport::Bos, 500));
        graph.add_edge(seg(Airport::Ams, Airport::Pdx, 600));
        graph.add_edge(seg(Airport::Bos, Airport::Pdx, 700));
        graph.add_edge(seg(Airport::Pdx, Airport::Hkg, 800));

        let trips = graph.all_trips(Airport::Ams, Airport::Hkg, false, |_| true);
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].to_string(), "AMS-BOS-PDX-HKG-2000");
        assert_eq!(trips[1].to_string(), "AMS-PDX-HKG-1400");
    }

    #[test]
    fn no_path_yields_empty_result() {
        let graph = sample_graph();
        // AMS has no inbound segment in this network.
        let trips = graph.all_trips(Airport::Lhr, Airport::Ams, false, |_| true);
        assert!(trips.is_empty());
    }

    #[test]
    fn zero_length_trip_is_never_emitted() {
        let graph = sample_graph();
        let trips = graph.all_trips(Airport::Ams, Airport::Ams, false, |_| true);
        // Every emitted trip took at least one segment, and nothing loops
        // back to AMS in this graph.
        assert!(trips.is_empty());
    }

    #[test]
    fn round_trip_to_origin() {
        let graph = sample_graph();
        let trips = graph.all_trips(Airport::Nue, Airport::Nue, true, |trip| {
            trip.stop_count() <= 3
        });
        assert!(!trips.is_empty());
        assert_eq!(trips[0].to_string(), "NUE-LHR-NUE-1100");
    }

    #[test]
    fn price_bounded_search_terminates_on_cyclic_graph() {
        // NUE-LHR-NUE is a positive-price cycle; the ceiling predicate
        // must still bring the search to an end.
        let graph = sample_graph();
        let trips = graph.all_trips(Airport::Fra, Airport::Lhr, true, |trip| {
            trip.price() < 2500
        });
        let rendered: Vec<String> = trips.iter().map(Trip::to_string).collect();
        assert_eq!(
            rendered,
            vec!["FRA-NUE-LHR-1100", "FRA-NUE-LHR-NUE-LHR-2200"]
        );
    }

    #[test]
    fn results_follow_edge_order_deterministically() {
        let mut graph = ConnectionGraph::new();
        graph.add_edge(seg(Airport::Ams, Airport::Lhr, 300));
        graph.add_edge(seg(Airport::Ams, Airport::Fra, 400));
        graph.add_edge(seg(Airport::Fra, Airport::Lhr, 100));

        for _ in 0..10 {
            let trips = graph.all_trips(Airport::Ams, Airport::Lhr, false, |_| true);
            let rendered: Vec<String> = trips.iter().map(Trip::to_string).collect();
            assert_eq!(rendered, vec!["AMS-LHR-300", "AMS-FRA-LHR-500"]);
        }
    }

    #[test]
    fn rejected_branches_are_not_extended() {
        let graph = sample_graph();
        // Nothing under 1000 reaches LHR from FRA, and the predicate also
        // stops the search from ever leaving NUE.
        let trips = graph.all_trips(Airport::Fra, Airport::Lhr, true, |trip| {
            trip.price() < 1000
        });
        assert!(trips.is_empty());
    }

    #[test]
    fn search_recurses_past_a_match() {
        // Reaching the destination must not stop the branch: a cycle back
        // through it can produce further matches.
        let graph = sample_graph();
        let trips = graph.all_trips(Airport::Fra, Airport::Lhr, true, |trip| {
            trip.stop_count() <= 3
        });
        let rendered: Vec<String> = trips.iter().map(Trip::to_string).collect();
        assert_eq!(
            rendered,
            vec!["FRA-NUE-LHR-1100", "FRA-NUE-LHR-NUE-LHR-2200"]
        );
    }
}
