//! All connections below a price ceiling.

use crate::domain::{Airport, Trip};
use crate::graph::ConnectionGraph;

use super::Question;

/// Answers `Find all connections from A to B below P Euros!`.
///
/// Loops are allowed; the price ceiling is what bounds the search on a
/// cyclic graph, so every enumerated partial must stay strictly below it.
#[derive(Debug, Clone)]
pub struct BelowPriceQuestion {
    number: u32,
    from: Airport,
    to: Airport,
    price_limit: u32,
}

impl BelowPriceQuestion {
    /// Creates the question with a strict price ceiling.
    pub fn new(number: u32, from: Airport, to: Airport, price_limit: u32) -> Self {
        Self {
            number,
            from,
            to,
            price_limit,
        }
    }
}

impl Question for BelowPriceQuestion {
    fn evaluate(&self, graph: &ConnectionGraph) -> Vec<Trip> {
        let limit = self.price_limit;
        graph
            .all_trips(self.from, self.to, true, |trip| trip.price() < limit)
            .into_iter()
            // The engine only emits trips ending at the destination; the
            // re-check guards the contract.
            .filter(|trip| trip.destination() == Some(self.to))
            .collect()
    }

    fn render(&self, trips: &[Trip]) -> String {
        if trips.is_empty() {
            return format!("#{}: No connections found!", self.number);
        }
        let joined = trips
            .iter()
            .map(Trip::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("#{}: {}", self.number, joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FlightSegment;

    fn seg(source: Airport, destination: Airport, price: u32) -> FlightSegment {
        FlightSegment::new(source, destination, price)
    }

    /// AMS-LHR(300), AMS-FRA(400), FRA-NUE(500), NUE-LHR(600), LHR-NUE(500).
    fn graph() -> ConnectionGraph {
        let mut graph = ConnectionGraph::new();
        graph.add_edge(seg(Airport::Ams, Airport::Lhr, 300));
        graph.add_edge(seg(Airport::Ams, Airport::Fra, 400));
        graph.add_edge(seg(Airport::Fra, Airport::Nue, 500));
        graph.add_edge(seg(Airport::Nue, Airport::Lhr, 600));
        graph.add_edge(seg(Airport::Lhr, Airport::Nue, 500));
        graph
    }

    #[test]
    fn enumerates_loops_under_the_ceiling_in_order() {
        let question = BelowPriceQuestion::new(1, Airport::Fra, Airport::Lhr, 2500);
        let trips = question.evaluate(&graph());
        assert_eq!(
            question.render(&trips),
            "#1: FRA-NUE-LHR-1100, FRA-NUE-LHR-NUE-LHR-2200"
        );
    }

    #[test]
    fn ceiling_is_strict() {
        let question = BelowPriceQuestion::new(2, Airport::Fra, Airport::Lhr, 1100);
        let trips = question.evaluate(&graph());
        assert!(trips.is_empty());
        assert_eq!(question.render(&trips), "#2: No connections found!");
    }

    #[test]
    fn no_route_at_all() {
        let question = BelowPriceQuestion::new(3, Airport::Lhr, Airport::Ams, 10_000);
        let trips = question.evaluate(&graph());
        assert_eq!(question.render(&trips), "#3: No connections found!");
    }
}
