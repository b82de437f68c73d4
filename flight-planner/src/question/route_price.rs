//! Price of a fixed route.

use crate::domain::{Airport, Trip};
use crate::graph::ConnectionGraph;

use super::Question;

/// Answers `What is the price of the connection A-B-C…?`.
///
/// This question does not search: it walks the explicit airport list
/// and, for each consecutive pair, takes the first segment in graph
/// edge order connecting it. If any pair has no segment there is no
/// such connection.
#[derive(Debug, Clone)]
pub struct RoutePriceQuestion {
    number: u32,
    route: Vec<Airport>,
}

impl RoutePriceQuestion {
    /// Creates the question for a route given as an ordered airport list.
    pub fn new(number: u32, route: Vec<Airport>) -> Self {
        Self { number, route }
    }
}

impl Question for RoutePriceQuestion {
    fn evaluate(&self, graph: &ConnectionGraph) -> Vec<Trip> {
        let mut trip = Trip::new();
        for pair in self.route.windows(2) {
            let matched = graph
                .edges()
                .iter()
                .find(|edge| edge.source() == pair[0] && edge.destination() == pair[1]);
            match matched {
                Some(edge) => trip
                    .push(*edge)
                    .expect("consecutive route segments chain by construction"),
                None => return Vec::new(),
            }
        }
        vec![trip]
    }

    fn render(&self, trips: &[Trip]) -> String {
        match trips.first() {
            Some(trip) => format!("#{}: {}", self.number, trip.price()),
            None => format!("#{}: No such connection found!", self.number),
        }
    }
}
