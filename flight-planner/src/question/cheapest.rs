//! Cheapest connection between two airports.

use crate::domain::{Airport, Trip};
use crate::graph::ConnectionGraph;

use super::Question;

/// Answers `What is the cheapest connection from A to B?`.
///
/// Loops are only allowed when searching a round trip back to the same
/// origin; otherwise the search sticks to loop-free trips. The search
/// predicate `(A == B && destination == B) || !contains_loop` is kept
/// exactly as-is, including its boundary behavior when `A != B` and a
/// candidate revisits an endpoint mid-route: it is a pruning heuristic,
/// not a proof of minimality for every graph shape, and changing it
/// would change which trips are enumerated.
#[derive(Debug, Clone)]
pub struct CheapestQuestion {
    number: u32,
    from: Airport,
    to: Airport,
}

impl CheapestQuestion {
    /// Creates the question. `from` and `to` may be equal to ask for the
    /// cheapest round trip.
    pub fn new(number: u32, from: Airport, to: Airport) -> Self {
        Self { number, from, to }
    }
}

impl Question for CheapestQuestion {
    fn evaluate(&self, graph: &ConnectionGraph) -> Vec<Trip> {
        let round_trip = self.from == self.to;
        let to = self.to;

        let candidates = graph.all_trips(self.from, self.to, round_trip, |trip| {
            (round_trip && trip.destination() == Some(to)) || !trip.contains_loop()
        });

        let mut cheapest: Option<Trip> = None;
        for trip in candidates {
            // Strict comparison keeps the first-seen trip on price ties.
            if cheapest.as_ref().is_none_or(|best| trip.price() < best.price()) {
                cheapest = Some(trip);
            }
        }
        cheapest.into_iter().collect()
    }

    fn render(&self, trips: &[Trip]) -> String {
        match trips.first() {
            Some(trip) => format!("#{}: {}", self.number, trip),
            None => format!("#{}: No such connection found!", self.number),
        }
    }
}
