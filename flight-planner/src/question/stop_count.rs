//! Counting connections by stop count.

use tracing::warn;

use crate::domain::{Airport, Trip};
use crate::graph::ConnectionGraph;

use super::Question;

/// How the actual stop count is compared against the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopsComparison {
    /// `maximum N stops`
    AtMost,
    /// `minimum N stops`
    AtLeast,
    /// `exactly N stops`
    Exactly,
}

impl StopsComparison {
    /// Parses the comparison keyword used in question text.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "maximum" => Some(StopsComparison::AtMost),
            "minimum" => Some(StopsComparison::AtLeast),
            "exactly" => Some(StopsComparison::Exactly),
            _ => None,
        }
    }
}

/// Answers `How many different connections with {maximum|minimum|exactly}
/// S stop(s) exist between A and B?`.
///
/// Loops are allowed, so the stop bound is what keeps the search finite.
/// A minimum-stops question has no such bound: ever-longer loops keep
/// satisfying it, so no continue-search predicate can both terminate and
/// be complete. That combination is refused up front with a diagnostic
/// instead of being searched.
#[derive(Debug, Clone)]
pub struct StopCountQuestion {
    number: u32,
    from: Airport,
    to: Airport,
    comparison: StopsComparison,
    stops: usize,
}

impl StopCountQuestion {
    /// Creates the question.
    pub fn new(
        number: u32,
        from: Airport,
        to: Airport,
        comparison: StopsComparison,
        stops: usize,
    ) -> Self {
        Self {
            number,
            from,
            to,
            comparison,
            stops,
        }
    }
}

impl Question for StopCountQuestion {
    fn evaluate(&self, graph: &ConnectionGraph) -> Vec<Trip> {
        let keep: fn(usize, usize) -> bool = match self.comparison {
            StopsComparison::AtMost => |stops, limit| stops <= limit,
            // Shorter partials may still grow into exactly the requested
            // count, so the search bound stays at-most.
            StopsComparison::Exactly => |stops, limit| stops == limit,
            StopsComparison::AtLeast => {
                warn!(
                    question = self.number,
                    "a minimum stop count cannot bound the search on a cyclic \
                     graph; answering with no connections"
                );
                return Vec::new();
            }
        };

        let limit = self.stops;
        graph
            .all_trips(self.from, self.to, true, |trip| trip.stop_count() <= limit)
            .into_iter()
            .filter(|trip| keep(trip.stop_count(), limit))
            .collect()
    }

    fn render(&self, trips: &[Trip]) -> String {
        format!("#{}: {}", self.number, trips.len())
    }
}
