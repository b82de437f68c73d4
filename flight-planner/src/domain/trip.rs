//! Trip type.
//!
//! A `Trip` is an ordered chain of flight segments where each segment
//! departs from the airport the previous one arrived at. The search
//! engine mutates a single trip in place (push on descent, pop on
//! backtrack) and clones it whenever a completed candidate is kept.

use std::collections::HashSet;
use std::fmt;

use super::{Airport, DomainError, FlightSegment};

/// An ordered chain of flight segments forming one candidate path.
///
/// # Invariants
///
/// - For every adjacent pair of segments, the first one's destination
///   equals the second one's source. Enforced at push time: a
///   non-chaining push fails and leaves the trip unchanged.
/// - A trip may be empty; its source and destination are then absent.
///
/// All aggregate properties (price, stop count, loop detection) are
/// computed from the segment list, never stored.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::{Airport, FlightSegment, Trip};
///
/// let mut trip = Trip::new();
/// trip.push(FlightSegment::new(Airport::Nue, Airport::Fra, 43)).unwrap();
/// trip.push(FlightSegment::new(Airport::Fra, Airport::Lhr, 27)).unwrap();
///
/// assert_eq!(trip.source(), Some(Airport::Nue));
/// assert_eq!(trip.destination(), Some(Airport::Lhr));
/// assert_eq!(trip.price(), 70);
/// assert_eq!(trip.stop_count(), 1);
/// assert_eq!(trip.to_string(), "NUE-FRA-LHR-70");
///
/// // A segment that does not chain is rejected
/// assert!(trip.push(FlightSegment::new(Airport::Ams, Airport::Bos, 10)).is_err());
/// assert_eq!(trip.stop_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trip {
    segments: Vec<FlightSegment>,
}

impl Trip {
    /// Creates an empty trip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the airport where this trip starts, if any.
    pub fn source(&self) -> Option<Airport> {
        self.segments.first().map(FlightSegment::source)
    }

    /// Returns the airport where this trip currently ends, if any.
    pub fn destination(&self) -> Option<Airport> {
        self.segments.last().map(FlightSegment::destination)
    }

    /// Appends a segment to the trip.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the trip is non-empty and the segment's source
    /// differs from the trip's current destination. The trip is left
    /// unchanged in that case.
    pub fn push(&mut self, segment: FlightSegment) -> Result<(), DomainError> {
        if let Some(end) = self.destination() {
            if end != segment.source() {
                return Err(DomainError::SegmentNotChained(end, segment.source()));
            }
        }
        self.segments.push(segment);
        Ok(())
    }

    /// Removes and returns the last segment, or `None` if the trip is empty.
    pub fn pop(&mut self) -> Option<FlightSegment> {
        self.segments.pop()
    }

    /// Returns all segments in order.
    pub fn segments(&self) -> &[FlightSegment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the trip has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the total price of the trip, 0 when empty.
    pub fn price(&self) -> u32 {
        self.segments.iter().map(FlightSegment::price).sum()
    }

    /// Returns the number of intermediate stops (segment count minus one,
    /// 0 when empty).
    pub fn stop_count(&self) -> usize {
        self.segment_count().saturating_sub(1)
    }

    /// Returns true if any airport is visited more than once.
    ///
    /// A loop-free trip touches exactly one more airport than it has
    /// segments. An empty trip reports true, matching the count check.
    pub fn contains_loop(&self) -> bool {
        let distinct: HashSet<Airport> = self
            .segments
            .iter()
            .flat_map(|segment| [segment.source(), segment.destination()])
            .collect();
        self.segments.is_empty() || self.segments.len() != distinct.len() - 1
    }

    /// Returns true if the given airport appears anywhere on the trip.
    pub fn contains_airport(&self, airport: Airport) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.source() == airport || segment.destination() == airport)
    }
}

impl fmt::Display for Trip {
    /// Renders the trip as `"SRC-DST1-…-DSTn-PRICE"`, or the empty
    /// string for an empty trip.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.segments.first() else {
            return Ok(());
        };
        write!(f, "{}", first.source())?;
        for segment in &self.segments {
            write!(f, "-{}", segment.destination())?;
        }
        write!(f, "-{}", self.price())
    }
}
