//! Domain error types.

use super::Airport;

/// Domain-level errors for trip construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A segment's source does not match the trip's current destination
    #[error("segment departing {1} cannot extend a trip ending at {0}")]
    SegmentNotChained(Airport, Airport),
}
