//! Route query error types.
//!
//! These errors describe why a query against the network could not be
//! answered. They are distinct from loading/IO errors.

use super::{MalformedStation, StationId};
use crate::heap::HeapError;

/// Errors returned by graph queries, routing and station lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Station is not in the network
    #[error("station not found: {0}")]
    NotFound(String),

    /// No path connects the two stations
    #[error("no route from {from} to {to}")]
    Unreachable { from: StationId, to: StationId },

    /// An accumulated cost does not fit in a `u64`
    #[error("route cost from {from} to {to} overflows")]
    CostOverflow { from: StationId, to: StationId },

    /// Station identifier lacks the `name~LINES` structure
    #[error(transparent)]
    MalformedIdentifier(#[from] MalformedStation),

    /// A short code matches more than one station
    #[error("station code {code} is ambiguous ({count} stations)")]
    AmbiguousCode { code: String, count: usize },

    /// Internal priority-queue invariant was broken
    #[error("priority queue invariant violated: {0}")]
    Heap(#[from] HeapError),
}
