//! Domain types for the metro router.
//!
//! Station identifiers, their line membership, and the errors a route
//! query can produce.

mod error;
mod station;

pub use error::RouteError;
pub use station::{LineSet, MalformedStation, StationId};

/// Edge weight: distance between two adjacent stations, in kilometres.
pub type Distance = u32;
