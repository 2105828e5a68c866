//! Route planning over a station graph.
//!
//! Two query styles are offered: [`CostEngine`] computes the true minimum
//! cost with Dijkstra's algorithm, while [`PathEnumerator`] walks routes
//! depth-first and returns a literal station sequence annotated with
//! interchanges.

mod config;
mod cost;
mod enumerate;
mod interchange;
mod route;

pub use config::{CostConfig, CostModel};
pub use cost::{CostEngine, CostedPath};
pub use enumerate::PathEnumerator;
pub use interchange::{count_interchanges, interchange_positions};
pub use route::{Route, travel_time};
