//! Application state for the web layer.

use std::sync::Arc;

use crate::directory::StationDirectory;
use crate::graph::Graph;
use crate::planner::CostConfig;

/// Shared application state.
///
/// The graph is built once at start-up and only read afterwards, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The station network
    pub graph: Arc<Graph>,

    /// Station listing and input lookup
    pub directory: Arc<StationDirectory>,

    /// Time cost model parameters
    pub cost: Arc<CostConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: Graph, cost: CostConfig) -> Self {
        let directory = StationDirectory::new(&graph);
        Self {
            graph: Arc::new(graph),
            directory: Arc::new(directory),
            cost: Arc::new(cost),
        }
    }
}
