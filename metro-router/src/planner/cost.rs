//! Dijkstra minimum-cost search.
//!
//! Every station starts in an [`IndexedMinHeap`] at an "unreached" sentinel
//! cost, except the source at 0. Popping a station freezes its cost;
//! neighbours still in the heap are relaxed with decrease-key.

use tracing::{debug, trace};

use super::config::{CostConfig, CostModel};
use crate::domain::{RouteError, StationId};
use crate::graph::{Graph, VertexId};
use crate::heap::IndexedMinHeap;

/// Cost of a station not yet reached. Larger than any real path cost.
const UNREACHED: u64 = u64::MAX;

/// Result of a Dijkstra query: the minimum cost and the path realising it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostedPath {
    /// Minimum accumulated cost under the chosen model.
    pub cost: u64,

    /// Stations along the path, source first.
    pub stations: Vec<StationId>,
}

impl CostedPath {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

/// Runs minimum-cost queries over a graph.
pub struct CostEngine<'a> {
    graph: &'a Graph,
    config: &'a CostConfig,
}

impl<'a> CostEngine<'a> {
    /// Create an engine over `graph` using `config` for the time model.
    pub fn new(graph: &'a Graph, config: &'a CostConfig) -> Self {
        Self { graph, config }
    }

    /// Minimum accumulated cost from `from` to `to`.
    pub fn minimum_cost(
        &self,
        from: &str,
        to: &str,
        model: CostModel,
    ) -> Result<u64, RouteError> {
        self.shortest(from, to, model).map(|p| p.cost)
    }

    /// Minimum accumulated cost from `from` to `to`, with the path.
    ///
    /// Equal-cost alternatives are ordered by station insertion order, so
    /// the realised path is reproducible. Fails with
    /// [`RouteError::CostOverflow`] if a path cost does not fit in a `u64`.
    pub fn shortest(
        &self,
        from: &str,
        to: &str,
        model: CostModel,
    ) -> Result<CostedPath, RouteError> {
        let source = self.graph.require(from)?;
        let target = self.graph.require(to)?;

        let n = self.graph.vertex_count();
        let mut heap = IndexedMinHeap::with_capacity(n);
        let mut best = vec![UNREACHED; n];
        let mut previous: Vec<Option<VertexId>> = vec![None; n];

        for (v, _) in self.graph.stations() {
            let cost = if v == source { 0 } else { UNREACHED };
            best[v.0] = cost;
            heap.insert(v.0, (cost, v))?;
        }

        let mut settled = 0usize;
        while !heap.is_empty() {
            let (_, (cost, v)) = heap.extract_min()?;
            settled += 1;

            // Everything still queued is unreachable from the source
            if cost == UNREACHED {
                break;
            }

            if v == target {
                debug!(from, to, ?model, cost, settled, "dijkstra complete");
                return Ok(CostedPath {
                    cost,
                    stations: self.trace_back(&previous, target),
                });
            }

            for (neighbour, weight) in self.graph.neighbours(v) {
                if !heap.contains(neighbour.0) {
                    continue;
                }

                let candidate = model
                    .edge_cost(weight, self.config)
                    .and_then(|c| cost.checked_add(c))
                    .ok_or_else(|| RouteError::CostOverflow {
                        from: self.graph.station(source).clone(),
                        to: self.graph.station(target).clone(),
                    })?;
                if candidate < best[neighbour.0] {
                    trace!(
                        station = %self.graph.station(neighbour),
                        old = best[neighbour.0],
                        new = candidate,
                        "relaxing"
                    );
                    best[neighbour.0] = candidate;
                    previous[neighbour.0] = Some(v);
                    heap.decrease_key(neighbour.0, (candidate, neighbour))?;
                }
            }
        }

        debug!(from, to, ?model, settled, "destination unreachable");
        Err(RouteError::Unreachable {
            from: self.graph.station(source).clone(),
            to: self.graph.station(target).clone(),
        })
    }

    /// Follow predecessor links back from `target` to the source.
    fn trace_back(&self, previous: &[Option<VertexId>], target: VertexId) -> Vec<StationId> {
        let mut path = vec![target];
        let mut current = target;
        while let Some(p) = previous[current.0] {
            path.push(p);
            current = p;
        }
        path.reverse();

        path.into_iter()
            .map(|v| self.graph.station(v).clone())
            .collect()
    }
}
