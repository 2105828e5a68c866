//! Depth-first route enumeration.
//!
//! Walks simple paths from the source with an explicit LIFO stack and a
//! visited set shared by the whole walk. A station is marked visited the
//! first time a frame for it is popped, and no later branch can pass
//! through it again. The destination is therefore recorded at most once:
//! the result is the first route the walk reaches it by, which is not
//! necessarily the cheapest. Use [`CostEngine`](super::CostEngine) for true
//! minimum costs.

use tracing::{debug, trace};

use super::config::{CostConfig, CostModel};
use super::route::Route;
use crate::domain::RouteError;
use crate::graph::{Graph, VertexId};

/// One partial route on the stack.
#[derive(Debug, Clone)]
struct Frame {
    vertex: VertexId,
    path: Vec<VertexId>,
    distance: u64,
    time_secs: u64,
}

/// Enumerates routes between two stations.
pub struct PathEnumerator<'a> {
    graph: &'a Graph,
    config: &'a CostConfig,
}

impl<'a> PathEnumerator<'a> {
    /// Create an enumerator over `graph` using `config` for travel times.
    pub fn new(graph: &'a Graph, config: &'a CostConfig) -> Self {
        Self { graph, config }
    }

    /// Best route found from `from` to `to` under `model`.
    ///
    /// A route replaces the current best only if its value is strictly
    /// smaller, so ties go to the first one found. Fails with
    /// [`RouteError::CostOverflow`] if a running total does not fit in a
    /// `u64`.
    pub fn best_route(
        &self,
        from: &str,
        to: &str,
        model: CostModel,
    ) -> Result<Route, RouteError> {
        let source = self.graph.require(from)?;
        let target = self.graph.require(to)?;

        let mut visited = vec![false; self.graph.vertex_count()];
        let mut stack = vec![Frame {
            vertex: source,
            path: vec![source],
            distance: 0,
            time_secs: 0,
        }];
        let mut best: Option<(u64, Frame)> = None;
        let mut expanded = 0usize;

        while let Some(frame) = stack.pop() {
            if visited[frame.vertex.0] {
                continue;
            }
            visited[frame.vertex.0] = true;
            expanded += 1;

            if frame.vertex == target {
                let value = model.select(frame.distance, frame.time_secs);
                trace!(value, hops = frame.path.len() - 1, "reached destination");
                if best.as_ref().is_none_or(|(current, _)| value < *current) {
                    best = Some((value, frame));
                }
                continue;
            }

            for (neighbour, weight) in self.graph.neighbours(frame.vertex) {
                if visited[neighbour.0] {
                    continue;
                }
                let (Some(distance), Some(time_secs)) = (
                    frame.distance.checked_add(u64::from(weight)),
                    self.config
                        .hop_time_secs(weight)
                        .and_then(|t| frame.time_secs.checked_add(t)),
                ) else {
                    return Err(RouteError::CostOverflow {
                        from: self.graph.station(source).clone(),
                        to: self.graph.station(target).clone(),
                    });
                };

                let mut path = frame.path.clone();
                path.push(neighbour);
                stack.push(Frame {
                    vertex: neighbour,
                    path,
                    distance,
                    time_secs,
                });
            }
        }

        let Some((value, frame)) = best else {
            debug!(from, to, expanded, "enumeration found no route");
            return Err(RouteError::Unreachable {
                from: self.graph.station(source).clone(),
                to: self.graph.station(target).clone(),
            });
        };

        debug!(from, to, ?model, value, expanded, "enumeration complete");
        let stations = frame
            .path
            .into_iter()
            .map(|v| self.graph.station(v).clone())
            .collect();
        Ok(Route::new(stations, frame.distance, frame.time_secs, model))
    }
}


/// Tests documenting that enumeration is not a true shortest-path search.
#[cfg(test)]
mod bug_tests {
    use super::*;
    use crate::planner::CostEngine;

    /// The global visited set lets the first arrival win.
    ///
    /// From A the walk pushes B then C, pops C first and reaches the
    /// destination over the 10 km direct edge. C is now visited, so the
    /// 2 km route through B is never completed.
    #[test]
    fn bug_first_arrival_beats_cheaper_route() {
        let mut g = Graph::new();
        for s in ["A", "B", "C"] {
            g.add_vertex(s);
        }
        g.add_edge("A", "B", 1);
        g.add_edge("B", "C", 1);
        g.add_edge("A", "C", 10);
        let config = CostConfig::default();

        let route = PathEnumerator::new(&g, &config)
            .best_route("A", "C", CostModel::Distance)
            .unwrap();
        let optimum = CostEngine::new(&g, &config)
            .minimum_cost("A", "C", CostModel::Distance)
            .unwrap();

        // This documents the actual (non-optimal) behaviour:
        assert_eq!(route.distance(), 10);
        assert_eq!(optimum, 2);
    }

    /// A station visited on a dead-end branch is lost to later branches.
    #[test]
    fn bug_intermediate_station_claimed_by_earlier_branch() {
        // M is reachable directly (20 km) or via B (2 km)
        let mut g = Graph::new();
        for s in ["A", "B", "M", "D"] {
            g.add_vertex(s);
        }
        g.add_edge("A", "B", 1);
        g.add_edge("B", "M", 1);
        g.add_edge("A", "M", 20);
        g.add_edge("M", "D", 1);
        let config = CostConfig::default();

        let route = PathEnumerator::new(&g, &config)
            .best_route("A", "D", CostModel::Distance)
            .unwrap();

        // M is reached first over the 20 km edge and then marked visited
        assert_eq!(route.distance(), 21);
    }
}
