//! Undirected weighted station graph.
//!
//! Stations are stored in an arena: each identifier gets a stable
//! [`VertexId`] on first insertion, and adjacency lists are keyed by that
//! index. Adjacency is symmetric: if A lists B with weight w, B lists A
//! with weight w.

use std::collections::{BTreeMap, HashMap};

use tracing::{trace, warn};

use crate::domain::{Distance, RouteError, StationId};

/// Stable arena index of a station in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// A transit network: stations and the distances between adjacent ones.
///
/// Neighbours are iterated in ascending [`VertexId`] order, i.e. the order
/// in which stations were first added.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    stations: Vec<StationId>,
    index: HashMap<StationId, VertexId>,
    adjacency: Vec<BTreeMap<VertexId, Distance>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station with no edges.
    ///
    /// Re-adding an existing station resets its adjacency record: its edges
    /// are dropped from both endpoints. Add all stations before any edges.
    pub fn add_vertex(&mut self, id: impl Into<StationId>) -> VertexId {
        let id = id.into();

        if let Some(&v) = self.index.get(&id) {
            let dropped = std::mem::take(&mut self.adjacency[v.0]);
            if !dropped.is_empty() {
                warn!(station = %id, edges = dropped.len(), "re-added station, dropping its edges");
            }
            for neighbour in dropped.keys() {
                self.adjacency[neighbour.0].remove(&v);
            }
            return v;
        }

        let v = VertexId(self.stations.len());
        self.stations.push(id.clone());
        self.index.insert(id, v);
        self.adjacency.push(BTreeMap::new());
        v
    }

    /// Connect two stations in both directions.
    ///
    /// No-op (returns false) if either station is absent. Self-loops and
    /// zero-length edges are ignored as well.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Distance) -> bool {
        let (Some(va), Some(vb)) = (self.id_of(a), self.id_of(b)) else {
            trace!(from = a, to = b, "edge endpoint missing, ignoring");
            return false;
        };
        if va == vb || weight == 0 {
            warn!(from = a, to = b, weight, "ignoring degenerate edge");
            return false;
        }

        self.adjacency[va.0].insert(vb, weight);
        self.adjacency[vb.0].insert(va, weight);
        true
    }

    /// Whether the station exists.
    pub fn contains_vertex(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Whether the two stations are directly connected.
    ///
    /// False if either station is absent.
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Distance of the edge between two stations, if they are adjacent.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<Distance> {
        let (va, vb) = (self.id_of(a)?, self.id_of(b)?);
        self.adjacency[va.0].get(&vb).copied()
    }

    /// Whether `to` can be reached from `from` at all.
    ///
    /// A reachability probe, not a shortest-path search: returns as soon as
    /// a station adjacent to `to` is found. Each call owns its visited set.
    ///
    /// A station always reaches itself, even with no edges. An
    /// adjacency-only probe would answer false for an isolated station.
    pub fn has_path(&self, from: &str, to: &str) -> Result<bool, RouteError> {
        let start = self.require(from)?;
        let target = self.require(to)?;
        if start == target {
            return Ok(true);
        }

        let mut visited = vec![false; self.stations.len()];
        let mut stack = vec![start];

        while let Some(v) = stack.pop() {
            if self.adjacency[v.0].contains_key(&target) {
                return Ok(true);
            }
            if visited[v.0] {
                continue;
            }
            visited[v.0] = true;

            stack.extend(
                self.adjacency[v.0]
                    .keys()
                    .copied()
                    .filter(|n| !visited[n.0]),
            );
        }

        Ok(false)
    }

    /// Look up the arena index for a station.
    pub fn id_of(&self, id: &str) -> Option<VertexId> {
        self.index.get(id).copied()
    }

    /// Like [`Graph::id_of`], but absent stations are an error.
    pub fn require(&self, id: &str) -> Result<VertexId, RouteError> {
        self.id_of(id)
            .ok_or_else(|| RouteError::NotFound(id.to_string()))
    }

    /// The identifier of the station at `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` did not come from this graph.
    pub fn station(&self, v: VertexId) -> &StationId {
        &self.stations[v.0]
    }

    /// Neighbours of `v` with edge weights, in ascending index order.
    pub fn neighbours(&self, v: VertexId) -> impl Iterator<Item = (VertexId, Distance)> + '_ {
        self.adjacency[v.0].iter().map(|(n, w)| (*n, *w))
    }

    /// All stations in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = (VertexId, &StationId)> + '_ {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, id)| (VertexId(i), id))
    }

    /// Number of stations.
    pub fn vertex_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}


#[cfg(test)]
pub(crate) mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for small random graphs: vertex count plus an edge list.
    pub(crate) fn small_graph() -> impl Strategy<Value = Graph> {
        (2usize..9).prop_flat_map(|n| {
            proptest::collection::vec((0..n, 0..n, 1u32..20), 0..(n * 2)).prop_map(
                move |edges| {
                    let mut g = Graph::new();
                    for i in 0..n {
                        g.add_vertex(format!("S{i}"));
                    }
                    for (a, b, w) in edges {
                        g.add_edge(&format!("S{a}"), &format!("S{b}"), w);
                    }
                    g
                },
            )
        })
    }

    proptest! {
        /// Reachability is symmetric
        #[test]
        fn has_path_symmetric(g in small_graph()) {
            let ids: Vec<String> = g.stations().map(|(_, s)| s.to_string()).collect();
            for a in &ids {
                for b in &ids {
                    prop_assert_eq!(g.has_path(a, b), g.has_path(b, a));
                }
            }
        }

        /// Adjacency is symmetric with equal weights
        #[test]
        fn adjacency_symmetric(g in small_graph()) {
            for (v, _) in g.stations() {
                for (n, w) in g.neighbours(v) {
                    prop_assert_eq!(
                        g.edge_weight(g.station(n).as_str(), g.station(v).as_str()),
                        Some(w)
                    );
                }
            }
        }
    }
}
