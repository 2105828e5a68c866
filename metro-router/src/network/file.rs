//! Loading networks from JSON.
//!
//! ```json
//! {
//!   "stations": ["Saket~Y", "AIIMS~Y"],
//!   "edges": [{ "from": "Saket~Y", "to": "AIIMS~Y", "distance": 6 }]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Distance, MalformedStation, StationId};
use crate::graph::Graph;

/// Errors that can occur when loading a network description.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// File could not be read
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid network JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An edge names a station that is not listed
    #[error("edge {from} - {to} references unknown station {missing}")]
    UnknownStation {
        from: String,
        to: String,
        missing: String,
    },

    /// A station identifier has no line codes
    #[error(transparent)]
    Station(#[from] MalformedStation),

    /// Edge is a self-loop or has zero length
    #[error("invalid edge {from} - {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: &'static str,
    },
}

/// An edge in a network file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

/// A network description as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFile {
    pub stations: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl NetworkFile {
    /// Parse a network description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate and build the graph.
    ///
    /// Unlike [`GraphBuilder`](super::GraphBuilder), bad edges are an error
    /// rather than silently dropped.
    pub fn into_graph(self) -> Result<Graph, NetworkError> {
        let mut known = HashSet::new();
        for station in &self.stations {
            StationId::new(station.as_str()).lines()?;
            known.insert(station.as_str());
        }

        for edge in &self.edges {
            for end in [&edge.from, &edge.to] {
                if !known.contains(end.as_str()) {
                    return Err(NetworkError::UnknownStation {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: end.clone(),
                    });
                }
            }
            let reason = if edge.from == edge.to {
                Some("self-loop")
            } else if edge.distance == 0 {
                Some("zero distance")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(NetworkError::InvalidEdge {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    reason,
                });
            }
        }

        let mut graph = Graph::new();
        for station in self.stations {
            graph.add_vertex(station);
        }
        for edge in &self.edges {
            graph.add_edge(&edge.from, &edge.to, edge.distance);
        }

        debug!(
            stations = graph.vertex_count(),
            edges = graph.edge_count(),
            "network built"
        );
        Ok(graph)
    }
}

/// Read a JSON network description from `path` and build its graph.
pub fn load_network(path: impl AsRef<Path>) -> Result<Graph, NetworkError> {
    let json = std::fs::read_to_string(path)?;
    NetworkFile::from_json(&json)?.into_graph()
}
