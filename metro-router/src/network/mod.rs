//! Building station graphs.
//!
//! Networks come from the built-in Delhi metro map or from a JSON file.
//! Either way, every station is added before any edge, since re-adding a
//! station would drop the edges it already has.

mod file;

pub use file::{EdgeSpec, NetworkError, NetworkFile, load_network};

use crate::domain::Distance;
use crate::graph::Graph;

/// Builder for creating station graphs.
///
/// Provides a fluent API; stations and edges may be given in any order.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    stations: Vec<String>,
    edges: Vec<(String, String, Distance)>,
}

impl GraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(mut self, id: &str) -> Self {
        self.stations.push(id.to_string());
        self
    }

    /// Add an edge between two stations.
    pub fn edge(mut self, a: &str, b: &str, distance: Distance) -> Self {
        self.edges.push((a.to_string(), b.to_string(), distance));
        self
    }

    /// Build the graph. Edges naming unknown stations are dropped.
    pub fn build(self) -> Graph {
        let mut graph = Graph::new();
        for station in self.stations {
            graph.add_vertex(station);
        }
        for (a, b, distance) in &self.edges {
            graph.add_edge(a, b, *distance);
        }
        graph
    }
}

/// The demo network: part of the Delhi metro.
///
/// Line codes: B = Blue, Y = Yellow, O = Orange (airport express),
/// P = Pink, R = Red. Distances are in km.
pub fn delhi_metro() -> Graph {
    GraphBuilder::new()
        .station("Noida Sector 62~B")
        .station("Botanical Garden~B")
        .station("Yamuna Bank~B")
        .station("Rajiv Chowk~BY")
        .station("Vaishali~B")
        .station("Moti Nagar~B")
        .station("Janak Puri West~BO")
        .station("Dwarka Sector 21~B")
        .station("Huda City Center~Y")
        .station("Saket~Y")
        .station("Vishwavidyalaya~Y")
        .station("Chandni Chowk~Y")
        .station("New Delhi~YO")
        .station("AIIMS~Y")
        .station("Shivaji Stadium~O")
        .station("DDS Campus~O")
        .station("IGI Airport~O")
        .station("Rajouri Garden~BP")
        .station("Netaji Subhash Place~PR")
        .station("Punjabi Bagh West~P")
        // Blue line
        .edge("Noida Sector 62~B", "Botanical Garden~B", 8)
        .edge("Botanical Garden~B", "Yamuna Bank~B", 10)
        .edge("Yamuna Bank~B", "Vaishali~B", 8)
        .edge("Yamuna Bank~B", "Rajiv Chowk~BY", 6)
        .edge("Rajiv Chowk~BY", "Moti Nagar~B", 9)
        .edge("Moti Nagar~B", "Janak Puri West~BO", 7)
        .edge("Janak Puri West~BO", "Dwarka Sector 21~B", 6)
        // Yellow line
        .edge("Huda City Center~Y", "Saket~Y", 15)
        .edge("Saket~Y", "AIIMS~Y", 6)
        .edge("AIIMS~Y", "Rajiv Chowk~BY", 7)
        .edge("Rajiv Chowk~BY", "New Delhi~YO", 1)
        .edge("New Delhi~YO", "Chandni Chowk~Y", 2)
        .edge("Chandni Chowk~Y", "Vishwavidyalaya~Y", 5)
        // Orange line
        .edge("New Delhi~YO", "Shivaji Stadium~O", 2)
        .edge("Shivaji Stadium~O", "DDS Campus~O", 7)
        .edge("DDS Campus~O", "IGI Airport~O", 8)
        // Pink line
        .edge("Moti Nagar~B", "Rajouri Garden~BP", 2)
        .edge("Punjabi Bagh West~P", "Rajouri Garden~BP", 2)
        .edge("Punjabi Bagh West~P", "Netaji Subhash Place~PR", 3)
        .build()
}
