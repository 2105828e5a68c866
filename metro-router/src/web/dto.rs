//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::directory::DirectoryEntry;
use crate::domain::{RouteError, StationId};
use crate::graph::Graph;
use crate::planner::{CostModel, Route, interchange_positions, travel_time};

/// Source and destination of a query.
///
/// Either may be a serial number, full identifier, display name or code.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Source station
    pub from: String,

    /// Destination station
    pub to: String,
}

/// A station in the listing.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// 1-based serial number
    pub serial: usize,

    /// Full station identifier
    pub station: String,

    /// Display name
    pub name: String,

    /// Short code
    pub code: String,

    /// Line codes serving the station
    pub lines: Vec<String>,
}

/// Response for the station listing.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Stations, alphabetical
    pub stations: Vec<StationResult>,
}

/// A station and its direct connections.
#[derive(Debug, Serialize)]
pub struct MapStation {
    /// Station identifier
    pub station: String,

    /// Adjacent stations
    pub neighbours: Vec<NeighbourResult>,
}

/// One edge out of a station.
#[derive(Debug, Serialize)]
pub struct NeighbourResult {
    /// Adjacent station identifier
    pub station: String,

    /// Distance in km
    pub distance_km: u32,
}

/// Response for the network map.
#[derive(Debug, Serialize)]
pub struct MapResponse {
    /// Every station with its neighbours
    pub stations: Vec<MapStation>,
}

/// Response for the shortest distance query.
#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub from: String,
    pub to: String,

    /// Minimum distance in km
    pub distance_km: u64,
}

/// Response for the shortest time query.
#[derive(Debug, Serialize)]
pub struct TimeResponse {
    pub from: String,
    pub to: String,

    /// Minimum travel time in seconds
    pub seconds: u64,

    /// Whole minutes (rounded down)
    pub minutes: i64,
}

/// Response for the route queries.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub from: String,
    pub to: String,

    /// What the route was chosen by
    pub model: CostModel,

    /// Stations along the route, source first
    pub stations: Vec<String>,

    /// Number of interchanges
    pub interchanges: usize,

    /// Consecutive station pairs sharing no line
    pub interchange_segments: Vec<(String, String)>,

    /// Route distance in km
    pub distance_km: u64,

    /// Route travel time in minutes (rounded up)
    pub minutes: u64,

    /// Plain text form: stations, interchanges, total
    pub label: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResult {
    /// Create from a directory entry.
    pub fn from_entry(entry: &DirectoryEntry) -> Self {
        Self {
            serial: entry.serial,
            station: entry.station.to_string(),
            name: entry.name.clone(),
            code: entry.code.clone(),
            lines: entry
                .lines
                .map(|l| l.codes().map(String::from).collect())
                .unwrap_or_default(),
        }
    }
}

impl MapResponse {
    /// Describe every station of `graph` in insertion order.
    pub fn from_graph(graph: &Graph) -> Self {
        let stations = graph
            .stations()
            .map(|(v, id)| MapStation {
                station: id.to_string(),
                neighbours: graph
                    .neighbours(v)
                    .map(|(n, distance)| NeighbourResult {
                        station: graph.station(n).to_string(),
                        distance_km: distance,
                    })
                    .collect(),
            })
            .collect();

        Self { stations }
    }
}

impl TimeResponse {
    /// Create from a minimum travel time in seconds.
    pub fn new(from: &StationId, to: &StationId, seconds: u64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            seconds,
            minutes: travel_time(seconds).num_minutes(),
        }
    }
}

impl RouteResponse {
    /// Create from an enumerated route.
    pub fn from_route(from: &StationId, to: &StationId, route: &Route) -> Result<Self, RouteError> {
        let positions = interchange_positions(route.stations())?;
        let label = route.label()?;

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            model: route.model(),
            stations: route.stations().iter().map(StationId::to_string).collect(),
            interchanges: positions.len(),
            interchange_segments: positions
                .iter()
                .map(|&i| {
                    let pair = &route.stations()[i..=i + 1];
                    (pair[0].to_string(), pair[1].to_string())
                })
                .collect(),
            distance_km: route.distance(),
            minutes: route.minutes(),
            label,
        })
    }
}
