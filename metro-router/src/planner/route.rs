//! Route results returned by path enumeration.

use chrono::Duration;

use super::config::CostModel;
use super::interchange::count_interchanges;
use crate::domain::{RouteError, StationId};

/// Separator between stations in a route label.
const LABEL_SEPARATOR: &str = "  ";

/// A travel time in seconds as a Duration, clamped to the largest
/// representable one.
pub fn travel_time(secs: u64) -> Duration {
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}

/// A literal route through the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<StationId>,
    distance: u64,
    time_secs: u64,
    model: CostModel,
}

impl Route {
    /// Create a route from its stations and totals.
    pub fn new(stations: Vec<StationId>, distance: u64, time_secs: u64, model: CostModel) -> Self {
        Self {
            stations,
            distance,
            time_secs,
            model,
        }
    }

    /// Stations along the route, origin first.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Total distance in km.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Total travel time in seconds.
    pub fn time_secs(&self) -> u64 {
        self.time_secs
    }

    /// Travel time rounded up to whole minutes.
    pub fn minutes(&self) -> u64 {
        self.time_secs.div_ceil(60)
    }

    /// The model this route was chosen under.
    pub fn model(&self) -> CostModel {
        self.model
    }

    /// The reported total: km for distance routes, minutes (rounded up)
    /// for time routes.
    pub fn total(&self) -> u64 {
        match self.model {
            CostModel::Distance => self.distance,
            CostModel::Time => self.minutes(),
        }
    }

    /// Number of interchanges along the route.
    pub fn interchanges(&self) -> Result<usize, RouteError> {
        count_interchanges(&self.stations)
    }

    /// Text form: stations, then the interchange count, then the total.
    ///
    /// The last two whitespace-delimited tokens are always the interchange
    /// count and the total.
    pub fn label(&self) -> Result<String, RouteError> {
        let interchanges = self.interchanges()?;

        let mut label = String::new();
        for station in &self.stations {
            label.push_str(station.as_str());
            label.push_str(LABEL_SEPARATOR);
        }
        label.push_str(&format!("{interchanges}{LABEL_SEPARATOR}{}", self.total()));
        Ok(label)
    }
}
