//! Cost configuration for route queries.

use serde::{Deserialize, Serialize};

use crate::domain::Distance;

/// Which quantity a query minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostModel {
    /// Raw summed edge distance.
    Distance,

    /// Travel time in seconds: a fixed per-hop overhead plus a term
    /// proportional to distance.
    Time,
}

impl CostModel {
    /// Cost of traversing one edge of the given length, or `None` if it
    /// does not fit in a `u64`.
    pub fn edge_cost(self, weight: Distance, config: &CostConfig) -> Option<u64> {
        match self {
            CostModel::Distance => Some(u64::from(weight)),
            CostModel::Time => config.hop_time_secs(weight),
        }
    }

    /// Pick the value this model minimises out of a (distance, time) pair.
    pub fn select(self, distance: u64, time_secs: u64) -> u64 {
        match self {
            CostModel::Distance => distance,
            CostModel::Time => time_secs,
        }
    }
}

/// Parameters of the time cost model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostConfig {
    /// Fixed time added for every hop (dwell and transfer), in seconds.
    pub hop_overhead_secs: u64,

    /// Travel time per unit of distance, in seconds.
    pub secs_per_unit: u64,
}

impl CostConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(hop_overhead_secs: u64, secs_per_unit: u64) -> Self {
        Self {
            hop_overhead_secs,
            secs_per_unit,
        }
    }

    /// Time to traverse one edge of the given length, in seconds.
    ///
    /// `None` on overflow.
    pub fn hop_time_secs(&self, weight: Distance) -> Option<u64> {
        self.secs_per_unit
            .checked_mul(u64::from(weight))?
            .checked_add(self.hop_overhead_secs)
    }
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            hop_overhead_secs: 120, // 2 minutes
            secs_per_unit: 40,
        }
    }
}
