//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::CostConfig;

/// Upper bound for the time model parameters, in seconds (one day).
pub const MAX_TIME_PARAMETER_SECS: u64 = 24 * 60 * 60;

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?} ({reason})")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Configuration for the metro router server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// JSON network file; the built-in Delhi map is used when unset.
    pub network: Option<PathBuf>,

    /// Time cost model parameters.
    pub cost: CostConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            network: None,
            cost: CostConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `METRO_ADDR` | `127.0.0.1:3000` |
    /// | `METRO_NETWORK` | built-in map |
    /// | `METRO_HOP_OVERHEAD_SECS` | `120` |
    /// | `METRO_SECS_PER_UNIT` | `40` |
    ///
    /// The two time parameters may not exceed [`MAX_TIME_PARAMETER_SECS`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            addr: parse_var(&lookup, "METRO_ADDR")?.unwrap_or(defaults.addr),
            network: lookup("METRO_NETWORK")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            cost: CostConfig::new(
                parse_secs(&lookup, "METRO_HOP_OVERHEAD_SECS")?
                    .unwrap_or(defaults.cost.hop_overhead_secs),
                parse_secs(&lookup, "METRO_SECS_PER_UNIT")?.unwrap_or(defaults.cost.secs_per_unit),
            ),
        })
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(v) => Ok(Some(v)),
        Err(e) => Err(ConfigError {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_secs<F>(lookup: &F, var: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_var::<u64, F>(lookup, var)? {
        Some(secs) if secs > MAX_TIME_PARAMETER_SECS => Err(ConfigError {
            var,
            value: secs.to_string(),
            reason: format!("must be at most {MAX_TIME_PARAMETER_SECS}"),
        }),
        secs => Ok(secs),
    }
}
