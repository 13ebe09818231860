//! Planner configuration.
//!
//! Cost and rest constants are passed explicitly into the cost model and the
//! availability calculator. This module assembles them from environment
//! variables, falling back to defaults for anything unset.

use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::costs::CostParameters;
use crate::planner::RestPolicy;
use crate::tables::{TableError, load_tolls_csv};

/// Errors while building the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A cost parameter is zero, negative or not finite
    #[error("{name} must be a positive number, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// An environment variable could not be parsed
    #[error("invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },

    /// The toll file could not be loaded
    #[error("failed to load toll table: {0}")]
    Tolls(#[from] TableError),
}

/// Everything the planner needs to run.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub costs: CostParameters,
    pub rest: RestPolicy,

    /// Default number of routes returned by route selection.
    pub top_n: usize,

    /// Where the HTTP service listens.
    pub listen_addr: SocketAddr,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            costs: CostParameters::default(),
            rest: RestPolicy::default(),
            top_n: 5,
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

const FUEL_CONSUMPTION: &str = "PLANNER_FUEL_CONSUMPTION";
const FUEL_PRICE: &str = "PLANNER_FUEL_PRICE";
const UNLOAD_MINUTES: &str = "PLANNER_UNLOAD_MINUTES";
const REST_HOURS: &str = "PLANNER_REST_HOURS";
const TOP_N: &str = "PLANNER_TOP_N";
const ADDR: &str = "PLANNER_ADDR";
const TOLLS_CSV: &str = "PLANNER_TOLLS_CSV";

impl PlannerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let consumption = parse_var(&lookup, FUEL_CONSUMPTION)?
            .unwrap_or(defaults.costs.fuel_consumption_km_per_l());
        let price =
            parse_var(&lookup, FUEL_PRICE)?.unwrap_or(defaults.costs.fuel_price_per_l());

        let tolls = match lookup(TOLLS_CSV).filter(|p| !p.trim().is_empty()) {
            Some(path) => {
                let tolls = load_tolls_csv(Path::new(path.trim()), b',')?;
                info!(path = %path, entries = tolls.len(), "loaded toll table");
                tolls
            }
            None => defaults.costs.tolls().clone(),
        };

        let rest = RestPolicy::new(
            parse_var(&lookup, UNLOAD_MINUTES)?.unwrap_or(defaults.rest.unload_minutes),
            parse_var(&lookup, REST_HOURS)?.unwrap_or(defaults.rest.rest_hours),
        );

        Ok(Self {
            costs: CostParameters::new(consumption, price, tolls)?,
            rest,
            top_n: parse_var(&lookup, TOP_N)?.unwrap_or(defaults.top_n),
            listen_addr: parse_var(&lookup, ADDR)?.unwrap_or(defaults.listen_addr),
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = PlannerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.costs, CostParameters::default());
        assert_eq!(config.rest, RestPolicy::default());
        assert_eq!(config.top_n, 5);
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn overrides_from_vars() {
        let config = PlannerConfig::from_lookup(lookup(&[
            (FUEL_CONSUMPTION, "3.2"),
            (FUEL_PRICE, " 1.75 "),
            (UNLOAD_MINUTES, "30"),
            (REST_HOURS, "9"),
            (TOP_N, "10"),
            (ADDR, "0.0.0.0:8080"),
        ]))
        .unwrap();

        assert_eq!(config.costs.fuel_consumption_km_per_l(), 3.2);
        assert_eq!(config.costs.fuel_price_per_l(), 1.75);
        assert_eq!(config.rest, RestPolicy::new(30, 9));
        assert_eq!(config.top_n, 10);
        assert_eq!(config.listen_addr.port(), 8080);
    }

    #[test]
    fn blank_vars_use_defaults() {
        let config = PlannerConfig::from_lookup(lookup(&[(FUEL_PRICE, ""), (TOLLS_CSV, " ")])).unwrap();
        assert_eq!(config.costs, CostParameters::default());
    }

    #[test]
    fn malformed_var_is_an_error() {
        let err = PlannerConfig::from_lookup(lookup(&[(REST_HOURS, "eleven")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for PLANNER_REST_HOURS: \"eleven\""
        );

        // Negative minutes don't fit u32
        assert!(PlannerConfig::from_lookup(lookup(&[(UNLOAD_MINUTES, "-5")])).is_err());
    }

    #[test]
    fn non_positive_cost_is_an_error() {
        let err = PlannerConfig::from_lookup(lookup(&[(FUEL_CONSUMPTION, "0")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "fuel consumption",
                ..
            }
        ));
    }

    #[test]
    fn loads_toll_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "origin,destination,toll").unwrap();
        writeln!(file, "Verona,Lyon,86.4").unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = PlannerConfig::from_lookup(lookup(&[(TOLLS_CSV, path.as_str())])).unwrap();

        assert_eq!(config.costs.tolls().get("Verona", "Lyon"), Some(86.4));
    }

    #[test]
    fn missing_toll_file_is_an_error() {
        let result = PlannerConfig::from_lookup(lookup(&[(TOLLS_CSV, "/nonexistent/tolls.csv")]));
        assert!(matches!(result, Err(ConfigError::Tolls(_))));
    }
}
