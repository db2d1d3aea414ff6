//! Planner configuration and algorithm selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assignment::ScoringWeights;
use crate::error::DispatchError;
use crate::ga::GaConfig;
use crate::grouping::GroupingConfig;
use crate::sa::SaConfig;

/// Route-search algorithm applied to each matched group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAlgorithm {
    /// Greedy nearest-neighbor construction only.
    NearestNeighbor,

    /// Genetic refinement of the visiting order.
    Genetic,

    /// Simulated-annealing refinement of the visiting order.
    SimulatedAnnealing,
}

impl Default for RouteAlgorithm {
    fn default() -> Self {
        RouteAlgorithm::NearestNeighbor
    }
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteAlgorithm::NearestNeighbor => "nearest-neighbor",
            RouteAlgorithm::Genetic => "genetic",
            RouteAlgorithm::SimulatedAnnealing => "simulated-annealing",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest-neighbor" => Ok(RouteAlgorithm::NearestNeighbor),
            "genetic" => Ok(RouteAlgorithm::Genetic),
            "simulated-annealing" => Ok(RouteAlgorithm::SimulatedAnnealing),
            other => Err(DispatchError::configuration(format!(
                "unknown algorithm: {}",
                other
            ))),
        }
    }
}

/// Configuration for one optimization pass.
///
/// Bundles the sub-configurations of every stage plus the estimate
/// constants the pass applies to finished routes.
///
/// # Defaults
///
/// | Field | Value |
/// |-------|-------|
/// | `algorithm` | `nearest-neighbor` |
/// | `min_battery_fraction` | 0.2 |
/// | `battery_per_distance` | 0.1 |
/// | `service_minutes_per_stop` | 5.0 |
/// | `parallel` | `true` |
/// | `seed` | `None` |
///
/// # Examples
///
/// ```
/// use u_dispatch::planner::{PlannerConfig, RouteAlgorithm};
///
/// let config = PlannerConfig::default()
///     .with_algorithm(RouteAlgorithm::Genetic)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Route-search algorithm for matched groups.
    pub algorithm: RouteAlgorithm,

    /// Grouping-stage parameters.
    pub grouping: GroupingConfig,

    /// Assignment scoring weights.
    pub scoring: ScoringWeights,

    /// Genetic parameters, used when `algorithm` is `Genetic`.
    pub ga: GaConfig,

    /// Annealing parameters, used when `algorithm` is
    /// `SimulatedAnnealing`.
    pub sa: SaConfig,

    /// Units below this battery fraction sit the pass out.
    pub min_battery_fraction: f64,

    /// Battery percent consumed per distance unit flown.
    pub battery_per_distance: f64,

    /// Minutes added to the time estimate per stop served.
    pub service_minutes_per_stop: f64,

    /// Route matched groups on the rayon pool instead of sequentially.
    pub parallel: bool,

    /// Base seed for per-group route searches. `None` draws one from
    /// entropy, making passes non-reproducible.
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            algorithm: RouteAlgorithm::default(),
            grouping: GroupingConfig::default(),
            scoring: ScoringWeights::default(),
            ga: GaConfig::default(),
            sa: SaConfig::default(),
            min_battery_fraction: 0.2,
            battery_per_distance: 0.1,
            service_minutes_per_stop: 5.0,
            parallel: true,
            seed: None,
        }
    }
}

impl PlannerConfig {
    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_grouping(mut self, grouping: GroupingConfig) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringWeights) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    pub fn with_min_battery_fraction(mut self, fraction: f64) -> Self {
        self.min_battery_fraction = fraction;
        self
    }

    pub fn with_battery_per_distance(mut self, rate: f64) -> Self {
        self.battery_per_distance = rate;
        self
    }

    pub fn with_service_minutes_per_stop(mut self, minutes: f64) -> Self {
        self.service_minutes_per_stop = minutes;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration, sub-configurations included.
    pub fn validate(&self) -> Result<(), DispatchError> {
        self.grouping.validate()?;
        self.scoring.validate()?;
        self.ga.validate()?;
        self.sa.validate()?;
        if self.min_battery_fraction < 0.0 || self.min_battery_fraction > 1.0 {
            return Err(DispatchError::configuration(format!(
                "min_battery_fraction must be in [0, 1], got {}",
                self.min_battery_fraction
            )));
        }
        if self.battery_per_distance <= 0.0 {
            return Err(DispatchError::configuration(format!(
                "battery_per_distance must be positive, got {}",
                self.battery_per_distance
            )));
        }
        if self.service_minutes_per_stop < 0.0 {
            return Err(DispatchError::configuration(format!(
                "service_minutes_per_stop must not be negative, got {}",
                self.service_minutes_per_stop
            )));
        }
        Ok(())
    }
}
