//! Throughput-based fleet sizing.
//!
//! Pure arithmetic over aggregate demand counts. No geometry is involved;
//! the estimate assumes every unit sustains the configured service rate
//! across the operating day.

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, DispatchResult};
use crate::models::PriorityClass;

/// Daily task demand for one priority class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassDemand {
    /// Priority class the count belongs to.
    pub class: PriorityClass,

    /// Number of tasks expected per day.
    pub count: usize,
}

impl ClassDemand {
    pub fn new(class: PriorityClass, count: usize) -> Self {
        Self { class, count }
    }
}

/// Configuration for the fleet-sizing estimate.
///
/// # Defaults
///
/// | Field | Value |
/// |-------|-------|
/// | `max_units` | 50 |
/// | `operating_hours` | 8.0 |
/// | `average_service_minutes` | 10.0 |
#[derive(Debug, Clone)]
pub struct FleetConfig {
    /// Hard cap on the recommended fleet size.
    pub max_units: usize,

    /// Operating hours per day.
    pub operating_hours: f64,

    /// Average minutes a unit spends serving one task.
    pub average_service_minutes: f64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            max_units: 50,
            operating_hours: 8.0,
            average_service_minutes: 10.0,
        }
    }
}

impl FleetConfig {
    pub fn with_max_units(mut self, max_units: usize) -> Self {
        self.max_units = max_units;
        self
    }

    pub fn with_operating_hours(mut self, hours: f64) -> Self {
        self.operating_hours = hours;
        self
    }

    pub fn with_average_service_minutes(mut self, minutes: f64) -> Self {
        self.average_service_minutes = minutes;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), DispatchError> {
        if self.max_units == 0 {
            return Err(DispatchError::configuration("max_units must be at least 1"));
        }
        if self.operating_hours <= 0.0 {
            return Err(DispatchError::configuration(format!(
                "operating_hours must be positive, got {}",
                self.operating_hours
            )));
        }
        if self.average_service_minutes <= 0.0 {
            return Err(DispatchError::configuration(format!(
                "average_service_minutes must be positive, got {}",
                self.average_service_minutes
            )));
        }
        Ok(())
    }

    /// Tasks one unit can serve per day at the configured rate.
    pub fn throughput_per_unit(&self) -> f64 {
        self.operating_hours * 60.0 / self.average_service_minutes
    }
}

/// Units required for one priority class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassRequirement {
    /// Priority class.
    pub class: PriorityClass,

    /// Units needed to serve that class's daily demand.
    pub required: usize,
}

/// Fleet-sizing estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetEstimate {
    /// Units to deploy: the requirement, capped at `max_units`.
    pub recommended_total: usize,

    /// Units the demand actually calls for, uncapped.
    pub total_required: usize,

    /// Per-class requirement breakdown, in input order.
    pub per_class: Vec<ClassRequirement>,

    /// `total_required / max_units` as a percentage, capped at 100.
    pub utilization_percent: f64,

    /// Set when demand exceeds what `max_units` can serve.
    pub bottleneck: bool,
}

/// Estimates the fleet size needed to serve the given daily demand.
///
/// Each class needs `ceil(count / throughput)` units where throughput is
/// `operating_hours · 60 / average_service_minutes` tasks per unit per
/// day. Requirements are summed across classes and capped at
/// `max_units`; demand beyond the cap raises the bottleneck flag so the
/// caller knows the recommendation is a compromise.
///
/// # Examples
///
/// ```
/// use u_dispatch::fleet::{estimate_fleet, ClassDemand, FleetConfig};
/// use u_dispatch::models::PriorityClass;
///
/// let demand = vec![
///     ClassDemand::new(PriorityClass::Urgent, 100),
///     ClassDemand::new(PriorityClass::Low, 30),
/// ];
///
/// // 8 h · 60 / 10 min = 48 tasks per unit per day.
/// let estimate = estimate_fleet(&demand, &FleetConfig::default())
///     .expect("valid config");
/// assert_eq!(estimate.total_required, 4);
/// assert!(!estimate.bottleneck);
/// ```
pub fn estimate_fleet(
    demand: &[ClassDemand],
    config: &FleetConfig,
) -> DispatchResult<FleetEstimate> {
    config.validate()?;

    let throughput = config.throughput_per_unit();

    let per_class: Vec<ClassRequirement> = demand
        .iter()
        .map(|entry| ClassRequirement {
            class: entry.class,
            required: (entry.count as f64 / throughput).ceil() as usize,
        })
        .collect();

    let total_required: usize = per_class.iter().map(|entry| entry.required).sum();
    let recommended_total = total_required.min(config.max_units);
    let utilization_percent =
        (total_required as f64 / config.max_units as f64 * 100.0).min(100.0);
    let bottleneck = total_required > config.max_units;

    Ok(FleetEstimate {
        recommended_total,
        total_required,
        per_class,
        utilization_percent,
        bottleneck,
    })
}
