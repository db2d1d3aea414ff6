//! Unit scoring for group assignment.

use crate::error::DispatchError;
use crate::models::{Point, Unit};

/// Weight blend for ranking candidate units against a task group.
///
/// The score rewards units that are close to the group centroid, that the
/// group fills well, and that carry charge:
///
/// ```text
/// score = proximity · 1 / (distance + 1)
///       + load      · groupWeight / capacity
///       + battery   · batteryFraction
/// ```
///
/// # Examples
///
/// ```
/// use u_dispatch::assignment::ScoringWeights;
///
/// let weights = ScoringWeights::default();
/// assert!((weights.proximity - 0.4).abs() < 1e-10);
/// assert!((weights.load - 0.3).abs() < 1e-10);
/// assert!((weights.battery - 0.3).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    /// Weight of the inverse-distance term.
    pub proximity: f64,

    /// Weight of the load-factor term (group weight over unit capacity).
    pub load: f64,

    /// Weight of the battery-fraction term.
    pub battery: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            proximity: 0.4,
            load: 0.3,
            battery: 0.3,
        }
    }
}

impl ScoringWeights {
    pub fn with_proximity(mut self, weight: f64) -> Self {
        self.proximity = weight;
        self
    }

    pub fn with_load(mut self, weight: f64) -> Self {
        self.load = weight;
        self
    }

    pub fn with_battery(mut self, weight: f64) -> Self {
        self.battery = weight;
        self
    }

    /// Validates the weight blend.
    pub fn validate(&self) -> Result<(), DispatchError> {
        if self.proximity < 0.0 || self.load < 0.0 || self.battery < 0.0 {
            return Err(DispatchError::configuration(
                "scoring weights must be non-negative",
            ));
        }
        if self.proximity + self.load + self.battery <= 0.0 {
            return Err(DispatchError::configuration(
                "scoring weights must not all be zero",
            ));
        }
        Ok(())
    }

    /// Scores a unit against a group of the given weight and centroid.
    pub fn score_unit(&self, unit: &Unit, group_weight: f64, centroid: Point) -> f64 {
        let distance = unit.location().distance_to(centroid);
        self.proximity * (1.0 / (distance + 1.0))
            + self.load * (group_weight / unit.capacity())
            + self.battery * unit.battery_fraction()
    }
}
