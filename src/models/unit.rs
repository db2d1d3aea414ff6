//! Delivery unit snapshot.

use serde::{Deserialize, Serialize};

use super::Point;

/// A delivery unit (drone, rider, van) available to the dispatcher.
///
/// Snapshot type capturing position and operating state at pass time.
/// Only units that are `available` and above the configured battery
/// threshold take part in grouping and assignment.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Point, Unit};
///
/// let u = Unit::new(0, Point::new(0.0, 0.0), 10.0)
///     .with_speed(2.0)
///     .with_battery_fraction(0.8);
/// assert_eq!(u.capacity(), 10.0);
/// assert!(u.is_deployable(0.2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    id: usize,
    location: Point,
    capacity: f64,
    max_range: f64,
    speed: f64,
    battery_fraction: f64,
    available: bool,
}

impl Unit {
    /// Creates a unit with the given ID, position, and payload capacity.
    ///
    /// Defaults: unlimited range, speed 1.0, full battery, available.
    pub fn new(id: usize, location: Point, capacity: f64) -> Self {
        Self {
            id,
            location,
            capacity,
            max_range: f64::INFINITY,
            speed: 1.0,
            battery_fraction: 1.0,
            available: true,
        }
    }

    /// Sets the maximum travel range on a full battery.
    pub fn with_max_range(mut self, max_range: f64) -> Self {
        self.max_range = max_range;
        self
    }

    /// Sets the cruise speed in distance units per minute.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the battery charge fraction. Values outside [0, 1] are clamped.
    pub fn with_battery_fraction(mut self, fraction: f64) -> Self {
        self.battery_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Sets the availability flag.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Unit ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current position.
    pub fn location(&self) -> Point {
        self.location
    }

    /// Maximum payload weight.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Maximum travel range on a full battery.
    pub fn max_range(&self) -> f64 {
        self.max_range
    }

    /// Cruise speed in distance units per minute.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Battery charge fraction in [0, 1].
    pub fn battery_fraction(&self) -> f64 {
        self.battery_fraction
    }

    /// Availability flag.
    pub fn available(&self) -> bool {
        self.available
    }

    /// Distance coverable on the current charge.
    pub fn reachable_distance(&self) -> f64 {
        self.max_range * self.battery_fraction
    }

    /// Returns `true` if the unit may take part in a pass: available and
    /// at or above the given battery threshold.
    pub fn is_deployable(&self, min_battery_fraction: f64) -> bool {
        self.available && self.battery_fraction >= min_battery_fraction
    }
}
