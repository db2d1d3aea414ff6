//! Delivery task snapshot and priority ranking.

use serde::{Deserialize, Serialize};

use super::Point;

/// Priority class of a delivery task.
///
/// Classes order demand for fleet sizing and seed the scalar
/// [`priority_score`] that grouping and assignment rank by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorityClass {
    Low,
    Medium,
    High,
    Urgent,
}

impl PriorityClass {
    /// Base ranking value of the class (1 = Low .. 4 = Urgent).
    pub fn base_score(&self) -> f64 {
        match self {
            PriorityClass::Low => 1.0,
            PriorityClass::Medium => 2.0,
            PriorityClass::High => 3.0,
            PriorityClass::Urgent => 4.0,
        }
    }
}

impl std::fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PriorityClass::Low => "low",
            PriorityClass::Medium => "medium",
            PriorityClass::High => "high",
            PriorityClass::Urgent => "urgent",
        };
        write!(f, "{}", name)
    }
}

/// Canonical scalar ranking for a task: class base score scaled by 10,
/// plus one point per ten minutes of waiting.
///
/// Callers compute this once when snapshotting a task so the core stays
/// clock-free.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{priority_score, PriorityClass};
///
/// let fresh_urgent = priority_score(PriorityClass::Urgent, 0.0);
/// let stale_low = priority_score(PriorityClass::Low, 60.0);
/// assert!(fresh_urgent > stale_low);
/// ```
pub fn priority_score(class: PriorityClass, waited_minutes: f64) -> f64 {
    class.base_score() * 10.0 + waited_minutes * 0.1
}

/// A pending delivery task.
///
/// Snapshot type: the caller captures id, drop-off location, payload
/// weight, and the precomputed priority score. The core never recomputes
/// the score.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Point, Task};
///
/// let t = Task::new(1, Point::new(10.0, 20.0), 2.5, 30.0);
/// assert_eq!(t.id(), 1);
/// assert_eq!(t.weight(), 2.5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    id: usize,
    location: Point,
    weight: f64,
    priority_score: f64,
}

impl Task {
    /// Creates a task snapshot.
    pub fn new(id: usize, location: Point, weight: f64, priority_score: f64) -> Self {
        Self {
            id,
            location,
            weight,
            priority_score,
        }
    }

    /// Task ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Drop-off location.
    pub fn location(&self) -> Point {
        self.location
    }

    /// Payload weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Precomputed priority ranking (higher = served earlier).
    pub fn priority_score(&self) -> f64 {
        self.priority_score
    }
}
