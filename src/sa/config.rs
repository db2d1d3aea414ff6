//! SA configuration.

use crate::error::DispatchError;

/// Configuration for the simulated-annealing route refiner.
///
/// # Defaults
///
/// | Field | Value |
/// |-------|-------|
/// | `iterations` | 1000 |
/// | `initial_temperature` | 100.0 |
/// | `cooling_rate` | 0.995 |
/// | `seed` | `None` |
///
/// # Builder Pattern
///
/// ```
/// use u_dispatch::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_iterations(2000)
///     .with_cooling_rate(0.999)
///     .with_seed(42);
/// assert_eq!(config.iterations, 2000);
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Number of annealing iterations. Temperature cools once per iteration.
    pub iterations: usize,

    /// Starting temperature. Higher values accept more uphill moves early.
    pub initial_temperature: f64,

    /// Geometric cooling factor applied every iteration, in (0, 1).
    pub cooling_rate: f64,

    /// Random seed for reproducibility. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            initial_temperature: 100.0,
            cooling_rate: 0.995,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset tuned for speed: fewer iterations, faster cooling.
    pub fn fast() -> Self {
        Self::default().with_iterations(300).with_cooling_rate(0.99)
    }

    /// Preset tuned for solution quality: longer run, slower cooling.
    pub fn quality() -> Self {
        Self::default()
            .with_iterations(5000)
            .with_cooling_rate(0.999)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), DispatchError> {
        if self.iterations == 0 {
            return Err(DispatchError::configuration(
                "iterations must be at least 1",
            ));
        }
        if self.initial_temperature <= 0.0 {
            return Err(DispatchError::configuration(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(DispatchError::configuration(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}
