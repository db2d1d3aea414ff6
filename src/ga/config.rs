//! GA configuration.
//!
//! [`GaConfig`] holds the parameters that control the evolutionary loop.

use crate::error::DispatchError;

/// Configuration for genetic route refinement.
///
/// The effective population size is `min(population_cap, 4 · n)` for n
/// stops, so small instances do not pay for a full-width population.
///
/// # Defaults
///
/// ```
/// use u_dispatch::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.population_cap, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_dispatch::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_generations(250)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of generations to evolve.
    pub generations: usize,

    /// Upper bound on the population size.
    ///
    /// The effective size is `min(population_cap, 4 · stops)`.
    pub population_cap: usize,

    /// Probability of applying swap mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            population_cap: 50,
            mutation_rate: 0.1,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the generation count.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the population cap.
    pub fn with_population_cap(mut self, n: usize) -> Self {
        self.population_cap = n;
        self
    }

    /// Sets the mutation rate, clamped to [0, 1].
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick passes: small population, few generations.
    pub fn fast() -> Self {
        Self {
            generations: 30,
            population_cap: 20,
            ..Self::default()
        }
    }

    /// Preset for quality passes: wide population, many generations.
    pub fn quality() -> Self {
        Self {
            generations: 250,
            population_cap: 80,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), DispatchError> {
        if self.generations == 0 {
            return Err(DispatchError::configuration(
                "generations must be at least 1",
            ));
        }
        if self.population_cap < 2 {
            return Err(DispatchError::configuration(
                "population_cap must be at least 2",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(DispatchError::configuration(
                "mutation_rate must be within [0, 1]",
            ));
        }
        Ok(())
    }
}
