//! GA run configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Immutable parameters of one search run.
///
/// # Example
///
/// ```
/// use ga_placement::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_generation_count(200)
///     .with_mutation_rate(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Generations to run. There is no early stop.
    pub generation_count: usize,
    /// Per-gene probability of drawing a new server.
    pub mutation_rate: f64,
    /// Individuals sampled per tournament (clamped to population size).
    pub tournament_size: usize,
    /// Seed for a reproducible run. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Evaluate a generation on the rayon pool (requires the `parallel`
    /// feature; ignored otherwise).
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            generation_count: 100,
            mutation_rate: 0.1,
            tournament_size: 3,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generation_count(mut self, generation_count: usize) -> Self {
        self.generation_count = generation_count;
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, tournament_size: usize) -> Self {
        self.tournament_size = tournament_size;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Tournament size actually used for a population of `population_len`.
    pub fn effective_tournament_size(&self, population_len: usize) -> usize {
        self.tournament_size.min(population_len)
    }

    /// Checks parameter ranges.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::InvalidConfig(
                "population_size must be greater than 0".into(),
            ));
        }
        if self.generation_count == 0 {
            return Err(Error::InvalidConfig(
                "generation_count must be greater than 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.tournament_size == 0 {
            return Err(Error::InvalidConfig(
                "tournament_size must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
