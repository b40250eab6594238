//! Configuration types for engine creation.

use crate::{
    Result, error::Error, genetic::GeneticSearch, minimax::MinimaxEngine,
    q_learning::QLearningAgent,
};

fn require_unit_interval(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration {
            message: format!("{name} must be in [0, 1], got {value}"),
        })
    }
}

/// Configuration for creating a Q-learning agent.
///
/// Defaults follow the values the engine was tuned with: α=0.1, γ=0.9,
/// ε starting at 1.0 and decaying by 0.995 per decision down to 0.1.
///
/// # Examples
///
/// ```
/// use morris::app::QLearningConfig;
///
/// let agent = QLearningConfig::new()
///     .with_learning_rate(0.5)
///     .with_seed(42)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct QLearningConfig {
    pub learning_rate: f64,
    pub discount_factor: f64,
    pub epsilon: f64,
    pub epsilon_decay: f64,
    pub min_epsilon: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl QLearningConfig {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.9,
            epsilon: 1.0,
            epsilon_decay: 0.995,
            min_epsilon: 0.1,
            seed: None,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_epsilon_decay(mut self, epsilon_decay: f64) -> Self {
        self.epsilon_decay = epsilon_decay;
        self
    }

    pub fn with_min_epsilon(mut self, min_epsilon: f64) -> Self {
        self.min_epsilon = min_epsilon;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the agent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when a rate parameter
    /// falls outside [0, 1].
    pub fn build(&self) -> Result<QLearningAgent> {
        require_unit_interval("learning_rate", self.learning_rate)?;
        require_unit_interval("discount_factor", self.discount_factor)?;
        require_unit_interval("epsilon", self.epsilon)?;
        require_unit_interval("epsilon_decay", self.epsilon_decay)?;
        require_unit_interval("min_epsilon", self.min_epsilon)?;

        let agent = QLearningAgent::new(
            self.learning_rate,
            self.discount_factor,
            self.epsilon,
            self.epsilon_decay,
            self.min_epsilon,
        );
        Ok(match self.seed {
            Some(seed) => agent.with_seed(seed),
            None => agent,
        })
    }
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the minimax engine.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxConfig {
    /// Search depth in plies
    pub depth: usize,
}

impl MinimaxConfig {
    pub fn new() -> Self {
        Self { depth: 3 }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn build(&self) -> MinimaxEngine {
        MinimaxEngine::new(self.depth)
    }
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the genetic search.
#[derive(Debug, Clone)]
pub struct GeneticConfig {
    pub population_size: usize,
    pub mutation_rate: f64,
    pub generations: usize,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl GeneticConfig {
    pub fn new() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.01,
            generations: 100,
            seed: None,
        }
    }

    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the search.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for an empty population or
    /// a mutation rate outside [0, 1].
    pub fn build(&self) -> Result<GeneticSearch> {
        if self.population_size < 2 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "population_size must be at least 2, got {}",
                    self.population_size
                ),
            });
        }
        require_unit_interval("mutation_rate", self.mutation_rate)?;

        let search = GeneticSearch::new(self.population_size, self.mutation_rate, self.generations);
        Ok(match self.seed {
            Some(seed) => search.with_seed(seed),
            None => search,
        })
    }
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_q_learning_config_builds() {
        assert!(QLearningConfig::new().build().is_ok());
    }

    #[test]
    fn test_out_of_range_learning_rate_is_rejected() {
        let config = QLearningConfig::new().with_learning_rate(1.5);
        assert!(config.build().is_err());
    }

    #[test]
    fn test_tiny_population_is_rejected() {
        let config = GeneticConfig::new().with_population_size(1);
        assert!(config.build().is_err());
    }

    #[test]
    fn test_minimax_config_carries_depth() {
        let engine = MinimaxConfig::new().with_depth(5).build();
        assert_eq!(engine.depth(), 5);
    }
}
