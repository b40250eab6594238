//! ε-greedy Q-learning agent

use std::path::Path;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    morris::{GameState, Move},
    ports::QTableStore,
    q_learning::q_table::QTable,
    types::BoardKey,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct QAgentState {
    pub q_table: QTable,
    pub epsilon: f64,
    pub initial_epsilon: f64,
    pub epsilon_decay: f64,
    pub min_epsilon: f64,
    pub rng_seed: Option<u64>,
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Tabular Q-learning agent.
///
/// Decisions are ε-greedy over the legal moves supplied by the driver;
/// ties among equal-valued greedy moves are broken uniformly at random.
/// The driver feeds completed transitions back through
/// [`QLearningAgent::update`] and calls
/// [`QLearningAgent::decay_epsilon`] once per decision.
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    q_table: QTable,
    epsilon: f64,
    initial_epsilon: f64,
    epsilon_decay: f64,
    min_epsilon: f64,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl QLearningAgent {
    /// Create a new agent with an empty table.
    ///
    /// # Arguments
    ///
    /// * `learning_rate` - α parameter (0.0 to 1.0)
    /// * `discount_factor` - γ parameter (0.0 to 1.0)
    /// * `epsilon` - Initial exploration rate
    /// * `epsilon_decay` - Multiplicative decay per decision
    /// * `min_epsilon` - Exploration rate floor
    pub fn new(
        learning_rate: f64,
        discount_factor: f64,
        epsilon: f64,
        epsilon_decay: f64,
        min_epsilon: f64,
    ) -> Self {
        Self {
            q_table: QTable::new(learning_rate, discount_factor),
            epsilon,
            initial_epsilon: epsilon,
            epsilon_decay,
            min_epsilon,
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    /// Seed the agent's RNG for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// ε-greedy action selection over the supplied legal moves.
    ///
    /// Returns `None` iff `legal_moves` is empty.
    pub fn choose_action(&mut self, state: &GameState, legal_moves: &[Move]) -> Option<Move> {
        if legal_moves.is_empty() {
            return None;
        }

        if self.rng.random::<f64>() < self.epsilon {
            // Explore: uniform over legal moves
            legal_moves.choose(&mut self.rng).copied()
        } else {
            // Exploit: uniform over the greedy maximizers
            let key = BoardKey::from(state);
            let greedy = self.q_table.greedy_actions(&key, legal_moves);
            greedy.choose(&mut self.rng).copied()
        }
    }

    /// Apply the TD update for a completed transition.
    ///
    /// `reward` is 1.0 when the move produced a terminal win for the
    /// mover and 0.0 otherwise; losses and draws carry no penalty.
    pub fn update(
        &mut self,
        state: &GameState,
        action: Move,
        reward: f64,
        next_state: &GameState,
        next_legal_moves: &[Move],
    ) {
        self.q_table.update(
            BoardKey::from(state),
            action,
            reward,
            &BoardKey::from(next_state),
            next_legal_moves,
        );
    }

    /// Decay ε toward its floor. Called once per decision.
    pub fn decay_epsilon(&mut self) {
        self.epsilon = (self.epsilon * self.epsilon_decay).max(self.min_epsilon);
    }

    /// Current exploration rate.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Read access to the learned table.
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Load a previously persisted table, keeping the empty one when no
    /// state has been persisted yet.
    pub fn load_table(&mut self, store: &dyn QTableStore, path: &Path) -> Result<()> {
        if let Some(table) = store.load(path)? {
            self.q_table = table;
        }
        Ok(())
    }

    /// Flush the current table through the store.
    pub fn save_table(&self, store: &dyn QTableStore, path: &Path) -> Result<()> {
        store.save(&self.q_table, path)
    }

    /// Reset the table to empty and remove any persisted state.
    pub fn clear(&mut self, store: &dyn QTableStore, path: &Path) -> Result<()> {
        self.q_table.clear();
        store.clear(path)
    }

    /// Reset exploration to its initial rate.
    pub fn reset_epsilon(&mut self) {
        self.epsilon = self.initial_epsilon;
    }

    pub(crate) fn export_state(&self) -> QAgentState {
        QAgentState {
            q_table: self.q_table.clone(),
            epsilon: self.epsilon,
            initial_epsilon: self.initial_epsilon,
            epsilon_decay: self.epsilon_decay,
            min_epsilon: self.min_epsilon,
            rng_seed: self.rng_seed,
        }
    }

    pub(crate) fn from_state(state: QAgentState) -> Self {
        Self {
            q_table: state.q_table,
            epsilon: state.epsilon,
            initial_epsilon: state.initial_epsilon,
            epsilon_decay: state.epsilon_decay,
            min_epsilon: state.min_epsilon,
            rng: build_rng(state.rng_seed),
            rng_seed: state.rng_seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greedy_agent() -> QLearningAgent {
        // epsilon 0.0: always exploit
        QLearningAgent::new(0.5, 0.9, 0.0, 0.995, 0.0).with_seed(7)
    }

    #[test]
    fn test_choose_action_empty_moves_is_none() {
        let mut agent = greedy_agent();
        let state = GameState::new();
        assert_eq!(agent.choose_action(&state, &[]), None);
    }

    #[test]
    fn test_greedy_choice_prefers_learned_value() {
        let mut agent = greedy_agent();
        let state = GameState::new();
        let next = {
            let mut s = state.clone();
            s.apply_move(Move::Place(5));
            s
        };

        // A single rewarded transition makes Place(5) the unique maximizer
        agent.update(&state, Move::Place(5), 1.0, &next, &[]);

        let legal = state.legal_moves();
        for _ in 0..10 {
            assert_eq!(agent.choose_action(&state, &legal), Some(Move::Place(5)));
        }
    }

    #[test]
    fn test_update_with_unit_alpha_sets_reward_exactly() {
        let mut agent = QLearningAgent::new(1.0, 0.9, 0.0, 0.995, 0.0).with_seed(3);
        let state = GameState::new();
        let next = state.clone();

        agent.update(&state, Move::Place(0), 1.0, &next, &[]);
        assert_eq!(
            agent.q_table().get(&BoardKey::from(&state), Move::Place(0)),
            1.0
        );
    }

    #[test]
    fn test_epsilon_decay_respects_floor() {
        let mut agent = QLearningAgent::new(0.1, 0.9, 1.0, 0.5, 0.1);
        let mut previous = agent.epsilon();
        for _ in 0..100 {
            agent.decay_epsilon();
            assert!(agent.epsilon() <= previous);
            assert!(agent.epsilon() >= 0.1);
            previous = agent.epsilon();
        }
        assert_eq!(agent.epsilon(), 0.1);
    }

    #[test]
    fn test_seeded_agents_explore_identically() {
        let mut first = QLearningAgent::new(0.1, 0.9, 1.0, 0.995, 0.1).with_seed(42);
        let mut second = QLearningAgent::new(0.1, 0.9, 1.0, 0.995, 0.1).with_seed(42);

        let state = GameState::new();
        let legal = state.legal_moves();
        for _ in 0..20 {
            assert_eq!(
                first.choose_action(&state, &legal),
                second.choose_action(&state, &legal)
            );
        }
    }
}
