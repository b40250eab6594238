//! Q-table implementation for temporal difference learning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{morris::Move, types::BoardKey};

/// Q-table mapping (board snapshot, move) pairs to value estimates.
///
/// Keys round-trip exactly through serialization: the snapshot is the
/// 24-character board encoding and the move is its tagged representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QTable {
    /// Q-values: (board snapshot, move) -> estimate
    q_values: HashMap<(BoardKey, Move), f64>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create a new empty Q-table.
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            q_values: HashMap::new(),
            learning_rate,
            discount_factor,
        }
    }

    /// Get the Q-value for a state-action pair (0.0 when unseen).
    pub fn get(&self, state: &BoardKey, action: Move) -> f64 {
        *self.q_values.get(&(state.clone(), action)).unwrap_or(&0.0)
    }

    /// Set the Q-value for a state-action pair.
    pub fn set(&mut self, state: BoardKey, action: Move, value: f64) {
        self.q_values.insert((state, action), value);
    }

    /// Maximum Q-value over the given actions in a state.
    pub fn max_q(&self, state: &BoardKey, actions: &[Move]) -> f64 {
        actions
            .iter()
            .map(|&action| self.get(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// All actions among `actions` attaining the maximum Q-value.
    ///
    /// Empty iff `actions` is empty. The caller breaks ties among the
    /// returned maximizers.
    pub fn greedy_actions(&self, state: &BoardKey, actions: &[Move]) -> Vec<Move> {
        if actions.is_empty() {
            return Vec::new();
        }
        let max = self.max_q(state, actions);
        actions
            .iter()
            .copied()
            .filter(|&action| self.get(state, action) == max)
            .collect()
    }

    /// Off-policy TD update:
    ///
    /// `Q(s,a) <- (1-α) Q(s,a) + α (r + γ max_a' Q(s',a'))`
    ///
    /// The future term is zero when `next_actions` is empty.
    pub fn update(
        &mut self,
        state: BoardKey,
        action: Move,
        reward: f64,
        next_state: &BoardKey,
        next_actions: &[Move],
    ) {
        let current = self.get(&state, action);
        let max_future = if next_actions.is_empty() {
            0.0
        } else {
            self.max_q(next_state, next_actions)
        };
        let updated = (1.0 - self.learning_rate) * current
            + self.learning_rate * (reward + self.discount_factor * max_future);
        self.set(state, action, updated);
    }

    /// Drop all learned values.
    pub fn clear(&mut self) {
        self.q_values.clear();
    }

    /// Number of stored Q-values.
    pub fn len(&self) -> usize {
        self.q_values.len()
    }

    /// True iff no values have been learned yet.
    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }

    /// The learning rate α.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// The discount factor γ.
    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }
}
