//! Tabular Q-learning over (board snapshot, move) pairs
//!
//! The agent follows an ε-greedy policy over the legal moves supplied by
//! the driver and updates its table with the standard off-policy temporal
//! difference rule:
//!
//! `Q(s,a) <- (1-α) Q(s,a) + α (r + γ max_a' Q(s',a'))`
//!
//! Unseen (state, action) pairs default to 0.0. The table is the only
//! persistent piece of agent state; it is loaded through a
//! [`crate::ports::QTableStore`] at start-up and flushed on demand.
//!
//! ## Usage Example
//!
//! ```no_run
//! use morris::q_learning::QLearningAgent;
//!
//! let agent = QLearningAgent::new(
//!     0.1,   // learning_rate
//!     0.9,   // discount_factor
//!     1.0,   // epsilon (exploration)
//!     0.995, // epsilon_decay
//!     0.1,   // min_epsilon
//! );
//! ```

pub mod agent;
pub mod q_table;
pub mod serialization;

// Public re-exports
pub use agent::QLearningAgent;
pub use q_table::QTable;
pub use serialization::SavedQAgent;
