//! Twelve Men's Morris rules engine and decision engines
//!
//! This crate provides:
//! - Complete Twelve Men's Morris state machine (placing/moving phases,
//!   mill detection, simplified terminal rule)
//! - Alpha-beta minimax search over the legal-move generator
//! - Tabular Q-learning agent with a pluggable persistence port
//! - Genetic search that evolves raw board snapshots
//!
//! The rules deliberately preserve the simplifications of the system this
//! crate models: slides ignore graph adjacency, the winner is decided by
//! mill count once all 24 placements are made, and lookahead never
//! simulates mill captures.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod evaluation;
pub mod genetic;
pub mod minimax;
pub mod morris;
pub mod ports;
pub mod q_learning;
pub mod types;

pub use error::{Error, Result};
pub use genetic::GeneticSearch;
pub use minimax::MinimaxEngine;
pub use morris::{Cell, Game, GameOutcome, GameState, Move, MoveOutcome, Phase, Player};
pub use q_learning::{QLearningAgent, QTable};
pub use types::BoardKey;
