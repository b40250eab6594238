//! CLI infrastructure for the morris toolkit
//!
//! Provides the command-line interface for training the Q-learning agent
//! and running the genetic board search.

pub mod commands;
pub mod output;
