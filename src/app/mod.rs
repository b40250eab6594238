//! Application layer: engine configuration.
//!
//! Builder-style configuration types that sit between the CLI and the
//! engines, validating parameters before construction.

pub mod config;

pub use config::{GeneticConfig, MinimaxConfig, QLearningConfig};
