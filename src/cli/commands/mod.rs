//! CLI commands

pub mod evolve;
pub mod train;
