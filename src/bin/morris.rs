//! Morris CLI - training and search tools for the Twelve Men's Morris
//! engines
//!
//! - Train the tabular Q-learning agent against a scripted opponent
//! - Run the genetic search over board snapshots

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "morris")]
#[command(version, about = "Twelve Men's Morris engine toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the Q-learning agent against a scripted opponent
    Train(morris::cli::commands::train::TrainArgs),

    /// Evolve board snapshots with the genetic search
    Evolve(morris::cli::commands::evolve::EvolveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => morris::cli::commands::train::execute(args),
        Commands::Evolve(args) => morris::cli::commands::evolve::execute(args),
    }
}
