//! Evolve command - run the genetic board search

use anyhow::Result;
use clap::Parser;

use crate::{app::GeneticConfig, cli::output, genetic::GeneticSearch, morris::GameState};

#[derive(Parser, Debug)]
#[command(about = "Evolve board snapshots toward a higher mill differential")]
pub struct EvolveArgs {
    /// Population size
    #[arg(long, short = 'p', default_value_t = 100)]
    pub population: usize,

    /// Per-cell mutation probability
    #[arg(long, short = 'm', default_value_t = 0.01)]
    pub mutation_rate: f64,

    /// Number of generations
    #[arg(long, short = 'g', default_value_t = 100)]
    pub generations: usize,

    /// Random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: EvolveArgs) -> Result<()> {
    let mut config = GeneticConfig::new()
        .with_population_size(args.population)
        .with_mutation_rate(args.mutation_rate)
        .with_generations(args.generations);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut search = config.build()?;

    let seed_state = GameState::new();
    let spinner = output::create_spinner(&format!(
        "evolving {} members over {} generations",
        args.population, args.generations
    ));
    let best = search.evolve(&seed_state);
    spinner.finish_and_clear();

    output::print_section("Evolution complete");
    output::print_kv("generations", &args.generations.to_string());
    output::print_kv("population", &args.population.to_string());
    output::print_kv(
        "best fitness",
        &GeneticSearch::fitness(&best).to_string(),
    );
    println!("\n{best}");

    Ok(())
}
