//! Train command - Q-learning against a scripted opponent

use std::{fs::File, path::PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    adapters::MsgPackStore,
    app::{MinimaxConfig, QLearningConfig},
    cli::output,
    minimax::MinimaxEngine,
    morris::{GameOutcome, GameState, MoveOutcome, Player},
    ports::QTableStore,
    q_learning::QLearningAgent,
};

/// Opponent the agent trains against
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpponentKind {
    Minimax,
    Random,
}

#[derive(Parser, Debug)]
#[command(about = "Train the Q-learning agent against a scripted opponent")]
pub struct TrainArgs {
    /// Number of training games
    #[arg(long, short = 'g', default_value_t = 1000)]
    pub games: usize,

    /// Opponent to train against
    #[arg(long, short = 'o', value_enum, default_value_t = OpponentKind::Minimax)]
    pub opponent: OpponentKind,

    /// Minimax opponent search depth
    #[arg(long, default_value_t = 3)]
    pub depth: usize,

    /// Q-table file (loaded when present, written after training)
    #[arg(long, short = 'O', default_value = "q_table.msgpack")]
    pub table: PathBuf,

    /// Learning rate alpha
    #[arg(long, default_value_t = 0.1)]
    pub learning_rate: f64,

    /// Discount factor gamma
    #[arg(long, default_value_t = 0.9)]
    pub discount_factor: f64,

    /// Random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Discard any persisted table before training
    #[arg(long)]
    pub fresh: bool,

    /// Write a JSON training summary to this file
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct TrainingSummary {
    total_games: usize,
    wins: usize,
    draws: usize,
    losses: usize,
    win_rate: f64,
    final_epsilon: f64,
    table_size: usize,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let store = MsgPackStore::new();
    if args.fresh {
        store.clear(&args.table)?;
    }

    let mut config = QLearningConfig::new()
        .with_learning_rate(args.learning_rate)
        .with_discount_factor(args.discount_factor);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut agent = config.build()?;
    agent.load_table(&store, &args.table)?;

    let engine = MinimaxConfig::new().with_depth(args.depth).build();
    let mut opponent_rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut wins = 0;
    let mut draws = 0;
    let mut losses = 0;

    let pb = output::create_training_progress(args.games as u64);
    for _ in 0..args.games {
        let outcome = play_training_game(
            &mut agent,
            args.opponent,
            &engine,
            &mut opponent_rng,
        );
        match outcome {
            Some(GameOutcome::Win(Player::X)) => wins += 1,
            Some(GameOutcome::Win(Player::O)) => losses += 1,
            Some(GameOutcome::Draw) | None => draws += 1,
        }
        pb.set_message(format!("eps {:.3}", agent.epsilon()));
        pb.inc(1);
    }
    pb.finish_with_message("done");

    agent.save_table(&store, &args.table)?;

    let win_rate = if args.games > 0 {
        wins as f64 / args.games as f64
    } else {
        0.0
    };

    output::print_section("Training complete");
    output::print_kv("games", &args.games.to_string());
    output::print_kv("wins", &wins.to_string());
    output::print_kv("draws", &draws.to_string());
    output::print_kv("losses", &losses.to_string());
    output::print_kv("win rate", &format!("{win_rate:.3}"));
    output::print_kv("final epsilon", &format!("{:.3}", agent.epsilon()));
    output::print_kv("table size", &agent.q_table().len().to_string());
    output::print_kv("table file", &args.table.display().to_string());

    if let Some(summary_path) = &args.summary {
        let summary = TrainingSummary {
            total_games: args.games,
            wins,
            draws,
            losses,
            win_rate,
            final_epsilon: agent.epsilon(),
            table_size: agent.q_table().len(),
        };
        let file = File::create(summary_path)?;
        to_writer_pretty(file, &summary)?;
        output::print_kv("summary", &summary_path.display().to_string());
    }

    Ok(())
}

/// Play one training game: the agent as X, the scripted opponent as O.
///
/// Drives the rules engine through the apply -> capture-on-mill -> switch
/// contract, feeding each of the agent's transitions back as a TD update
/// with reward 1.0 on a terminal win and 0.0 otherwise.
fn play_training_game(
    agent: &mut QLearningAgent,
    opponent: OpponentKind,
    engine: &MinimaxEngine,
    opponent_rng: &mut StdRng,
) -> Option<GameOutcome> {
    let mut state = GameState::new();

    while state.check_winner().is_none() {
        if state.to_move == Player::X {
            let legal = state.legal_moves();
            let Some(action) = agent.choose_action(&state, &legal) else {
                break;
            };

            let before = state.clone();
            if state.apply_move(action) == MoveOutcome::MillFormed {
                capture_first_opponent_piece(&mut state);
            }
            let reward = match state.check_winner() {
                Some(GameOutcome::Win(Player::X)) => 1.0,
                _ => 0.0,
            };
            state.switch_player();

            let next_legal = state.legal_moves();
            agent.update(&before, action, reward, &state, &next_legal);
            agent.decay_epsilon();
        } else {
            let chosen = match opponent {
                OpponentKind::Minimax => engine.find_best_move(&mut state),
                OpponentKind::Random => state.legal_moves().choose(opponent_rng).copied(),
            };
            let Some(mv) = chosen else {
                break;
            };
            if state.apply_move(mv) == MoveOutcome::MillFormed {
                capture_first_opponent_piece(&mut state);
            }
            state.switch_player();
        }
    }

    state.check_winner()
}

/// Scripted capture policy: remove the lowest-indexed opponent piece.
fn capture_first_opponent_piece(state: &mut GameState) {
    let target = state.to_move.opponent().to_cell();
    if let Some(position) = state.cells.iter().position(|&cell| cell == target) {
        state.remove_opponent_piece(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morris::Cell;

    #[test]
    fn test_training_game_reaches_an_outcome() {
        let mut agent = QLearningConfig::new().with_seed(5).build().unwrap();
        let engine = MinimaxConfig::new().with_depth(1).build();
        let mut rng = StdRng::seed_from_u64(6);

        let outcome = play_training_game(&mut agent, OpponentKind::Random, &engine, &mut rng);
        assert!(outcome.is_some());
        assert!(!agent.q_table().is_empty());
    }

    #[test]
    fn test_capture_removes_exactly_one_piece() {
        let mut state = GameState::new();
        state.cells[4] = Cell::O;
        state.cells[9] = Cell::O;

        capture_first_opponent_piece(&mut state);
        assert_eq!(state.cells[4], Cell::Empty);
        assert_eq!(state.cells[9], Cell::O);
    }
}
