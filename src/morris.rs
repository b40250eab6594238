//! Twelve Men's Morris game implementation

pub mod board;
pub mod game;
pub mod mills;

pub use board::{Cell, GameState, Phase, Player};
pub use game::{Game, GameOutcome, Move, MoveOutcome};
pub use mills::{MILL_LINES, MillAnalyzer};
