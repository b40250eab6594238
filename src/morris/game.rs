//! Moves, outcomes, and high-level game management

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{GameState, Player};

/// A move in the game: a placement during the placing phase, a slide of an
/// owned piece to an empty cell afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    Place(usize),
    Slide { from: usize, to: usize },
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(position) => write!(f, "place {position}"),
            Move::Slide { from, to } => write!(f, "slide {from}->{to}"),
        }
    }
}

/// Result of applying a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// Move accepted, no mill formed
    Continue,
    /// Move accepted and completed a mill; the mover may remove an
    /// opponent piece before the turn passes
    MillFormed,
    /// Move was illegal and the state is unchanged
    Rejected,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history.
///
/// `Game` is the reference driver for the rules engine: it owns the
/// apply -> capture-on-mill -> switch sequencing so that external callers
/// cannot get the ordering wrong.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    state: GameState,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
    capture_pending: bool,
}

impl Game {
    /// Start a new game from the initial position.
    pub fn new() -> Self {
        Game {
            state: GameState::new(),
            moves: Vec::new(),
            outcome: None,
            capture_pending: false,
        }
    }

    /// The current board state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The moves played so far.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The outcome, once the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// True iff the last move formed a mill and the capture is still owed.
    pub fn capture_pending(&self) -> bool {
        self.capture_pending
    }

    /// Play a move for the side to move.
    ///
    /// On `Continue` the turn passes automatically. On `MillFormed` the
    /// turn is held until [`Game::capture`] removes an opponent piece.
    /// Rejected moves leave the game untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once an outcome is set and
    /// [`crate::Error::CapturePending`] while a mill capture is owed.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }
        if self.capture_pending {
            return Err(crate::Error::CapturePending);
        }

        match self.state.apply_move(mv) {
            MoveOutcome::Rejected => Ok(MoveOutcome::Rejected),
            MoveOutcome::MillFormed => {
                self.moves.push(mv);
                self.capture_pending = true;
                Ok(MoveOutcome::MillFormed)
            }
            MoveOutcome::Continue => {
                self.moves.push(mv);
                self.outcome = self.state.check_winner();
                self.state.switch_player();
                Ok(MoveOutcome::Continue)
            }
        }
    }

    /// Resolve a pending mill by removing the opponent piece at `position`.
    ///
    /// Returns false (and keeps the capture pending) if the cell does not
    /// hold an opponent piece. On success the turn passes.
    pub fn capture(&mut self, position: usize) -> bool {
        if !self.capture_pending || !self.state.remove_opponent_piece(position) {
            return false;
        }
        self.capture_pending = false;
        self.outcome = self.state.check_winner();
        self.state.switch_player();
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
