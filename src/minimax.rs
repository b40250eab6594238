//! Depth-bounded adversarial search with alpha-beta pruning.
//!
//! The engine walks the game tree destructively: each candidate move is
//! applied in place, the turn is passed, the subtree is scored, and the
//! move is undone before the next sibling is tried. Mill-forming moves are
//! not followed by a capture during lookahead, so the search explores a
//! board that keeps all pieces; this makes the engine underestimate the
//! value of forming mills.

use crate::{
    evaluation,
    morris::{GameState, Move, MoveOutcome, Player},
};

/// Alpha-beta minimax engine.
///
/// Stateless apart from its configured search depth: every decision is a
/// pure function of the borrowed game state, which is restored before the
/// call returns. The borrowed state must not be shared with concurrent
/// searches; parallel callers need independent clones.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxEngine {
    depth: usize,
}

impl MinimaxEngine {
    /// Create an engine that searches `depth` plies.
    pub fn new(depth: usize) -> Self {
        Self { depth }
    }

    /// The configured search depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Pick the best move for the side to move, maximizing the evaluation
    /// from that side's perspective.
    ///
    /// Ties keep the first move found, so the ordering of
    /// [`GameState::legal_moves`] decides between equal candidates.
    /// Returns `None` only when there are no legal moves.
    pub fn find_best_move(&self, state: &mut GameState) -> Option<Move> {
        let perspective = state.to_move;
        let mut best: Option<Move> = None;
        let mut best_value = f64::NEG_INFINITY;

        for mv in state.legal_moves() {
            let value = self.score_move(state, mv, self.depth.saturating_sub(1), perspective);
            if best.is_none() || value > best_value {
                best_value = value;
                best = Some(mv);
            }
        }

        best
    }

    /// Score the board `depth` plies deep.
    ///
    /// At depth zero or on a decided board this is exactly the evaluator's
    /// score for `perspective`; no cutoff/terminal distinction is made.
    pub fn search(
        &self,
        state: &mut GameState,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        perspective: Player,
    ) -> f64 {
        if depth == 0 || state.check_winner().is_some() {
            return evaluation::evaluate(state, perspective);
        }

        if maximizing {
            let mut max_value = f64::NEG_INFINITY;
            for mv in state.legal_moves() {
                let value = self.recurse(state, mv, depth - 1, alpha, beta, false, perspective);
                max_value = max_value.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            max_value
        } else {
            let mut min_value = f64::INFINITY;
            for mv in state.legal_moves() {
                let value = self.recurse(state, mv, depth - 1, alpha, beta, true, perspective);
                min_value = min_value.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            min_value
        }
    }

    /// Apply a move, score the resulting subtree, and restore the state.
    fn recurse(
        &self,
        state: &mut GameState,
        mv: Move,
        depth: usize,
        alpha: f64,
        beta: f64,
        maximizing: bool,
        perspective: Player,
    ) -> f64 {
        let outcome = state.apply_move(mv);
        debug_assert!(
            outcome != MoveOutcome::Rejected,
            "legal move generation produced a rejected move: {mv}"
        );

        state.switch_player();
        let value = self.search(state, depth, alpha, beta, maximizing, perspective);
        state.switch_player();
        state.undo_move(mv);
        value
    }

    fn score_move(
        &self,
        state: &mut GameState,
        mv: Move,
        depth: usize,
        perspective: Player,
    ) -> f64 {
        self.recurse(
            state,
            mv,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            false,
            perspective,
        )
    }
}
