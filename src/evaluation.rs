//! Static board evaluation shared by the search engines.
//!
//! The minimax engine scores boards with a weighted sum of piece count,
//! mill count, and mobility differentials. The genetic engine ranks raw
//! board snapshots with the cruder mill differential alone.

use crate::morris::{GameState, Player};

/// Weight of the mill differential in the minimax evaluation.
pub const MILL_WEIGHT: f64 = 10.0;

/// Weight of the mobility differential in the minimax evaluation.
pub const MOBILITY_WEIGHT: f64 = 0.1;

/// Heuristic score of a board from `perspective`'s point of view.
///
/// `score = (own pieces - opp pieces) + 10 * (own mills - opp mills)
///        + 0.1 * (own mobility - opp mobility)`
pub fn evaluate(state: &GameState, perspective: Player) -> f64 {
    let opponent = perspective.opponent();

    let piece_diff =
        state.pieces_on_board(perspective) as f64 - state.pieces_on_board(opponent) as f64;
    let mill_diff = state.count_mills(perspective) as f64 - state.count_mills(opponent) as f64;
    let mobility_diff =
        state.legal_moves_for(perspective).len() as f64 - state.legal_moves_for(opponent).len() as f64;

    piece_diff + MILL_WEIGHT * mill_diff + MOBILITY_WEIGHT * mobility_diff
}

/// Mill differential used as genetic fitness: mills(X) minus mills(O).
pub fn mill_differential(state: &GameState) -> i32 {
    state.count_mills(Player::X) as i32 - state.count_mills(Player::O) as i32
}
