//! Board state representation and move application

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    game::{GameOutcome, Move, MoveOutcome},
    mills::MillAnalyzer,
};
use crate::types::{BOARD_SIZE, PIECES_PER_PLAYER};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Index into per-player arrays
    pub(crate) fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

/// Game phase, tracked per player.
///
/// A player stays in `Placing` until their own placement stock is exhausted
/// and switches to `Moving` for subsequent turns. The phases of the two
/// players flip independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Placing,
    Moving,
}

/// Decode a 24-character board snapshot into cells.
///
/// # Errors
///
/// Returns an error if the string is shorter than 24 cells or contains a
/// character that is not 'X', 'O', or '.'.
pub fn decode_cells(s: &str) -> Result<[Cell; BOARD_SIZE], crate::Error> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < BOARD_SIZE {
        return Err(crate::Error::InvalidBoardLength {
            expected: BOARD_SIZE,
            got: chars.len(),
            context: s.to_string(),
        });
    }

    let mut cells = [Cell::Empty; BOARD_SIZE];
    for (position, &c) in chars.iter().take(BOARD_SIZE).enumerate() {
        cells[position] = Cell::from_char(c).ok_or(crate::Error::InvalidCellCharacter {
            character: c,
            position,
            context: s.to_string(),
        })?;
    }
    Ok(cells)
}

/// Complete game state: board cells, side to move, per-player phase and
/// placement stock, and the count of placements made so far.
///
/// Move application mutates the state in place and `undo_move` restores it,
/// so the search engines can walk the game tree without cloning. The genetic
/// engine instead clones whole states and edits `cells` directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub cells: [Cell; BOARD_SIZE],
    pub to_move: Player,
    pub phases: [Phase; 2],
    pub pieces_in_hand: [usize; 2],
    /// Number of placements applied so far (slides do not count).
    pub moves_made: usize,
}

impl GameState {
    /// Create a fresh game: empty board, X to move, both players placing.
    pub fn new() -> Self {
        GameState {
            cells: [Cell::Empty; BOARD_SIZE],
            to_move: Player::X,
            phases: [Phase::Placing, Phase::Placing],
            pieces_in_hand: [PIECES_PER_PLAYER, PIECES_PER_PLAYER],
            moves_made: 0,
        }
    }

    /// The phase the given player is in.
    pub fn phase(&self, player: Player) -> Phase {
        self.phases[player.index()]
    }

    /// Pieces the given player still has to place.
    pub fn pieces_in_hand(&self, player: Player) -> usize {
        self.pieces_in_hand[player.index()]
    }

    /// Pieces the given player currently has on the board.
    pub fn pieces_on_board(&self, player: Player) -> usize {
        let target = player.to_cell();
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// True iff the mover may place a piece at `position`.
    pub fn is_legal_placement(&self, position: usize) -> bool {
        position < BOARD_SIZE && self.cells[position] == Cell::Empty
    }

    /// True iff the mover may slide a piece from `from` to `to`.
    ///
    /// Any empty destination is accepted: the engine deliberately does not
    /// restrict slides to graph-adjacent points.
    pub fn is_legal_slide(&self, from: usize, to: usize) -> bool {
        from < BOARD_SIZE
            && to < BOARD_SIZE
            && self.cells[from] == self.to_move.to_cell()
            && self.cells[to] == Cell::Empty
    }

    /// Apply a move for the side to move.
    ///
    /// Returns `MillFormed` when the move completes a mill, `Continue` for
    /// any other accepted move, and `Rejected` for an illegal one (the state
    /// is untouched in that case).
    ///
    /// Turn advancement is the caller's responsibility: a `MillFormed`
    /// result must be followed by [`GameState::remove_opponent_piece`] before
    /// [`GameState::switch_player`] is called. When a placement exhausts the
    /// mover's stock their phase flips to `Moving`, except that a
    /// mill-forming final placement returns before the flip is checked.
    pub fn apply_move(&mut self, mv: Move) -> MoveOutcome {
        let mover = self.to_move;
        match (self.phase(mover), mv) {
            (Phase::Placing, Move::Place(position)) => {
                if !self.is_legal_placement(position) {
                    return MoveOutcome::Rejected;
                }
                self.cells[position] = mover.to_cell();
                self.pieces_in_hand[mover.index()] =
                    self.pieces_in_hand[mover.index()].saturating_sub(1);
                self.moves_made += 1;
                if MillAnalyzer::mill_through(&self.cells, mover, position) {
                    return MoveOutcome::MillFormed;
                }
                if self.pieces_in_hand[mover.index()] == 0 {
                    self.phases[mover.index()] = Phase::Moving;
                }
                MoveOutcome::Continue
            }
            (Phase::Moving, Move::Slide { from, to }) => {
                if !self.is_legal_slide(from, to) {
                    return MoveOutcome::Rejected;
                }
                self.cells[to] = mover.to_cell();
                self.cells[from] = Cell::Empty;
                if MillAnalyzer::mill_through(&self.cells, mover, to) {
                    return MoveOutcome::MillFormed;
                }
                MoveOutcome::Continue
            }
            _ => MoveOutcome::Rejected,
        }
    }

    /// Undo a move previously applied by the same mover.
    ///
    /// Undoing a placement restores the placement stock and counter but
    /// never reverses a phase flip, and a capture that followed a mill is
    /// never restored. Search callers rely on this only for moves whose
    /// captures were not simulated.
    pub fn undo_move(&mut self, mv: Move) {
        let mover = self.to_move;
        match mv {
            Move::Place(position) => {
                self.cells[position] = Cell::Empty;
                self.pieces_in_hand[mover.index()] += 1;
                self.moves_made = self.moves_made.saturating_sub(1);
            }
            Move::Slide { from, to } => {
                self.cells[from] = mover.to_cell();
                self.cells[to] = Cell::Empty;
            }
        }
    }

    /// Remove an opponent piece after a mill. Returns false if the cell
    /// does not hold an opponent piece.
    pub fn remove_opponent_piece(&mut self, position: usize) -> bool {
        if position < BOARD_SIZE && self.cells[position] == self.to_move.opponent().to_cell() {
            self.cells[position] = Cell::Empty;
            true
        } else {
            false
        }
    }

    /// Pass the turn to the other player.
    pub fn switch_player(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.to_move)
    }

    /// All legal moves for an explicit player (used by the evaluator's
    /// mobility term).
    pub fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        match self.phase(player) {
            Phase::Placing => (0..BOARD_SIZE)
                .filter(|&position| self.cells[position] == Cell::Empty)
                .map(Move::Place)
                .collect(),
            Phase::Moving => {
                let target = player.to_cell();
                let mut moves = Vec::new();
                for from in 0..BOARD_SIZE {
                    if self.cells[from] != target {
                        continue;
                    }
                    for to in 0..BOARD_SIZE {
                        if self.cells[to] == Cell::Empty {
                            moves.push(Move::Slide { from, to });
                        }
                    }
                }
                moves
            }
        }
    }

    /// Count the mills currently held by a player.
    pub fn count_mills(&self, player: Player) -> usize {
        MillAnalyzer::count_mills(&self.cells, player)
    }

    /// Determine the game outcome, if any.
    ///
    /// Only evaluated once all 24 placements have been made; the side with
    /// more mills wins, equal counts draw. Piece starvation and
    /// immobilization are not win conditions in this rule set.
    pub fn check_winner(&self) -> Option<GameOutcome> {
        if self.moves_made < 2 * PIECES_PER_PLAYER {
            return None;
        }
        let x_mills = self.count_mills(Player::X);
        let o_mills = self.count_mills(Player::O);
        if x_mills > o_mills {
            Some(GameOutcome::Win(Player::X))
        } else if o_mills > x_mills {
            Some(GameOutcome::Win(Player::O))
        } else {
            Some(GameOutcome::Draw)
        }
    }

    /// True iff the game has an outcome.
    pub fn is_terminal(&self) -> bool {
        self.check_winner().is_some()
    }

    /// Encode the board cells as a 24-character snapshot.
    pub fn encode(&self) -> String {
        self.cells.iter().map(|cell| cell.to_char()).collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameState {
    /// Render the two 3x3 squares side by side, the way the board is
    /// usually drawn.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = |i: usize| self.cells[i].to_char();
        writeln!(f, "{}-{}-{}   {}-{}-{}", c(0), c(1), c(2), c(3), c(4), c(5))?;
        writeln!(f, "| \\ | / |   | \\ | / |")?;
        writeln!(f, "{}-{}-{}   {}-{}-{}", c(6), c(7), c(8), c(9), c(10), c(11))?;
        writeln!(f, "| / | \\ |   | / | \\ |")?;
        writeln!(
            f,
            "{}-{}-{}   {}-{}-{}",
            c(12),
            c(13),
            c(14),
            c(15),
            c(16),
            c(17)
        )?;
        write!(
            f,
            "{}-{}-{}   {}-{}-{}",
            c(18),
            c(19),
            c(20),
            c(21),
            c(22),
            c(23)
        )
    }
}
