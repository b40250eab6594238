//! Mill line analysis for the 24-point board

use super::board::{Cell, Player};
use crate::types::BOARD_SIZE;

/// The 16 fixed mill triples on the board: the horizontal rows of the two
/// squares plus the eight connecting lines of the graph.
pub const MILL_LINES: [[usize; 3]; 16] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [9, 10, 11],
    [12, 13, 14],
    [15, 16, 17],
    [18, 19, 20],
    [21, 22, 23],
    [0, 9, 21],
    [3, 10, 18],
    [6, 11, 15],
    [1, 4, 7],
    [16, 19, 22],
    [8, 12, 17],
    [5, 13, 20],
    [2, 14, 23],
];

/// Utility for analyzing mill lines
pub struct MillAnalyzer;

impl MillAnalyzer {
    /// Count the mills currently held by a player.
    pub fn count_mills(cells: &[Cell; BOARD_SIZE], player: Player) -> usize {
        let target = player.to_cell();
        MILL_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| cells[idx] == target))
            .count()
    }

    /// Check whether the player holds a completed mill through `position`.
    pub fn mill_through(cells: &[Cell; BOARD_SIZE], player: Player, position: usize) -> bool {
        let target = player.to_cell();
        MILL_LINES
            .iter()
            .filter(|line| line.contains(&position))
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_appears_in_exactly_two_lines() {
        for position in 0..BOARD_SIZE {
            let memberships = MILL_LINES
                .iter()
                .filter(|line| line.contains(&position))
                .count();
            assert_eq!(memberships, 2, "cell {position} has {memberships} lines");
        }
    }

    #[test]
    fn test_count_mills_single_row() {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(MillAnalyzer::count_mills(&cells, Player::X), 1);
        assert_eq!(MillAnalyzer::count_mills(&cells, Player::O), 0);
    }

    #[test]
    fn test_count_mills_crossing_lines() {
        // Row [0,1,2] and line [0,9,21] share cell 0
        let mut cells = [Cell::Empty; BOARD_SIZE];
        for idx in [0, 1, 2, 9, 21] {
            cells[idx] = Cell::O;
        }

        assert_eq!(MillAnalyzer::count_mills(&cells, Player::O), 2);
    }

    #[test]
    fn test_mill_through_position() {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        cells[3] = Cell::X;
        cells[4] = Cell::X;
        cells[5] = Cell::X;

        assert!(MillAnalyzer::mill_through(&cells, Player::X, 4));
        assert!(!MillAnalyzer::mill_through(&cells, Player::X, 6));
        assert!(!MillAnalyzer::mill_through(&cells, Player::O, 4));
    }

    #[test]
    fn test_incomplete_line_is_not_a_mill() {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        cells[0] = Cell::X;
        cells[1] = Cell::X;

        assert!(!MillAnalyzer::mill_through(&cells, Player::X, 0));
        assert_eq!(MillAnalyzer::count_mills(&cells, Player::X), 0);
    }
}
