//! Win detection logic for tic-tac-toe.

use strum::IntoEnumIterator;
use tracing::instrument;

use crate::types::{Board, Cell, Player};

/// The eight index triples that win the game.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `player` owns every cell of at least one winning line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    let cells = board.cells();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == Cell::Occupied(player)))
}

/// Returns the player holding a complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| has_won(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, indices: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in indices {
            board.mark(i, player).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for player in Player::iter() {
            for line in WIN_LINES {
                let board = board_with(player, &line);
                assert!(has_won(&board, player), "{:?} should win with {:?}", player, line);
                assert!(!has_won(&board, player.opponent()));
                assert_eq!(winner(&board), Some(player));
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = board_with(Player::One, &[0, 1]);
        assert!(!has_won(&board, Player::One));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Player::One, &[0, 1]);
        board.mark(2, Player::Two).unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_non_line_triple_is_not_a_win() {
        let board = board_with(Player::Two, &[0, 1, 5]);
        assert!(!has_won(&board, Player::Two));
    }
}
