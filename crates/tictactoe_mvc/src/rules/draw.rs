//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use super::win::winner;
use crate::types::{Board, Cell};

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board where nobody completed a line.
///
/// Win takes priority: a board filled by a winning move is not a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
