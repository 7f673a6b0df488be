//! Game model: board, turn, status and player details.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::error::MoveError;
use crate::roster::{PlayerInfo, Roster};
use crate::rules;
use crate::types::{Board, GameStatus, Player};

/// Result of a move the model accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game goes on; the given player moves next.
    Continue(Player),
    /// The mover completed a line.
    Won(Player),
    /// The mover filled the last cell without completing a line.
    Draw,
}

/// State of one game.
///
/// Only the model's own methods mutate it. The board is written one cell at a
/// time by accepted moves and cleared wholesale by [`GameModel::reset`].
#[derive(Debug, Clone, Getters)]
pub struct GameModel {
    /// Player names and symbols.
    roster: Roster,
    /// The board.
    board: Board,
    /// Player allowed to move next.
    current_player: Player,
    /// Whether the game is running, won or drawn.
    status: GameStatus,
}

impl GameModel {
    /// Creates a model that is already set up with `roster`.
    #[instrument]
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            board: Board::new(),
            current_player: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// Installs a roster and starts a fresh game with player one to move.
    #[instrument(skip(self))]
    pub fn setup(&mut self, roster: Roster) {
        info!("Setting up new game");
        self.roster = roster;
        self.reset();
    }

    /// Writes `player`'s marker at `index`.
    ///
    /// Does not evaluate the result; [`GameModel::play`] runs the full move.
    #[instrument(skip(self))]
    pub fn set_board(&mut self, player: Player, index: usize) -> Result<(), MoveError> {
        self.board.mark(index, player)
    }

    /// Passes the turn to the other player.
    #[instrument(skip(self), fields(from = ?self.current_player))]
    pub fn toggle_current_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Checks whether `player` has completed a line on the current board.
    #[instrument(skip(self))]
    pub fn check_current_win(&self, player: Player) -> bool {
        rules::has_won(&self.board, player)
    }

    /// Checks whether every cell is taken and nobody holds a line.
    #[instrument(skip(self))]
    pub fn check_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Plays the current player's marker at `index`.
    ///
    /// Marks the cell, then checks for a win, then for a draw, and otherwise
    /// passes the turn. Rejected moves leave the model untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn.
    /// - [`MoveError::OutOfBounds`] for an index outside 0-8.
    /// - [`MoveError::CellOccupied`] if the cell already holds a marker.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn play(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        self.set_board(player, index)?;
        debug!(index, "Marker placed");

        if self.check_current_win(player) {
            info!(?player, "Player completed a line");
            self.status = GameStatus::Won(player);
            return Ok(MoveOutcome::Won(player));
        }

        if self.check_draw() {
            info!("Board full, game drawn");
            self.status = GameStatus::Draw;
            return Ok(MoveOutcome::Draw);
        }

        self.toggle_current_player();
        Ok(MoveOutcome::Continue(self.current_player))
    }

    /// Details of the given player.
    pub fn player_details(&self, player: Player) -> &PlayerInfo {
        self.roster.get(player)
    }

    /// Both player symbols, player one first.
    pub fn player_symbols(&self) -> [&str; 2] {
        self.roster.symbols()
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Clears the board and hands the first move back to player one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.board.clear();
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new(Roster::default())
    }
}
