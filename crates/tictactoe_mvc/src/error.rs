//! Error types for the game model, roster configuration and views.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::types::Player;

/// Reason a move was refused by the model.
///
/// The controller never shows these to the player; they exist so rejected
/// input can be traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index is not one of the nine cells.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The cell already holds a marker.
    #[display("Cell {} is already occupied by {}", index, owner)]
    CellOccupied {
        /// Index of the occupied cell.
        index: usize,
        /// Player who owns the cell.
        owner: Player,
    },

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Roster configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Failure inside a concrete view (drawing or reading input).
#[derive(Debug, Clone, Display, Error)]
#[display("View error: {} at {}:{}", message, file, line)]
pub struct ViewError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ViewError {
    /// Creates a new view error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ViewError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
