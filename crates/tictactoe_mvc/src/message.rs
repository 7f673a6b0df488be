//! Status line texts.

use derive_more::Display;

use crate::roster::PlayerInfo;

/// What the status line tells the players.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StatusMessage<'a> {
    /// Fresh board, waiting for the first move.
    #[display(
        "Click a box to start. Let's have Player {} begin using symbol {}",
        _0.name(),
        _0.symbol()
    )]
    Start(&'a PlayerInfo),

    /// The given player moves next.
    #[display("Time for Player {} to play, with symbol {}", _0.name(), _0.symbol())]
    Turn(&'a PlayerInfo),

    /// The given player completed a line.
    #[display("Player {} Won!! Reset to play again.", _0.name())]
    Won(&'a PlayerInfo),

    /// Board filled without a winner.
    #[display("It's a Draw :')! Reset to play again.")]
    Draw,
}
