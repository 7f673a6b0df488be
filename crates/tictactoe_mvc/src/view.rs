//! Rendering interface the controller drives.
//!
//! A view knows nothing about rules. It draws what it is told and reports what
//! the player did. Any toolkit can sit behind it: the terminal front end, or a
//! recording double in tests.

use crate::error::ViewError;
use crate::roster::Roster;
use crate::types::Board;

/// Something the player did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// A board cell (0-8) was clicked.
    CellClicked(usize),
    /// The reset control was used.
    Reset,
    /// The player asked to leave.
    Quit,
}

/// Receiver of input events.
///
/// This is the seam where a view's inputs get bound to behaviour: the
/// controller implements it, and anything that produces events dispatches
/// them here.
pub trait InputHandler {
    /// A cell was clicked. Indices outside 0-8 must be tolerated.
    fn on_cell_clicked(&mut self, index: usize);

    /// The reset control was used.
    fn on_reset(&mut self);

    /// Routes an event to the matching handler. Returns `false` on quit.
    fn dispatch(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::CellClicked(index) => self.on_cell_clicked(index),
            InputEvent::Reset => self.on_reset(),
            InputEvent::Quit => return false,
        }
        true
    }
}

/// Output surface for a game, plus its source of input.
pub trait GameView {
    /// Shows every cell: empty, or the owner's symbol from `roster`.
    fn render_board(&mut self, board: &Board, roster: &Roster);

    /// Replaces the status line.
    fn render_message(&mut self, message: &str);

    /// Enables or greys out the board. Disabled while a game is over.
    fn set_board_enabled(&mut self, enabled: bool);

    /// Waits for the next input event.
    ///
    /// `Ok(None)` means the input source is exhausted.
    fn poll_input(&mut self) -> Result<Option<InputEvent>, ViewError>;
}
