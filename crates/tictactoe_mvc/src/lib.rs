//! Tic-tac-toe built as model, view and controller.
//!
//! # Architecture
//!
//! - **Model**: [`GameModel`] owns the board, the turn and the game status.
//! - **Rules**: pure win/draw checks in [`rules`] over eight fixed lines.
//! - **View**: [`GameView`] is implemented by whatever draws the game.
//! - **Controller**: [`GameController`] feeds view input into the model and
//!   re-renders after each accepted move.
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_mvc::{GameController, GameView, Roster};
//!
//! fn play<V: GameView>(view: V) -> Result<(), tictactoe_mvc::ViewError> {
//!     let mut controller = GameController::new(Roster::default(), view);
//!     controller.run()
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod message;
mod model;
mod roster;
pub mod rules;
mod types;
mod view;

pub use controller::GameController;
pub use error::{ConfigError, MoveError, ViewError};
pub use message::StatusMessage;
pub use model::{GameModel, MoveOutcome};
pub use roster::{PlayerInfo, Roster};
pub use types::{Board, Cell, GameStatus, Player};
pub use view::{GameView, InputEvent, InputHandler};
