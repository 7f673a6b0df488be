//! Game controller — turns input events into model changes and re-renders.

use tracing::{debug, info, instrument};

use crate::error::ViewError;
use crate::message::StatusMessage;
use crate::model::{GameModel, MoveOutcome};
use crate::roster::Roster;
use crate::view::{GameView, InputHandler};

/// Owns the model and the view and keeps them in step.
///
/// Call [`GameController::run`] to drive the event loop.
#[derive(Debug)]
pub struct GameController<V> {
    model: GameModel,
    view: V,
}

impl<V: GameView> GameController<V> {
    /// Sets up a game with `roster` and renders the opening state.
    #[instrument(skip(view))]
    pub fn new(roster: Roster, view: V) -> Self {
        let mut controller = Self {
            model: GameModel::new(roster),
            view,
        };
        controller.init_game();
        controller
    }

    /// Read access to the model.
    pub fn model(&self) -> &GameModel {
        &self.model
    }

    /// Read access to the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Gives the view back, ending the game.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Pulls events from the view and handles each one to completion.
    ///
    /// Returns when the player quits or the view runs out of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), ViewError> {
        info!("Starting game loop");
        while let Some(event) = self.view.poll_input()? {
            debug!(?event, "Input received");
            if !self.dispatch(event) {
                info!("Player quit");
                return Ok(());
            }
        }
        info!("Input source closed");
        Ok(())
    }

    fn init_game(&mut self) {
        self.view.render_board(self.model.board(), self.model.roster());
        self.show_start_message();
        self.view.set_board_enabled(true);
    }

    fn show_start_message(&mut self) {
        let first = self.model.player_details(*self.model.current_player());
        let message = StatusMessage::Start(first).to_string();
        self.view.render_message(&message);
    }
}

impl<V: GameView> InputHandler for GameController<V> {
    #[instrument(skip(self))]
    fn on_cell_clicked(&mut self, index: usize) {
        let outcome = match self.model.play(index) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "Ignoring click");
                return;
            }
        };

        self.view
            .render_board(self.model.board(), self.model.roster());

        let message = match outcome {
            MoveOutcome::Won(player) => {
                StatusMessage::Won(self.model.player_details(player)).to_string()
            }
            MoveOutcome::Draw => StatusMessage::Draw.to_string(),
            MoveOutcome::Continue(next) => {
                StatusMessage::Turn(self.model.player_details(next)).to_string()
            }
        };
        self.view.render_message(&message);

        if self.model.is_over() {
            self.view.set_board_enabled(false);
        }
    }

    #[instrument(skip(self))]
    fn on_reset(&mut self) {
        info!("Resetting game");
        self.model.reset();
        self.init_game();
    }
}
