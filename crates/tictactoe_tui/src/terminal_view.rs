//! Terminal implementation of the game view.

use crossterm::event;
use ratatui::{Terminal, backend::Backend, layout::Rect};
use tictactoe_mvc::{Board, GameView, InputEvent, Roster, ViewError};
use tracing::{debug, instrument, trace};

use crate::input::map_event;
use crate::ui::{self, CellMark, Screen};

/// Draws the game with ratatui and reads input from crossterm.
pub struct TerminalView<B: Backend> {
    terminal: Terminal<B>,
    screen: Screen,
    cell_areas: [Rect; 9],
}

impl<B: Backend> TerminalView<B> {
    /// Wraps an initialized terminal.
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            screen: Screen::default(),
            cell_areas: [Rect::default(); 9],
        }
    }

    /// Current screen contents.
    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Underlying terminal.
    #[cfg(test)]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Draws one frame and remembers where each cell landed.
    #[instrument(skip(self))]
    pub fn draw(&mut self) -> Result<(), ViewError> {
        let screen = &self.screen;
        let areas = &mut self.cell_areas;
        self.terminal
            .draw(|frame| *areas = ui::draw(frame, screen))
            .map_err(|e| ViewError::new(format!("Failed to draw frame: {}", e)))?;
        Ok(())
    }

    /// Turns a terminal event into game input using the last drawn layout.
    pub fn translate(&mut self, event: event::Event) -> Option<InputEvent> {
        map_event(event, &self.cell_areas, &mut self.screen.cursor)
    }
}

impl<B: Backend> GameView for TerminalView<B> {
    fn render_board(&mut self, board: &Board, roster: &Roster) {
        for (mark, cell) in self.screen.cells.iter_mut().zip(board.cells()) {
            let owner = cell.owner();
            *mark = CellMark {
                owner,
                symbol: owner
                    .map(|player| roster.symbol(player).to_string())
                    .unwrap_or_default(),
            };
        }
    }

    fn render_message(&mut self, message: &str) {
        self.screen.message = message.to_string();
    }

    fn set_board_enabled(&mut self, enabled: bool) {
        debug!(enabled, "Board input toggled");
        self.screen.enabled = enabled;
    }

    #[instrument(skip(self))]
    fn poll_input(&mut self) -> Result<Option<InputEvent>, ViewError> {
        loop {
            self.draw()?;
            let raw = event::read()?;
            trace!(?raw, "Terminal event");
            if let Some(input) = self.translate(raw) {
                return Ok(Some(input));
            }
        }
    }
}
