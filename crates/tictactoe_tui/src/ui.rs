//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_mvc::{Player, Roster};

const CELL_WIDTH: u16 = Roster::MAX_SYMBOL_WIDTH as u16 + 2;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// What one cell currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellMark {
    /// Owner, if the cell has been played.
    pub owner: Option<Player>,
    /// Text drawn in the cell; empty when unplayed.
    pub symbol: String,
}

/// Everything the screen needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Screen {
    /// Cells in row-major order.
    pub cells: [CellMark; 9],
    /// Status line text.
    pub message: String,
    /// Whether the board accepts input.
    pub enabled: bool,
    /// Highlighted cell for keyboard play.
    pub cursor: usize,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            cells: Default::default(),
            message: String::new(),
            enabled: true,
            cursor: 4,
        }
    }
}

/// Draws the whole screen and returns the area of each cell.
pub fn draw(frame: &mut Frame, screen: &Screen) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let areas = draw_board(frame, chunks[1], screen);

    let status = Paragraph::new(screen.message.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("click or 1-9 to play | arrows + enter | r reset | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    areas
}

fn draw_board(frame: &mut Frame, area: Rect, screen: &Screen) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut areas = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let index = row * 3 + col;
            areas[index] = cols[col * 2];
            draw_cell(frame, areas[index], screen, index);
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    areas
}

fn draw_cell(frame: &mut Frame, area: Rect, screen: &Screen, index: usize) {
    let cell = &screen.cells[index];

    let base_style = match (screen.enabled, cell.owner) {
        (false, _) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
        (true, None) => Style::default().fg(Color::DarkGray),
        (true, Some(Player::One)) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        (true, Some(Player::Two)) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if screen.enabled && index == screen.cursor {
        base_style.bg(Color::White)
    } else {
        base_style
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(cell.symbol.as_str(), style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(usize::from(area.width)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
