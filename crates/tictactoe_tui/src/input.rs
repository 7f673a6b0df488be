//! Keyboard and mouse input mapping.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tictactoe_mvc::InputEvent;

/// Moves the keyboard cursor one step on the 3x3 grid, stopping at edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    row * 3 + col
}

/// Finds the cell under a terminal coordinate.
pub fn cell_at(areas: &[Rect; 9], column: u16, row: u16) -> Option<usize> {
    let point = Position::new(column, row);
    areas.iter().position(|area| area.contains(point))
}

/// Maps a key press to a game input, moving `cursor` for arrow keys.
pub fn map_key(key: KeyEvent, cursor: &mut usize) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Reset),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            *cursor = index;
            Some(InputEvent::CellClicked(index))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputEvent::CellClicked(*cursor)),
        code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
            *cursor = move_cursor(*cursor, code);
            None
        }
        _ => None,
    }
}

/// Maps any terminal event to a game input.
///
/// Left clicks outside the board produce nothing.
pub fn map_event(event: Event, areas: &[Rect; 9], cursor: &mut usize) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key, cursor),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            let index = cell_at(areas, column, row)?;
            *cursor = index;
            Some(InputEvent::CellClicked(index))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn grid() -> [Rect; 9] {
        let mut areas = [Rect::default(); 9];
        for (i, area) in areas.iter_mut().enumerate() {
            let (row, col) = (i as u16 / 3, i as u16 % 3);
            *area = Rect::new(10 + col * 8, 5 + row * 4, 7, 3);
        }
        areas
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(0, KeyCode::Left), 0);
        assert_eq!(move_cursor(0, KeyCode::Up), 0);
        assert_eq!(move_cursor(8, KeyCode::Right), 8);
        assert_eq!(move_cursor(8, KeyCode::Down), 8);
        assert_eq!(move_cursor(2, KeyCode::Right), 2);
        assert_eq!(move_cursor(6, KeyCode::Down), 6);
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(4, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, KeyCode::Right), 5);
        assert_eq!(move_cursor(4, KeyCode::Up), 1);
        assert_eq!(move_cursor(4, KeyCode::Down), 7);
    }

    #[test]
    fn test_digits_map_to_cells() {
        let mut cursor = 4;
        assert_eq!(
            map_key(press(KeyCode::Char('1')), &mut cursor),
            Some(InputEvent::CellClicked(0))
        );
        assert_eq!(cursor, 0);
        assert_eq!(
            map_key(press(KeyCode::Char('9')), &mut cursor),
            Some(InputEvent::CellClicked(8))
        );
        assert_eq!(map_key(press(KeyCode::Char('0')), &mut cursor), None);
    }

    #[test]
    fn test_arrows_then_enter_plays_cursor() {
        let mut cursor = 4;
        assert_eq!(map_key(press(KeyCode::Up), &mut cursor), None);
        assert_eq!(map_key(press(KeyCode::Left), &mut cursor), None);
        assert_eq!(
            map_key(press(KeyCode::Enter), &mut cursor),
            Some(InputEvent::CellClicked(0))
        );
    }

    #[test]
    fn test_control_keys() {
        let mut cursor = 4;
        assert_eq!(map_key(press(KeyCode::Char('r')), &mut cursor), Some(InputEvent::Reset));
        assert_eq!(map_key(press(KeyCode::Char('q')), &mut cursor), Some(InputEvent::Quit));
        assert_eq!(map_key(press(KeyCode::Esc), &mut cursor), Some(InputEvent::Quit));
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut cursor
            ),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut cursor = 4;
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('1'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(map_key(release, &mut cursor), None);
        assert_eq!(cursor, 4);
    }

    #[test]
    fn test_mouse_click_hits_cell() {
        let areas = grid();
        let mut cursor = 4;
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 27,
            row: 14,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(click, &areas, &mut cursor), Some(InputEvent::CellClicked(8)));
        assert_eq!(cursor, 8);
    }

    #[test]
    fn test_mouse_click_outside_grid_ignored() {
        let areas = grid();
        let mut cursor = 4;
        let gap = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 17,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });
        let outside = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(gap, &areas, &mut cursor), None);
        assert_eq!(map_event(outside, &areas, &mut cursor), None);
        assert_eq!(cursor, 4);
    }

    #[test]
    fn test_right_click_ignored() {
        let areas = grid();
        let mut cursor = 4;
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 11,
            row: 6,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(click, &areas, &mut cursor), None);
    }
}
