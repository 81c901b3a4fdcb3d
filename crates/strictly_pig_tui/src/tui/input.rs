//! Keyboard and mouse mapping.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use strictly_pig::InputEvent;

use super::ui::{close_marker_area, overlay_area};

/// What a terminal event means to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the presentation.
    Input(InputEvent),
    /// Leave the program.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Maps a key press. While the win overlay is open, confirm keys close it.
pub fn map_key(key: KeyEvent, overlay_visible: bool) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match (code, overlay_visible) {
        (KeyCode::Char('q'), _) => KeyAction::Quit,
        (KeyCode::Char('n'), _) => KeyAction::Input(InputEvent::NewGame),
        (KeyCode::Esc, _) => KeyAction::Input(InputEvent::DismissOverlay),
        (KeyCode::Char('x') | KeyCode::Char(' ') | KeyCode::Enter, true) => {
            KeyAction::Input(InputEvent::DismissOverlay)
        }
        (KeyCode::Char('r') | KeyCode::Char(' '), false) => KeyAction::Input(InputEvent::Roll),
        (KeyCode::Char('h') | KeyCode::Enter, false) => KeyAction::Input(InputEvent::Hold),
        _ => KeyAction::Ignore,
    }
}

/// Maps a mouse event on a screen of the given size.
///
/// A left click on the `[x]` marker or anywhere outside the win overlay
/// closes it. Clicks inside the overlay box do nothing.
pub fn map_mouse(mouse: MouseEvent, overlay_visible: bool, screen: Rect) -> KeyAction {
    if !overlay_visible || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return KeyAction::Ignore;
    }

    let at = Position::new(mouse.column, mouse.row);
    if close_marker_area(screen).contains(at) || !overlay_area(screen).contains(at) {
        KeyAction::Input(InputEvent::DismissOverlay)
    } else {
        KeyAction::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_game_keys() {
        assert_eq!(map_key(press(KeyCode::Char('r')), false), KeyAction::Input(InputEvent::Roll));
        assert_eq!(map_key(press(KeyCode::Char('R')), false), KeyAction::Input(InputEvent::Roll));
        assert_eq!(map_key(press(KeyCode::Char(' ')), false), KeyAction::Input(InputEvent::Roll));
        assert_eq!(map_key(press(KeyCode::Char('h')), false), KeyAction::Input(InputEvent::Hold));
        assert_eq!(map_key(press(KeyCode::Enter), false), KeyAction::Input(InputEvent::Hold));
        assert_eq!(
            map_key(press(KeyCode::Char('n')), false),
            KeyAction::Input(InputEvent::NewGame)
        );
        assert_eq!(map_key(press(KeyCode::Char('z')), false), KeyAction::Ignore);
    }

    #[test]
    fn test_overlay_keys_close_instead_of_playing() {
        assert_eq!(
            map_key(press(KeyCode::Enter), true),
            KeyAction::Input(InputEvent::DismissOverlay)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('x')), true),
            KeyAction::Input(InputEvent::DismissOverlay)
        );
        assert_eq!(map_key(press(KeyCode::Char('r')), true), KeyAction::Ignore);
        assert_eq!(map_key(press(KeyCode::Char('n')), true), KeyAction::Input(InputEvent::NewGame));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q')), false), KeyAction::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), true),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = press(KeyCode::Char('r'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, false), KeyAction::Ignore);
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn test_click_outside_overlay_closes_it() {
        assert_eq!(
            map_mouse(click(3, 4), true, screen()),
            KeyAction::Input(InputEvent::DismissOverlay)
        );
        assert_eq!(map_mouse(click(3, 4), false, screen()), KeyAction::Ignore);
    }

    #[test]
    fn test_click_inside_overlay_is_ignored() {
        assert_eq!(map_mouse(click(40, 11), true, screen()), KeyAction::Ignore);
        assert_eq!(map_mouse(click(20, 8), true, screen()), KeyAction::Ignore);
    }

    #[test]
    fn test_click_on_close_marker_closes_overlay() {
        let marker = close_marker_area(screen());
        assert_eq!(
            map_mouse(click(marker.x + 1, marker.y), true, screen()),
            KeyAction::Input(InputEvent::DismissOverlay)
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let mut event = click(3, 4);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(map_mouse(event, true, screen()), KeyAction::Ignore);
    }
}
