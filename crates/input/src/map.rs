//! Key mapping from terminal events to grid commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What a key asks the grid to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Flip the card under the cursor.
    Flip,
    NewGame,
}

/// Map keyboard input to grid commands.
pub fn handle_key_event(key: KeyEvent) -> Option<UiCommand> {
    match key.code {
        // Cursor
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(UiCommand::CursorLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(UiCommand::CursorRight),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(UiCommand::CursorUp),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(UiCommand::CursorDown),

        KeyCode::Char(' ') | KeyCode::Enter => Some(UiCommand::Flip),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(UiCommand::NewGame),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q' | 'Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Keys that close a win/loss notice.
pub fn is_dismiss_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc)
}

/// A left-button press; the view decides which card, if any, it lands on.
pub fn is_card_click(mouse: MouseEvent) -> bool {
    mouse.kind == MouseEventKind::Down(MouseButton::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(UiCommand::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(UiCommand::CursorRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(UiCommand::CursorUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(UiCommand::CursorDown)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(UiCommand::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(UiCommand::CursorDown)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(UiCommand::Flip)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(UiCommand::Flip)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(UiCommand::NewGame)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_dismiss_keys() {
        assert!(is_dismiss_key(KeyEvent::from(KeyCode::Enter)));
        assert!(is_dismiss_key(KeyEvent::from(KeyCode::Esc)));
        assert!(!is_dismiss_key(KeyEvent::from(KeyCode::Char('n'))));
    }

    #[test]
    fn test_only_left_press_is_a_card_click() {
        let mouse = |kind| MouseEvent {
            kind,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };

        let left = MouseButton::Left;
        assert!(is_card_click(mouse(MouseEventKind::Down(left))));
        assert!(!is_card_click(mouse(MouseEventKind::Up(left))));
        assert!(!is_card_click(mouse(MouseEventKind::Drag(left))));
        assert!(!is_card_click(mouse(MouseEventKind::Moved)));

        let right = MouseButton::Right;
        assert!(!is_card_click(mouse(MouseEventKind::Down(right))));
    }
}
