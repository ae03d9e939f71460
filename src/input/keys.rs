use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Direction;

/// Keyboard commands. Arrow keys arrive already decoded and bypass the
/// gesture accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Navigate(Direction),
    Back,
    StartSearch,
    Sidebar(usize),
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<Command> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Command::Quit),
            (KeyCode::Char('q'), _) => Some(Command::Quit),
            (KeyCode::Up | KeyCode::Char('k'), _) => Some(Command::Navigate(Direction::Up)),
            (KeyCode::Down | KeyCode::Char('j'), _) => Some(Command::Navigate(Direction::Down)),
            (KeyCode::Left | KeyCode::Char('h'), _) => Some(Command::Navigate(Direction::Left)),
            (KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter, _) => {
                Some(Command::Navigate(Direction::Right))
            }
            (KeyCode::Esc | KeyCode::Backspace, _) => Some(Command::Back),
            (KeyCode::Char('/'), _) => Some(Command::StartSearch),
            (KeyCode::Char(c @ '1'..='9'), _) => c
                .to_digit(10)
                .map(|d| Command::Sidebar(d as usize - 1)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_vim_keys_map_to_directions() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Up)),
            Some(Command::Navigate(Direction::Up))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('j'))),
            Some(Command::Navigate(Direction::Down))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Enter)),
            Some(Command::Navigate(Direction::Right))
        );
    }

    #[test]
    fn digits_pick_sidebar_entries() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('1'))),
            Some(Command::Sidebar(0))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('9'))),
            Some(Command::Sidebar(8))
        );
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(InputHandler::handle_key(event), Some(Command::Quit));
    }
}
