use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use planet_walker_shared::protocol::Command;

/// What a key press asks the client to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(Command),
    Quit,
}

/// Map a terminal key event to an action. Releases and unbound keys map to `None`.
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(Action::Game(Command::MoveLeft)),
        KeyCode::Right => Some(Action::Game(Command::MoveRight)),
        KeyCode::Up => Some(Action::Game(Command::RotateUp)),
        KeyCode::Down => Some(Action::Game(Command::RotateDown)),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_map_to_commands() {
        assert_eq!(
            action_for_key(&press(KeyCode::Left)),
            Some(Action::Game(Command::MoveLeft))
        );
        assert_eq!(
            action_for_key(&press(KeyCode::Right)),
            Some(Action::Game(Command::MoveRight))
        );
        assert_eq!(
            action_for_key(&press(KeyCode::Up)),
            Some(Action::Game(Command::RotateUp))
        );
        assert_eq!(
            action_for_key(&press(KeyCode::Down)),
            Some(Action::Game(Command::RotateDown))
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(action_for_key(&press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for_key(&press(KeyCode::Esc)), Some(Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(&ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn plain_c_and_other_keys_are_ignored() {
        assert_eq!(action_for_key(&press(KeyCode::Char('c'))), None);
        assert_eq!(action_for_key(&press(KeyCode::Char('x'))), None);
        assert_eq!(action_for_key(&press(KeyCode::Enter)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Left);
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for_key(&key), None);
    }

    #[test]
    fn key_repeat_keeps_walking() {
        let mut key = press(KeyCode::Right);
        key.kind = KeyEventKind::Repeat;
        assert_eq!(action_for_key(&key), Some(Action::Game(Command::MoveRight)));
    }
}
