use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Activate,
    NextPanel,
    PrevPanel,
    AddEntry,
    Save,
    Generate,
    NextQuestion,
    PrevQuestion,
    ToggleHelp,
    Quit,
    Cancel,
    SubmitText,
    Backspace,
    InputChar(char),
    Noop,
}

pub fn action_for_key(key: KeyEvent, text_mode: bool) -> Action {
    if text_mode {
        return match key.code {
            KeyCode::Enter => Action::SubmitText,
            KeyCode::Esc => Action::Cancel,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Left => Action::Move(Direction::Left),
            KeyCode::Right => Action::Move(Direction::Right),
            KeyCode::Char(c) => Action::InputChar(c),
            _ => Action::Noop,
        };
    }

    match key.code {
        KeyCode::Up => Action::Move(Direction::Up),
        KeyCode::Down => Action::Move(Direction::Down),
        KeyCode::Left => Action::Move(Direction::Left),
        KeyCode::Right => Action::Move(Direction::Right),
        KeyCode::Enter => Action::Activate,
        KeyCode::Tab => Action::NextPanel,
        KeyCode::BackTab => Action::PrevPanel,
        KeyCode::Esc | KeyCode::Backspace => Action::Cancel,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('h') => Action::Move(Direction::Left),
        KeyCode::Char('j') => Action::Move(Direction::Down),
        KeyCode::Char('k') => Action::Move(Direction::Up),
        KeyCode::Char('l') => Action::Move(Direction::Right),
        KeyCode::Char('a') => Action::AddEntry,
        KeyCode::Char('w') => Action::Save,
        KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('n') => Action::NextQuestion,
        KeyCode::Char('p') => Action::PrevQuestion,
        _ => Action::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn text_mode_captures_characters() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('q')), true),
            Action::InputChar('q')
        );
        assert_eq!(action_for_key(key(KeyCode::Enter), true), Action::SubmitText);
    }

    #[test]
    fn normal_mode_maps_commands() {
        assert_eq!(action_for_key(key(KeyCode::Char('q')), false), Action::Quit);
        assert_eq!(action_for_key(key(KeyCode::Char('w')), false), Action::Save);
        assert_eq!(
            action_for_key(key(KeyCode::Char('g')), false),
            Action::Generate
        );
    }
}
