// File: ./src/tui/handlers.rs
use crate::tui::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('r') => Some(Action::Reload),

        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPage),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousPage),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::GoToPage(d as usize)),

        KeyCode::Char('t') => Some(Action::CycleCategory),
        KeyCode::Char('0') => Some(Action::ClearCategory),

        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Enter => Some(Action::OpenDetail),
        KeyCode::Esc => Some(Action::CloseDetail),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_jump_to_pages() {
        assert_eq!(action_for_key(key(KeyCode::Char('3'))), Some(Action::GoToPage(3)));
        assert_eq!(action_for_key(key(KeyCode::Char('0'))), Some(Action::ClearCategory));
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(ev), Some(Action::Quit));
        assert_eq!(action_for_key(key(KeyCode::Char('c'))), None);
    }
}
