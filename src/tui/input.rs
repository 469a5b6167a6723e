use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Action;
use crate::error::{Error, Result};
use crate::pass::CharClass;
use crate::terminal::RawModeGuard;

/// Map a key press to a form action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('1') | KeyCode::Char('u') => Action::Toggle(CharClass::Uppercase),
        KeyCode::Char('2') | KeyCode::Char('l') => Action::Toggle(CharClass::Lowercase),
        KeyCode::Char('3') | KeyCode::Char('n') => Action::Toggle(CharClass::Numbers),
        KeyCode::Char('4') | KeyCode::Char('s') => Action::Toggle(CharClass::Symbols),
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Action::Lengthen,
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => Action::Shorten,
        KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char(' ') => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('e') => Action::ToggleEntropy,
        KeyCode::Char('w') => Action::Save,
        KeyCode::Char('h') | KeyCode::Char('?') => Action::Help,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Wait for the next mapped key, or until `timeout` passes.
/// Returns `None` on timeout, resize, or an unmapped key.
pub fn next_action(timeout: Option<Duration>) -> Result<Option<Action>> {
    let _guard = RawModeGuard::new()?;

    if let Some(timeout) = timeout
        && !event::poll(timeout).map_err(Error::Terminal)?
    {
        return Ok(None);
    }

    match event::read().map_err(Error::Terminal)? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(action_for(key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_follow_form_order() {
        assert_eq!(
            action_for(key(KeyCode::Char('1'))),
            Some(Action::Toggle(CharClass::Uppercase))
        );
        assert_eq!(
            action_for(key(KeyCode::Char('2'))),
            Some(Action::Toggle(CharClass::Lowercase))
        );
        assert_eq!(
            action_for(key(KeyCode::Char('3'))),
            Some(Action::Toggle(CharClass::Numbers))
        );
        assert_eq!(
            action_for(key(KeyCode::Char('4'))),
            Some(Action::Toggle(CharClass::Symbols))
        );
    }

    #[test]
    fn arrows_change_length() {
        assert_eq!(action_for(key(KeyCode::Right)), Some(Action::Lengthen));
        assert_eq!(action_for(key(KeyCode::Left)), Some(Action::Shorten));
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_copies() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c), Some(Action::Quit));
        assert_eq!(action_for(key(KeyCode::Char('c'))), Some(Action::Copy));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(action_for(key(KeyCode::Char('z'))), None);
        assert_eq!(action_for(key(KeyCode::Tab)), None);
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_x), None);
    }
}
