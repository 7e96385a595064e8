//! Translation of raw terminal key events into game actions.
//!
//! Every typed character ends up as a full-value input change on the
//! session, the same call an edited text field would make.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Ignore,
    Type(char),
    Backspace,
    /// Escape: throw the session away and load a fresh text
    Reset,
    /// Enter: same as reset, bound to the results "button"
    Restart,
    CycleSource,
    CycleWordCount,
    Quit,
}

pub fn translate(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char(_) if ctrl || alt => KeyAction::Ignore,
        KeyCode::Char(c) => KeyAction::Type(c),
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Esc => KeyAction::Reset,
        KeyCode::Enter => KeyAction::Restart,
        KeyCode::F(2) => KeyAction::CycleSource,
        KeyCode::F(3) => KeyAction::CycleWordCount,
        // Modifier(_), Tab, BackTab and navigation keys
        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, ModifierKeyCode};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_printable_chars_are_typed() {
        assert_eq!(translate(press(KeyCode::Char('a'))), KeyAction::Type('a'));
        assert_eq!(translate(press(KeyCode::Char(' '))), KeyAction::Type(' '));
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            KeyAction::Type('A')
        );
    }

    #[test]
    fn test_modifier_keys_are_ignored() {
        for m in [
            ModifierKeyCode::LeftShift,
            ModifierKeyCode::LeftControl,
            ModifierKeyCode::LeftAlt,
            ModifierKeyCode::LeftMeta,
            ModifierKeyCode::RightSuper,
        ] {
            assert_eq!(translate(press(KeyCode::Modifier(m))), KeyAction::Ignore);
        }
        assert_eq!(translate(press(KeyCode::Tab)), KeyAction::Ignore);
        assert_eq!(translate(press(KeyCode::BackTab)), KeyAction::Ignore);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(translate(press(KeyCode::Backspace)), KeyAction::Backspace);
        assert_eq!(translate(press(KeyCode::Esc)), KeyAction::Reset);
        assert_eq!(translate(press(KeyCode::Enter)), KeyAction::Restart);
        assert_eq!(translate(press(KeyCode::F(2))), KeyAction::CycleSource);
        assert_eq!(translate(press(KeyCode::F(3))), KeyAction::CycleWordCount);
        assert_eq!(translate(press(KeyCode::Left)), KeyAction::Ignore);
    }

    #[test]
    fn test_ctrl_c_quits_other_chords_ignored() {
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            KeyAction::Ignore
        );
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            KeyAction::Ignore
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(release), KeyAction::Ignore);
    }
}
