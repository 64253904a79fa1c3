//! Decoding terminal key events into shortcut terms
//!
//! crossterm reports keys as a `KeyCode` plus `KeyModifiers`. Decoding maps
//! them onto the [`Key`]/[`Modifiers`] model:
//!
//! | crossterm            | model            |
//! |----------------------|------------------|
//! | `SUPER`              | command          |
//! | `CONTROL`            | control          |
//! | `ALT`                | option           |
//! | `SHIFT`              | shift            |
//! | `Backspace`          | delete (⌫)       |
//! | `Delete`             | delete-forward   |
//! | `Esc`                | escape           |
//! | `Char(' ')`          | space            |
//!
//! Modifier-only events, key releases and keys outside the model (Enter, Tab,
//! function keys, ...) decode without a key and cannot trigger a shortcut.

use crate::shortcut::{Key, KeyboardShortcut, Modifiers};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key event reduced to modifier set and optional key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedKey {
    pub modifiers: Modifiers,
    pub key: Option<Key>,
}

impl DecodedKey {
    /// The shortcut this event represents, if it carries a key
    pub fn shortcut(&self) -> Option<KeyboardShortcut> {
        self.key.map(|key| KeyboardShortcut::new(key, self.modifiers))
    }
}

/// Map crossterm modifier flags onto the modifier set
pub fn modifiers_from_crossterm(modifiers: KeyModifiers) -> Modifiers {
    let mut result = Modifiers::empty();
    if modifiers.contains(KeyModifiers::SUPER) {
        result |= Modifiers::COMMAND;
    }
    if modifiers.contains(KeyModifiers::CONTROL) {
        result |= Modifiers::CONTROL;
    }
    if modifiers.contains(KeyModifiers::ALT) {
        result |= Modifiers::OPTION;
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        result |= Modifiers::SHIFT;
    }
    result
}

/// Decode a key event
pub fn decode(event: &KeyEvent) -> DecodedKey {
    let mut modifiers = modifiers_from_crossterm(event.modifiers);

    if event.kind == KeyEventKind::Release {
        return DecodedKey {
            modifiers,
            key: None,
        };
    }

    let key = match event.code {
        KeyCode::Backspace => Some(Key::Delete),
        KeyCode::Delete => Some(Key::DeleteForward),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(c) => {
            // Some terminals report uppercase letters without SHIFT
            if c.is_uppercase() {
                modifiers |= Modifiers::SHIFT;
            }
            Some(Key::char(c))
        }
        _ => None,
    };

    DecodedKey { modifiers, key }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEventState, ModifierKeyCode};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_modifier_mapping() {
        let all = KeyModifiers::SUPER | KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        assert_eq!(modifiers_from_crossterm(all), Modifiers::all());
        assert_eq!(
            modifiers_from_crossterm(KeyModifiers::NONE),
            Modifiers::empty()
        );
        // Modifiers outside the model are dropped
        assert_eq!(
            modifiers_from_crossterm(KeyModifiers::HYPER | KeyModifiers::ALT),
            Modifiers::OPTION
        );
    }

    #[test]
    fn test_decode_special_keys() {
        let cases = [
            (KeyCode::Backspace, Key::Delete),
            (KeyCode::Delete, Key::DeleteForward),
            (KeyCode::Up, Key::Up),
            (KeyCode::Down, Key::Down),
            (KeyCode::Left, Key::Left),
            (KeyCode::Right, Key::Right),
            (KeyCode::Esc, Key::Escape),
            (KeyCode::Char(' '), Key::Space),
        ];
        for (code, key) in cases {
            assert_eq!(decode(&press(code, KeyModifiers::NONE)).key, Some(key));
        }
    }

    #[test]
    fn test_decode_shortcut() {
        let event = press(KeyCode::Backspace, KeyModifiers::SUPER);
        assert_eq!(
            decode(&event).shortcut(),
            Some(KeyboardShortcut::command(Key::Delete))
        );

        let event = press(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(
            decode(&event).shortcut(),
            Some(KeyboardShortcut::control('z'))
        );
    }

    #[test]
    fn test_decode_uppercase_implies_shift() {
        let with_shift = decode(&press(KeyCode::Char('D'), KeyModifiers::SHIFT));
        let without_shift = decode(&press(KeyCode::Char('D'), KeyModifiers::NONE));
        let expected = KeyboardShortcut::new('d', Modifiers::SHIFT);
        assert_eq!(with_shift.shortcut(), Some(expected));
        assert_eq!(without_shift.shortcut(), Some(expected));
    }

    #[test]
    fn test_decode_not_dispatchable_events() {
        let modifier_only = KeyEvent::new(
            KeyCode::Modifier(ModifierKeyCode::LeftShift),
            KeyModifiers::SHIFT,
        );
        let decoded = decode(&modifier_only);
        assert_eq!(decoded.modifiers, Modifiers::SHIFT);
        assert_eq!(decoded.shortcut(), None);

        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::SUPER,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(decode(&release).shortcut(), None);

        assert_eq!(decode(&press(KeyCode::Enter, KeyModifiers::NONE)).key, None);
        assert_eq!(decode(&press(KeyCode::F(5), KeyModifiers::NONE)).key, None);
    }
}
