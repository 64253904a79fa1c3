//! Keyboard shortcut model
//!
//! A [`KeyboardShortcut`] is a [`Key`] plus a set of [`Modifiers`]. Shortcuts
//! render to a sequence of glyphs (`⌘`, `⇧`, `⌫`, ...) for display next to menu
//! rows, and parse from textual patterns so they can be configured from files.
//!
//! # Patterns
//!
//! - Single key: `"a"`, `","`, `"/"` (case-insensitive, use `shift+` explicitly)
//! - With modifiers: `"cmd+a"`, `"ctrl+shift+z"`, `"option+up"`
//! - Special keys: `"delete"`, `"forward-delete"`, `"up"`, `"down"`, `"left"`,
//!   `"right"`, `"space"`, `"esc"`
//! - The plus key itself: `"cmd++"`

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

bitflags! {
    /// Modifier keys held together with a shortcut key
    ///
    /// Set semantics: order of insertion does not matter and inserting the
    /// same modifier twice is a no-op.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Command (⌘) - the terminal's SUPER modifier
        const COMMAND = 1 << 0;
        /// Control (⌃)
        const CONTROL = 1 << 1;
        /// Option (⌥) - the terminal's ALT modifier
        const OPTION = 1 << 2;
        /// Shift (⇧)
        const SHIFT = 1 << 3;
    }
}

/// Display order of modifier glyphs
const MODIFIER_GLYPHS: [(Modifiers, &str); 4] = [
    (Modifiers::COMMAND, "⌘"),
    (Modifiers::CONTROL, "⌃"),
    (Modifiers::OPTION, "⌥"),
    (Modifiers::SHIFT, "⇧"),
];

/// Pattern names of modifiers, same order as the glyphs
const MODIFIER_NAMES: [(Modifiers, &str); 4] = [
    (Modifiers::COMMAND, "cmd"),
    (Modifiers::CONTROL, "ctrl"),
    (Modifiers::OPTION, "option"),
    (Modifiers::SHIFT, "shift"),
];

impl Modifiers {
    /// Glyphs of the modifiers in this set: command, control, option, shift
    pub fn glyphs(self) -> Vec<&'static str> {
        MODIFIER_GLYPHS
            .iter()
            .filter(|(modifier, _)| self.contains(*modifier))
            .map(|(_, glyph)| *glyph)
            .collect()
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

/// A key that a shortcut can bind to
///
/// Construct character keys with [`Key::char`], which folds case so that
/// `Key::char('A') == Key::char('a')`. Shift is carried by [`Modifiers`] only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character (stored lowercased)
    Char(char),
    /// Backward delete (⌫) - the terminal's Backspace
    Delete,
    /// Forward delete (⌦) - the terminal's Delete
    DeleteForward,
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
}

impl Key {
    /// Character key with case folded; `' '` becomes [`Key::Space`]
    pub fn char(c: char) -> Self {
        if c == ' ' {
            return Key::Space;
        }
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(folded), None) => Key::Char(folded),
            // Multi-char lowercase mappings (e.g. 'İ') keep the original
            _ => Key::Char(c),
        }
    }

    /// Single glyph used when rendering this key
    pub fn glyph(self) -> String {
        match self {
            Key::Delete => "⌫".to_string(),
            Key::Up => "↑".to_string(),
            Key::Down => "↓".to_string(),
            Key::Left => "←".to_string(),
            Key::Right => "→".to_string(),
            Key::DeleteForward => "⌦".to_string(),
            Key::Space => "␣".to_string(),
            Key::Escape => "⎋".to_string(),
            Key::Char(c) => c.to_uppercase().collect(),
        }
    }

    /// Textual name used in shortcut patterns
    fn pattern_name(self) -> String {
        match self {
            Key::Delete => "delete".to_string(),
            Key::DeleteForward => "forward-delete".to_string(),
            Key::Up => "up".to_string(),
            Key::Down => "down".to_string(),
            Key::Left => "left".to_string(),
            Key::Right => "right".to_string(),
            Key::Space => "space".to_string(),
            Key::Escape => "esc".to_string(),
            Key::Char(c) => c.to_string(),
        }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::char(c)
    }
}

/// A key combination an action can be bound to
///
/// Equality and hashing are structural over key and modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyboardShortcut {
    key: Key,
    modifiers: Modifiers,
}

impl KeyboardShortcut {
    /// Character keys are case folded, so `Key::Char('S')` binds the same
    /// shortcut as `Key::char('s')`
    pub fn new(key: impl Into<Key>, modifiers: Modifiers) -> Self {
        let key = match key.into() {
            Key::Char(c) => Key::char(c),
            other => other,
        };
        Self { key, modifiers }
    }

    /// Shortcut without modifiers
    pub fn plain(key: impl Into<Key>) -> Self {
        Self::new(key, Modifiers::empty())
    }

    /// Shortcut with only the command modifier
    pub fn command(key: impl Into<Key>) -> Self {
        Self::new(key, Modifiers::COMMAND)
    }

    /// Shortcut with only the control modifier
    pub fn control(key: impl Into<Key>) -> Self {
        Self::new(key, Modifiers::CONTROL)
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Glyph sequence for display: modifier glyphs followed by the key glyph
    ///
    /// ```
    /// use action_menu::{Key, KeyboardShortcut, Modifiers};
    ///
    /// let shortcut = KeyboardShortcut::new(Key::Delete, Modifiers::COMMAND | Modifiers::SHIFT);
    /// assert_eq!(shortcut.display(), vec!["⌘", "⇧", "⌫"]);
    /// ```
    pub fn display(&self) -> Vec<String> {
        let mut glyphs: Vec<String> = self
            .modifiers
            .glyphs()
            .into_iter()
            .map(str::to_string)
            .collect();
        glyphs.push(self.key.glyph());
        glyphs
    }

    /// Textual pattern that parses back into this shortcut (e.g. "cmd+shift+a")
    pub fn pattern(&self) -> String {
        let mut parts: Vec<String> = MODIFIER_NAMES
            .iter()
            .filter(|(modifier, _)| self.modifiers.contains(*modifier))
            .map(|(_, name)| name.to_string())
            .collect();
        parts.push(self.key.pattern_name());
        parts.join("+")
    }
}

impl fmt::Display for KeyboardShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display().concat())
    }
}

/// Errors from parsing a textual shortcut pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseShortcutError {
    #[error("shortcut pattern is empty")]
    Empty,

    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),

    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

impl FromStr for KeyboardShortcut {
    type Err = ParseShortcutError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(ParseShortcutError::Empty);
        }

        // A trailing '+' names the plus key itself ("cmd++", "+")
        let (modifier_part, key_part) = if let Some(head) = pattern.strip_suffix('+') {
            (head.strip_suffix('+').unwrap_or(head), "+")
        } else {
            pattern.rsplit_once('+').unwrap_or(("", pattern))
        };

        let mut modifiers = Modifiers::empty();
        if !modifier_part.is_empty() {
            for part in modifier_part.split('+') {
                modifiers |= parse_modifier(part.trim())?;
            }
        }

        let key = parse_key(key_part.trim())?;
        Ok(Self { key, modifiers })
    }
}

fn parse_modifier(s: &str) -> Result<Modifiers, ParseShortcutError> {
    match s.to_lowercase().as_str() {
        "cmd" | "command" | "super" | "meta" => Ok(Modifiers::COMMAND),
        "ctrl" | "control" => Ok(Modifiers::CONTROL),
        "alt" | "opt" | "option" => Ok(Modifiers::OPTION),
        "shift" => Ok(Modifiers::SHIFT),
        _ => Err(ParseShortcutError::UnknownModifier(s.to_string())),
    }
}

fn parse_key(s: &str) -> Result<Key, ParseShortcutError> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(Key::char(c));
    }

    match s.to_lowercase().as_str() {
        "delete" | "backspace" | "bs" => Ok(Key::Delete),
        "forward-delete" | "forwarddelete" | "del" => Ok(Key::DeleteForward),
        "up" => Ok(Key::Up),
        "down" => Ok(Key::Down),
        "left" => Ok(Key::Left),
        "right" => Ok(Key::Right),
        "space" => Ok(Key::Space),
        "esc" | "escape" => Ok(Key::Escape),
        "" => Err(ParseShortcutError::Empty),
        _ => Err(ParseShortcutError::UnknownKey(s.to_string())),
    }
}

impl TryFrom<String> for KeyboardShortcut {
    type Error = ParseShortcutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeyboardShortcut> for String {
    fn from(shortcut: KeyboardShortcut) -> Self {
        shortcut.pattern()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_orders_modifiers_before_key() {
        let all = Modifiers::SHIFT | Modifiers::OPTION | Modifiers::CONTROL | Modifiers::COMMAND;
        let shortcut = KeyboardShortcut::new('k', all);
        assert_eq!(shortcut.display(), vec!["⌘", "⌃", "⌥", "⇧", "K"]);
    }

    #[test]
    fn test_display_special_key_glyphs() {
        let cases = [
            (Key::Delete, "⌫"),
            (Key::Up, "↑"),
            (Key::Down, "↓"),
            (Key::Left, "←"),
            (Key::Right, "→"),
            (Key::DeleteForward, "⌦"),
            (Key::Space, "␣"),
            (Key::Escape, "⎋"),
        ];
        for (key, glyph) in cases {
            assert_eq!(KeyboardShortcut::plain(key).display(), vec![glyph]);
        }
    }

    #[test]
    fn test_display_uppercases_characters() {
        assert_eq!(KeyboardShortcut::command('a').display(), vec!["⌘", "A"]);
        assert_eq!(KeyboardShortcut::command(',').display(), vec!["⌘", ","]);
        assert_eq!(KeyboardShortcut::command('ß').display(), vec!["⌘", "SS"]);
    }

    #[test]
    fn test_display_trait_concatenates_glyphs() {
        let shortcut = KeyboardShortcut::new(Key::Delete, Modifiers::COMMAND);
        assert_eq!(shortcut.to_string(), "⌘⌫");
    }

    #[test]
    fn test_modifier_union_is_idempotent_and_unordered() {
        let a = Modifiers::COMMAND | Modifiers::SHIFT;
        let b = Modifiers::SHIFT | Modifiers::COMMAND | Modifiers::SHIFT;
        assert_eq!(a, b);
        assert_eq!(KeyboardShortcut::new('a', a), KeyboardShortcut::new('a', b));
    }

    #[test]
    fn test_char_keys_fold_case() {
        assert_eq!(Key::char('A'), Key::char('a'));
        assert_eq!(Key::char(' '), Key::Space);
        assert_ne!(KeyboardShortcut::command('a'), KeyboardShortcut::control('a'));
    }

    #[test]
    fn test_new_folds_raw_char_variant() {
        let raw = KeyboardShortcut::command(Key::Char('S'));
        assert_eq!(raw, KeyboardShortcut::command('s'));
        assert_eq!(raw.key(), Key::Char('s'));
        assert_eq!(raw.to_string(), "⌘S");
        assert_eq!(KeyboardShortcut::plain(Key::Char(' ')).key(), Key::Space);
    }

    #[test]
    fn test_parse_modifier_combinations() {
        let shortcut: KeyboardShortcut = "ctrl+shift+z".parse().unwrap();
        assert_eq!(
            shortcut,
            KeyboardShortcut::new('z', Modifiers::CONTROL | Modifiers::SHIFT)
        );

        let shortcut: KeyboardShortcut = "Command+Delete".parse().unwrap();
        assert_eq!(shortcut, KeyboardShortcut::command(Key::Delete));

        let shortcut: KeyboardShortcut = "alt+up".parse().unwrap();
        assert_eq!(shortcut, KeyboardShortcut::new(Key::Up, Modifiers::OPTION));
    }

    #[test]
    fn test_parse_plus_key() {
        let shortcut: KeyboardShortcut = "cmd++".parse().unwrap();
        assert_eq!(shortcut, KeyboardShortcut::command('+'));

        let shortcut: KeyboardShortcut = "+".parse().unwrap();
        assert_eq!(shortcut, KeyboardShortcut::plain('+'));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<KeyboardShortcut>(), Err(ParseShortcutError::Empty));
        assert_eq!(
            "hyper+a".parse::<KeyboardShortcut>(),
            Err(ParseShortcutError::UnknownModifier("hyper".to_string()))
        );
        assert_eq!(
            "cmd+pagedown".parse::<KeyboardShortcut>(),
            Err(ParseShortcutError::UnknownKey("pagedown".to_string()))
        );
    }

    #[test]
    fn test_pattern_parses_back() {
        let shortcuts = [
            KeyboardShortcut::new(Key::DeleteForward, Modifiers::all()),
            KeyboardShortcut::command('+'),
            KeyboardShortcut::plain(Key::Escape),
            KeyboardShortcut::new('/', Modifiers::OPTION),
        ];
        for shortcut in shortcuts {
            assert_eq!(shortcut.pattern().parse::<KeyboardShortcut>(), Ok(shortcut));
        }
    }

    #[test]
    fn test_serde_uses_pattern_strings() {
        #[derive(Debug, Deserialize, Serialize)]
        struct Binding {
            shortcut: KeyboardShortcut,
        }

        let binding: Binding = toml::from_str(r#"shortcut = "cmd+shift+d""#).unwrap();
        assert_eq!(
            binding.shortcut,
            KeyboardShortcut::new('d', Modifiers::COMMAND | Modifiers::SHIFT)
        );

        let invalid = toml::from_str::<Binding>(r#"shortcut = "cmd+nope""#);
        assert!(invalid.is_err());

        let rendered = toml::to_string(&binding).unwrap();
        assert!(rendered.contains(r#"shortcut = "cmd+shift+d""#));
    }
}
