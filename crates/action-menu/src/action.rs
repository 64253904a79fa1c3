//! Actions and action sections
//!
//! An [`Action`] is a named, optionally shortcut-bound unit of user-invocable
//! behavior. Actions are grouped into named [`ActionSection`]s.
//!
//! Actions are identified by their name: two actions are equal iff their names
//! match. Names must therefore be unique within one menu, see
//! [`ActionMenu::validate`](crate::ActionMenu::validate).

use crate::matching::standard_contains;
use crate::shortcut::KeyboardShortcut;
use ratatui::style::Color;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// The side effect run when an action is activated
pub type Effect = Arc<dyn Fn() + Send + Sync>;

/// A single action that can be shown in the menu and bound to a shortcut
#[derive(Clone)]
pub struct Action {
    icon: String,
    name: String,
    color: Option<Color>,
    is_enabled: bool,
    shortcut: Option<KeyboardShortcut>,
    effect: Effect,
}

impl Action {
    /// Create an enabled action without color or shortcut
    ///
    /// `icon` is a short glyph or symbol name shown in front of the name.
    pub fn new(
        icon: impl Into<String>,
        name: impl Into<String>,
        effect: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            icon: icon.into(),
            name: name.into(),
            color: None,
            is_enabled: true,
            shortcut: None,
            effect: Arc::new(effect),
        }
    }

    /// Set the display color
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Bind a keyboard shortcut
    #[must_use]
    pub fn with_shortcut(mut self, shortcut: KeyboardShortcut) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    /// Replace (or clear) the keyboard shortcut
    #[must_use]
    pub fn with_optional_shortcut(mut self, shortcut: Option<KeyboardShortcut>) -> Self {
        self.shortcut = shortcut;
        self
    }

    /// Set whether the action can be activated
    #[must_use]
    pub fn enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    /// Mark the action as disabled
    #[must_use]
    pub fn disabled(self) -> Self {
        self.enabled(false)
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// The action name, which is also its identity
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    pub fn shortcut(&self) -> Option<KeyboardShortcut> {
        self.shortcut
    }

    /// Run the effect, regardless of the enabled flag
    ///
    /// Callers that honor the enabled flag should use [`Action::activate`].
    pub fn perform(&self) {
        (self.effect)();
    }

    /// Run the effect if the action is enabled
    ///
    /// Returns whether the effect ran.
    pub fn activate(&self) -> bool {
        if !self.is_enabled {
            log::debug!("Action '{}' is disabled, not activating", self.name);
            return false;
        }
        log::debug!("Activating action '{}'", self.name);
        self.perform();
        true
    }

    /// Check whether the action name contains `query` (case/diacritic-insensitive)
    pub fn matches(&self, query: &str) -> bool {
        standard_contains(&self.name, query)
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Action {}

impl Hash for Action {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("icon", &self.icon)
            .field("name", &self.name)
            .field("color", &self.color)
            .field("is_enabled", &self.is_enabled)
            .field("shortcut", &self.shortcut.map(|s| s.pattern()))
            .field("effect", &"<fn>")
            .finish()
    }
}

/// A named, ordered group of actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSection {
    name: String,
    actions: Vec<Action>,
}

impl ActionSection {
    pub fn new(name: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            name: name.into(),
            actions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Copy of this section with only the actions whose name contains `query`
    ///
    /// Returns `None` when no action matches, so callers can drop the section.
    pub fn filter(&self, query: &str) -> Option<ActionSection> {
        let actions: Vec<Action> = self
            .actions
            .iter()
            .filter(|action| action.matches(query))
            .cloned()
            .collect();

        if actions.is_empty() {
            None
        } else {
            Some(ActionSection {
                name: self.name.clone(),
                actions,
            })
        }
    }
}
