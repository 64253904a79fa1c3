//! Selection and query state of an open action menu
//!
//! The view model owns the query string, the flattened list of visible actions
//! and a selection cursor bounded by that list. The visible list is recomputed
//! eagerly from `menu.filter(query)` after every query change, and the cursor
//! is reset to the first row whenever the query changes.

use crate::action::Action;
use crate::menu::ActionMenu;
use std::borrow::Cow;

/// Result of [`ActionMenuViewModel::activate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The selected action ran; the menu should close
    Activated(String),
    /// The selected action is disabled; nothing ran
    Disabled(String),
    /// There is no selected action (empty list)
    NoSelection,
}

impl Activation {
    /// Whether the menu should be closed after this activation
    pub fn should_close(&self) -> bool {
        matches!(self, Activation::Activated(_))
    }
}

/// Query/selection state machine for one menu instance
#[derive(Debug, Clone)]
pub struct ActionMenuViewModel {
    menu: ActionMenu,
    query: String,
    visible_actions: Vec<Action>,
    selected_index: usize,
}

impl ActionMenuViewModel {
    pub fn new(menu: ActionMenu) -> Self {
        let visible_actions = menu.all_actions();
        Self {
            menu,
            query: String::new(),
            visible_actions,
            selected_index: 0,
        }
    }

    pub fn menu(&self) -> &ActionMenu {
        &self.menu
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The menu filtered by the current query, as rendered
    pub fn filtered_menu(&self) -> Cow<'_, ActionMenu> {
        self.menu.filter(&self.query)
    }

    pub fn visible_actions(&self) -> &[Action] {
        &self.visible_actions
    }

    /// Replace the query
    ///
    /// A different query resets the selection to the first row and recomputes
    /// the visible actions. Setting the same query again changes nothing.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        log::debug!("ActionMenu query: {:?}", query);
        self.query = query;
        self.selected_index = 0;
        self.visible_actions = self.menu.filter(&self.query).all_actions();
    }

    /// Append a character to the query
    pub fn push_char(&mut self, c: char) {
        let mut query = self.query.clone();
        query.push(c);
        self.set_query(query);
    }

    /// Remove the last character of the query
    pub fn pop_char(&mut self) {
        let mut query = self.query.clone();
        query.pop();
        self.set_query(query);
    }

    /// Clear the query
    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Replace the visible list with the rows the host actually rendered
    ///
    /// The selection is clamped into the new list but not reset.
    pub fn set_visible_actions(&mut self, actions: Vec<Action>) {
        self.visible_actions = actions;
        self.clamp_selection();
    }

    /// Index of the selected row, `None` when nothing is visible
    pub fn selected_index(&self) -> Option<usize> {
        (self.selected_index < self.visible_actions.len()).then_some(self.selected_index)
    }

    pub fn selected_action(&self) -> Option<&Action> {
        self.visible_actions.get(self.selected_index)
    }

    /// Whether `action` is the selected row
    pub fn is_selected(&self, action: &Action) -> bool {
        self.selected_action() == Some(action)
    }

    /// Move the selection by `delta` rows, clamped to the visible list
    ///
    /// With an empty list the cursor stays at the floor and
    /// [`selected_index`](Self::selected_index) keeps reporting `None`.
    pub fn move_selection(&mut self, delta: isize) {
        let Some(last) = self.visible_actions.len().checked_sub(1) else {
            self.selected_index = 0;
            return;
        };
        let next = self.selected_index.saturating_add_signed(delta);
        self.selected_index = next.min(last);
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    /// Select the row of a hovered action, or the first row if it is not visible
    pub fn hover(&mut self, action: &Action) {
        self.selected_index = self
            .visible_actions
            .iter()
            .position(|visible| visible == action)
            .unwrap_or(0);
    }

    /// Run the selected action if it is enabled
    pub fn activate(&self) -> Activation {
        match self.selected_action() {
            Some(action) if action.activate() => Activation::Activated(action.name().to_string()),
            Some(action) => Activation::Disabled(action.name().to_string()),
            None => Activation::NoSelection,
        }
    }

    fn clamp_selection(&mut self) {
        let last = self.visible_actions.len().saturating_sub(1);
        self.selected_index = self.selected_index.min(last);
    }
}
