//! Action menu
//!
//! An [`ActionMenu`] aggregates [`ActionSection`]s, indexes actions by their
//! keyboard shortcut and filters itself by a text query.
//!
//! Filtering appends a synthetic "Query" section whose actions come from the
//! menu's query-actions provider (e.g. "Search the web for <query>").

use crate::action::{Action, ActionSection};
use crate::shortcut::KeyboardShortcut;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Name of the section appended by [`ActionMenu::filter`]
pub const QUERY_SECTION_NAME: &str = "Query";

/// Produces dynamic actions for the current query
pub type QueryActions = Arc<dyn Fn(&str) -> Vec<Action> + Send + Sync>;

/// Invariant violations detected by [`ActionMenu::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// Two or more actions share a name, so selection and equality are ambiguous
    #[error("action name '{name}' is used by {count} actions")]
    DuplicateActionName { name: String, count: usize },
}

/// The searchable collection of sections plus the query-actions provider
#[derive(Clone)]
pub struct ActionMenu {
    sections: Vec<ActionSection>,
    query_actions: QueryActions,
}

impl ActionMenu {
    /// Create a menu whose query section is always empty
    pub fn new(sections: Vec<ActionSection>) -> Self {
        Self::with_query_actions(sections, |_| Vec::new())
    }

    /// Create a menu with a provider for query-driven actions
    pub fn with_query_actions(
        sections: Vec<ActionSection>,
        query_actions: impl Fn(&str) -> Vec<Action> + Send + Sync + 'static,
    ) -> Self {
        let menu = Self {
            sections,
            query_actions: Arc::new(query_actions),
        };
        if let Err(e) = menu.validate() {
            log::warn!("ActionMenu: {}", e);
        }
        menu
    }

    pub fn sections(&self) -> &[ActionSection] {
        &self.sections
    }

    /// True if no section holds any action
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(ActionSection::is_empty)
    }

    /// All actions flattened in section order, then action order
    pub fn all_actions(&self) -> Vec<Action> {
        self.sections
            .iter()
            .flat_map(|section| section.actions().iter().cloned())
            .collect()
    }

    /// Map from shortcut to action
    ///
    /// When several actions declare the same shortcut, the one declared last
    /// (in section/action order) wins.
    pub fn actions_by_shortcut(&self) -> HashMap<KeyboardShortcut, Action> {
        let mut index = HashMap::new();
        for action in self.sections.iter().flat_map(ActionSection::actions) {
            if let Some(shortcut) = action.shortcut() {
                if let Some(shadowed) = index.insert(shortcut, action.clone()) {
                    log::debug!(
                        "Shortcut {} of '{}' is shadowed by '{}'",
                        shortcut.pattern(),
                        shadowed.name(),
                        action.name()
                    );
                }
            }
        }
        index
    }

    /// Actions produced by the query-actions provider for `query`
    pub fn query_actions(&self, query: &str) -> Vec<Action> {
        (self.query_actions)(query)
    }

    /// Filter the menu by a text query
    ///
    /// An empty query returns this menu unchanged (borrowed). Otherwise the
    /// result holds, in original order, every section that still has actions
    /// whose name contains the query, followed by a "Query" section with the
    /// provider's actions for the query. The Query section is always present
    /// for a non-empty query, even when it is empty.
    ///
    /// The filtered menu does not keep the query-actions provider.
    pub fn filter(&self, query: &str) -> Cow<'_, ActionMenu> {
        if query.is_empty() {
            return Cow::Borrowed(self);
        }

        let mut sections: Vec<ActionSection> = self
            .sections
            .iter()
            .filter_map(|section| section.filter(query))
            .collect();
        sections.push(ActionSection::new(
            QUERY_SECTION_NAME,
            self.query_actions(query),
        ));

        Cow::Owned(ActionMenu::new(sections))
    }

    /// Check that every action name is unique
    ///
    /// Duplicate names are reported in order of first appearance; the first
    /// duplicate found is returned as the error.
    pub fn validate(&self) -> Result<(), MenuError> {
        match self.duplicate_names().into_iter().next() {
            Some((name, count)) => Err(MenuError::DuplicateActionName { name, count }),
            None => Ok(()),
        }
    }

    /// Names used by more than one action, with their number of uses
    pub fn duplicate_names(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for action in self.sections.iter().flat_map(ActionSection::actions) {
            let count = counts.entry(action.name()).or_insert(0);
            if *count == 0 {
                order.push(action.name());
            }
            *count += 1;
        }

        order
            .into_iter()
            .filter_map(|name| {
                let count = counts[name];
                (count > 1).then(|| (name.to_string(), count))
            })
            .collect()
    }
}

impl Default for ActionMenu {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl fmt::Debug for ActionMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionMenu")
            .field("sections", &self.sections)
            .field("query_actions", &"<fn>")
            .finish()
    }
}
