//! View model for the action menu overlay
//!
//! Flattens the filtered menu into header and action rows, marks the selected
//! row and cuts the scroll window of at most `max_visible_rows` rows.

use crate::theme::Theme;
use action_menu::{Action, ActionMenuSession, Focus};
use action_menu_config::MenuConfig;
use ratatui::style::Style;

/// View model for the action menu overlay
#[derive(Debug, Clone)]
pub struct MenuOverlayViewModel {
    pub title: String,
    pub input_text: String,
    /// Is input empty (for placeholder styling)
    pub input_is_empty: bool,
    pub placeholder: String,
    pub search_focused: bool,
    /// Rows inside the scroll window
    pub rows: Vec<MenuRow>,
    /// Rows hidden above / below the window
    pub hidden_above: usize,
    pub hidden_below: usize,
    /// Shown instead of the rows when nothing matches
    pub empty_message: Option<String>,
}

/// A single row in the overlay list
#[derive(Debug, Clone)]
pub enum MenuRow {
    Header(String),
    Action(ActionRow),
}

#[derive(Debug, Clone)]
pub struct ActionRow {
    pub action: Action,
    /// Icon and name
    pub label: String,
    /// Shortcut glyphs, e.g. "⌃A"
    pub shortcut: String,
    pub is_selected: bool,
    pub style: Style,
}

impl MenuOverlayViewModel {
    pub fn new(session: &ActionMenuSession, config: &MenuConfig, theme: &Theme) -> Self {
        let vm = session.view_model();
        let filtered = vm.filtered_menu();
        let selected_index = vm.selected_index();

        let mut rows = Vec::new();
        let mut action_index = 0;
        let mut selected_row = None;
        for section in filtered.sections().iter().filter(|s| !s.is_empty()) {
            rows.push(MenuRow::Header(section.name().to_string()));
            for action in section.actions() {
                let is_selected = selected_index == Some(action_index);
                if is_selected {
                    selected_row = Some(rows.len());
                }
                rows.push(MenuRow::Action(action_row(action, is_selected, theme)));
                action_index += 1;
            }
        }

        let total_rows = rows.len();
        let max_rows = config.max_visible_rows.max(1);
        let start = window_start(selected_row, total_rows, max_rows);
        let end = (start + max_rows).min(total_rows);
        let rows: Vec<MenuRow> = rows.drain(start..end).collect();

        let empty_message = vm
            .visible_actions()
            .is_empty()
            .then(|| format!("No results for \"{}\"", vm.query()));

        Self {
            title: format!(" Actions ({}) ", vm.menu().all_actions().len()),
            input_text: vm.query().to_string(),
            input_is_empty: vm.query().is_empty(),
            placeholder: config.placeholder.clone(),
            search_focused: session.focus() == Focus::SearchField,
            rows,
            hidden_above: start,
            hidden_below: total_rows - end,
            empty_message,
        }
    }
}

fn action_row(action: &Action, is_selected: bool, theme: &Theme) -> ActionRow {
    let base = match action.color() {
        Some(color) => theme.text().fg(color),
        None => theme.text(),
    };
    let style = if !action.is_enabled() {
        theme.disabled()
    } else if is_selected {
        theme.selected()
    } else {
        base
    };

    ActionRow {
        action: action.clone(),
        label: format!("{} {}", action.icon(), action.name()),
        shortcut: action
            .shortcut()
            .map(|shortcut| shortcut.to_string())
            .unwrap_or_default(),
        is_selected,
        style,
    }
}

/// First row of a window of `max_rows` rows that keeps `selected_row` visible
fn window_start(selected_row: Option<usize>, total_rows: usize, max_rows: usize) -> usize {
    let last_start = total_rows.saturating_sub(max_rows);
    match selected_row {
        Some(row) if row >= max_rows => (row + 1 - max_rows).min(last_start),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use action_menu::{ActionMenu, ActionSection, KeyEventHub, KeyboardShortcut};
    use pretty_assertions::assert_eq;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn menu() -> ActionMenu {
        let action = |name: &str| Action::new("•", name, || {});
        ActionMenu::with_query_actions(
            vec![
                ActionSection::new(
                    "Items",
                    vec![
                        action("Add Item").with_shortcut(KeyboardShortcut::control('a')),
                        action("Delete").disabled(),
                    ],
                ),
                ActionSection::new("Application", vec![action("Quit")]),
            ],
            |query| vec![Action::new("🔎", format!("Search {}", query), || {})],
        )
    }

    fn labels(vm: &MenuOverlayViewModel) -> Vec<String> {
        vm.rows
            .iter()
            .map(|row| match row {
                MenuRow::Header(name) => format!("# {}", name),
                MenuRow::Action(row) if row.is_selected => format!("> {}", row.label),
                MenuRow::Action(row) => row.label.clone(),
            })
            .collect()
    }

    #[test]
    fn test_rows_with_headers_and_selection() {
        let hub = KeyEventHub::new();
        let session = ActionMenuSession::open(menu(), &hub, true);
        let vm = MenuOverlayViewModel::new(&session, &MenuConfig::default(), &Theme::default());

        assert_eq!(
            labels(&vm),
            vec!["# Items", "> • Add Item", "• Delete", "# Application", "• Quit"]
        );
        assert_eq!(vm.title, " Actions (3) ");
        assert!(vm.input_is_empty);
        assert!(vm.search_focused);
        assert!(vm.empty_message.is_none());

        match &vm.rows[1] {
            MenuRow::Action(row) => assert_eq!(row.shortcut, "⌃A"),
            MenuRow::Header(_) => panic!("Expected an action row"),
        }
    }

    #[test]
    fn test_query_section_and_empty_message() {
        let hub = KeyEventHub::new();
        let mut session = ActionMenuSession::open(menu(), &hub, true);
        session.view_model_mut().set_query("qu");

        let vm = MenuOverlayViewModel::new(&session, &MenuConfig::default(), &Theme::default());
        assert_eq!(
            labels(&vm),
            vec!["# Application", "> • Quit", "# Query", "🔎 Search qu"]
        );

        let mut empty = ActionMenuSession::open(ActionMenu::new(Vec::new()), &hub, true);
        empty.view_model_mut().set_query("zzz");
        let vm = MenuOverlayViewModel::new(&empty, &MenuConfig::default(), &Theme::default());
        assert!(vm.rows.is_empty());
        assert_eq!(vm.empty_message.as_deref(), Some("No results for \"zzz\""));
    }

    #[test]
    fn test_scroll_window_follows_selection() {
        let hub = KeyEventHub::new();
        let mut session = ActionMenuSession::open(menu(), &hub, true);
        let config = MenuConfig {
            max_visible_rows: 2,
            ..MenuConfig::default()
        };

        let vm = MenuOverlayViewModel::new(&session, &config, &Theme::default());
        assert_eq!(labels(&vm), vec!["# Items", "> • Add Item"]);
        assert_eq!((vm.hidden_above, vm.hidden_below), (0, 3));

        session.handle_key(&KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        session.handle_key(&KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        let vm = MenuOverlayViewModel::new(&session, &config, &Theme::default());
        assert_eq!(labels(&vm), vec!["# Application", "> • Quit"]);
        assert_eq!((vm.hidden_above, vm.hidden_below), (3, 0));
    }

    #[test]
    fn test_window_start() {
        assert_eq!(window_start(None, 10, 4), 0);
        assert_eq!(window_start(Some(2), 10, 4), 0);
        assert_eq!(window_start(Some(4), 10, 4), 1);
        assert_eq!(window_start(Some(9), 10, 4), 6);
        assert_eq!(window_start(Some(3), 2, 4), 0);
    }
}
