//! End-to-end behavior of the menu, the hub and an open session

use action_menu::{
    Action, ActionMenu, ActionMenuSession, ActionMenuViewModel, ActionSection, EventDisposition,
    Key, KeyEventHub, KeyboardShortcut, MenuError, ShortcutDispatcher, QUERY_SECTION_NAME,
};
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, Mutex};

type Journal = Arc<Mutex<Vec<String>>>;

fn journaled(icon: &str, name: &str, journal: &Journal) -> Action {
    let journal = journal.clone();
    let entry = name.to_string();
    Action::new(icon, name, move || {
        if let Ok(mut journal) = journal.lock() {
            journal.push(entry.clone());
        }
    })
}

fn items_menu(journal: &Journal) -> ActionMenu {
    ActionMenu::new(vec![ActionSection::new(
        "Items",
        vec![
            journaled("+", "Add Item", journal).with_shortcut(KeyboardShortcut::command('a')),
            journaled("⌫", "Delete", journal)
                .with_shortcut(KeyboardShortcut::command(Key::Delete)),
        ],
    )])
}

fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().map(|j| j.clone()).unwrap_or_default()
}

fn visible_names(vm: &ActionMenuViewModel) -> Vec<&str> {
    vm.visible_actions().iter().map(Action::name).collect()
}

#[test]
fn test_items_menu_query_scenario() {
    let journal = Journal::default();
    let mut vm = ActionMenuViewModel::new(items_menu(&journal));

    assert_eq!(visible_names(&vm), vec!["Add Item", "Delete"]);

    vm.set_query("add");
    assert_eq!(visible_names(&vm), vec!["Add Item"]);

    let filtered = vm.filtered_menu();
    let sections: Vec<&str> = filtered.sections().iter().map(ActionSection::name).collect();
    assert_eq!(sections, vec!["Items", QUERY_SECTION_NAME]);
    assert!(filtered.sections()[1].is_empty());
}

#[test]
fn test_items_menu_global_shortcuts() {
    let journal = Journal::default();
    let hub = KeyEventHub::new();
    let _mounted = ShortcutDispatcher::new(&items_menu(&journal)).mount(&hub);

    let cmd_delete = KeyEvent::new(KeyCode::Backspace, KeyModifiers::SUPER);
    assert_eq!(hub.deliver(&cmd_delete), EventDisposition::Consumed);
    assert_eq!(entries(&journal), vec!["Delete"]);

    let cmd_z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::SUPER);
    assert_eq!(hub.deliver(&cmd_z), EventDisposition::Ignored);
    assert_eq!(entries(&journal), vec!["Delete"]);
}

#[test]
fn test_duplicate_action_names_are_flagged() {
    let journal = Journal::default();
    let menu = ActionMenu::new(vec![ActionSection::new(
        "Dupes",
        vec![
            journaled("1", "X", &journal).with_shortcut(KeyboardShortcut::command('1')),
            journaled("2", "X", &journal).with_shortcut(KeyboardShortcut::command('2')),
        ],
    )]);

    assert_eq!(
        menu.validate(),
        Err(MenuError::DuplicateActionName {
            name: "X".to_string(),
            count: 2
        })
    );

    // Equality by name makes both rows look selected at once
    let vm = ActionMenuViewModel::new(menu.clone());
    let second = &menu.all_actions()[1];
    assert!(vm.is_selected(second));
}

#[test]
fn test_session_reserves_keys_over_bound_shortcuts() {
    let journal = Journal::default();
    let menu = ActionMenu::new(vec![ActionSection::new(
        "Navigation",
        vec![
            journaled("⎋", "Escape Hatch", &journal).with_shortcut(KeyboardShortcut::plain(Key::Escape)),
            journaled("↑", "Scroll Up", &journal).with_shortcut(KeyboardShortcut::plain(Key::Up)),
            journaled("↓", "Scroll Down", &journal).with_shortcut(KeyboardShortcut::plain(Key::Down)),
        ],
    )]);
    let hub = KeyEventHub::new();
    let mut session = ActionMenuSession::open(menu, &hub, true);

    session.handle_key(&KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
    session.handle_key(&KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
    let response = session.handle_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

    assert!(response.close_requested);
    assert!(entries(&journal).is_empty());
}

#[test]
fn test_session_listener_released_on_every_exit_path() {
    let journal = Journal::default();
    let hub = KeyEventHub::new();

    // Escape
    let mut session = ActionMenuSession::open(items_menu(&journal), &hub, true);
    let response = session.handle_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert!(response.close_requested);
    session.close();
    assert_eq!(hub.listener_count(), 0);

    // Activation
    let mut session = ActionMenuSession::open(items_menu(&journal), &hub, true);
    let response = session.handle_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert!(response.close_requested);
    session.close();
    assert_eq!(hub.listener_count(), 0);
    assert_eq!(entries(&journal), vec!["Add Item"]);

    // Focus loss, then the owner just drops the session
    let mut session = ActionMenuSession::open(items_menu(&journal), &hub, true);
    assert!(session.focus_lost().close_requested);
    drop(session);
    assert_eq!(hub.listener_count(), 0);

    // Shortcuts no longer fire once closed
    let cmd_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::SUPER);
    assert_eq!(hub.deliver(&cmd_a), EventDisposition::Ignored);
}

#[test]
fn test_session_on_unavailable_hub_still_navigates() {
    let journal = Journal::default();
    let hub = KeyEventHub::unavailable();
    let mut session = ActionMenuSession::open(items_menu(&journal), &hub, true);
    assert!(!session.shortcuts_active());

    let cmd_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::SUPER);
    assert_eq!(session.handle_key(&cmd_a).disposition, EventDisposition::Ignored);

    session.handle_key(&KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
    let response = session.handle_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert!(response.close_requested);
    assert_eq!(entries(&journal), vec!["Delete"]);
}

#[test]
fn test_diacritic_insensitive_search() {
    let journal = Journal::default();
    let menu = ActionMenu::new(vec![ActionSection::new(
        "Cafe",
        vec![
            journaled("☕", "Café au lait", &journal),
            journaled("🍵", "Matcha", &journal),
        ],
    )]);
    let mut vm = ActionMenuViewModel::new(menu);

    vm.set_query("CAFE");
    assert_eq!(visible_names(&vm), vec!["Café au lait"]);
}
