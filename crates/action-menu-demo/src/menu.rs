//! The application's action menu
//!
//! Built from the current state (which actions are enabled), the config
//! (shortcut overrides, query action) and the dispatcher the effects send
//! their [`AppAction`]s through.

use crate::actions::AppAction;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;
use crate::theme::Theme;
use action_menu::{Action, ActionMenu, ActionSection, Key, KeyboardShortcut, Modifiers};
use action_menu_config::AppConfig;

/// Action that sends `app_action` when activated
fn dispatching(
    icon: &str,
    name: &str,
    dispatcher: &Dispatcher,
    app_action: AppAction,
) -> Action {
    let dispatcher = dispatcher.clone();
    Action::new(icon, name, move || dispatcher.dispatch(app_action.clone()))
}

/// Apply the configured shortcut for the action's name over `builtin`
fn bind(action: Action, builtin: Option<KeyboardShortcut>, config: &AppConfig) -> Action {
    let shortcut = config.shortcut_override(action.name()).apply(builtin);
    action.with_optional_shortcut(shortcut)
}

pub fn build_menu(
    state: &AppState,
    config: &AppConfig,
    dispatcher: &Dispatcher,
    theme: &Theme,
) -> ActionMenu {
    let has_items = !state.items.is_empty();
    let has_selection = state.has_selection();

    let items = ActionSection::new(
        "Items",
        vec![
            bind(
                dispatching("+", "Add Item", dispatcher, AppAction::ItemAdd),
                Some(KeyboardShortcut::control('a')),
                config,
            ),
            bind(
                dispatching("⧉", "Duplicate", dispatcher, AppAction::ItemDuplicateSelected),
                Some(KeyboardShortcut::control('d')),
                config,
            )
            .enabled(has_selection),
            bind(
                dispatching("⌦", "Delete", dispatcher, AppAction::ItemDeleteSelected),
                Some(KeyboardShortcut::plain(Key::DeleteForward)),
                config,
            )
            .with_color(theme.action_danger)
            .enabled(has_selection),
            bind(
                dispatching("✕", "Delete All", dispatcher, AppAction::ItemDeleteAll),
                Some(KeyboardShortcut::new(Key::DeleteForward, Modifiers::OPTION)),
                config,
            )
            .with_color(theme.action_danger)
            .enabled(has_items),
        ],
    );

    let selection = ActionSection::new(
        "Selection",
        vec![
            bind(
                dispatching("☑", "Select All", dispatcher, AppAction::ItemSelectAll),
                None,
                config,
            )
            .enabled(has_items),
            bind(
                dispatching("☐", "Clear Selection", dispatcher, AppAction::ItemClearSelection),
                None,
                config,
            )
            .enabled(has_selection),
        ],
    );

    let app = ActionSection::new(
        "Application",
        vec![bind(
            dispatching("⏻", "Quit", dispatcher, AppAction::Quit),
            None,
            config,
        )],
    );

    let sections = vec![items, selection, app];
    let query_action = config.query_action.clone();
    if !query_action.enabled {
        return ActionMenu::new(sections);
    }

    let dispatcher = dispatcher.clone();
    ActionMenu::with_query_actions(sections, move |query| {
        vec![dispatching(
            "🔎",
            &query_action.title(query),
            &dispatcher,
            AppAction::SearchWeb(query.to_string()),
        )]
    })
}
