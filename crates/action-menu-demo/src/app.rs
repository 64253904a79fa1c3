//! Application shell
//!
//! Owns the state, the key event hub and the action menu lifecycle. Terminal
//! events enter as [`AppAction`]s through the dispatcher and are processed in
//! order together with the actions that menu effects dispatch.
//!
//! Key routing:
//! 1. Menu open: the session routes the key (search field, list, shortcuts).
//! 2. Priority chords: Ctrl+K opens the menu, Ctrl+C quits.
//! 3. Global shortcuts on the hub.
//! 4. List keys: arrows / j / k move, Space selects, q quits.

use crate::actions::AppAction;
use crate::dispatcher::Dispatcher;
use crate::menu::build_menu;
use crate::reducer::reduce;
use crate::state::AppState;
use crate::theme::Theme;
use crate::views::{self, RowHitbox};
use action_menu::{
    ActionMenu, ActionMenuSession, KeyEventHub, MountedShortcuts, ShortcutDispatcher,
};
use action_menu_config::AppConfig;
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use std::sync::mpsc::{self, Receiver};

pub struct App {
    state: AppState,
    config: AppConfig,
    theme: Theme,
    dispatcher: Dispatcher,
    action_rx: Receiver<AppAction>,
    hub: KeyEventHub,
    /// Shortcuts of the item list, mounted for the whole run
    list_shortcuts: Option<MountedShortcuts>,
    /// The open action menu
    menu: Option<ActionMenuSession>,
    /// Action rows rendered in the last frame
    hitboxes: Vec<RowHitbox>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        let mut app = Self {
            state: AppState::default(),
            config,
            theme: Theme::default(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
            hub: KeyEventHub::new(),
            list_shortcuts: None,
            menu: None,
            hitboxes: Vec::new(),
        };
        app.refresh_menu();
        app
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn dispatch(&self, action: AppAction) {
        self.dispatcher.dispatch(action);
    }

    /// Process every queued action, including the ones dispatched meanwhile
    pub fn process_pending(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle(action);
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        self.hitboxes = views::render(
            &self.state,
            self.menu.as_ref(),
            &self.config.menu,
            &self.theme,
            f.area(),
            f,
        );
    }

    fn handle(&mut self, action: AppAction) {
        match action {
            AppAction::KeyPressed(key) => self.handle_key(&key),
            AppAction::Mouse(mouse) => self.handle_mouse(&mouse),
            AppAction::FocusLost => {
                if let Some(session) = self.menu.as_mut() {
                    if session.focus_lost().close_requested {
                        self.close_menu();
                    }
                }
            }
            AppAction::MenuOpen => self.open_menu(),
            action => {
                self.state = reduce(self.state.clone(), &action);
                if self.state.running {
                    self.refresh_menu();
                }
            }
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if let Some(session) = self.menu.as_mut() {
            let response = session.handle_key(key);
            if response.close_requested {
                self.close_menu();
            } else if !response.is_consumed() && is_quit_chord(key) {
                self.dispatch(AppAction::Quit);
            }
            return;
        }

        if is_menu_chord(key) {
            self.dispatch(AppAction::MenuOpen);
            return;
        }
        if is_quit_chord(key) {
            self.dispatch(AppAction::Quit);
            return;
        }

        if self.hub.deliver(key).is_consumed() {
            return;
        }

        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') if plain => AppAction::ItemCursorPrevious,
            KeyCode::Down | KeyCode::Char('j') if plain => AppAction::ItemCursorNext,
            KeyCode::Char(' ') if plain => AppAction::ItemToggleSelection,
            KeyCode::Char('q') if plain => AppAction::Quit,
            _ => {
                log::debug!("Unhandled key: {:?}", key);
                return;
            }
        };
        self.dispatch(action);
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let Some(action) = self
            .hitboxes
            .iter()
            .find(|hitbox| hitbox.contains(mouse.column, mouse.row))
            .map(|hitbox| hitbox.action.clone())
        else {
            return;
        };
        let Some(session) = self.menu.as_mut() else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved => session.hover(&action),
            MouseEventKind::Down(MouseButton::Left) => {
                session.hover(&action);
                if session.activate().close_requested {
                    self.close_menu();
                }
            }
            _ => {}
        }
    }

    fn build_menu(&self) -> ActionMenu {
        build_menu(&self.state, &self.config, &self.dispatcher, &self.theme)
    }

    fn open_menu(&mut self) {
        if self.menu.is_some() {
            return;
        }
        let session = ActionMenuSession::open(
            self.build_menu(),
            &self.hub,
            self.config.menu.global_shortcuts,
        );
        self.menu = Some(session);
    }

    fn close_menu(&mut self) {
        if let Some(session) = self.menu.take() {
            session.close();
        }
        self.hitboxes.clear();
    }

    /// Rebuild the menu after a state change
    ///
    /// Enabled flags depend on the state, so the list's shortcuts are
    /// remounted and an open menu is reopened with its query, selection and
    /// focus.
    fn refresh_menu(&mut self) {
        let global_shortcuts = self.config.menu.global_shortcuts;

        let reopen = self.menu.take().map(|session| {
            let vm = session.view_model();
            let restore = (
                vm.query().to_string(),
                vm.selected_index(),
                session.focus(),
            );
            session.close();
            restore
        });

        // Drop the previous mount before registering the new one
        self.list_shortcuts = None;
        let mounted = ShortcutDispatcher::new(&self.build_menu())
            .enabled(global_shortcuts)
            .mount(&self.hub);
        log::debug!("List shortcuts active: {}", mounted.is_active());
        self.list_shortcuts = Some(mounted);

        if let Some((query, selected, focus)) = reopen {
            let mut session =
                ActionMenuSession::open(self.build_menu(), &self.hub, global_shortcuts);
            let vm = session.view_model_mut();
            vm.set_query(query);
            if let Some(index) = selected {
                vm.move_selection(isize::try_from(index).unwrap_or(isize::MAX));
            }
            session.set_focus(focus);
            self.menu = Some(session);
        }
    }
}

fn is_menu_chord(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('k') && key.modifiers == KeyModifiers::CONTROL
}

fn is_quit_chord(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL
}
