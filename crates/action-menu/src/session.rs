//! One open action menu
//!
//! A session ties an [`ActionMenuViewModel`] to the global key stream. While
//! it is open, its menu's shortcuts are mounted on the hub, and key events
//! are routed by focus:
//!
//! - search field focused: unmodified Esc closes, Up/Down navigate and Enter
//!   activates, even when a global shortcut is bound to those keys. Text
//!   editing keys (characters, Backspace, Delete, Left, Right, Home, End, with
//!   or without Shift, and Ctrl+U) belong to the field. Only the remaining
//!   chords go to the hub.
//! - list focused: the hub sees the event first; unmodified navigation is the
//!   fallback.
//!
//! Tab toggles focus in both states. The query cursor always sits at the end
//! of the text, so the cursor movement keys and Delete are consumed without
//! changing the query.

use crate::action::Action;
use crate::dispatcher::{MountedShortcuts, ShortcutDispatcher};
use crate::hub::{EventDisposition, KeyEventHub};
use crate::menu::ActionMenu;
use crate::view_model::{ActionMenuViewModel, Activation};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Where keyboard input goes inside the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SearchField,
    List,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Focus::SearchField => Focus::List,
            Focus::List => Focus::SearchField,
        }
    }
}

/// Outcome of routing one key event through the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResponse {
    pub disposition: EventDisposition,
    pub close_requested: bool,
}

impl SessionResponse {
    fn consumed() -> Self {
        Self {
            disposition: EventDisposition::Consumed,
            close_requested: false,
        }
    }

    fn ignored() -> Self {
        Self {
            disposition: EventDisposition::Ignored,
            close_requested: false,
        }
    }

    fn close() -> Self {
        Self {
            disposition: EventDisposition::Consumed,
            close_requested: true,
        }
    }

    fn from_disposition(disposition: EventDisposition) -> Self {
        Self {
            disposition,
            close_requested: false,
        }
    }

    pub fn is_consumed(&self) -> bool {
        self.disposition.is_consumed()
    }
}

/// An open action menu with its mounted shortcuts
#[derive(Debug)]
pub struct ActionMenuSession {
    view_model: ActionMenuViewModel,
    hub: KeyEventHub,
    shortcuts: Option<MountedShortcuts>,
    focus: Focus,
}

impl ActionMenuSession {
    /// Open `menu` and mount its shortcuts on `hub`
    ///
    /// With `global_shortcuts` false the shortcuts are mounted disabled, so
    /// only menu navigation and row activation run actions.
    pub fn open(menu: ActionMenu, hub: &KeyEventHub, global_shortcuts: bool) -> Self {
        let shortcuts = ShortcutDispatcher::new(&menu)
            .enabled(global_shortcuts)
            .mount(hub);
        log::info!(
            "ActionMenu opened ({} actions, shortcuts active: {})",
            menu.all_actions().len(),
            shortcuts.is_active()
        );

        Self {
            view_model: ActionMenuViewModel::new(menu),
            hub: hub.clone(),
            shortcuts: Some(shortcuts),
            focus: Focus::SearchField,
        }
    }

    pub fn view_model(&self) -> &ActionMenuViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut ActionMenuViewModel {
        &mut self.view_model
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Whether the session's shortcuts are listening on the hub
    pub fn shortcuts_active(&self) -> bool {
        self.shortcuts
            .as_ref()
            .is_some_and(MountedShortcuts::is_active)
    }

    /// Route one key event
    pub fn handle_key(&mut self, event: &KeyEvent) -> SessionResponse {
        if event.kind == KeyEventKind::Release {
            return SessionResponse::ignored();
        }

        if event.code == KeyCode::Tab || event.code == KeyCode::BackTab {
            self.focus = self.focus.toggled();
            log::debug!("ActionMenu focus: {:?}", self.focus);
            return SessionResponse::consumed();
        }

        match self.focus {
            Focus::SearchField => {
                if let Some(response) = self.handle_reserved(event) {
                    return response;
                }
                if self.handle_text_input(event) {
                    return SessionResponse::consumed();
                }
                SessionResponse::from_disposition(self.hub.deliver(event))
            }
            Focus::List => {
                let disposition = self.hub.deliver(event);
                if disposition.is_consumed() {
                    return SessionResponse::from_disposition(disposition);
                }
                self.handle_reserved(event)
                    .unwrap_or_else(SessionResponse::ignored)
            }
        }
    }

    /// The pointer moved over a row
    pub fn hover(&mut self, action: &Action) {
        self.view_model.hover(action);
    }

    /// Activate the selected row
    pub fn activate(&mut self) -> SessionResponse {
        let activation = self.view_model.activate();
        log::debug!("ActionMenu activation: {:?}", activation);
        match activation {
            Activation::Activated(_) => SessionResponse::close(),
            Activation::Disabled(_) | Activation::NoSelection => SessionResponse::consumed(),
        }
    }

    /// The menu lost focus (e.g. the terminal window did); it should close
    pub fn focus_lost(&mut self) -> SessionResponse {
        log::debug!("ActionMenu lost focus");
        SessionResponse {
            disposition: EventDisposition::Ignored,
            close_requested: true,
        }
    }

    /// Close the session and release its listener
    pub fn close(mut self) {
        if let Some(shortcuts) = self.shortcuts.take() {
            shortcuts.unmount();
        }
        log::info!("ActionMenu closed");
    }

    /// Unmodified Esc, Up, Down and Enter
    fn handle_reserved(&mut self, event: &KeyEvent) -> Option<SessionResponse> {
        if !event.modifiers.is_empty() {
            return None;
        }
        match event.code {
            KeyCode::Esc => Some(SessionResponse::close()),
            KeyCode::Up => {
                self.view_model.select_previous();
                Some(SessionResponse::consumed())
            }
            KeyCode::Down => {
                self.view_model.select_next();
                Some(SessionResponse::consumed())
            }
            KeyCode::Enter => Some(self.activate()),
            _ => None,
        }
    }

    /// Query editing; returns whether the event was a text edit
    fn handle_text_input(&mut self, event: &KeyEvent) -> bool {
        let modifiers = event.modifiers;
        let plain = modifiers.difference(KeyModifiers::SHIFT).is_empty();

        match event.code {
            KeyCode::Char('u') if modifiers == KeyModifiers::CONTROL => {
                self.view_model.clear_query();
                true
            }
            KeyCode::Char(c) if plain => {
                self.view_model.push_char(c);
                true
            }
            KeyCode::Backspace if plain => {
                self.view_model.pop_char();
                true
            }
            KeyCode::Delete | KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End
                if plain =>
            {
                true
            }
            _ => false,
        }
    }
}
