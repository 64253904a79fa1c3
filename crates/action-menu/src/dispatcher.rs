//! Global shortcut dispatcher
//!
//! Routes raw key events to the action bound to the pressed combination.

use crate::action::Action;
use crate::hub::{EventDisposition, KeyEventHub, ListenerHandle};
use crate::key_event::decode;
use crate::menu::ActionMenu;
use crate::shortcut::KeyboardShortcut;
use ratatui::crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Invokes the action bound to a key combination
#[derive(Debug, Clone)]
pub struct ShortcutDispatcher {
    shortcuts: HashMap<KeyboardShortcut, Action>,
    enabled: bool,
}

impl ShortcutDispatcher {
    /// Snapshot the shortcut index of `menu`
    pub fn new(menu: &ActionMenu) -> Self {
        Self {
            shortcuts: menu.actions_by_shortcut(),
            enabled: true,
        }
    }

    /// Enable or disable dispatching altogether
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The action bound to `shortcut`, if any
    pub fn lookup(&self, shortcut: &KeyboardShortcut) -> Option<&Action> {
        self.shortcuts.get(shortcut)
    }

    /// Handle one key event
    ///
    /// The event is consumed only if it maps to a bound, enabled action, whose
    /// effect is then invoked.
    pub fn dispatch(&self, event: &KeyEvent) -> EventDisposition {
        if !self.enabled {
            return EventDisposition::Ignored;
        }

        let Some(shortcut) = decode(event).shortcut() else {
            return EventDisposition::Ignored;
        };

        match self.shortcuts.get(&shortcut) {
            Some(action) if action.activate() => {
                log::debug!(
                    "Shortcut {} dispatched to '{}'",
                    shortcut.pattern(),
                    action.name()
                );
                EventDisposition::Consumed
            }
            Some(action) => {
                log::debug!(
                    "Shortcut {} bound to disabled action '{}'",
                    shortcut.pattern(),
                    action.name()
                );
                EventDisposition::Ignored
            }
            None => EventDisposition::Ignored,
        }
    }

    /// Register on `hub` for as long as the returned value lives
    ///
    /// If the hub refuses the registration the dispatcher runs degraded: the
    /// failure is logged and no shortcut fires.
    pub fn mount(self, hub: &KeyEventHub) -> MountedShortcuts {
        match hub.register(move |event| self.dispatch(event)) {
            Ok(handle) => MountedShortcuts {
                handle: Some(handle),
            },
            Err(e) => {
                log::warn!("Global shortcuts disabled: {}", e);
                MountedShortcuts { handle: None }
            }
        }
    }
}

/// A dispatcher registered on a [`KeyEventHub`]
///
/// Dropping it deregisters the listener.
#[derive(Debug)]
#[must_use = "dropping the mount deregisters the shortcuts"]
pub struct MountedShortcuts {
    handle: Option<ListenerHandle>,
}

impl MountedShortcuts {
    /// Whether shortcuts are currently listening on the hub
    pub fn is_active(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(ListenerHandle::is_registered)
    }

    /// Deregister the listener
    pub fn unmount(mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.close() {
                log::debug!("Unmounting shortcuts: {}", e);
            }
        }
    }
}
