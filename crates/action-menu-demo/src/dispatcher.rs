//! Dispatcher for action menu effects
//!
//! Action effects run synchronously inside key handling and must not touch the
//! application state directly. They enqueue an [`AppAction`] instead, which the
//! event loop processes after the current event.

use crate::actions::AppAction;
use std::sync::mpsc::Sender;

/// Sends actions back into the event loop
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<AppAction>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<AppAction>) -> Self {
        Self { action_tx }
    }

    /// Enqueue an action for the event loop
    pub fn dispatch(&self, action: AppAction) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
