//! Application-wide key event hub
//!
//! The hub is the host's global key stream. Components that want to see every
//! key event while they are mounted register a listener and keep the returned
//! [`ListenerHandle`]; dropping the handle deregisters the listener.
//!
//! Events are delivered to listeners newest first. The first listener that
//! reports [`EventDisposition::Consumed`] stops propagation.
//!
//! The hub is single-threaded (`Rc` based): all delivery happens on the UI
//! thread in arrival order.

use ratatui::crossterm::event::KeyEvent;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use thiserror::Error;

/// Whether a handler consumed a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// The event was handled and must not propagate further
    Consumed,
    /// The event was not handled and propagates normally
    Ignored,
}

impl EventDisposition {
    pub fn is_consumed(self) -> bool {
        self == EventDisposition::Consumed
    }
}

/// Errors registering a listener
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenerError {
    /// Global key capture is not available (e.g. not permitted by the host)
    #[error("global key capture is unavailable")]
    Unavailable,

    /// The hub the handle belonged to no longer exists
    #[error("key event hub has been dropped")]
    Closed,
}

type ListenerId = u64;
type Listener = Rc<RefCell<dyn FnMut(&KeyEvent) -> EventDisposition>>;

struct HubInner {
    next_id: ListenerId,
    capture_enabled: bool,
    listeners: Vec<(ListenerId, Listener)>,
}

impl HubInner {
    fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(listener_id, _)| *listener_id == id)
    }
}

/// The host's global key event stream
#[derive(Clone)]
pub struct KeyEventHub {
    inner: Rc<RefCell<HubInner>>,
}

impl KeyEventHub {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                next_id: 0,
                capture_enabled: true,
                listeners: Vec::new(),
            })),
        }
    }

    /// A hub on which global capture is not permitted
    ///
    /// Registration fails with [`ListenerError::Unavailable`].
    pub fn unavailable() -> Self {
        let hub = Self::new();
        hub.set_capture_enabled(false);
        hub
    }

    /// Allow or deny new listener registrations
    ///
    /// Listeners registered earlier stay registered.
    pub fn set_capture_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().capture_enabled = enabled;
    }

    pub fn is_capture_enabled(&self) -> bool {
        self.inner.borrow().capture_enabled
    }

    /// Register a listener for every key event delivered to the hub
    pub fn register(
        &self,
        listener: impl FnMut(&KeyEvent) -> EventDisposition + 'static,
    ) -> Result<ListenerHandle, ListenerError> {
        let mut inner = self.inner.borrow_mut();
        if !inner.capture_enabled {
            return Err(ListenerError::Unavailable);
        }

        let id = inner.next_id;
        inner.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        inner.listeners.push((id, listener));
        log::debug!("KeyEventHub: registered listener {}", id);

        Ok(ListenerHandle {
            id,
            hub: Rc::downgrade(&self.inner),
        })
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Deliver an event to the listeners, newest first
    ///
    /// Listeners removed while the event is in flight are skipped, and a
    /// listener that is already running (re-entrant delivery) is not called
    /// again.
    pub fn deliver(&self, event: &KeyEvent) -> EventDisposition {
        let snapshot: Vec<(ListenerId, Listener)> = self.inner.borrow().listeners.clone();

        for (id, listener) in snapshot.into_iter().rev() {
            if !self.inner.borrow().contains(id) {
                continue;
            }
            let Ok(mut listener) = listener.try_borrow_mut() else {
                log::warn!("KeyEventHub: listener {} is already handling an event", id);
                continue;
            };
            if (&mut *listener)(event).is_consumed() {
                log::debug!("KeyEventHub: listener {} consumed {:?}", id, event.code);
                return EventDisposition::Consumed;
            }
        }

        EventDisposition::Ignored
    }
}

impl Default for KeyEventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KeyEventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("KeyEventHub")
            .field("capture_enabled", &inner.capture_enabled)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Registration of a listener on a [`KeyEventHub`]
///
/// The listener is removed when the handle is dropped or closed.
#[must_use = "dropping the handle deregisters the listener"]
pub struct ListenerHandle {
    id: ListenerId,
    hub: Weak<RefCell<HubInner>>,
}

impl ListenerHandle {
    /// Whether the listener is still registered on a live hub
    pub fn is_registered(&self) -> bool {
        self.hub
            .upgrade()
            .is_some_and(|inner| inner.borrow().contains(self.id))
    }

    /// Deregister the listener
    pub fn close(self) -> Result<(), ListenerError> {
        if self.hub.strong_count() == 0 {
            return Err(ListenerError::Closed);
        }
        // Drop does the removal
        Ok(())
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let Some(inner) = self.hub.upgrade() else {
            return;
        };
        // The listener may own other handles; drop it after the borrow ends
        let removed = {
            let mut inner = inner.borrow_mut();
            let position = inner
                .listeners
                .iter()
                .position(|(listener_id, _)| *listener_id == self.id);
            position.map(|index| inner.listeners.remove(index))
        };
        if removed.is_some() {
            log::debug!("KeyEventHub: deregistered listener {}", self.id);
        }
        drop(removed);
    }
}

impl fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("id", &self.id)
            .field("registered", &self.is_registered())
            .finish()
    }
}
