//! # action-menu
//!
//! A searchable action menu (command palette) with global keyboard shortcut
//! dispatch for ratatui applications.
//!
//! ## Building blocks
//!
//! - [`KeyboardShortcut`]: key plus modifier set, rendered as glyphs (`⌘⌫`)
//!   and parsed from patterns such as `"cmd+delete"`.
//! - [`Action`] / [`ActionSection`] / [`ActionMenu`]: the registry. Menus
//!   filter themselves by a text query and append a synthetic "Query" section
//!   produced by a query-actions provider.
//! - [`ActionMenuViewModel`]: query and selection state of one open menu.
//! - [`KeyEventHub`] / [`ShortcutDispatcher`]: the application-wide key stream
//!   and the listener that fires bound actions.
//! - [`ActionMenuSession`]: routes key events between the search field, the
//!   list and the global shortcuts.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use action_menu::{Action, ActionMenu, ActionMenuSession, ActionSection, Key, KeyEventHub, KeyboardShortcut};
//!
//! let menu = ActionMenu::new(vec![ActionSection::new(
//!     "Items",
//!     vec![
//!         Action::new("+", "Add Item", move || add_item())
//!             .with_shortcut(KeyboardShortcut::command('a')),
//!         Action::new("⌫", "Delete", move || delete_selected())
//!             .with_shortcut(KeyboardShortcut::command(Key::Delete)),
//!     ],
//! )]);
//!
//! let hub = KeyEventHub::new();
//! let mut session = ActionMenuSession::open(menu, &hub, true);
//!
//! // In the event loop
//! let response = session.handle_key(&key_event);
//! if response.close_requested {
//!     session.close();
//! }
//! ```

pub mod action;
pub mod dispatcher;
pub mod hub;
pub mod key_event;
pub mod matching;
pub mod menu;
pub mod session;
pub mod shortcut;
pub mod view_model;

// Re-export commonly used types
pub use action::{Action, ActionSection, Effect};
pub use dispatcher::{MountedShortcuts, ShortcutDispatcher};
pub use hub::{EventDisposition, KeyEventHub, ListenerError, ListenerHandle};
pub use key_event::{decode, DecodedKey};
pub use menu::{ActionMenu, MenuError, QueryActions, QUERY_SECTION_NAME};
pub use session::{ActionMenuSession, Focus, SessionResponse};
pub use shortcut::{Key, KeyboardShortcut, Modifiers, ParseShortcutError};
pub use view_model::{ActionMenuViewModel, Activation};
