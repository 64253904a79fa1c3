use ratatui::crossterm::event::{KeyEvent, MouseEvent};

/// Actions represent all possible state changes in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// ## Terminal input
    KeyPressed(KeyEvent),
    Mouse(MouseEvent),
    FocusLost,
    Quit,

    /// ## Item list
    ItemAdd,
    ItemDuplicateSelected,
    ItemDeleteSelected,
    ItemDeleteAll,
    ItemCursorNext,
    ItemCursorPrevious,
    ItemToggleSelection,
    ItemSelectAll,
    ItemClearSelection,

    /// ## Action menu
    MenuOpen,

    /// Run the query action for the given query
    SearchWeb(String),
}
