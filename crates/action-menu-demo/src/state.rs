use std::collections::BTreeSet;

/// A row of the item list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub title: String,
}

/// Application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub running: bool,
    pub items: Vec<Item>,
    /// Id handed to the next new item
    pub next_id: u64,
    /// Cursor position in the item list
    pub cursor: usize,
    /// Ids of the items marked with Space; targets of Duplicate and Delete
    pub selected: BTreeSet<u64>,
    /// One-line feedback shown in the status bar
    pub status: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = Self {
            running: true,
            items: Vec::new(),
            next_id: 1,
            cursor: 0,
            selected: BTreeSet::new(),
            status: None,
        };
        for _ in 0..3 {
            state.push_item();
        }
        state
    }
}

impl AppState {
    /// Append a new item and return its id
    pub fn push_item(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item {
            id,
            title: format!("Item {}", id),
        });
        id
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn is_selected(&self, item: &Item) -> bool {
        self.selected.contains(&item.id)
    }

    pub fn cursor_item(&self) -> Option<&Item> {
        self.items.get(self.cursor)
    }
}
