use crate::state::AppState;
use crate::theme::Theme;
use ratatui::style::Style;

/// View model for the item list
#[derive(Debug, Clone)]
pub struct ItemsViewModel {
    pub title: String,
    pub rows: Vec<ItemRow>,
    /// Shown instead of the list when there are no items
    pub empty_message: Option<String>,
    pub status: String,
    pub hints: Vec<(String, String)>,
}

/// A single row in the item list
#[derive(Debug, Clone)]
pub struct ItemRow {
    /// "[x] " or "[ ] "
    pub marker: String,
    pub title: String,
    pub style: Style,
}

impl ItemsViewModel {
    pub fn from_state(state: &AppState, theme: &Theme) -> Self {
        let rows = state
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let is_marked = state.is_selected(item);
                let marker = if is_marked { "[x] " } else { "[ ] " }.to_string();

                let style = if idx == state.cursor {
                    theme.selected()
                } else if is_marked {
                    theme.marked()
                } else {
                    theme.text()
                };

                ItemRow {
                    marker,
                    title: item.title.clone(),
                    style,
                }
            })
            .collect();

        let empty_message = state
            .items
            .is_empty()
            .then(|| "No items. Press ^A or open the action menu to add one.".to_string());

        let status = state.status.clone().unwrap_or_else(|| {
            format!(
                "{} item(s), {} selected",
                state.items.len(),
                state.selected.len()
            )
        });

        let hints = [
            ("^K", "actions"),
            ("Space", "select"),
            ("↑/↓", "move"),
            ("q", "quit"),
        ]
        .into_iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect();

        Self {
            title: format!(" Items ({}) ", state.items.len()),
            rows,
            empty_message,
            status,
            hints,
        }
    }
}
