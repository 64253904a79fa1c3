use crate::actions::AppAction;
use crate::state::{AppState, Item};

/// Reducer - pure function that produces new state from current state + action
pub fn reduce(mut state: AppState, action: &AppAction) -> AppState {
    match action {
        AppAction::Quit => {
            state.running = false;
        }

        AppAction::ItemAdd => {
            let id = state.push_item();
            state.cursor = state.items.len() - 1;
            state.status = Some(format!("Added Item {}", id));
        }

        AppAction::ItemDuplicateSelected => {
            let mut copies = 0;
            let mut duplicated = Vec::with_capacity(state.items.len() + state.selected.len());
            for item in std::mem::take(&mut state.items) {
                let copy = state.selected.contains(&item.id).then(|| {
                    let copy = Item {
                        id: state.next_id,
                        title: format!("{} (copy)", item.title),
                    };
                    state.next_id += 1;
                    copy
                });
                duplicated.push(item);
                if let Some(copy) = copy {
                    duplicated.push(copy);
                    copies += 1;
                }
            }
            state.items = duplicated;
            state.status = Some(format!("Duplicated {} item(s)", copies));
        }

        AppAction::ItemDeleteSelected => {
            let before = state.items.len();
            let selected = std::mem::take(&mut state.selected);
            state.items.retain(|item| !selected.contains(&item.id));
            state.status = Some(format!("Deleted {} item(s)", before - state.items.len()));
            state.cursor = clamp_cursor(state.cursor, state.items.len());
        }

        AppAction::ItemDeleteAll => {
            let count = state.items.len();
            state.items.clear();
            state.selected.clear();
            state.cursor = 0;
            state.status = Some(format!("Deleted all {} item(s)", count));
        }

        AppAction::ItemCursorNext => {
            state.cursor = clamp_cursor(state.cursor + 1, state.items.len());
        }

        AppAction::ItemCursorPrevious => {
            state.cursor = state.cursor.saturating_sub(1);
        }

        AppAction::ItemToggleSelection => {
            if let Some(id) = state.cursor_item().map(|item| item.id) {
                if !state.selected.remove(&id) {
                    state.selected.insert(id);
                }
            }
        }

        AppAction::ItemSelectAll => {
            state.selected = state.items.iter().map(|item| item.id).collect();
        }

        AppAction::ItemClearSelection => {
            state.selected.clear();
        }

        AppAction::SearchWeb(query) => {
            log::info!("Search requested for {:?}", query);
            state.status = Some(format!("Searching the web for \"{}\"", query));
        }

        // Input and menu lifecycle are handled by the app before reducing
        AppAction::KeyPressed(_)
        | AppAction::Mouse(_)
        | AppAction::FocusLost
        | AppAction::MenuOpen => {}
    }

    state
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}
