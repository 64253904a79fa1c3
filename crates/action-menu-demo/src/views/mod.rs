use crate::state::AppState;
use crate::theme::Theme;
use action_menu::{Action, ActionMenuSession};
use action_menu_config::MenuConfig;
use ratatui::{layout::Rect, Frame};

pub mod items_view;
pub mod menu_overlay_view;

/// Screen area of a rendered action row, for mouse hover and click
#[derive(Debug, Clone)]
pub struct RowHitbox {
    pub area: Rect,
    pub action: Action,
}

impl RowHitbox {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(ratatui::layout::Position::new(column, row))
    }
}

/// Render the whole screen
///
/// Returns the hitboxes of the action rows currently on screen.
pub fn render(
    state: &AppState,
    menu: Option<&ActionMenuSession>,
    config: &MenuConfig,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) -> Vec<RowHitbox> {
    items_view::render(state, theme, area, f);

    match menu {
        Some(session) => menu_overlay_view::render(session, config, theme, area, f),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hitbox_contains() {
        let hitbox = RowHitbox {
            area: Rect::new(10, 5, 20, 1),
            action: Action::new("•", "Run", || {}),
        };
        assert!(hitbox.contains(10, 5));
        assert!(hitbox.contains(29, 5));
        assert!(!hitbox.contains(30, 5));
        assert!(!hitbox.contains(12, 6));
    }
}
