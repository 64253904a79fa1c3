use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,
    pub bg_overlay: Color,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    pub status_info: Color,
    pub action_danger: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub marked_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c800,
            bg_overlay: Color::Black,

            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            status_info: tailwind::BLUE.c400,
            action_danger: tailwind::RED.c400,

            selected_bg: tailwind::BLUE.c700,
            selected_fg: Color::White,
            marked_fg: tailwind::AMBER.c400,
        }
    }

    /// Style for the dimmed backdrop behind floating panels
    pub fn overlay(&self) -> Style {
        Style::default()
            .bg(self.bg_overlay)
            .add_modifier(Modifier::DIM)
    }

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headers in lists
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.accent_secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Enter" in "Enter run")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for shortcut glyphs next to actions
    pub fn shortcut(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the selected row
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for items marked for a bulk action
    pub fn marked(&self) -> Style {
        Style::default().fg(self.marked_fg)
    }

    /// Style for disabled entries
    pub fn disabled(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::DIM)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for the status bar
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.status_info).bg(self.bg_primary)
    }
}
