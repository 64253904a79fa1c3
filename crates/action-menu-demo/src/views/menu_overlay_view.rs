use crate::theme::Theme;
use crate::view_models::{MenuOverlayViewModel, MenuRow};
use crate::views::RowHitbox;
use action_menu::ActionMenuSession;
use action_menu_config::MenuConfig;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

/// Render the action menu as a centered floating panel
///
/// Returns the hitboxes of the rendered action rows.
pub fn render(
    session: &ActionMenuSession,
    config: &MenuConfig,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) -> Vec<RowHitbox> {
    let vm = MenuOverlayViewModel::new(session, config, theme);

    // Dim everything behind the panel
    f.render_widget(Block::default().style(theme.overlay()), area);

    // Input box (3) + rows + scroll markers (2) + borders (2)
    let list_height = vm.rows.len().max(1) as u16 + 2;
    let popup_width = (area.width * 60 / 100).clamp(30.min(area.width), 80);
    let popup_height = (3 + list_height + 2).min(area.height);
    let popup_area = Rect {
        x: area.x + area.width.saturating_sub(popup_width) / 2,
        y: area.y + area.height.saturating_sub(popup_height) / 3,
        width: popup_width,
        height: popup_height,
    };

    // Clear the popup area (removes the dim effect for the popup itself)
    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" Enter", theme.key_hint()),
        Span::styled(" run  ", theme.muted()),
        Span::styled("↑/↓", theme.key_hint()),
        Span::styled(" navigate  ", theme.muted()),
        Span::styled("Tab", theme.key_hint()),
        Span::styled(" focus  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" close ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(vm.title.clone())
        .title_style(theme.panel_title())
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Min(1),    // Rows with scroll markers
        ])
        .split(inner);

    render_input(&vm, theme, chunks[0], f);
    render_rows(&vm, theme, chunks[1], f)
}

fn render_input(vm: &MenuOverlayViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let input_text = if vm.input_is_empty {
        Line::from(Span::styled(vm.placeholder.as_str(), theme.muted().italic()))
    } else {
        Line::from(Span::styled(vm.input_text.as_str(), theme.text()))
    };

    let border_style = if vm.search_focused {
        theme.panel_border()
    } else {
        theme.muted()
    };

    let input = Paragraph::new(input_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(theme.panel_background()),
    );
    f.render_widget(input, area);

    if vm.search_focused {
        let cursor_x = area.x + 1 + vm.input_text.chars().count() as u16;
        f.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_rows(
    vm: &MenuOverlayViewModel,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) -> Vec<RowHitbox> {
    if let Some(ref message) = vm.empty_message {
        let no_results = Paragraph::new(message.as_str())
            .style(theme.muted())
            .alignment(Alignment::Center);
        f.render_widget(no_results, area);
        return Vec::new();
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    if vm.hidden_above > 0 {
        let more = Paragraph::new(format!("↑ {} more", vm.hidden_above))
            .style(theme.muted())
            .alignment(Alignment::Right);
        f.render_widget(more, chunks[0]);
    }
    if vm.hidden_below > 0 {
        let more = Paragraph::new(format!("↓ {} more", vm.hidden_below))
            .style(theme.muted())
            .alignment(Alignment::Right);
        f.render_widget(more, chunks[2]);
    }

    let list_area = chunks[1];
    let mut hitboxes = Vec::new();
    let rows: Vec<Row> = vm
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| match row {
            MenuRow::Header(name) => Row::new(vec![
                Cell::from(name.clone()).style(theme.section_header()),
                Cell::from(""),
            ]),
            MenuRow::Action(action_row) => {
                if (idx as u16) < list_area.height {
                    hitboxes.push(RowHitbox {
                        area: Rect {
                            y: list_area.y + idx as u16,
                            height: 1,
                            ..list_area
                        },
                        action: action_row.action.clone(),
                    });
                }

                let shortcut_style = if action_row.is_selected {
                    action_row.style
                } else {
                    theme.shortcut()
                };
                Row::new(vec![
                    Cell::from(format!("  {}", action_row.label)),
                    Cell::from(
                        Line::from(action_row.shortcut.clone()).alignment(Alignment::Right),
                    )
                    .style(shortcut_style),
                ])
                .style(action_row.style)
            }
        })
        .collect();

    let table = Table::new(rows, [Constraint::Min(10), Constraint::Length(8)])
        .style(theme.panel_background());
    f.render_widget(table, list_area);

    hitboxes
}
