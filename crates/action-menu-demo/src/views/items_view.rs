use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::ItemsViewModel;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the item list with a status bar below it
pub fn render(state: &AppState, theme: &Theme, area: Rect, f: &mut Frame) {
    let vm = ItemsViewModel::from_state(state, theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let mut hints: Vec<Span> = Vec::new();
    for (key, label) in &vm.hints {
        hints.push(Span::styled(format!(" {}", key), theme.key_hint()));
        hints.push(Span::styled(format!(" {} ", label), theme.muted()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(vm.title.clone())
        .title_style(theme.panel_title())
        .title_bottom(Line::from(hints))
        .border_style(theme.panel_border())
        .style(theme.text());

    match vm.empty_message {
        Some(ref message) => {
            let empty = Paragraph::new(message.as_str())
                .style(theme.muted())
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, chunks[0]);
        }
        None => {
            let items: Vec<ListItem> = vm
                .rows
                .iter()
                .map(|row| {
                    ListItem::new(Line::from(vec![
                        Span::raw(row.marker.clone()),
                        Span::raw(row.title.clone()),
                    ]))
                    .style(row.style)
                })
                .collect();
            f.render_widget(List::new(items).block(block), chunks[0]);
        }
    }

    let status = Paragraph::new(format!(" {}", vm.status)).style(theme.status_bar());
    f.render_widget(status, chunks[1]);
}
