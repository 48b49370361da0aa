use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use super::super::view::ConfirmRender;

pub(crate) fn render_confirm(frame: &mut Frame<'_>, confirm: &ConfirmRender<'_>) {
    let max_width = confirm
        .title
        .chars()
        .count()
        .max(
            confirm
                .options
                .iter()
                .map(|option| option.chars().count())
                .max()
                .unwrap_or(10),
        ) as u16;
    let width_limit = frame.area().width.saturating_sub(2).max(1);
    let width = max_width.saturating_add(6).min(width_limit);
    let height = (confirm.options.len() as u16).saturating_add(4);
    let area = centered_rect(frame.area(), width, height.max(3));
    frame.render_widget(Clear, area);

    let items: Vec<ListItem<'static>> = confirm
        .options
        .iter()
        .map(|option| ListItem::new(option.to_string()))
        .collect();
    let mut state = ListState::default();
    state.select(Some(confirm.selected.min(confirm.options.len().saturating_sub(1))));

    let list = List::new(items)
        .block(
            Block::default()
                .title(confirm.title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut state);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let inner = vertical[1];
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(inner.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(inner);
    horizontal[1]
}
