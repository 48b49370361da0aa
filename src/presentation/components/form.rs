use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::form::{FormState, Submission};

// "{marker} {label:<11}: " before the value starts.
const VALUE_COLUMN: u16 = 15;

pub(crate) fn render_form(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &FormState,
    focused: bool,
    enable_cursor: bool,
) {
    let title = if form.is_editing() {
        "Edit Vehicle"
    } else {
        "Add New Vehicle"
    };
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(form.fields().len() + 2);
    for (index, field) in form.fields().iter().enumerate() {
        let is_focused = focused && index == form.focus_index();
        let marker = if is_focused { "›" } else { " " };
        let label_style = if is_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let mut spans = vec![Span::styled(
            format!("{marker} {:<11}: ", field.key.label()),
            label_style,
        )];
        if field.value().is_empty() {
            spans.push(Span::styled(
                field.key.hint(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::raw(field.value().to_string()));
        }
        if field.is_locked() {
            spans.push(Span::styled(
                " (locked)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        if let Some(error) = field.error() {
            spans.push(Span::styled(
                format!("  {error}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.extend(banner_lines(form, inner.width));
    frame.render_widget(Paragraph::new(lines), inner);

    if enable_cursor {
        let index = form.focus_index() as u16;
        let value_width = form.focused_field().value().width() as u16;
        let x = inner.x + VALUE_COLUMN + value_width;
        let y = inner.y + index;
        if x < inner.right() && y < inner.bottom() {
            frame.set_cursor_position((x, y));
        }
    }
}

/// The submission banner mirrors the outcome of the last submit: a failure
/// keeps its message on screen until the user edits something, a success is
/// acknowledged in green.
fn banner_lines(form: &FormState, width: u16) -> Vec<Line<'static>> {
    match form.submission() {
        Submission::Idle => Vec::new(),
        Submission::InFlight => vec![Line::styled(
            "Saving...",
            Style::default().fg(Color::DarkGray),
        )],
        Submission::Success => vec![Line::styled(
            "Saved!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )],
        Submission::Failed(message) => {
            let style = Style::default().fg(Color::Red);
            wrap(message, width.max(10) as usize)
                .into_iter()
                .take(2)
                .map(|piece| Line::styled(piece.into_owned(), style))
                .collect()
        }
    }
}
