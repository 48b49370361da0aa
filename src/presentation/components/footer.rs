use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::Severity;

use super::super::view::UiContext;

pub(crate) fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(2)])
        .split(area);

    if let Some(help) = ctx.help {
        let help_widget = Paragraph::new(format!("Actions: {help}"))
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(help_widget, rows[0]);
    }

    let color = match ctx.severity {
        Severity::Info => Color::Reset,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    };
    let badge = if ctx.severity == Severity::Error {
        Span::styled("[!]", Style::default().fg(Color::Red))
    } else {
        Span::styled("[ok]", Style::default().fg(Color::Green))
    };
    let status_widget = Paragraph::new(Line::from(vec![
        Span::raw("Status: "),
        Span::styled(ctx.status_message.to_string(), Style::default().fg(color)),
        Span::raw(" "),
        badge,
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(status_widget, rows[1]);
}
