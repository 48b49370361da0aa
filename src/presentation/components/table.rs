use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap},
};

use crate::domain::VehicleRecord;

pub(crate) fn render_table(
    frame: &mut Frame<'_>,
    area: Rect,
    records: &[VehicleRecord],
    selected: usize,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title("Vehicles")
        .borders(Borders::ALL)
        .border_style(border_style);

    if records.is_empty() {
        let placeholder =
            Paragraph::new("No vehicle records found. Use the form above to add a new entry.")
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let header = Row::new([
        "#",
        "AMP Number",
        "Driver",
        "Status",
        "Position",
        "Cargo",
        "Alert",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = records.iter().enumerate().map(|(index, record)| {
        Row::new([
            (index + 1).to_string(),
            record.amp_number.clone(),
            record.driver_name.clone(),
            record.status.clone(),
            record.position.clone(),
            record.cargo.clone(),
            record.alert.clone(),
        ])
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Min(8),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    let mut state = TableState::default();
    if focused {
        state.select(Some(selected.min(records.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut state);
}
