use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{app::Severity, domain::VehicleRecord, form::FormState};

use super::components::{render_confirm, render_footer, render_form, render_table};

/// Everything a single frame needs, borrowed from the app for the duration
/// of the draw call.
pub(crate) struct UiContext<'a> {
    pub form: &'a FormState,
    pub records: &'a [VehicleRecord],
    pub selected: usize,
    pub form_focused: bool,
    pub status_message: &'a str,
    pub severity: Severity,
    pub help: Option<&'a str>,
    pub confirm: Option<ConfirmRender<'a>>,
}

pub(crate) struct ConfirmRender<'a> {
    pub title: &'a str,
    pub options: &'a [&'static str],
    pub selected: usize,
}

pub(crate) fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let cursor_enabled = ctx.form_focused && ctx.confirm.is_none();
    render_form(frame, chunks[0], ctx.form, ctx.form_focused, cursor_enabled);
    render_table(
        frame,
        chunks[1],
        ctx.records,
        ctx.selected,
        !ctx.form_focused && ctx.confirm.is_none(),
    );
    render_footer(frame, chunks[2], &ctx);

    if let Some(confirm) = &ctx.confirm {
        render_confirm(frame, confirm);
    }
}
