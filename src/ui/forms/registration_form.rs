//! Registration section: tabs, fields, submit button and progress gauge

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::state::{AppState, FieldRole, Focus, RegistrationTab, Section};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

/// Row of the first field relative to the section top (border, tabs, blank)
pub const FIRST_FIELD_ROW: u16 = 3;

/// Draw the registration section into the page buffer
pub fn draw(buf: &mut Buffer, area: Rect, state: &AppState) {
    let form_focused = state.focus == Focus::Form;
    let block = Block::default()
        .title(format!(
            " {} · {} ",
            Section::Registration.title(),
            state.tabs.active().label()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if form_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Tabs
            Constraint::Length(1),             // Spacer
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Phone
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(FIELD_HEIGHT),  // Confirm
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(2),             // Progress
            Constraint::Min(0),
        ])
        .split(inner);

    draw_tabs(buf, chunks[0], state);

    for role in FieldRole::ALL {
        let is_active = form_focused && state.form.active_role() == Some(role);
        draw_field(buf, chunks[2 + role.index()], state.form.field(role), is_active);
    }

    let button_area = Rect {
        width: chunks[6].width.min(24),
        ..chunks[6]
    };
    render_action_button(
        buf,
        button_area,
        "Submit",
        form_focused && state.form.is_submit_row_active(),
        Color::Green,
    );

    draw_progress(buf, chunks[7], state);
}

fn draw_tabs(buf: &mut Buffer, area: Rect, state: &AppState) {
    let mut spans = Vec::new();
    for (i, tab) in RegistrationTab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if state.tabs.is_active(*tab) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(tab.label(), style));
    }
    Paragraph::new(Line::from(spans)).render(area, buf);
}

fn draw_progress(buf: &mut Buffer, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    Paragraph::new(Span::styled(
        "Registration progress",
        Style::default().fg(Color::DarkGray),
    ))
    .render(rows[0], buf);

    Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio(state.progress.ratio())
        .label(format!("{}%", state.progress.percent()))
        .render(rows[1], buf);
}
