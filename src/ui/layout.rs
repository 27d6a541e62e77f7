//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{nav_link_columns, Focus, HEADER_HEIGHT, NAV_LINKS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, scrollable page and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Page
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header; once the page is scrolled it is drawn elevated
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let elevated = app.state.scroll.is_header_elevated();
    let block = if elevated {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Gray))
            .style(Style::default().bg(Color::Rgb(0x1C, 0x1C, 0x1C)))
    } else {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(block, area);

    let title_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(2).min(18),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            "hh partners",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        title_area,
    );

    for ((col, width), link) in nav_link_columns().into_iter().zip(NAV_LINKS) {
        if col + width > area.x + area.width {
            break;
        }
        let link_area = Rect {
            x: area.x + col,
            y: area.y + 1,
            width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                link.label,
                Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED),
            )),
            link_area,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let focus_style = match app.state.focus {
        Focus::Page => Style::default().fg(Color::Black).bg(Color::Cyan),
        Focus::Form => Style::default().fg(Color::Black).bg(Color::Green),
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.focus.label()),
        focus_style,
    )];

    let to_fix = app.state.form.annotation_count();
    if to_fix > 0 {
        spans.push(Span::styled(
            format!(" {to_fix} to fix "),
            Style::default().fg(Color::White).bg(Color::Red),
        ));
    }

    if app.config.show_key_hints() {
        spans.push(Span::styled(
            format!(" {}", get_focus_hints(app.state.focus)),
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let position = format!(" {}% ", scroll_percent(app));
    let position_area = Rect {
        x: area.x + area.width.saturating_sub(position.len() as u16),
        y: area.y,
        width: (position.len() as u16).min(area.width),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(position).style(Style::default().bg(Color::DarkGray).fg(Color::Gray)),
        position_area,
    );
}

fn scroll_percent(app: &App) -> u16 {
    let max = app.max_offset();
    if max == 0 {
        100
    } else {
        (u32::from(app.state.scroll.offset()) * 100 / u32::from(max)) as u16
    }
}

/// Get keyboard hints for the current focus
fn get_focus_hints(focus: Focus) -> String {
    match focus {
        Focus::Page => {
            "j/k:scroll  1-4:jump  [ ]:faq  Enter:toggle  ←/→:tab  r:form  ?:hints  q:quit"
                .to_string()
        }
        Focus::Form => format!(
            "Tab:next  Shift+Tab:prev  Enter:submit  {SUBMIT_SHORTCUT}:submit  Esc:page"
        ),
    }
}
