//! Landing page sections rendered into an off-screen page buffer

use super::forms::draw_registration;
use crate::state::{AppState, Focus, Section, SectionSpan, BENEFITS, HEADER_HEIGHT, STEPS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

/// Render the whole page, then copy the rows under the scroll offset into `area`
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let layout = state.layout();
    let page_height = layout.total_height().saturating_sub(HEADER_HEIGHT);
    let page_area = Rect::new(0, 0, area.width, page_height);
    let mut page = Buffer::empty(page_area);

    for span in &layout.spans {
        draw_section(&mut page, section_rect(span, area.width), span.section, state);
    }

    let offset = state.scroll.offset();
    let target = frame.buffer_mut();
    for row in 0..area.height {
        let page_y = offset + row;
        if page_y >= page_height {
            break;
        }
        for col in 0..area.width {
            if let (Some(src), Some(dst)) = (
                page.cell((col, page_y)),
                target.cell_mut((area.x + col, area.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

/// Section rectangle in page-buffer coordinates
fn section_rect(span: &SectionSpan, width: u16) -> Rect {
    Rect::new(0, span.top - HEADER_HEIGHT, width, span.height)
}

fn draw_section(buf: &mut Buffer, area: Rect, section: Section, state: &AppState) {
    match section {
        Section::Hero => draw_hero(buf, area),
        Section::Benefits => draw_benefits(buf, area),
        Section::Steps => draw_steps(buf, area, state),
        Section::Faq => draw_faq(buf, area, state),
        Section::Registration => draw_registration(buf, area, state),
    }
}

fn section_block(section: Section) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", section.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn draw_hero(buf: &mut Buffer, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Earn with the partner program",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Recommend the service to job seekers and employers"),
        Line::from("and receive a reward for every paid service."),
        Line::from(Span::styled(
            "Press 4 or r to join",
            Style::default().fg(Color::Cyan),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Red)))
        .render(area, buf);
}

fn draw_benefits(buf: &mut Buffer, area: Rect) {
    let mut lines = Vec::with_capacity(BENEFITS.len() * 2);
    for (title, description) in BENEFITS {
        lines.push(Line::from(Span::styled(
            format!("● {title}"),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {description}"),
            Style::default().fg(Color::Gray),
        )));
    }
    Paragraph::new(lines)
        .block(section_block(Section::Benefits))
        .render(area, buf);
}

fn draw_steps(buf: &mut Buffer, area: Rect, state: &AppState) {
    // The first step is done once the form has been accepted
    let done = usize::from(state.progress.percent() >= crate::state::SUCCESS_PROGRESS_PERCENT);
    let lines: Vec<Line> = STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let style = if i < done {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            Line::from(Span::styled(*step, style))
        })
        .collect();
    Paragraph::new(lines)
        .block(section_block(Section::Steps))
        .render(area, buf);
}

fn draw_faq(buf: &mut Buffer, area: Rect, state: &AppState) {
    let page_focused = state.focus == Focus::Page;
    let mut lines = Vec::new();
    for (i, item) in state.faq.items().iter().enumerate() {
        let marker = if item.open { "▾" } else { "▸" };
        let is_selected = page_focused && state.faq.selected == i;
        let style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if item.open {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", item.title),
            style,
        )));
        if item.open {
            for body_line in item.body {
                lines.push(Line::from(Span::styled(
                    format!("  {body_line}"),
                    Style::default().fg(Color::Gray),
                )));
            }
        }
    }
    Paragraph::new(lines)
        .block(section_block(Section::Faq))
        .render(area, buf);
}
