//! Button component for TUI

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a centered action button with border
pub fn render_action_button(
    buf: &mut Buffer,
    area: Rect,
    label: &str,
    is_selected: bool,
    accent: Color,
) {
    let border_style = if is_selected {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    Paragraph::new(format!(" {label} "))
        .style(text_style)
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_label_is_rendered_inside_border() {
        let area = Rect::new(0, 0, 20, BUTTON_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_action_button(&mut buf, area, "Submit", false, Color::Green);
        assert!(row_text(&buf, 1).contains("Submit"));
        assert!(row_text(&buf, 0).starts_with('┌'));
    }

    #[test]
    fn test_selected_button_fills_accent() {
        let area = Rect::new(0, 0, 20, BUTTON_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_action_button(&mut buf, area, "Submit", true, Color::Green);
        let cell = buf.cell((10, 1)).unwrap();
        assert_eq!(cell.bg, Color::Green);
    }
}
