//! Field rendering utilities for forms

use crate::state::{FieldState, FormField};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Border of a field carrying an error
pub const ERROR_COLOR: Color = Color::Rgb(0xD6, 0x00, 0x1C);

/// Rows a field takes: bordered input plus one annotation row
pub const FIELD_HEIGHT: u16 = 4;

fn border_style(field: &FormField, is_active: bool) -> Style {
    match field.state {
        FieldState::Invalid => Style::default().fg(ERROR_COLOR),
        _ if is_active => Style::default().fg(Color::Cyan),
        FieldState::Valid => Style::default().fg(Color::Green),
        FieldState::Pristine => Style::default().fg(Color::DarkGray),
    }
}

/// Draw a form field with its annotation row underneath
pub fn draw_field(buf: &mut Buffer, area: Rect, field: &FormField, is_active: bool) {
    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };

    let value = field.display_value();
    let content = if value.is_empty() && !is_active {
        Line::from(Span::styled(
            field.role.placeholder(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let text_style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if is_active { "▌" } else { "" };
        Line::from(vec![
            Span::styled(value, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let mut title = format!(" {} ", field.label());
    if field.state == FieldState::Valid {
        title.push_str("✓ ");
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(field, is_active));

    Paragraph::new(content).block(block).render(input_area, buf);

    if let Some(message) = &field.annotation {
        if area.height > input_area.height {
            let annotation_area = Rect {
                x: area.x + 1,
                y: input_area.y + input_area.height,
                width: area.width.saturating_sub(1),
                height: 1,
            };
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default()
                    .fg(ERROR_COLOR)
                    .add_modifier(Modifier::ITALIC),
            ))
            .render(annotation_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldRole;

    fn render(field: &FormField, is_active: bool) -> Buffer {
        let area = Rect::new(0, 0, 40, FIELD_HEIGHT);
        let mut buf = Buffer::empty(area);
        draw_field(&mut buf, area, field, is_active);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_annotation_rendered_below_input() {
        let mut field = FormField::new(FieldRole::Email);
        field.set_text("bad");
        field.state = FieldState::Invalid;
        field.annotation = Some("invalid email".to_string());

        let buf = render(&field, false);
        assert!(row_text(&buf, 3).contains("invalid email"));
        assert_eq!(buf.cell((0, 0)).map(|c| c.fg), Some(ERROR_COLOR));
    }

    #[test]
    fn test_clean_field_has_empty_annotation_row() {
        let field = FormField::new(FieldRole::Phone);
        let buf = render(&field, false);
        assert_eq!(row_text(&buf, 3).trim(), "");
        assert!(row_text(&buf, 1).contains(FieldRole::Phone.placeholder()));
    }

    #[test]
    fn test_password_is_masked() {
        let mut field = FormField::new(FieldRole::Password);
        field.set_text("secret1");
        let buf = render(&field, true);
        let text = row_text(&buf, 1);
        assert!(!text.contains("secret1"));
        assert!(text.contains("•••••••"));
    }

    #[test]
    fn test_valid_field_title_has_check() {
        let mut field = FormField::new(FieldRole::Email);
        field.set_text("user@example.com");
        field.state = FieldState::Valid;
        let buf = render(&field, false);
        assert!(row_text(&buf, 0).contains("✓"));
    }
}
