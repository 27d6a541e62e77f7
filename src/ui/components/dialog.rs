//! Error dialog overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const MAX_WIDTH: u16 = 60;
const TITLE: &str = "Error";
const DISMISS_HINT: &str = "Press Enter or Esc to dismiss";

/// Rows `line` takes when word-wrapped to `width` columns
fn wrapped_rows(line: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 1;
    let mut used = 0;
    for word in line.split_whitespace() {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };
        if needed <= width {
            used = needed;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        // Words wider than the dialog are broken across rows
        rows += (len - 1) / width;
        used = (len - 1) % width + 1;
    }
    rows as u16
}

/// Centered area for a dialog of `message` within `area`
pub fn dialog_area(area: Rect, message: &str) -> Rect {
    let max_text_width = MAX_WIDTH.min(area.width).saturating_sub(2).max(1);
    let longest = message
        .lines()
        .chain([TITLE, DISMISS_HINT])
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let text_width = (longest as u16).min(max_text_width);
    let width = (text_width + 2).min(area.width);

    let message_rows = message
        .lines()
        .map(|l| wrapped_rows(l, text_width))
        .sum::<u16>()
        .max(1);
    let hint_rows = wrapped_rows(DISMISS_HINT, text_width);
    // borders + title + blank + message + blank + hint
    let height = (2 + 1 + 1 + message_rows + 1 + hint_rows).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let area = dialog_area(frame.area(), error_message);
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut content = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(error_message.lines().map(|l| Line::from(l.to_string())));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ]));

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}
