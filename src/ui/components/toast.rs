//! Toast overlay rendering

use crate::state::{NotificationKind, Toast};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

const TOAST_HEIGHT: u16 = 3;
const MARGIN: u16 = 1;

pub const SUCCESS_COLOR: Color = Color::Rgb(0x21, 0xA0, 0x38);
pub const INFO_COLOR: Color = Color::Rgb(0x00, 0x57, 0xFF);

pub fn toast_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => SUCCESS_COLOR,
        NotificationKind::Info => INFO_COLOR,
    }
}

/// Placement of one toast, or `None` when it is fully off-screen
pub fn toast_area(
    bounds: Rect,
    toast: &Toast,
    stack_index: u16,
    now: Instant,
) -> Option<Rect> {
    let width = (toast.message.chars().count() as u16 + 4).min(bounds.width);
    let bottom = bounds.y + bounds.height;
    let y = bottom
        .checked_sub((stack_index + 1) * (TOAST_HEIGHT + MARGIN))?
        .max(bounds.y);

    // Slide horizontally: hidden past the right edge at reveal 0.0
    let travel = f32::from(width + MARGIN);
    let hidden = (travel * (1.0 - toast.reveal(now))).round() as u16;
    let rest_x = (bounds.x + bounds.width).saturating_sub(width + MARGIN);
    let x = rest_x + hidden;
    let visible_width = (bounds.x + bounds.width).saturating_sub(x).min(width);
    if visible_width == 0 {
        return None;
    }

    Some(Rect {
        x,
        y,
        width: visible_width,
        height: TOAST_HEIGHT,
    })
}

/// Draw toasts stacked upward from the bottom-right corner of `bounds`, newest lowest
pub fn render_toasts(frame: &mut Frame, bounds: Rect, toasts: &[Toast], now: Instant) {
    for (index, toast) in toasts.iter().rev().enumerate() {
        let Some(area) = toast_area(bounds, toast, index as u16, now) else {
            continue;
        };
        let color = toast_color(toast.kind);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(color));
        let paragraph = Paragraph::new(toast.message.as_str())
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block);

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn bounds() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn test_colors_follow_kind() {
        assert_eq!(toast_color(NotificationKind::Success), SUCCESS_COLOR);
        assert_eq!(toast_color(NotificationKind::Info), INFO_COLOR);
    }

    #[test]
    fn test_visible_toast_rests_at_right_edge() {
        let start = Instant::now();
        let toast = Toast::new("saved", NotificationKind::Success, start);
        let area = toast_area(bounds(), &toast, 0, start + Duration::from_secs(1)).unwrap();
        assert_eq!(area.x + area.width + MARGIN, 80);
        assert_eq!(area.y, 24 - TOAST_HEIGHT - MARGIN);
    }

    #[test]
    fn test_entering_toast_is_shifted_right() {
        let start = Instant::now();
        let toast = Toast::new("saved", NotificationKind::Success, start);
        let resting = toast_area(bounds(), &toast, 0, start + Duration::from_secs(1)).unwrap();
        let entering = toast_area(bounds(), &toast, 0, start + Duration::from_millis(50)).unwrap();
        assert!(entering.x > resting.x);
    }

    #[test]
    fn test_stacked_toasts_do_not_overlap() {
        let start = Instant::now();
        let toast = Toast::new("saved", NotificationKind::Info, start);
        let now = start + Duration::from_secs(1);
        let first = toast_area(bounds(), &toast, 0, now).unwrap();
        let second = toast_area(bounds(), &toast, 1, now).unwrap();
        assert!(second.y + second.height <= first.y);
    }

    #[test]
    fn test_expired_toast_is_offscreen() {
        let start = Instant::now();
        let toast = Toast::new("saved", NotificationKind::Info, start);
        assert!(toast_area(bounds(), &toast, 0, start + Duration::from_secs(10)).is_none());
    }
}
