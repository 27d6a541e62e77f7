//! UI area positioning for mouse event handling
//!
//! ```text
//! Row 0-2:  Header (title + nav links)
//! Row 3+:   Scrollable page
//! Bottom:   Status bar (1 row)
//! ```

use super::page::{NavLink, HEADER_HEIGHT, NAV_LINKS};

/// Column where the first nav link starts (after the title)
pub const NAV_START_COL: u16 = 22;
/// Gap between nav links
pub const NAV_GAP: u16 = 3;

/// UI area for calculating mouse Y offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    Header,
    Page,
}

impl UiArea {
    /// Get the starting Y row for this UI area (absolute screen position)
    #[inline]
    pub const fn start_y(self) -> u16 {
        match self {
            UiArea::Header => 0,
            UiArea::Page => HEADER_HEIGHT,
        }
    }

    /// Area containing an absolute mouse row
    pub fn at_row(mouse_row: u16) -> Self {
        if mouse_row < UiArea::Page.start_y() {
            UiArea::Header
        } else {
            UiArea::Page
        }
    }

    /// Convert absolute mouse row to row relative to this UI area
    #[inline]
    pub fn relative_row(self, mouse_row: u16) -> u16 {
        mouse_row.saturating_sub(self.start_y())
    }
}

/// Column span `(start, width)` of each nav link label, in header order
pub fn nav_link_columns() -> Vec<(u16, u16)> {
    let mut col = NAV_START_COL;
    NAV_LINKS
        .iter()
        .map(|link| {
            let width = link.label.chars().count() as u16;
            let span = (col, width);
            col += width + NAV_GAP;
            span
        })
        .collect()
}

/// Nav link under a header click, if any
pub fn nav_link_at(mouse_col: u16, mouse_row: u16) -> Option<NavLink> {
    if UiArea::at_row(mouse_row) != UiArea::Header {
        return None;
    }
    nav_link_columns()
        .into_iter()
        .zip(NAV_LINKS)
        .find(|((start, width), _)| mouse_col >= *start && mouse_col < start + width)
        .map(|(_, link)| link)
}
