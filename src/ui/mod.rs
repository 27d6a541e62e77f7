//! UI module for rendering the TUI

mod components;
mod forms;
mod landing;
mod layout;

pub use forms::{FIELD_HEIGHT, FIRST_FIELD_ROW};

use crate::app::App;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, page_area, status_area) = layout::create_layout(frame.area());

    landing::draw(frame, page_area, &app.state);
    layout::draw_header(frame, header_area, app);
    layout::draw_status_bar(frame, status_area, app);

    if !app.toasts.is_empty() {
        components::render_toasts(frame, page_area, app.toasts.toasts(), Instant::now());
    }

    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
