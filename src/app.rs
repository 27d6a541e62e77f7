//! Application state and core logic

use crate::config::LandingConfig;
use crate::platform::is_submit_modifier;
use crate::state::{
    nav_link_at, AppState, Focus, Form, FormEvent, FormOutcome, Section, SubmissionGate,
    ToastQueue, UiArea, HEADER_HEIGHT, NAV_LINKS,
};
use crate::ui::{FIELD_HEIGHT, FIRST_FIELD_ROW};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

/// Rows scrolled per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Notifications shown in the bottom-right corner
    pub toasts: ToastQueue,
    pub config: LandingConfig,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    pub fn new(config: LandingConfig) -> Self {
        Self {
            state: AppState::default(),
            toasts: ToastQueue::default(),
            config,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Rows available to the page between header and status bar
    pub fn viewport_height(&self) -> u16 {
        let height = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
        height.saturating_sub(HEADER_HEIGHT + 1)
    }

    pub fn max_offset(&self) -> u16 {
        self.state.layout().max_offset(self.viewport_height())
    }

    /// Advance animations and drop expired toasts
    pub fn tick(&mut self, now: Instant) {
        self.state.scroll.tick(now);
        self.state.scroll.clamp(self.max_offset());
        self.toasts.prune(now);
    }

    /// Whether the next frame should come quickly
    pub fn is_animating(&self, now: Instant) -> bool {
        self.state.scroll.is_animating() || self.toasts.is_animating(now)
    }

    /// Smooth-scroll to an anchor; returns false when the anchor is ignored
    pub fn follow_anchor(&mut self, href: &str) -> bool {
        let Some(target) = self
            .state
            .layout()
            .anchor_offset(href, self.viewport_height())
        else {
            tracing::debug!(href, "ignoring anchor");
            return false;
        };
        self.state.scroll.smooth_to(target, Instant::now());
        true
    }

    /// Open the page at the configured anchor without animating
    pub fn apply_start_anchor(&mut self) {
        let Some(anchor) = self.config.start_anchor.as_deref() else {
            return;
        };
        let viewport = self.viewport_height();
        let layout = self.state.layout();
        if let Some(target) = layout.anchor_offset(anchor, viewport) {
            self.state
                .scroll
                .jump_to(target, layout.max_offset(viewport));
        } else {
            tracing::debug!(anchor, "configured start anchor not found");
        }
    }

    /// Run an event through the submission gate
    pub fn dispatch_form(&mut self, event: FormEvent) -> FormOutcome {
        SubmissionGate::new(
            &mut self.state.form,
            &mut self.toasts,
            &mut self.state.progress,
        )
        .dispatch(event)
    }

    pub fn submit_form(&mut self) -> bool {
        matches!(
            self.dispatch_form(FormEvent::Submit),
            FormOutcome::Submitted(true)
        )
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.state.has_error() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        match self.state.focus {
            Focus::Page => self.handle_page_key(key),
            Focus::Form => self.handle_form_key(key),
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        let max = self.max_offset();
        let page = i32::from(self.viewport_height().saturating_sub(1).max(1));
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll.scroll_by(1, max),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll.scroll_by(-1, max),
            KeyCode::PageDown => self.state.scroll.scroll_by(page, max),
            KeyCode::PageUp => self.state.scroll.scroll_by(-page, max),
            KeyCode::Home => self.state.scroll.jump_to(0, max),
            KeyCode::End => self.state.scroll.jump_to(max, max),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(link) = NAV_LINKS.get(index) {
                    self.follow_anchor(link.href);
                }
            }
            KeyCode::Char('[') => self.state.faq.select_prev(),
            KeyCode::Char(']') => self.state.faq.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.state.faq.toggle_selected();
                self.state.scroll.clamp(self.max_offset());
            }
            KeyCode::Left => self.state.tabs.select_prev(),
            KeyCode::Right => self.state.tabs.select_next(),
            KeyCode::Tab | KeyCode::Char('r') => self.focus_form(),
            KeyCode::Char('?') => self.toggle_key_hints(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') if is_submit_modifier(key.modifiers) => {
                self.submit_form();
            }
            KeyCode::Esc => self.leave_form(),
            KeyCode::Tab | KeyCode::Down => self.move_field(true),
            KeyCode::BackTab | KeyCode::Up => self.move_field(false),
            KeyCode::Enter => {
                if self.state.form.is_submit_row_active() {
                    self.submit_form();
                } else {
                    self.move_field(true);
                }
            }
            KeyCode::Backspace => {
                if let Some(role) = self.state.form.active_role() {
                    self.state.form.field_mut(role).pop_char();
                    self.dispatch_form(FormEvent::Input(role));
                }
            }
            KeyCode::Char(c) if !is_submit_modifier(key.modifiers) => {
                if let Some(role) = self.state.form.active_role() {
                    self.state.form.field_mut(role).push_char(c);
                    self.dispatch_form(FormEvent::Input(role));
                }
            }
            _ => {}
        }
    }

    /// Leaving a field blurs it, then focus moves on
    fn move_field(&mut self, forward: bool) {
        self.blur_active_field();
        if forward {
            self.state.form.next_field();
        } else {
            self.state.form.prev_field();
        }
        self.reveal_active_field();
    }

    fn blur_active_field(&mut self) {
        if let Some(role) = self.state.form.active_role() {
            self.dispatch_form(FormEvent::Blur(role));
        }
    }

    pub fn focus_form(&mut self) {
        self.state.focus = Focus::Form;
        self.follow_anchor(Section::Registration.anchor());
    }

    pub fn leave_form(&mut self) {
        self.blur_active_field();
        self.state.focus = Focus::Page;
    }

    /// Scroll so the focused field is inside the viewport
    fn reveal_active_field(&mut self) {
        let layout = self.state.layout();
        let Some(span) = layout.span(Section::Registration) else {
            return;
        };
        let index = self.state.form.active_field() as u16;
        let field_top = span.top - HEADER_HEIGHT + FIRST_FIELD_ROW + index * FIELD_HEIGHT;
        let field_bottom = field_top + FIELD_HEIGHT;
        let offset = self.state.scroll.offset();
        let viewport = self.viewport_height();
        let max = layout.max_offset(viewport);

        if field_top < offset {
            self.state.scroll.jump_to(field_top, max);
        } else if field_bottom > offset + viewport {
            self.state.scroll.jump_to(field_bottom.saturating_sub(viewport), max);
        }
    }

    fn toggle_key_hints(&mut self) {
        self.config.show_key_hints = Some(!self.config.show_key_hints());
        if let Err(err) = self.config.save() {
            self.state.push_error(err.to_string());
        }
    }

    /// Handle mouse input: wheel scrolls, clicks follow header links
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.state.has_error() {
            return;
        }
        let max = self.max_offset();
        match mouse.kind {
            MouseEventKind::ScrollDown => self.state.scroll.scroll_by(WHEEL_STEP, max),
            MouseEventKind::ScrollUp => self.state.scroll.scroll_by(-WHEEL_STEP, max),
            MouseEventKind::Down(MouseButton::Left) => match UiArea::at_row(mouse.row) {
                UiArea::Header => {
                    if let Some(link) = nav_link_at(mouse.column, mouse.row) {
                        self.follow_anchor(link.href);
                    }
                }
                UiArea::Page => {
                    let page_row =
                        self.state.scroll.offset() + UiArea::Page.relative_row(mouse.row);
                    self.click_page_row(page_row);
                }
            },
            _ => {}
        }
    }

    /// A click on a FAQ question toggles it
    fn click_page_row(&mut self, page_row: u16) {
        let Some(faq) = self.state.layout().span(Section::Faq).copied() else {
            return;
        };
        // Items start one row below the section border
        let items_top = faq.top - HEADER_HEIGHT + 1;
        let Some(row) = page_row.checked_sub(items_top) else {
            return;
        };
        if let Some(index) = self.state.faq.item_at_row(row) {
            self.state.faq.selected = index;
            self.state.faq.toggle(index);
            self.state.scroll.clamp(self.max_offset());
        }
    }

    /// Role of the focused field while the form has focus
    #[cfg(test)]
    fn focused_role(&self) -> Option<crate::state::FieldRole> {
        match self.state.focus {
            Focus::Form => self.state.form.active_role(),
            Focus::Page => None,
        }
    }
}
