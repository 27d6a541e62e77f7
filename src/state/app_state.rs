//! Application state definitions

use super::accordion::Accordion;
use super::forms::RegistrationForm;
use super::page::{PageLayout, ScrollState};
use super::progress::ProgressIndicator;
use super::tabs::TabsState;

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Scrolling, FAQ, tabs, navigation
    #[default]
    Page,
    /// Typing into the registration form
    Form,
}

impl Focus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Page => "PAGE",
            Self::Form => "FORM",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub focus: Focus,
    pub form: RegistrationForm,
    pub faq: Accordion,
    pub tabs: TabsState,
    pub scroll: ScrollState,
    pub progress: ProgressIndicator,
    /// Errors waiting to be shown in the error dialog, oldest first
    error_queue: Vec<String>,
}

impl AppState {
    /// Current page geometry; depends on which FAQ item is open
    pub fn layout(&self) -> PageLayout {
        PageLayout::compute(&self.faq)
    }

    pub fn push_error(&mut self, message: String) {
        tracing::debug!("{message}");
        self.error_queue.push(message);
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error_queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_focus_is_page() {
        let state = AppState::default();
        assert_eq!(state.focus, Focus::Page);
        assert_eq!(state.focus.label(), "PAGE");
    }

    #[test]
    fn test_default_faq_is_populated() {
        let state = AppState::default();
        assert!(!state.faq.is_empty());
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_error());
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_error());
        state.dismiss_error();
    }

    #[test]
    fn test_layout_tracks_faq() {
        let mut state = AppState::default();
        let before = state.layout().total_height();
        state.faq.toggle(0);
        assert!(state.layout().total_height() > before);
    }
}
