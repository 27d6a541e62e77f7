//! Host capabilities the submission gate writes through
//!
//! The gate never touches rendering state directly; it reads values and
//! places annotations via [`FormSurface`], and reports success through
//! [`Notifier`] and [`ProgressSink`].

use super::field::{FieldRole, FieldState};

/// Read/write access to the rendered form
#[cfg_attr(test, mockall::automock)]
pub trait FormSurface {
    /// Current text of the field
    fn value(&self, role: FieldRole) -> String;

    /// Apply the visual state of the field (Invalid renders the error border)
    fn set_state(&mut self, role: FieldRole, state: FieldState);

    /// Annotation currently attached to the field, if any
    fn annotation(&self, role: FieldRole) -> Option<String>;

    /// Attach an annotation adjacent to the field
    fn insert_annotation(&mut self, role: FieldRole, message: &str);

    /// Detach the field's annotation
    fn remove_annotation(&mut self, role: FieldRole);
}

/// Visual flavour of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
}

/// Fire-and-forget transient notifications
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn display(&mut self, message: &str, kind: NotificationKind);
}

/// Externally owned percentage display
#[cfg_attr(test, mockall::automock)]
pub trait ProgressSink {
    fn set_percent(&mut self, percent: u16);
}

/// Attach `message` to the field, replacing any previous annotation.
///
/// Calling it twice with the same message leaves one annotation.
pub fn render_error<S: FormSurface + ?Sized>(surface: &mut S, role: FieldRole, message: &str) {
    if surface.annotation(role).is_some() {
        surface.remove_annotation(role);
    }
    surface.set_state(role, FieldState::Invalid);
    surface.insert_annotation(role, message);
}

/// Remove the field's annotation if present and revert its visual state.
pub fn clear_error<S: FormSurface + ?Sized>(surface: &mut S, role: FieldRole) {
    surface.set_state(role, FieldState::Pristine);
    if surface.annotation(role).is_some() {
        surface.remove_annotation(role);
    }
}
