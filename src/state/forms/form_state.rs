//! Registration form state

use super::field::{FieldRole, FieldState, FormField};
use super::surface::FormSurface;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Registration form: email, phone, two passwords, then the submit button row
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    fields: [FormField; 4],
    pub active_field_index: usize,
}

impl RegistrationForm {
    /// Index of the submit button row
    pub const SUBMIT_INDEX: usize = 4;

    pub fn new() -> Self {
        Self {
            fields: FieldRole::ALL.map(FormField::new),
            active_field_index: 0,
        }
    }

    pub fn field(&self, role: FieldRole) -> &FormField {
        &self.fields[role.index()]
    }

    pub fn field_mut(&mut self, role: FieldRole) -> &mut FormField {
        &mut self.fields[role.index()]
    }

    /// Role of the focused field, `None` on the submit button row
    pub fn active_role(&self) -> Option<FieldRole> {
        FieldRole::from_index(self.active_field_index)
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    /// Number of fields carrying an annotation
    pub fn annotation_count(&self) -> usize {
        self.fields.iter().filter(|f| f.annotation.is_some()).count()
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        5 // four inputs, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
}

impl FormSurface for RegistrationForm {
    fn value(&self, role: FieldRole) -> String {
        self.field(role).as_text().to_string()
    }

    fn set_state(&mut self, role: FieldRole, state: FieldState) {
        self.field_mut(role).state = state;
    }

    fn annotation(&self, role: FieldRole) -> Option<String> {
        self.field(role).annotation.clone()
    }

    fn insert_annotation(&mut self, role: FieldRole, message: &str) {
        self.field_mut(role).annotation = Some(message.to_string());
    }

    fn remove_annotation(&mut self, role: FieldRole) {
        self.field_mut(role).annotation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::surface::{clear_error, render_error};

    mod navigation {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = RegistrationForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.active_role(), Some(FieldRole::Email));
            assert_eq!(form.annotation_count(), 0);
        }

        #[test]
        fn test_field_count() {
            let form = RegistrationForm::new();
            assert_eq!(form.field_count(), 5);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = RegistrationForm::new();
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = RegistrationForm::new();
            form.prev_field();
            assert!(form.is_submit_row_active());
            assert_eq!(form.active_role(), None);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = RegistrationForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, RegistrationForm::SUBMIT_INDEX);
        }

        #[test]
        fn test_fields_are_stored_in_role_order() {
            let form = RegistrationForm::new();
            for role in FieldRole::ALL {
                assert_eq!(form.field(role).role, role);
            }
        }
    }

    mod surface {
        use super::*;

        #[test]
        fn test_render_error_twice_keeps_one_annotation() {
            let mut form = RegistrationForm::new();
            render_error(&mut form, FieldRole::Email, "invalid email");
            render_error(&mut form, FieldRole::Email, "invalid email");
            assert_eq!(form.annotation_count(), 1);
            assert_eq!(
                form.field(FieldRole::Email).annotation.as_deref(),
                Some("invalid email")
            );
            assert_eq!(form.field(FieldRole::Email).state, FieldState::Invalid);
        }

        #[test]
        fn test_render_error_replaces_message() {
            let mut form = RegistrationForm::new();
            render_error(&mut form, FieldRole::PasswordConfirm, "password too short");
            render_error(&mut form, FieldRole::PasswordConfirm, "passwords do not match");
            assert_eq!(
                form.annotation(FieldRole::PasswordConfirm).as_deref(),
                Some("passwords do not match")
            );
        }

        #[test]
        fn test_clear_error_reverts_state() {
            let mut form = RegistrationForm::new();
            render_error(&mut form, FieldRole::Phone, "invalid phone number");
            clear_error(&mut form, FieldRole::Phone);
            assert!(form.annotation(FieldRole::Phone).is_none());
            assert_eq!(form.field(FieldRole::Phone).state, FieldState::Pristine);
        }

        #[test]
        fn test_clear_error_on_clean_field_is_noop() {
            let mut form = RegistrationForm::new();
            clear_error(&mut form, FieldRole::Phone);
            assert_eq!(form.annotation_count(), 0);
        }

        #[test]
        fn test_value_reads_field_text() {
            let mut form = RegistrationForm::new();
            form.field_mut(FieldRole::Phone).set_text("5551234567");
            assert_eq!(form.value(FieldRole::Phone), "5551234567");
        }
    }
}
