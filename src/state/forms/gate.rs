//! Submission gate: wires form events to validation and side effects
//!
//! Event contract:
//! - `Blur(role)`: lenient check of that field; a failure is annotated, a pass
//!   marks the field valid, an empty value is left untouched.
//! - `Input(role)`: the field's annotation is cleared; nothing is re-validated.
//! - `Submit`: every field is checked strictly and annotated or cleared; only a
//!   fully valid form moves the progress indicator and emits one notification.

use super::field::{FieldRole, FieldState};
use super::surface::{
    clear_error, render_error, FormSurface, NotificationKind, Notifier, ProgressSink,
};
use super::validator::{FormState, ValidationPhase, ValidationResult};

/// Progress shown once the registration step is complete
pub const SUCCESS_PROGRESS_PERCENT: u16 = 66;
pub const SUCCESS_MESSAGE: &str = "registration data submitted";

/// User-generated events the gate reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Blur(FieldRole),
    Input(FieldRole),
    Submit,
}

/// What handling an event produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Blur evaluated the field
    Checked(ValidationResult),
    /// Input cleared the field's error
    Cleared,
    /// Submit ran; `true` when the form was valid
    Submitted(bool),
}

/// Evaluate one field against the surface's current values
pub fn validate_field<S: FormSurface + ?Sized>(
    surface: &S,
    role: FieldRole,
    phase: ValidationPhase,
) -> ValidationResult {
    FormState::capture(surface).validate_field(role, phase)
}

/// Strictly check every field, annotating failures and clearing passes.
///
/// Each field is evaluated exactly once; a failure does not stop later fields
/// from being rendered.
pub fn validate_form<S: FormSurface + ?Sized>(surface: &mut S) -> bool {
    let snapshot = FormState::capture(&*surface);
    for (role, result) in FieldRole::ALL.into_iter().zip(snapshot.results()) {
        match result {
            ValidationResult::Valid => {
                clear_error(surface, role);
                surface.set_state(role, FieldState::Valid);
            }
            ValidationResult::Invalid(failure) => {
                tracing::debug!("{failure}");
                render_error(surface, role, failure.message);
            }
        }
    }
    snapshot.is_valid()
}

/// Handles form events against injected collaborators
pub struct SubmissionGate<'a, S: ?Sized, N: ?Sized, P: ?Sized> {
    surface: &'a mut S,
    notifier: &'a mut N,
    progress: &'a mut P,
}

impl<'a, S, N, P> SubmissionGate<'a, S, N, P>
where
    S: FormSurface + ?Sized,
    N: Notifier + ?Sized,
    P: ProgressSink + ?Sized,
{
    pub fn new(surface: &'a mut S, notifier: &'a mut N, progress: &'a mut P) -> Self {
        Self {
            surface,
            notifier,
            progress,
        }
    }

    pub fn dispatch(&mut self, event: FormEvent) -> FormOutcome {
        match event {
            FormEvent::Blur(role) => FormOutcome::Checked(self.on_blur(role)),
            FormEvent::Input(role) => {
                self.on_input(role);
                FormOutcome::Cleared
            }
            FormEvent::Submit => FormOutcome::Submitted(self.submit()),
        }
    }

    /// Lenient check when a field loses focus
    pub fn on_blur(&mut self, role: FieldRole) -> ValidationResult {
        let value = self.surface.value(role);
        let result = validate_field(&*self.surface, role, ValidationPhase::Blur);
        match result {
            ValidationResult::Invalid(failure) => {
                render_error(&mut *self.surface, role, failure.message);
            }
            ValidationResult::Valid if !value.is_empty() => {
                self.surface.set_state(role, FieldState::Valid);
            }
            ValidationResult::Valid => {}
        }
        result
    }

    /// Any edit drops the field's error until the next blur or submit
    pub fn on_input(&mut self, role: FieldRole) {
        clear_error(&mut *self.surface, role);
    }

    /// Validate everything; on success advance progress and notify once
    pub fn submit(&mut self) -> bool {
        if !validate_form(&mut *self.surface) {
            return false;
        }

        self.progress.set_percent(SUCCESS_PROGRESS_PERCENT);
        tracing::debug!("registration form is valid, ready to submit");
        self.notifier
            .display(SUCCESS_MESSAGE, NotificationKind::Success);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::surface::{MockNotifier, MockProgressSink};
    use crate::state::forms::validator::{
        INVALID_EMAIL, INVALID_PHONE, PASSWORDS_MISMATCH, PASSWORD_TOO_SHORT,
    };
    use crate::state::RegistrationForm;
    use mockall::predicate::eq;

    fn filled(email: &str, phone: &str, password: &str, confirm: &str) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.field_mut(FieldRole::Email).set_text(email);
        form.field_mut(FieldRole::Phone).set_text(phone);
        form.field_mut(FieldRole::Password).set_text(password);
        form.field_mut(FieldRole::PasswordConfirm).set_text(confirm);
        form
    }

    fn annotations(form: &RegistrationForm) -> Vec<(FieldRole, String)> {
        FieldRole::ALL
            .into_iter()
            .filter_map(|role| {
                form.field(role)
                    .annotation
                    .clone()
                    .map(|message| (role, message))
            })
            .collect()
    }

    fn silent_collaborators() -> (MockNotifier, MockProgressSink) {
        let mut notifier = MockNotifier::new();
        notifier.expect_display().never();
        let mut progress = MockProgressSink::new();
        progress.expect_set_percent().never();
        (notifier, progress)
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_sets_progress_and_notifies_once() {
            let mut form = filled("user@example.com", "5551234567", "secret1", "secret1");
            let mut notifier = MockNotifier::new();
            notifier
                .expect_display()
                .withf(|message, kind| {
                    message == SUCCESS_MESSAGE && *kind == NotificationKind::Success
                })
                .times(1)
                .return_const(());
            let mut progress = MockProgressSink::new();
            progress
                .expect_set_percent()
                .with(eq(SUCCESS_PROGRESS_PERCENT))
                .times(1)
                .return_const(());

            let mut gate = SubmissionGate::new(&mut form, &mut notifier, &mut progress);
            assert_eq!(gate.dispatch(FormEvent::Submit), FormOutcome::Submitted(true));
            assert!(annotations(&form).is_empty());
            for role in FieldRole::ALL {
                assert_eq!(form.field(role).state, FieldState::Valid);
            }
        }

        #[test]
        fn test_short_and_mismatched_passwords_are_both_annotated() {
            let mut form = filled("user@example.com", "5551234567", "abc", "xyz");
            let (mut notifier, mut progress) = silent_collaborators();

            let mut gate = SubmissionGate::new(&mut form, &mut notifier, &mut progress);
            assert!(!gate.submit());
            assert_eq!(
                annotations(&form),
                vec![
                    (FieldRole::Password, PASSWORD_TOO_SHORT.to_string()),
                    (FieldRole::PasswordConfirm, PASSWORDS_MISMATCH.to_string()),
                ]
            );
        }

        #[test]
        fn test_mismatch_only_annotates_confirmation() {
            let mut form = filled("user@example.com", "5551234567", "secret1", "secret2");
            let (mut notifier, mut progress) = silent_collaborators();

            let mut gate = SubmissionGate::new(&mut form, &mut notifier, &mut progress);
            assert!(!gate.submit());
            assert_eq!(
                annotations(&form),
                vec![(FieldRole::PasswordConfirm, PASSWORDS_MISMATCH.to_string())]
            );
            assert!(form.field(FieldRole::Password).annotation.is_none());
            assert_eq!(form.field(FieldRole::Password).state, FieldState::Valid);
        }

        #[test]
        fn test_empty_form_annotates_every_required_rule() {
            let mut form = RegistrationForm::new();
            let (mut notifier, mut progress) = silent_collaborators();

            let mut gate = SubmissionGate::new(&mut form, &mut notifier, &mut progress);
            assert!(!gate.submit());
            // Two empty passwords are equal, only the length rule fails
            assert_eq!(
                annotations(&form),
                vec![
                    (FieldRole::Email, INVALID_EMAIL.to_string()),
                    (FieldRole::Phone, INVALID_PHONE.to_string()),
                    (FieldRole::Password, PASSWORD_TOO_SHORT.to_string()),
                ]
            );
        }

        #[test]
        fn test_resubmit_clears_fixed_fields() {
            let mut form = filled("bad", "5551234567", "secret1", "secret1");
            let (mut notifier, mut progress) = silent_collaborators();
            assert!(!SubmissionGate::new(&mut form, &mut notifier, &mut progress).submit());
            assert_eq!(annotations(&form).len(), 1);

            form.field_mut(FieldRole::Email).set_text("user@example.com");
            let mut notifier = MockNotifier::new();
            notifier.expect_display().times(1).return_const(());
            let mut progress = MockProgressSink::new();
            progress.expect_set_percent().times(1).return_const(());
            assert!(SubmissionGate::new(&mut form, &mut notifier, &mut progress).submit());
            assert!(annotations(&form).is_empty());
        }

        #[test]
        fn test_validate_form_never_duplicates_annotations() {
            let mut form = filled("bad", "123", "abc", "xyz");
            validate_form(&mut form);
            validate_form(&mut form);
            assert_eq!(annotations(&form).len(), 4);
        }
        #[test]
        fn test_validate_form_reports_form_level_validity() {
            for (values, expected) in [
                (["user@example.com", "5551234567", "secret1", "secret1"], true),
                (["user@example.com", "5551234567", "secret1", "secret2"], false),
                (["", "", "", ""], false),
            ] {
                let [email, phone, password, confirm] = values;
                let mut form = filled(email, phone, password, confirm);
                let snapshot = FormState::capture(&form);
                assert_eq!(validate_form(&mut form), snapshot.is_valid());
                assert_eq!(snapshot.is_valid(), expected);
            }
        }
    }

    mod blur {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blur_annotates_invalid_value() {
            let mut form = filled("not-an-email", "", "", "");
            let (mut notifier, mut progress) = silent_collaborators();

            let mut gate = SubmissionGate::new(&mut form, &mut notifier, &mut progress);
            let outcome = gate.dispatch(FormEvent::Blur(FieldRole::Email));
            assert!(matches!(
                outcome,
                FormOutcome::Checked(ValidationResult::Invalid(_))
            ));
            assert_eq!(
                form.field(FieldRole::Email).annotation.as_deref(),
                Some(INVALID_EMAIL)
            );
            assert_eq!(form.field(FieldRole::Email).state, FieldState::Invalid);
        }

        #[test]
        fn test_blur_skips_empty_fields() {
            let mut form = RegistrationForm::new();
            let (mut notifier, mut progress) = silent_collaborators();

            let mut gate = SubmissionGate::new(&mut form, &mut notifier, &mut progress);
            for role in FieldRole::ALL {
                gate.on_blur(role);
            }
            assert!(annotations(&form).is_empty());
            for role in FieldRole::ALL {
                assert_eq!(form.field(role).state, FieldState::Pristine);
            }
        }

        #[test]
        fn test_blur_pass_marks_valid() {
            let mut form = filled("", "5551234567", "", "");
            let (mut notifier, mut progress) = silent_collaborators();

            SubmissionGate::new(&mut form, &mut notifier, &mut progress).on_blur(FieldRole::Phone);
            assert_eq!(form.field(FieldRole::Phone).state, FieldState::Valid);
        }

        #[test]
        fn test_repeated_blur_keeps_one_annotation() {
            let mut form = filled("", "123", "", "");
            let (mut notifier, mut progress) = silent_collaborators();

            let mut gate = SubmissionGate::new(&mut form, &mut notifier, &mut progress);
            gate.on_blur(FieldRole::Phone);
            gate.on_blur(FieldRole::Phone);
            assert_eq!(
                annotations(&form),
                vec![(FieldRole::Phone, INVALID_PHONE.to_string())]
            );
        }
    }

    mod input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_edit_clears_error_before_revalidation() {
            let mut form = filled("", "123", "", "");
            let (mut notifier, mut progress) = silent_collaborators();

            let mut gate = SubmissionGate::new(&mut form, &mut notifier, &mut progress);
            gate.on_blur(FieldRole::Phone);
            // Still too short, but editing must clear without re-checking
            assert_eq!(
                gate.dispatch(FormEvent::Input(FieldRole::Phone)),
                FormOutcome::Cleared
            );
            assert!(form.field(FieldRole::Phone).annotation.is_none());
            assert_eq!(form.field(FieldRole::Phone).state, FieldState::Pristine);
        }

        #[test]
        fn test_edit_leaves_other_fields_alone() {
            let mut form = filled("bad", "123", "", "");
            validate_form(&mut form);
            let (mut notifier, mut progress) = silent_collaborators();

            SubmissionGate::new(&mut form, &mut notifier, &mut progress)
                .on_input(FieldRole::Email);
            assert!(form.field(FieldRole::Email).annotation.is_none());
            assert_eq!(
                form.field(FieldRole::Phone).annotation.as_deref(),
                Some(INVALID_PHONE)
            );
        }
    }
}
