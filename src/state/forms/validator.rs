//! Field rules for the registration form
//!
//! Rules are fixed per field. A failing rule yields a [`ValidationFailure`]
//! value; it is a normal outcome, not an error.

use super::field::{FieldRole, InputKind};
use super::surface::FormSurface;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Whitespace as browsers define `\s`: unlike Unicode `White_Space` it
/// includes U+FEFF and leaves out U+0085.
const WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{WHITESPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("valid email regex")
});

pub const MIN_PHONE_LEN: usize = 10;
pub const MIN_PASSWORD_LEN: usize = 6;

pub const INVALID_EMAIL: &str = "invalid email";
pub const INVALID_PHONE: &str = "invalid phone number";
pub const PASSWORD_TOO_SHORT: &str = "password too short";
pub const PASSWORDS_MISMATCH: &str = "passwords do not match";

/// When a field is being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPhase {
    /// Lenient: empty values pass, rules follow the input kind
    Blur,
    /// Strict: every rule runs against the current value, empty included
    Submit,
}

/// A failed rule for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationFailure {
    pub role: FieldRole,
    pub message: &'static str,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.role.label(), self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationFailure),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    fn check(role: FieldRole, passes: bool, message: &'static str) -> Self {
        if passes {
            Self::Valid
        } else {
            Self::Invalid(ValidationFailure { role, message })
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Length in UTF-16 code units, the unit browsers measure input values in
fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Snapshot of the four field values, captured from a surface on demand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirm: String,
}

impl FormState {
    /// Read the current values through the surface
    pub fn capture<S: FormSurface + ?Sized>(surface: &S) -> Self {
        Self {
            email: surface.value(FieldRole::Email),
            phone: surface.value(FieldRole::Phone),
            password: surface.value(FieldRole::Password),
            password_confirm: surface.value(FieldRole::PasswordConfirm),
        }
    }

    pub fn value(&self, role: FieldRole) -> &str {
        match role {
            FieldRole::Email => &self.email,
            FieldRole::Phone => &self.phone,
            FieldRole::Password => &self.password,
            FieldRole::PasswordConfirm => &self.password_confirm,
        }
    }

    /// Evaluate one field's rule against the captured values
    pub fn validate_field(&self, role: FieldRole, phase: ValidationPhase) -> ValidationResult {
        let value = self.value(role);
        match phase {
            ValidationPhase::Blur => {
                if value.is_empty() {
                    return ValidationResult::Valid;
                }
                // On blur the check follows the input kind, so the confirmation
                // field gets the length rule rather than the equality rule.
                match role.input_kind() {
                    InputKind::Email => {
                        ValidationResult::check(role, is_valid_email(value), INVALID_EMAIL)
                    }
                    InputKind::Tel => {
                        ValidationResult::check(role, input_len(value) >= MIN_PHONE_LEN, INVALID_PHONE)
                    }
                    InputKind::Password => ValidationResult::check(
                        role,
                        input_len(value) >= MIN_PASSWORD_LEN,
                        PASSWORD_TOO_SHORT,
                    ),
                }
            }
            ValidationPhase::Submit => match role {
                FieldRole::Email => {
                    ValidationResult::check(role, is_valid_email(value), INVALID_EMAIL)
                }
                FieldRole::Phone => {
                    ValidationResult::check(role, input_len(value) >= MIN_PHONE_LEN, INVALID_PHONE)
                }
                FieldRole::Password => ValidationResult::check(
                    role,
                    input_len(value) >= MIN_PASSWORD_LEN,
                    PASSWORD_TOO_SHORT,
                ),
                FieldRole::PasswordConfirm => {
                    ValidationResult::check(role, value == self.password, PASSWORDS_MISMATCH)
                }
            },
        }
    }

    /// Strict results for every field, in role order
    pub fn results(&self) -> [ValidationResult; 4] {
        FieldRole::ALL.map(|role| self.validate_field(role, ValidationPhase::Submit))
    }

    /// Recomputed on every call
    pub fn is_valid(&self) -> bool {
        self.results().iter().all(ValidationResult::is_valid)
    }
}
