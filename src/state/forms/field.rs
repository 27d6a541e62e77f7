//! Form field value objects

/// Role of a registration field, resolved once when the form is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    Email,
    Phone,
    Password,
    PasswordConfirm,
}

impl FieldRole {
    /// All roles in form order (primary password precedes confirmation)
    pub const ALL: [FieldRole; 4] = [
        FieldRole::Email,
        FieldRole::Phone,
        FieldRole::Password,
        FieldRole::PasswordConfirm,
    ];

    /// Position of the field within the form
    pub fn index(self) -> usize {
        match self {
            Self::Email => 0,
            Self::Phone => 1,
            Self::Password => 2,
            Self::PasswordConfirm => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Self::Email => InputKind::Email,
            Self::Phone => InputKind::Tel,
            Self::Password | Self::PasswordConfirm => InputKind::Password,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Password => "Password",
            Self::PasswordConfirm => "Confirm password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Email => "user@example.com",
            Self::Phone => "+7 (999) 123-45-67",
            Self::Password => "at least 6 characters",
            Self::PasswordConfirm => "repeat password",
        }
    }
}

/// Kind of input control, mirrors the control type the page renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Email,
    Tel,
    Password,
}

impl InputKind {
    /// Whether typed characters are masked when rendered
    pub fn is_masked(self) -> bool {
        matches!(self, Self::Password)
    }
}

/// Per-field validation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Pristine,
    Valid,
    Invalid,
}

/// A single registration field: its value plus the annotation rendered next to it
#[derive(Debug, Clone)]
pub struct FormField {
    pub role: FieldRole,
    pub value: String,
    pub state: FieldState,
    /// Error message shown under the field, at most one
    pub annotation: Option<String>,
}

impl FormField {
    pub fn new(role: FieldRole) -> Self {
        Self {
            role,
            value: String::new(),
            state: FieldState::Pristine,
            annotation: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.role.label()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.role.input_kind().is_masked() {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
