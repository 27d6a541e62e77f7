//! Form domain layer
//!
//! Registration form fields, their fixed rules, and the submission gate
//! that turns blur/input/submit events into annotations and side effects.

mod field;
mod form_state;
mod gate;
mod surface;
mod validator;

pub use field::{FieldRole, FieldState, FormField};
pub use form_state::{Form, RegistrationForm};
pub use gate::{FormEvent, FormOutcome, SubmissionGate, SUCCESS_PROGRESS_PERCENT};
pub use surface::{NotificationKind, Notifier, ProgressSink};
