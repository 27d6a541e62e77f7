//! Form rendering module
//!
//! - `field_renderer`: single field with its annotation row
//! - `registration_form`: the registration section of the page

mod field_renderer;
mod registration_form;

pub use field_renderer::FIELD_HEIGHT;
pub use registration_form::{draw as draw_registration, FIRST_FIELD_ROW};
