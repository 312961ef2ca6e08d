//! Field Error Text
//!
//! Turns typed validation errors into the "Name is required" copy shown
//! under a form field.

use curio_core::domain::FieldError;

/// First message for a field, or `None` when the field is clean
pub fn field_error_text(label: &str, errors: &[FieldError]) -> Option<String> {
    errors.first().map(|err| format!("{} {}", label, err))
}
