//! Validation Rules
//!
//! Pure field validation for item drafts. Runs before every write; the
//! store never sees fields that did not pass.

use serde::{Deserialize, Serialize};

use super::Draft;

/// Maximum length of an item name
pub const NAME_MAX: usize = 100;
/// Maximum length of an item description
pub const DESCRIPTION_MAX: usize = 1000;

/// A single failed rule on one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    Required,
    TooLong { max: usize },
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required => write!(f, "is required"),
            FieldError::TooLong { max } => {
                write!(f, "must be at most {} characters", max)
            }
        }
    }
}

/// Per-field validation failures; empty means the draft is valid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub name: Vec<FieldError>,
    pub description: Vec<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.description.is_empty()
    }
}

/// Fields that passed validation
///
/// Only `validate` constructs this, so every store write carries checked
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidFields {
    pub(crate) name: String,
    pub(crate) description: String,
}

impl ValidFields {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Validate a draft's fields
///
/// `name` must be non-blank after trimming and at most 100 characters;
/// `description` must be non-empty and at most 1000 characters. Failures
/// come back as a field-to-errors mapping for display, never a panic.
pub fn validate(draft: &Draft) -> Result<ValidFields, FieldErrors> {
    let mut errors = FieldErrors::default();

    if draft.name.trim().is_empty() {
        errors.name.push(FieldError::Required);
    } else if draft.name.chars().count() > NAME_MAX {
        errors.name.push(FieldError::TooLong { max: NAME_MAX });
    }

    if draft.description.is_empty() {
        errors.description.push(FieldError::Required);
    } else if draft.description.chars().count() > DESCRIPTION_MAX {
        errors.description.push(FieldError::TooLong {
            max: DESCRIPTION_MAX,
        });
    }

    if errors.is_empty() {
        Ok(ValidFields {
            name: draft.name.clone(),
            description: draft.description.clone(),
        })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, description: &str) -> Draft {
        Draft {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let fields = validate(&draft("Widget", "A small widget")).expect("should validate");
        assert_eq!(fields.name(), "Widget");
        assert_eq!(fields.description(), "A small widget");
    }

    #[test]
    fn empty_name_is_required() {
        let errors = validate(&draft("", "ok")).unwrap_err();
        assert_eq!(errors.name, vec![FieldError::Required]);
        assert!(errors.description.is_empty());
    }

    #[test]
    fn whitespace_only_name_is_required() {
        let errors = validate(&draft("   ", "ok")).unwrap_err();
        assert_eq!(errors.name, vec![FieldError::Required]);
    }

    #[test]
    fn empty_description_is_required() {
        let errors = validate(&draft("Widget", "")).unwrap_err();
        assert!(errors.name.is_empty());
        assert_eq!(errors.description, vec![FieldError::Required]);
    }

    #[test]
    fn whitespace_description_is_accepted() {
        assert!(validate(&draft("Widget", " ")).is_ok());
    }

    #[test]
    fn name_over_100_chars_is_too_long() {
        let errors = validate(&draft(&"x".repeat(101), "ok")).unwrap_err();
        assert_eq!(errors.name, vec![FieldError::TooLong { max: NAME_MAX }]);
        assert!(errors.description.is_empty());
    }

    #[test]
    fn name_at_100_chars_passes() {
        assert!(validate(&draft(&"x".repeat(100), "ok")).is_ok());
    }

    #[test]
    fn description_over_1000_chars_is_too_long() {
        let errors = validate(&draft("Widget", &"y".repeat(1001))).unwrap_err();
        assert!(errors.name.is_empty());
        assert_eq!(
            errors.description,
            vec![FieldError::TooLong {
                max: DESCRIPTION_MAX
            }]
        );
    }

    #[test]
    fn both_fields_can_fail_at_once() {
        let errors = validate(&draft("", "")).unwrap_err();
        assert_eq!(errors.name, vec![FieldError::Required]);
        assert_eq!(errors.description, vec![FieldError::Required]);
        assert!(!errors.is_empty());
    }

    #[test]
    fn error_messages_match_the_form_copy() {
        assert_eq!(FieldError::Required.to_string(), "is required");
        assert_eq!(
            FieldError::TooLong { max: 100 }.to_string(),
            "must be at most 100 characters"
        );
    }
}
