//! Validation utilities.

use crate::{FieldError, SkillSnapError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `SkillSnapError` on failure.
    fn validate_request(&self) -> Result<(), SkillSnapError> {
        self.validate().map_err(validation_errors_to_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a `SkillSnapError`.
#[must_use]
pub fn validation_errors_to_error(errors: ValidationErrors) -> SkillSnapError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    SkillSnapError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates that a password meets the registration requirements:
    /// at least 6 characters with an uppercase letter, a lowercase letter
    /// and a digit.
    pub fn password_complexity(password: &str) -> Result<(), ValidationError> {
        if password.len() < 6 {
            return Err(ValidationError::new("password_too_short"));
        }

        let has_uppercase = password.chars().any(|c| c.is_uppercase());
        let has_lowercase = password.chars().any(|c| c.is_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());

        if !has_uppercase {
            return Err(ValidationError::new("password_missing_uppercase"));
        }
        if !has_lowercase {
            return Err(ValidationError::new("password_missing_lowercase"));
        }
        if !has_digit {
            return Err(ValidationError::new("password_missing_digit"));
        }

        Ok(())
    }
}
