//! Input validation utilities for the HTTP surface.

use validator::ValidationError;

/// Maximum length for any free-text field (1MB)
pub const MAX_TEXT_LENGTH: usize = 1024 * 1024;

/// Validate that a required text field is present and non-empty.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field));
    }
    if value.len() > MAX_TEXT_LENGTH {
        return Err(ValidationError::new(field));
    }
    Ok(())
}

/// Validate that a record count, when supplied, is non-negative.
pub fn validate_record_count(record_count: Option<i32>) -> Result<(), ValidationError> {
    if record_count.is_some_and(|count| count < 0) {
        return Err(ValidationError::new("recordCount"));
    }
    Ok(())
}

/// Validate that an execution time, when supplied, is non-negative.
pub fn validate_execution_time(execution_time: Option<i32>) -> Result<(), ValidationError> {
    if execution_time.is_some_and(|millis| millis < 0) {
        return Err(ValidationError::new("executionTime"));
    }
    Ok(())
}
