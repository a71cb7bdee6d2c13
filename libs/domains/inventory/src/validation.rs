//! Field-level validation rules shared by the DTO derives.
//!
//! The original data-entry surface trims input before checking emptiness,
//! so a whitespace-only string is as invalid as an empty one.

use validator::ValidationError;

/// Reject strings that are empty or whitespace-only.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}
