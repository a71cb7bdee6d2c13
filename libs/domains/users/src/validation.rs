//! Field-level validation rules for user DTOs.

use std::str::FromStr;
use validator::ValidationError;

use crate::models::Role;

/// Reject strings that are empty or whitespace-only.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Reject role strings naming neither of the two roles.
pub fn valid_role(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    if Role::from_str(value).is_err() {
        return Err(ValidationError::new("unknown_role"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateUser;
    use validator::Validate;

    #[test]
    fn test_valid_role_accepts_only_the_two_roles() {
        assert!(valid_role("admin").is_ok());
        assert!(valid_role("staff").is_ok());
        assert!(valid_role("").is_err());
        assert!(valid_role("  ").is_err());
        assert!(valid_role("manager").is_err());
    }

    #[test]
    fn test_create_user_blank_username_fails() {
        let input = CreateUser {
            username: " ".to_string(),
            password: "secret".to_string(),
            role: "staff".to_string(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_user_blank_password_fails() {
        let input = CreateUser {
            username: "alice".to_string(),
            password: "".to_string(),
            role: "staff".to_string(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_user_valid_passes() {
        let input = CreateUser {
            username: "alice".to_string(),
            password: "secret".to_string(),
            role: "admin".to_string(),
        };
        assert!(input.validate().is_ok());
    }
}
