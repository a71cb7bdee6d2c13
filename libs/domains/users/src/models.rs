use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::validation::{not_blank, valid_role};

/// User roles
///
/// Exactly two roles exist; anything else is rejected at the boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

/// User entity
///
/// The password is stored and compared byte-for-byte (specified behavior)
/// and is never serialized into API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    /// Unique identifier, system-assigned
    pub id: i64,
    /// Login name, unique across all users
    #[validate(custom(function = not_blank))]
    pub username: String,
    /// Credential, never exposed in API responses
    #[serde(skip_serializing, default)]
    #[validate(custom(function = not_blank))]
    pub password: String,
    /// Role gating menu capabilities in the presentation layer
    pub role: Role,
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(custom(function = not_blank))]
    pub username: String,
    #[validate(custom(function = not_blank))]
    pub password: String,
    /// Must be "admin" or "staff"
    #[validate(custom(function = valid_role))]
    pub role: String,
}

/// DTO for credential login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(custom(function = not_blank))]
    pub username: String,
    #[validate(custom(function = not_blank))]
    pub password: String,
}

impl User {
    /// Materialize a stored user from a create DTO and an assigned id.
    ///
    /// Fails when the role string does not name one of the two roles; a
    /// validated DTO cannot hit that path.
    pub fn from_create(id: i64, input: CreateUser) -> UserResult<Self> {
        let role = input.role.parse().map_err(|_| {
            UserError::Validation("Role must be either 'admin' or 'staff'".to_string())
        })?;

        Ok(Self {
            id,
            username: input.username,
            password: input.password,
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_strings() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("staff".parse::<Role>().unwrap(), Role::Staff);
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Staff.to_string(), "staff");
        assert!("manager".parse::<Role>().is_err());
    }

    #[test]
    fn test_from_create_rejects_unknown_role() {
        let input = CreateUser {
            username: "alice".to_string(),
            password: "secret".to_string(),
            role: "manager".to_string(),
        };
        assert!(matches!(
            User::from_create(1, input),
            Err(UserError::Validation(_))
        ));
    }

    #[test]
    fn test_password_is_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password: "secret".to_string(),
            role: Role::Staff,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password"));
    }
}
