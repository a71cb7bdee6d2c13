//! User Service - Business logic and credential authentication

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

/// Service layer for user management and authentication.
///
/// Credential checks are exact comparisons against storage; there is no
/// rate limiting or lockout. A failed authentication is an absent result,
/// not an error.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Authenticate by username and password.
    ///
    /// Blank arguments are a validation error; a wrong username or password
    /// is `None`.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: &str) -> UserResult<Option<User>> {
        if username.trim().is_empty() {
            return Err(UserError::Validation(
                "Username cannot be empty".to_string(),
            ));
        }
        if password.trim().is_empty() {
            return Err(UserError::Validation(
                "Password cannot be empty".to_string(),
            ));
        }

        self.repository
            .find_by_credentials(username, password)
            .await
    }

    /// Add a new user; returns the stored record carrying the assigned id.
    ///
    /// The username is pre-checked for uniqueness here so a duplicate
    /// surfaces as a domain error rather than an opaque storage failure;
    /// the repository constraint remains the second line.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn add_user(&self, input: CreateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        if self.repository.username_exists(&input.username).await? {
            return Err(UserError::DuplicateUsername(input.username));
        }

        self.repository.create(input).await
    }

    /// Overwrite the user matching `user.id`; false when no match
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn update_user(&self, user: &User) -> UserResult<bool> {
        user.validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        self.repository.update(user).await
    }

    /// Delete a user; false when it did not exist
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> UserResult<bool> {
        self.repository.delete(id).await
    }

    /// Get a user by id; absence is None
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i64) -> UserResult<Option<User>> {
        self.repository.get_by_id(id).await
    }

    /// Get a user by username; absence is None
    #[instrument(skip(self))]
    pub async fn get_user_by_username(&self, username: &str) -> UserResult<Option<User>> {
        self.repository.get_by_username(username).await
    }

    /// All users known to storage
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list_all().await
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
